//! Notification texts, as displayed by the MFD of a 406 (2003, DAM 9586).
//!
//! Other vehicles may use other texts. By convention warnings end with `!`
//! and information messages do not. Spelling follows what the MFD shows,
//! mistakes included.

use crate::Language;

/// One notification text in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Localized {
    pub english: &'static str,
    pub french: &'static str,
    pub german: &'static str,
    pub spanish: &'static str,
    pub italian: &'static str,
    pub dutch: &'static str,
}

impl Localized {
    /// The same text in every language
    pub const fn universal(text: &'static str) -> Self {
        Self {
            english: text,
            french: text,
            german: text,
            spanish: text,
            italian: text,
            dutch: text,
        }
    }

    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::French => self.french,
            Language::German => self.german,
            Language::Spanish => self.spanish,
            Language::Italian => self.italian,
            Language::Dutch => self.dutch,
        }
    }
}

/* Byte 0 */

pub const TYRE_PRESSURE_TOO_LOW: Localized = Localized {
    english: "Tyre pressure too low!",
    french: "Pression pneumatique(s) insuffisante!",
    german: "Unzureichender Reifendruck!",
    spanish: "Presión en neumáticos insuficiente!",
    italian: "Pressione pneumatico(ci) insufficiente!",
    dutch: "Bandenspanning te laag!",
};

pub const GEARBOX_TEMPERATURE_TOO_HIGH: Localized = Localized {
    english: "Automatic gearbox temperature too high!",
    french: "Température boîte automatique trop élevée!",
    german: "Temperatur im Automatikgetriebe zo hoch!",
    spanish: "Temperatura muy alta de la caja automática!",
    italian: "Temperatura cambia automatica elevata!",
    dutch: "Temperatuur in automatische versnellingsbak te hoog!",
};

pub const BRAKE_FLUID_LEVEL_LOW: Localized = Localized {
    english: "Brake fluid level low!",
    french: "Niveau liquide de freins insuffisant!",
    german: "Bremsflüssigkeitsstand zu niedrig!",
    spanish: "Nivel liquido de frenos bajo!",
    italian: "Livello liquido freni insufficiente!",
    dutch: "Peil van remvloeistof te laag!",
};

pub const HYDRAULIC_SUSPENSION_PRESSURE_DEFECTIVE: Localized = Localized {
    english: "Hydraulic suspension pressure defective!",
    french: "Pression suspension hydraulique déficiente!",
    german: "Mangelhafter Druck in der Hydraulikfederung!",
    spanish: "Presión deficiente de suspensión hidráulica!",
    italian: "Pressione sospensione idraulica insufficiente!",
    dutch: "Hydraulische drukophanging defekt!",
};

pub const SUSPENSION_DEFECTIVE: Localized = Localized {
    english: "Suspension defective!",
    french: "Suspension défaillante!",
    german: "Federung defekt!",
    spanish: "Mala suspensión!",
    italian: "Sospensione in panne!",
    dutch: "Ophanging defekt!",
};

pub const ENGINE_OIL_TEMPERATURE_TOO_HIGH: Localized = Localized {
    english: "Engine oil temperature too high!",
    french: "Température huile moteur trop élevée!",
    german: "Temperatur Motoröl zu hoch!",
    spanish: "Temperatura muy alta de aceite motor!",
    italian: "Temperatura olio motore troppo elevata!",
    dutch: "Temperatuur motorolie te hoog!",
};

pub const ENGINE_TEMPERATURE_TOO_HIGH: Localized = Localized {
    english: "Engine temperature too high!",
    french: "Température moteur excessive!",
    german: "Stark überhöhte Motortemperatur!",
    spanish: "Temperatura excesiva de motor!",
    italian: "Temperatura motore eccessiva!",
    dutch: "Te hoge motortemperatuur!",
};

/* Byte 1 */

pub const CLEAR_DIESEL_FILTER: Localized = Localized {
    english: "Clear diesel filter (FAP) URGENT",
    french: "Cycle de nettoyage du filtre diesel (FAP) à faire rapidement",
    german: "Die Reinigung des Diesel-Filters (FAP) ist dringend erforderlich",
    spanish: "Hacer pronto la limpieza del filtro diesel (FAP)",
    italian: "Pulire il filtro diesel (FAP) al più presto",
    dutch: "Dieselfilter snel schoonmaken",
};

pub const DIESEL_ADDITIVE_LEVEL_LOW: Localized = Localized {
    english: "Min level additive gasoil!",
    french: "Niveau mini additif gasoil!",
    german: "Stand der Krafstoff-Additif ist zu nierdrig!",
    spanish: "Nivel gasoil al minimo!",
    italian: "Livello minimo gasolio!",
    dutch: "Minimum niveau aanvullende vloeistof diesel!",
};

pub const FUEL_CAP_OPEN: Localized = Localized {
    english: "Fuel cap open!",
    french: "Accès réservoir carburant mal verrouillé!",
    german: "Tankdeckel offen!",
    spanish: "Tapa abierta!",
    italian: "Tappa aperto!",
    dutch: "Tankdop open!",
};

pub const PUNCTURE_DETECTED: Localized = Localized {
    english: "Puncture(s) detected!",
    french: "Roue(s) crevée(s) détectée(s)!",
    german: "Reifenpanne festgestellt!",
    spanish: "Rueda(s) pinchada(s) detectada(s)!",
    italian: "Presenza di ruota(e) forata(e)!",
    dutch: "Lekke band(en)!",
};

pub const COOLANT_LEVEL_TOO_LOW: Localized = Localized {
    english: "Cooling circuit level too low!",
    french: "Niveau circuit de refroidissement insuffisant!",
    german: "Unzureichender Pegel des Kühlkreises!",
    spanish: "Nivel bajo del circuito de refrigeración!",
    italian: "Livello circuito di raffreddamento insufficiente!",
    dutch: "Koelwaterpeil te laag!",
};

pub const OIL_PRESSURE_INSUFFICIENT: Localized = Localized {
    english: "Oil pressure insufficient!",
    french: "Pression huile moteur insuffisante!",
    german: "Motoröldruck zu niedrig!",
    spanish: "Presion aceite motor insuficiente!",
    italian: "Pressione olio motore insufficiente!",
    dutch: "Motoroliedruk te laag!",
};

pub const ENGINE_OIL_LEVEL_TOO_LOW: Localized = Localized {
    english: "Engine oil level too low!",
    french: "Niveau d'huile moteur insuffisant!",
    german: "Unzureichender Motorölstand!",
    spanish: "Nivel insuficiente del aceite motor!",
    italian: "Livello olio motore insufficiente!",
    dutch: "Motoroliepeil te laag!",
};

/* Byte 2 */

pub const ENGINE_ANTIPOLLUTION_DEFECTIVE: Localized = Localized {
    english: "Engine antipollution system defective!",
    french: "Système antipollution moteur déficient!",
    german: "Umweltschutzsystem Motor schwach!",
    spanish: "Sistema antipolución motor deficiente!",
    italian: "Sistema antinquinamento motore in panne!",
    dutch: "Antivervuilingssysteem van motor defekt!",
};

pub const BRAKE_PADS_WORN: Localized = Localized {
    english: "Brake pads worn!",
    french: "Plaquettes de freins usées!",
    german: "Bremsbeläge abgenutzt!",
    spanish: "Plaquetas de freno gastadas!",
    italian: "Pastiglie dei freni usate!",
    dutch: "Remblokken versleten!",
};

pub const CHECK_CONTROL_OK: Localized = Localized::universal("Check Control OK");

pub const GEARBOX_DEFECTIVE: Localized = Localized {
    english: "Automatic gearbox defective!",
    french: "Boîte automatique défaillante!",
    german: "Automatikgetriebe defekt!",
    spanish: "Caja automática defectuosa!",
    italian: "Cambio automatico in panne!",
    dutch: "Automatische versnellingsbak defekt!",
};

pub const ASR_ESP_DEFECTIVE: Localized = Localized {
    english: "ASR / ESP system defective!",
    french: "Système ASR / ESP défaillant!",
    german: "ASR / ESP System defekt!",
    spanish: "Sistema ASR / ESP defectuoso!",
    italian: "Sistema ASR / ESP in panne!",
    dutch: "ASR/ESP-systeem defekt!",
};

pub const ABS_DEFECTIVE: Localized = Localized {
    english: "ABS brake system defective!",
    french: "Système de freinage ABS défaillant!",
    german: "ABS Bremssystem defekt!",
    spanish: "Sistema de freno ABS defectuoso!",
    italian: "Sistema di frenatura ABS in panne!",
    dutch: "ABS-remsysteem defekt!",
};

pub const SUSPENSION_AND_STEERING_DEFECTIVE: Localized = Localized {
    english: "Suspension and power steering defective!",
    french: "Suspension et direction assistée défaillantes!",
    german: "Federung und Servolenkung defekt!",
    spanish: "Suspensión y dirección asistida defectuosa!",
    italian: "Sospensione e servosterzo in panne!",
    dutch: "Ophanging en stuurbekrachtiging defekt!",
};

pub const BRAKE_SYSTEM_DEFECTIVE: Localized = Localized {
    english: "Brake system defective!",
    french: "Système de freinage défaillant!",
    german: "Bremssystem defekt!",
    spanish: "Sistema de frenado defectuoso!",
    italian: "Sistema di frenatura in panne!",
    dutch: "Remsysteem defekt!",
};

/* Byte 3 */

pub const AIRBAG_DEFECTIVE: Localized = Localized {
    english: "Airbag defective!",
    french: "Airbag défaillant!",
    german: "Airbag defekt!",
    spanish: "Airbag defectuoso!",
    italian: "Airbag in panne!",
    dutch: "Airbag defekt!",
};

pub const ENGINE_TEMPERATURE_HIGH: Localized = Localized {
    english: "Engine temperature high!",
    french: "Température moteur élevée!",
    german: "Hohe Motortemperatur!",
    spanish: "Temperatura alta del motor!",
    italian: "Temperatura motore elevata!",
    dutch: "Motortemperatuur hoog!",
};

pub const WATER_IN_DIESEL_FILTER: Localized = Localized {
    english: "Water in Diesel fuel filter",
    french: "Présence d'eau dans le filtre à gasoil",
    german: "Wasser im Dieselfilter",
    spanish: "Presencia de agua en el filtro de gasoil",
    italian: "Presenza d'acqua nel filtro del gasolio",
    dutch: "Water aanwezig in dieselfilter",
};

/* Byte 4 */

pub const BEAM_ADJUSTMENT_DEFECTIVE: Localized = Localized {
    english: "Automatic beam adjustment defective!",
    french: "Réglage automatique des projecteurs défaillant!",
    german: "Automatische Scheinwerfereinstellung defekt!",
    spanish: "Ajuste automático de proyectores defectuosos!",
    italian: "Regolazione automatica dei fari in panne!",
    dutch: "Automatische koplampinstelling defekt!",
};

pub const SERVICE_BATTERY_LOW: Localized = Localized {
    english: "Service battery charge low!",
    french: "Batterie de service faible!",
    german: "Hilfsbatterie schwach!",
    spanish: "Batería de servicio baja de nivel!",
    italian: "Batteria di servizio debole!",
    dutch: "Extra accu zwak!",
};

pub const BATTERY_CHARGE_LOW: Localized = Localized {
    english: "Battery charge low!",
    french: "Charge batterie déficiente!",
    german: "Mangelhafte Batterieladung!",
    spanish: "Carga batería deficiente!",
    italian: "Carica della batteria insufficiente!",
    dutch: "Acculading te laag!",
};

pub const DIESEL_ANTIPOLLUTION_DEFECTIVE: Localized = Localized {
    english: "Diesel antipollution system (FAP) defective!",
    french: "Système antipollution diesel (FAP) défaillant!",
    german: "Umweltschutzsystem Diesel (FAP) defekt!",
    spanish: "Sistema antipolución gasoil (FAP) defectuoso!",
    italian: "Sistema antinquinamento diesel (FAP) in panne!",
    dutch: "Antivervuilingssysteem dieselmotor (FAP) defekt!",
};

pub const ENGINE_ANTIPOLLUTION_INOPERATIVE: Localized = Localized {
    english: "Engine antipollution system inoperative!",
    french: "Système antipollution moteur inopérant!",
    german: "Umweltschutzsystem Motor wirkungslos!",
    spanish: "Sistema antiploución motor fuera de funcionamiento!",
    italian: "Sistema antinquinamento motore inoperante!",
    dutch: "Antivervuilingssysteem motor defekt!",
};

/* Byte 5 */

pub const HANDBRAKE_ON: Localized = Localized {
    english: "Handbrake on!",
    french: "Oubli frein à main!",
    german: "Handbremse lösen!",
    spanish: "Olvido freno parking!",
    italian: "Freno a mano ancora inserito!",
    dutch: "Handrem !!",
};

pub const SEAT_BELT_NOT_FASTENED: Localized = Localized {
    english: "Safety belt not fastened!",
    french: "Oubli ceinture de sécurité!",
    german: "Sicherheitsgurt vergessen!",
    spanish: "Cinturón de seguridad olvidado!",
    italian: "Cintura di sicurezza non agganciata!",
    dutch: "Veiligheidsgordel !!",
};

pub const PASSENGER_AIRBAG_NEUTRALIZED: Localized = Localized {
    english: "Passenger airbag neutralized",
    french: "Airbag passager neutralisé",
    german: "Beifahrerairbag deaktiviert",
    spanish: "Airbag pasajero desactivado",
    italian: "Airbag passaggero neutralizzato",
    dutch: "Passagiersairbag buiten werking",
};

pub const WASHER_FLUID_LEVEL_LOW: Localized = Localized {
    english: "Windshield liquid level too low",
    french: "Niveau liquide lave glace insuffisant",
    german: "Unzureichender Wischwasserstand",
    spanish: "Nivel bajo del líquido limpiaparabrisas",
    italian: "Livello del liquido tergicristalli insufficiente",
    dutch: "Peil ruitenwisservloeistof te laag",
};

pub const SPEED_TOO_HIGH: Localized = Localized {
    english: "Current speed too high",
    french: "Vitesse actuelle excessive",
    german: "Derzeitige Geschwindigkeit überhöht",
    spanish: "Velocidad actual excesiva",
    italian: "Velocità attuale eccessiva",
    dutch: "Huidige snelheid te hoog",
};

pub const IGNITION_KEY_INSERTED: Localized = Localized {
    english: "Ignition key still inserted",
    french: "Oubli clé de contact",
    german: "Zündschlüssel vergessen",
    spanish: "Llave de contacto olvidada",
    italian: "Chiave di contatto dimenticata",
    dutch: "Contactsleutel ! ",
};

pub const LIGHTS_NOT_ON: Localized = Localized {
    english: "Lights not on",
    french: "Oubli feux de position",
    german: "Standlicht vergessen",
    spanish: "Luces olvidadas",
    italian: "Fari accesi",
    dutch: "Parkeerlichten ! ",
};

/* Byte 6 */

pub const IMPACT_SENSOR_DEFECTIVE: Localized = Localized {
    english: "Impact sensor defective",
    french: "Capteur de choc défaillant",
    german: "Aufprallfühler defekt",
    spanish: "Detector de choque defectuoso",
    italian: "Sensore die choc in panne",
    dutch: "Schoksensor defekt",
};

pub const TYRE_SENSOR_BATTERY_LOW: Localized = Localized {
    english: "Tyre pressure sensor battery low",
    french: "Pile capteur pression pneumatique usagée",
    german: "Batterie des Reifendruckfühlers verbraucht",
    spanish: "Pila del captador de presión neumática gastada",
    italian: "Pila del sensore di pressione del pneumatico scarica",
    dutch: "Batterij van bandendruk-sensor leeg",
};

pub const REMOTE_BATTERY_LOW: Localized = Localized {
    english: "Plip remote control battery low",
    french: "Pile télécommande plip usagée",
    german: "Batterie der Fernbedienung verbraucht",
    spanish: "Pila del control remoto gastada",
    italian: "Pila del telecomando porte scarica",
    dutch: "Batterij van plip-afstandsbediending leeg",
};

pub const PLACE_GEARBOX_IN_P: Localized = Localized {
    english: "Place automatic gearbox in P position",
    french: "Placer boîte automatique en position P",
    german: "Automatikgetriebe auf P stellen",
    spanish: "Poner caja automática en posición P",
    italian: "Mettere il cambio automatica in posizione P",
    dutch: "Automatische versnelling in P-stand",
};

pub const TESTING_STOP_LAMPS: Localized = Localized {
    english: "Testing stop lamps : brake gently",
    french: "Test lampes stop : freinez légèrement",
    german: "Test der Bremslichter: leicht bremsen",
    spanish: "Test de luces de parada: frenar levemente",
    italian: "Test delle luci de stop : frenare leggermente",
    dutch: "Test remlichten : druk licht op de rem",
};

pub const FUEL_LEVEL_LOW: Localized = Localized {
    english: "Fuel level low!",
    french: "Niveau carburant faible!",
    german: "Kraftstoffstand niedrig!",
    spanish: "Nivel carburante bajo!",
    italian: "Livello carburante basso!",
    dutch: "Brandstofpeil laag!",
};

/* Byte 7 */

pub const AUTO_HEADLIGHTS_DISABLED: Localized = Localized {
    english: "Automatic headlight activation system disabled",
    french: "Allumage automatique des projecteurs désactivé",
    german: "Automatisches Einschalten der Scheinwerfer deaktiviert",
    spanish: "Encendido automático de proyectores desactivado",
    italian: "Accensione automatica dei fari disattivata",
    dutch: "Automatische koplampschakeling uit",
};

pub const TURN_HEADLIGHT_DEFECTIVE: Localized = Localized {
    english: "Turn-headlight defective!",
    french: "Défaut codes virages!",
    german: "Neben-Abblendlicht defekt!",
    spanish: "Defecto códigos giros!",
    italian: "Difetto antiabbagliante per curva!",
    dutch: "Bochtenverlichting defekt!",
};

pub const TURN_HEADLIGHT_DISABLED: Localized = Localized {
    english: "Turn-headlight disable",
    french: "Codes virages inactifs",
    german: "Neben-Abblendlicht deaktiviert",
    spanish: "Códigos giros inactivos",
    italian: "Antiabbagliante per curva inattivo",
    dutch: "Bochtenverlichting buiten werking",
};

pub const TURN_HEADLIGHT_ENABLED: Localized = Localized {
    english: "Turn-headlight enable",
    french: "Codes virages actifs",
    german: "Neben-Abblendlicht aktiviert",
    spanish: "Códigos giros activos",
    italian: "Antiabbagliante per curva attivo",
    dutch: "Bochtenverlichting aan",
};

pub const TYRE_SENSORS_MISSING: Localized = Localized {
    english: "7 tyre pressure sensors missing!",
    french: "7 capteurs pression pneumatique manquants!",
    german: "7 Reifendruckfühler fehlen!",
    spanish: "Faltan 7 captadores de presión neumática!",
    italian: "Mancano 7 sensori di pressione pneumatici!",
    dutch: "Er ontbreken 7 bandendruk-sensors!",
};

/* Byte 8 */

pub const DOORS_LOCKED: Localized = Localized {
    english: "Doors locked",
    french: "Portes verrouillées",
    german: "Türen verriegelt",
    spanish: "Puertas condenadas",
    italian: "Porte bloccate",
    dutch: "Deuren vergrendeld",
};

pub const ASR_ESP_DISABLED: Localized = Localized {
    english: "ASR / ESP system disabled",
    french: "Système ASR / ESP désactivé",
    german: "ASR / ESP System deaktiviert",
    spanish: "Sistema ASR / ESP fuera de servicio",
    italian: "Sistema ASR / ESP disattivato",
    dutch: "ASR/ESP-systeem uit",
};

pub const CHILD_LOCK_ENABLED: Localized = Localized {
    english: "Child safety lock enabled",
    french: "Sécurité enfant activée",
    german: "Kindersicherung aktiviert",
    spanish: "Seguridad niños activa",
    italian: "Sicurezza bambini attivata",
    dutch: "Kindervergrendeling aan",
};

pub const DOOR_SELF_LOCKING_ENABLED: Localized = Localized {
    english: "Door self locking system enabled",
    french: "Autoverrouillage des portes activé",
    german: "Selbstverriegelung der Türen aktiviert",
    spanish: "Autobloqueo de puertas activo",
    italian: "Auto bloccaggio delle porte attivato",
    dutch: "Automatische deurvergrendling aan",
};

pub const AUTO_HEADLIGHTS_ENABLED: Localized = Localized {
    english: "Automatic headlight activation system enabled",
    french: "Allumage automatique des projecteurs activé",
    german: "Automatisches Einschalten der Scheinwerfer aktiviert",
    spanish: "Encendido automático de proyectores activo",
    italian: "Accensione automatica dei fari attivata",
    dutch: "Automatische koplampschakeling aan",
};

pub const AUTO_WIPERS_ENABLED: Localized = Localized {
    english: "Automatic wiper system enabled",
    french: "Essuie-vitre automatique activé",
    german: "Automatischer Scheibenwischer aktiviert",
    spanish: "Limpiaparabrisas activo",
    italian: "Tergicristalli automatici attivati",
    dutch: "Automatische ruitenwisser aan",
};

pub const ANTI_THEFT_DEFECTIVE: Localized = Localized {
    english: "Electronic anti-theft system defective",
    french: "Antivol électronique défaillant",
    german: "Elektronische Diebstahlsicherung defekt",
    spanish: "Antirrobo electronico defectuoso",
    italian: "Antifurto elettronico in panne",
    dutch: "Elektronische diefstalbeveiliging defekt",
};

pub const SPORT_SUSPENSION_ENABLED: Localized = Localized {
    english: "Sport suspension mode enabled",
    french: "Mode suspension sport activé",
    german: "Sportfederung aktiviert",
    spanish: "Modo suspensión sport activo",
    italian: "Modo sospensione sport attivato",
    dutch: "Sportief ophangingssysteem aan",
};
