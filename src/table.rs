use crate::{catalog::*, Language, NOTIFICATION_COUNT};

/// Alias hops followed before a slot is given up on as empty. The shipped
/// table never chains aliases, so one hop is all a valid table needs.
const MAX_ALIAS_HOPS: usize = 4;

/// What a notification slot displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Template {
    /// The slot has its own text
    Literal(&'static Localized),
    /// The slot shows the same text as the slot with this code
    Alias(u8),
    /// The slot carries no user-facing meaning
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    #[error("Notification ({code:?}) has text in some languages but not in {language:?}")]
    Asymmetric { code: u8, language: Language },
    #[error("Notification ({code:?}) aliases a code ({target:?}) outside the table")]
    AliasOutOfRange { code: u8, target: u8 },
    #[error("Notification ({code:?}) aliases another alias ({target:?})")]
    AliasChain { code: u8, target: u8 },
}

use Template::{Alias, Empty, Literal};

#[rustfmt::skip]
const SLOTS: [Template; NOTIFICATION_COUNT] = [
    /* Byte 0, 0x00..=0x07 */
    Literal(&TYRE_PRESSURE_TOO_LOW),
    Empty,
    Literal(&GEARBOX_TEMPERATURE_TOO_HIGH),
    Literal(&BRAKE_FLUID_LEVEL_LOW),
    Literal(&HYDRAULIC_SUSPENSION_PRESSURE_DEFECTIVE),
    Literal(&SUSPENSION_DEFECTIVE),
    Literal(&ENGINE_OIL_TEMPERATURE_TOO_HIGH),
    Literal(&ENGINE_TEMPERATURE_TOO_HIGH),
    /* Byte 1, 0x08..=0x0F */
    Literal(&CLEAR_DIESEL_FILTER),
    Empty,
    Literal(&DIESEL_ADDITIVE_LEVEL_LOW),
    Literal(&FUEL_CAP_OPEN),
    Literal(&PUNCTURE_DETECTED),
    Literal(&COOLANT_LEVEL_TOO_LOW),
    Literal(&OIL_PRESSURE_INSUFFICIENT),
    Literal(&ENGINE_OIL_LEVEL_TOO_LOW),
    /* Byte 2, 0x10..=0x17 */
    Literal(&ENGINE_ANTIPOLLUTION_DEFECTIVE),
    Literal(&BRAKE_PADS_WORN),
    Literal(&CHECK_CONTROL_OK),
    Literal(&GEARBOX_DEFECTIVE),
    Literal(&ASR_ESP_DEFECTIVE),
    Literal(&ABS_DEFECTIVE),
    Literal(&SUSPENSION_AND_STEERING_DEFECTIVE),
    Literal(&BRAKE_SYSTEM_DEFECTIVE),
    /* Byte 3, 0x18..=0x1F */
    Literal(&AIRBAG_DEFECTIVE),
    Literal(&AIRBAG_DEFECTIVE),
    Empty,
    Literal(&ENGINE_TEMPERATURE_HIGH),
    Empty,
    Empty,
    Empty,
    Literal(&WATER_IN_DIESEL_FILTER),
    /* Byte 4, 0x20..=0x27 */
    Empty,
    Literal(&BEAM_ADJUSTMENT_DEFECTIVE),
    Empty,
    Empty,
    Literal(&SERVICE_BATTERY_LOW),
    Literal(&BATTERY_CHARGE_LOW),
    Literal(&DIESEL_ANTIPOLLUTION_DEFECTIVE),
    Literal(&ENGINE_ANTIPOLLUTION_INOPERATIVE),
    /* Byte 5, 0x28..=0x2F */
    Literal(&HANDBRAKE_ON),
    Literal(&SEAT_BELT_NOT_FASTENED),
    Literal(&PASSENGER_AIRBAG_NEUTRALIZED),
    Literal(&WASHER_FLUID_LEVEL_LOW),
    Literal(&SPEED_TOO_HIGH),
    Literal(&IGNITION_KEY_INSERTED),
    Literal(&LIGHTS_NOT_ON),
    Empty,
    /* Byte 6, 0x30..=0x37 */
    Literal(&IMPACT_SENSOR_DEFECTIVE),
    Empty,
    Literal(&TYRE_SENSOR_BATTERY_LOW),
    Literal(&REMOTE_BATTERY_LOW),
    Empty,
    Literal(&PLACE_GEARBOX_IN_P),
    Literal(&TESTING_STOP_LAMPS),
    Literal(&FUEL_LEVEL_LOW),
    /* Byte 7, 0x38..=0x3F */
    Literal(&AUTO_HEADLIGHTS_DISABLED),
    Literal(&TURN_HEADLIGHT_DEFECTIVE),
    Literal(&TURN_HEADLIGHT_DISABLED),
    Literal(&TURN_HEADLIGHT_ENABLED),
    Empty,
    Literal(&TYRE_SENSORS_MISSING),
    Alias(0x3D),
    Alias(0x3D),
    /* Byte 8, 0x40..=0x47 */
    Literal(&DOORS_LOCKED),
    Literal(&ASR_ESP_DISABLED),
    Literal(&CHILD_LOCK_ENABLED),
    Literal(&DOOR_SELF_LOCKING_ENABLED),
    Literal(&AUTO_HEADLIGHTS_ENABLED),
    Literal(&AUTO_WIPERS_ENABLED),
    Literal(&ANTI_THEFT_DEFECTIVE),
    Literal(&SPORT_SUSPENSION_ENABLED),
    /* Byte 9, 0x48..=0x4F: index of the current message, not flags */
    Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty,
    /* Bytes 10..=13, 0x50..=0x6F */
    Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty,
    Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty,
    Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty,
    Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty,
    /* Bytes 14..=15, 0x70..=0x7F: only on vehicles built after 2004 */
    Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty,
    Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty,
];

const _: () = assert!(table_is_consistent(&SLOTS));

static TABLE: [Template; NOTIFICATION_COUNT] = SLOTS;

/// Compile-time version of [`verify_table`].
const fn table_is_consistent(slots: &[Template; NOTIFICATION_COUNT]) -> bool {
    let mut code = 0;

    while code < NOTIFICATION_COUNT {
        match slots[code] {
            Literal(text) => {
                let has_text = !text.english.is_empty();

                if text.french.is_empty() == has_text
                    || text.german.is_empty() == has_text
                    || text.spanish.is_empty() == has_text
                    || text.italian.is_empty() == has_text
                    || text.dutch.is_empty() == has_text
                {
                    return false;
                }
            }
            Alias(target) => {
                if target as usize >= NOTIFICATION_COUNT {
                    return false;
                }

                if let Alias(_) = slots[target as usize] {
                    return false;
                }
            }
            Empty => {}
        }

        code += 1;
    }

    true
}

/// The template stored for `code`, without following aliases. Codes outside
/// the table are [`Template::Empty`].
pub fn lookup_template(code: u8) -> Template {
    slot(&TABLE, code)
}

/// Follows aliases until a literal or an empty slot is reached. A chain
/// longer than [`MAX_ALIAS_HOPS`] (only possible with a cyclic table)
/// resolves to [`Template::Empty`].
pub fn resolve_template(code: u8) -> Template {
    resolve_in(&TABLE, code)
}

fn slot(slots: &[Template; NOTIFICATION_COUNT], code: u8) -> Template {
    slots.get(code as usize).copied().unwrap_or(Empty)
}

fn resolve_in(slots: &[Template; NOTIFICATION_COUNT], code: u8) -> Template {
    let mut template = slot(slots, code);

    for _ in 0..MAX_ALIAS_HOPS {
        match template {
            Alias(target) => template = slot(slots, target),
            resolved => return resolved,
        }
    }

    match template {
        Alias(_) => Empty,
        resolved => resolved,
    }
}

/// Renders a template in the given language. An unresolved alias renders
/// through its target.
pub fn render_text(template: Template, language: Language) -> &'static str {
    let template = match template {
        Alias(target) => resolve_template(target),
        other => other,
    };

    match template {
        Literal(text) => text.get(language),
        Alias(_) | Empty => "",
    }
}

/// Display text of a notification code, `""` for unassigned slots.
pub fn notification_text(code: u8, language: Language) -> &'static str {
    render_text(resolve_template(code), language)
}

/// Checks that every code has text in all languages or in none, and that
/// every alias points at a slot inside the table which is not an alias itself.
pub fn verify_table() -> Result<(), TableError> {
    for code in 0..NOTIFICATION_COUNT as u8 {
        match lookup_template(code) {
            Literal(text) => {
                let has_text = !text.english.is_empty();

                if let Some(language) = Language::ALL
                    .into_iter()
                    .find(|language| text.get(*language).is_empty() == has_text)
                {
                    return Err(TableError::Asymmetric { code, language });
                }
            }
            Alias(target) if target as usize >= NOTIFICATION_COUNT => {
                return Err(TableError::AliasOutOfRange { code, target });
            }
            Alias(target) => {
                if let Alias(_) = lookup_template(target) {
                    return Err(TableError::AliasChain { code, target });
                }
            }
            Empty => {}
        }
    }

    Ok(())
}
