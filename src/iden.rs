use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::MAX_IDEN;

/// First payload byte of a device report that comes from the navigation
/// computer.
const SATNAV_DEVICE_REPORT_MARKER: u8 = 0x07;

/// Shortest payload for which [`is_satnav_frame`] can hold.
const MIN_SATNAV_DATA_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdenError {
    #[error("Received an identifier ({0:#05X}) that was out of the valid range (0..=0xFFF)")]
    OutOfRange(u16),
    #[error("Received an identifier ({0:#05X}) that is not a known VAN frame")]
    Unrecognized(u16),
}

/// The 12-bit identifiers of all known VAN comfort bus frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[num_enum(error_type(name = IdenError, constructor = IdenError::Unrecognized))]
#[repr(u16)]
pub enum Iden {
    Vin = 0xE24,
    Engine = 0x8A4,
    HeadUnitStalk = 0x9C4,
    LightsStatus = 0x4FC,
    DeviceReport = 0x8C4,
    CarStatus1 = 0x564,
    CarStatus2 = 0x524,
    Dashboard = 0x824,
    DashboardButtons = 0x664,
    HeadUnit = 0x554,
    MfdLanguageUnits = 0x984,
    AudioSettings = 0x4D4,
    MfdStatus = 0x5E4,
    Aircon1 = 0x464,
    Aircon2 = 0x4DC,
    CdChanger = 0x4EC,
    SatNavStatus1 = 0x54E,
    SatNavStatus2 = 0x7CE,
    SatNavStatus3 = 0x8CE,
    SatNavGuidanceData = 0x9CE,
    SatNavGuidance = 0x64E,
    SatNavReport = 0x6CE,
    MfdToSatNav = 0x94E,
    SatNavToMfd = 0x74E,
    SatNavDownloading = 0x6F4,
    SatNavDownloaded1 = 0xA44,
    SatNavDownloaded2 = 0xAC4,
    WheelSpeed = 0x744,
    Odometer = 0x8FC,
    Com2000 = 0x450,
    CdChangerCommand = 0x8EC,
    MfdToHeadUnit = 0x8D4,
    AirConditionerDiag = 0xADC,
    AirConditionerDiagCommand = 0xA5C,
    Ecu = 0xB0E,
}

impl Iden {
    /// Like `Iden::try_from`, but tells an identifier that can never appear on
    /// the bus apart from one that is merely unknown.
    pub fn from_raw(raw: u16) -> Result<Self, IdenError> {
        if raw > MAX_IDEN {
            return Err(IdenError::OutOfRange(raw));
        }

        Self::try_from(raw)
    }

    /// Identifiers that only ever carry navigation computer traffic.
    fn is_satnav_only(self) -> bool {
        matches!(
            self,
            Self::SatNavStatus1 | Self::SatNavGuidance | Self::SatNavReport | Self::SatNavToMfd
        )
    }
}

/// Semantic kind of a captured frame.
///
/// Maps one-to-one onto [`Iden`], except for the device report identifier
/// which is split by its first payload byte into [`FrameKind::DeviceReport`]
/// and [`FrameKind::SatNavDeviceReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    Vin,
    Engine,
    HeadUnitStalk,
    LightsStatus,
    DeviceReport,
    SatNavDeviceReport,
    CarStatus1,
    /// Vehicle notification status: the 16-byte notification bitmap plus the
    /// index of the message currently on the dashboard
    CarStatus2,
    Dashboard,
    DashboardButtons,
    HeadUnit,
    MfdLanguageUnits,
    AudioSettings,
    MfdStatus,
    Aircon1,
    Aircon2,
    CdChanger,
    SatNavStatus1,
    SatNavStatus2,
    SatNavStatus3,
    SatNavGuidanceData,
    SatNavGuidance,
    SatNavReport,
    MfdToSatNav,
    SatNavToMfd,
    SatNavDownloading,
    SatNavDownloaded1,
    SatNavDownloaded2,
    WheelSpeed,
    Odometer,
    Com2000,
    CdChangerCommand,
    MfdToHeadUnit,
    AirConditionerDiag,
    AirConditionerDiagCommand,
    Ecu,
    Unknown,
}

impl From<Iden> for FrameKind {
    fn from(iden: Iden) -> Self {
        match iden {
            Iden::Vin => Self::Vin,
            Iden::Engine => Self::Engine,
            Iden::HeadUnitStalk => Self::HeadUnitStalk,
            Iden::LightsStatus => Self::LightsStatus,
            Iden::DeviceReport => Self::DeviceReport,
            Iden::CarStatus1 => Self::CarStatus1,
            Iden::CarStatus2 => Self::CarStatus2,
            Iden::Dashboard => Self::Dashboard,
            Iden::DashboardButtons => Self::DashboardButtons,
            Iden::HeadUnit => Self::HeadUnit,
            Iden::MfdLanguageUnits => Self::MfdLanguageUnits,
            Iden::AudioSettings => Self::AudioSettings,
            Iden::MfdStatus => Self::MfdStatus,
            Iden::Aircon1 => Self::Aircon1,
            Iden::Aircon2 => Self::Aircon2,
            Iden::CdChanger => Self::CdChanger,
            Iden::SatNavStatus1 => Self::SatNavStatus1,
            Iden::SatNavStatus2 => Self::SatNavStatus2,
            Iden::SatNavStatus3 => Self::SatNavStatus3,
            Iden::SatNavGuidanceData => Self::SatNavGuidanceData,
            Iden::SatNavGuidance => Self::SatNavGuidance,
            Iden::SatNavReport => Self::SatNavReport,
            Iden::MfdToSatNav => Self::MfdToSatNav,
            Iden::SatNavToMfd => Self::SatNavToMfd,
            Iden::SatNavDownloading => Self::SatNavDownloading,
            Iden::SatNavDownloaded1 => Self::SatNavDownloaded1,
            Iden::SatNavDownloaded2 => Self::SatNavDownloaded2,
            Iden::WheelSpeed => Self::WheelSpeed,
            Iden::Odometer => Self::Odometer,
            Iden::Com2000 => Self::Com2000,
            Iden::CdChangerCommand => Self::CdChangerCommand,
            Iden::MfdToHeadUnit => Self::MfdToHeadUnit,
            Iden::AirConditionerDiag => Self::AirConditionerDiag,
            Iden::AirConditionerDiagCommand => Self::AirConditionerDiagCommand,
            Iden::Ecu => Self::Ecu,
        }
    }
}

impl FrameKind {
    /// The identifier this kind is carried on (`None` for [`FrameKind::Unknown`])
    pub fn iden(self) -> Option<Iden> {
        Some(match self {
            Self::Vin => Iden::Vin,
            Self::Engine => Iden::Engine,
            Self::HeadUnitStalk => Iden::HeadUnitStalk,
            Self::LightsStatus => Iden::LightsStatus,
            Self::DeviceReport | Self::SatNavDeviceReport => Iden::DeviceReport,
            Self::CarStatus1 => Iden::CarStatus1,
            Self::CarStatus2 => Iden::CarStatus2,
            Self::Dashboard => Iden::Dashboard,
            Self::DashboardButtons => Iden::DashboardButtons,
            Self::HeadUnit => Iden::HeadUnit,
            Self::MfdLanguageUnits => Iden::MfdLanguageUnits,
            Self::AudioSettings => Iden::AudioSettings,
            Self::MfdStatus => Iden::MfdStatus,
            Self::Aircon1 => Iden::Aircon1,
            Self::Aircon2 => Iden::Aircon2,
            Self::CdChanger => Iden::CdChanger,
            Self::SatNavStatus1 => Iden::SatNavStatus1,
            Self::SatNavStatus2 => Iden::SatNavStatus2,
            Self::SatNavStatus3 => Iden::SatNavStatus3,
            Self::SatNavGuidanceData => Iden::SatNavGuidanceData,
            Self::SatNavGuidance => Iden::SatNavGuidance,
            Self::SatNavReport => Iden::SatNavReport,
            Self::MfdToSatNav => Iden::MfdToSatNav,
            Self::SatNavToMfd => Iden::SatNavToMfd,
            Self::SatNavDownloading => Iden::SatNavDownloading,
            Self::SatNavDownloaded1 => Iden::SatNavDownloaded1,
            Self::SatNavDownloaded2 => Iden::SatNavDownloaded2,
            Self::WheelSpeed => Iden::WheelSpeed,
            Self::Odometer => Iden::Odometer,
            Self::Com2000 => Iden::Com2000,
            Self::CdChangerCommand => Iden::CdChangerCommand,
            Self::MfdToHeadUnit => Iden::MfdToHeadUnit,
            Self::AirConditionerDiag => Iden::AirConditionerDiag,
            Self::AirConditionerDiagCommand => Iden::AirConditionerDiagCommand,
            Self::Ecu => Iden::Ecu,
            Self::Unknown => return None,
        })
    }

    /// Stable lower-case label, as used in reports sent to the display
    pub fn name(self) -> &'static str {
        match self {
            Self::Vin => "vin",
            Self::Engine => "engine",
            Self::HeadUnitStalk => "head_unit_stalk",
            Self::LightsStatus => "lights_status",
            Self::DeviceReport => "device_report",
            Self::SatNavDeviceReport => "satnav_device_report",
            Self::CarStatus1 => "car_status_1",
            Self::CarStatus2 => "car_status_2",
            Self::Dashboard => "dashboard",
            Self::DashboardButtons => "dashboard_buttons",
            Self::HeadUnit => "head_unit",
            Self::MfdLanguageUnits => "mfd_language_units",
            Self::AudioSettings => "audio_settings",
            Self::MfdStatus => "mfd_status",
            Self::Aircon1 => "aircon_1",
            Self::Aircon2 => "aircon_2",
            Self::CdChanger => "cd_changer",
            Self::SatNavStatus1 => "satnav_status_1",
            Self::SatNavStatus2 => "satnav_status_2",
            Self::SatNavStatus3 => "satnav_status_3",
            Self::SatNavGuidanceData => "satnav_guidance_data",
            Self::SatNavGuidance => "satnav_guidance",
            Self::SatNavReport => "satnav_report",
            Self::MfdToSatNav => "mfd_to_satnav",
            Self::SatNavToMfd => "satnav_to_mfd",
            Self::SatNavDownloading => "satnav_downloading",
            Self::SatNavDownloaded1 => "satnav_downloaded_1",
            Self::SatNavDownloaded2 => "satnav_downloaded_2",
            Self::WheelSpeed => "wheel_speed",
            Self::Odometer => "odometer",
            Self::Com2000 => "com2000",
            Self::CdChangerCommand => "cd_changer_command",
            Self::MfdToHeadUnit => "mfd_to_head_unit",
            Self::AirConditionerDiag => "air_conditioner_diag",
            Self::AirConditionerDiagCommand => "air_conditioner_diag_command",
            Self::Ecu => "ecu",
            Self::Unknown => "unknown",
        }
    }
}

/// Tags a frame with its semantic kind.
///
/// Only the device report identifier looks at the payload, and only when it
/// has at least one byte. Anything unrecognised (including values above
/// 0xFFF) is [`FrameKind::Unknown`].
pub fn classify(iden: u16, data: &[u8]) -> FrameKind {
    match Iden::try_from(iden) {
        Ok(Iden::DeviceReport) if data.first() == Some(&SATNAV_DEVICE_REPORT_MARKER) => {
            FrameKind::SatNavDeviceReport
        }
        Ok(known) => known.into(),
        Err(_) => FrameKind::Unknown,
    }
}

/// Whether a frame belongs to the navigation subsystem and should be routed
/// with the other navigation traffic.
pub fn is_satnav_frame(iden: u16, data: &[u8]) -> bool {
    data.len() >= MIN_SATNAV_DATA_LENGTH
        && (classify(iden, data) == FrameKind::SatNavDeviceReport
            || Iden::try_from(iden).is_ok_and(Iden::is_satnav_only))
}
