use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{config::ConfigError, FrameKind};

/// Which frame kinds are passed on to the reporting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[num_enum(error_type(name = ConfigError, constructor = ConfigError::InvalidPacketSelection))]
#[repr(u8)]
pub enum PacketSelection {
    /// Every frame, unknown identifiers included
    #[default]
    All = 0,
    /// The COM2000 switch module and the stalks and buttons around it
    Com2000Etc = 1,
    /// Head unit (radio, tape, CD changer) traffic
    HeadUnit = 2,
    /// Navigation computer traffic
    SatNav = 3,
    /// Nothing
    None = 4,
}

impl PacketSelection {
    pub fn selects(self, kind: FrameKind) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Com2000Etc => matches!(
                kind,
                FrameKind::Com2000
                    | FrameKind::HeadUnitStalk
                    | FrameKind::LightsStatus
                    | FrameKind::DashboardButtons
            ),
            Self::HeadUnit => matches!(
                kind,
                FrameKind::HeadUnitStalk
                    | FrameKind::HeadUnit
                    | FrameKind::AudioSettings
                    | FrameKind::CdChanger
                    | FrameKind::CdChangerCommand
                    | FrameKind::MfdToHeadUnit
            ),
            Self::SatNav => matches!(
                kind,
                FrameKind::SatNavDeviceReport
                    | FrameKind::SatNavStatus1
                    | FrameKind::SatNavStatus2
                    | FrameKind::SatNavStatus3
                    | FrameKind::SatNavGuidanceData
                    | FrameKind::SatNavGuidance
                    | FrameKind::SatNavReport
                    | FrameKind::MfdToSatNav
                    | FrameKind::SatNavToMfd
                    | FrameKind::SatNavDownloading
                    | FrameKind::SatNavDownloaded1
                    | FrameKind::SatNavDownloaded2
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConfigError, FrameKind, PacketSelection};

    #[test]
    fn selection_groups() {
        assert!(PacketSelection::All.selects(FrameKind::Unknown));
        assert!(PacketSelection::All.selects(FrameKind::Engine));
        assert!(!PacketSelection::None.selects(FrameKind::CarStatus2));

        assert!(PacketSelection::HeadUnit.selects(FrameKind::CdChanger));
        assert!(PacketSelection::HeadUnit.selects(FrameKind::HeadUnitStalk));
        assert!(!PacketSelection::HeadUnit.selects(FrameKind::Engine));

        assert!(PacketSelection::Com2000Etc.selects(FrameKind::Com2000));
        assert!(PacketSelection::Com2000Etc.selects(FrameKind::HeadUnitStalk));
        assert!(!PacketSelection::Com2000Etc.selects(FrameKind::CdChanger));

        assert!(PacketSelection::SatNav.selects(FrameKind::SatNavDeviceReport));
        assert!(PacketSelection::SatNav.selects(FrameKind::MfdToSatNav));
        assert!(!PacketSelection::SatNav.selects(FrameKind::DeviceReport));
    }

    #[test]
    fn selection_codes() {
        assert_eq!(PacketSelection::try_from(3), Ok(PacketSelection::SatNav));
        assert_eq!(
            PacketSelection::try_from(5),
            Err(ConfigError::InvalidPacketSelection(5))
        );
        assert_eq!(u8::from(PacketSelection::None), 4);
    }
}
