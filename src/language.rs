use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::config::ConfigError;

/// Display language of the multi-function display (MFD).
///
/// The discriminant is the language code the MFD itself uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[num_enum(error_type(name = ConfigError, constructor = ConfigError::InvalidLanguage))]
#[repr(u8)]
pub enum Language {
    French = 0x00,
    #[default]
    English = 0x01,
    German = 0x02,
    Spanish = 0x03,
    Italian = 0x04,
    Dutch = 0x06,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Self::English,
        Self::French,
        Self::German,
        Self::Spanish,
        Self::Italian,
        Self::Dutch,
    ];
}

#[cfg(test)]
mod tests {
    use crate::{ConfigError, Language};

    #[test]
    fn mfd_language_codes() {
        assert_eq!(Language::try_from(0x00), Ok(Language::French));
        assert_eq!(Language::try_from(0x06), Ok(Language::Dutch));
        assert_eq!(Language::try_from(0x05), Err(ConfigError::InvalidLanguage(0x05)));
        assert_eq!(u8::from(Language::English), 0x01);
        assert_eq!(Language::default(), Language::English);
    }
}
