use crate::{
    notification::NOTIFICATION_DATA_LENGTHS, verify_table, Language, PacketSelection, TableError,
    CURRENT_MESSAGE_INDEX_OFFSET,
};

/// Length of the persisted form, see [`DecoderConfig::as_bytes`]
pub const CONFIG_LENGTH: usize = 3;

/// Static options consumed at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderConfig {
    /// Language notification texts are rendered in
    pub language: Language,
    /// Frame kinds reported besides the notification status
    pub selection: PacketSelection,
    /// Payload offset of the current message index in the notification
    /// status frame. Must fall inside the 14-byte short form.
    pub current_index_offset: u8,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Various errors which can arise while loading a decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("Tried to parse an empty buffer")]
    Empty,
    #[error("Received a configuration with less bytes than required ({0:?})")]
    NotEnoughBytes(usize),
    #[error("Received a configuration with more bytes than expected ({0:?})")]
    TooManyBytes(usize),
    #[error("Tried to decode language but it was invalid ({0:?})")]
    InvalidLanguage(u8),
    #[error("Tried to decode packet selection but it was invalid ({0:?})")]
    InvalidPacketSelection(u8),
    #[error("Current message index offset ({0:?}) is outside the shortest notification payload")]
    IndexOffsetOutOfRange(u8),
    #[error("Notification table is inconsistent")]
    Table(#[from] TableError),
}

impl DecoderConfig {
    pub const fn new() -> Self {
        Self {
            language: Language::English,
            selection: PacketSelection::All,
            current_index_offset: CURRENT_MESSAGE_INDEX_OFFSET as u8,
        }
    }

    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub const fn with_selection(mut self, selection: PacketSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Checks the options and the static notification table. Meant to be
    /// called once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.current_index_offset as usize >= NOTIFICATION_DATA_LENGTHS[0] {
            return Err(ConfigError::IndexOffsetOutOfRange(self.current_index_offset));
        }

        verify_table().map_err(|error| {
            #[cfg(feature = "defmt")]
            defmt::error!("Notification table is inconsistent: {}", error);

            ConfigError::from(error)
        })
    }

    /// `[MFD language code, packet selection, current index offset]`
    pub fn as_bytes(&self) -> [u8; CONFIG_LENGTH] {
        [
            self.language.into(),
            self.selection.into(),
            self.current_index_offset,
        ]
    }

    pub fn from_bytes(buffer: &[u8]) -> Result<Self, ConfigError> {
        if buffer.is_empty() {
            return Err(ConfigError::Empty);
        }

        if buffer.len() < CONFIG_LENGTH {
            return Err(ConfigError::NotEnoughBytes(buffer.len()));
        }

        if buffer.len() > CONFIG_LENGTH {
            return Err(ConfigError::TooManyBytes(buffer.len()));
        }

        let config = Self {
            language: buffer[0].try_into()?,
            selection: buffer[1].try_into()?,
            current_index_offset: buffer[2],
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ConfigError, DecoderConfig, Language, NotificationStatus, PacketSelection, VanFrame,
    };

    #[test]
    fn default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.selection, PacketSelection::All);
        assert_eq!(config.current_index_offset, 9);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn persisted_config() {
        let config = DecoderConfig::new()
            .with_language(Language::Dutch)
            .with_selection(PacketSelection::SatNav);

        assert_eq!(config.as_bytes(), [0x06, 3, 9]);
        assert_eq!(DecoderConfig::from_bytes(&[0x06, 3, 9]), Ok(config));
    }

    #[test]
    fn config_parse_errors() {
        assert_eq!(DecoderConfig::from_bytes(&[]), Err(ConfigError::Empty));
        assert_eq!(DecoderConfig::from_bytes(&[1, 0]), Err(ConfigError::NotEnoughBytes(2)));
        assert_eq!(DecoderConfig::from_bytes(&[1, 0, 9, 0]), Err(ConfigError::TooManyBytes(4)));
        assert_eq!(DecoderConfig::from_bytes(&[5, 0, 9]), Err(ConfigError::InvalidLanguage(5)));
        assert_eq!(
            DecoderConfig::from_bytes(&[1, 9, 9]),
            Err(ConfigError::InvalidPacketSelection(9))
        );
        assert_eq!(
            DecoderConfig::from_bytes(&[1, 0, 14]),
            Err(ConfigError::IndexOffsetOutOfRange(14))
        );
        assert_eq!(
            DecoderConfig::from_bytes(&[1, 0, 16]),
            Err(ConfigError::IndexOffsetOutOfRange(16))
        );
    }

    #[test]
    fn accepted_offset_reads_short_frames() {
        let config = DecoderConfig::from_bytes(&[1, 0, 13]).unwrap();

        let mut data = [0u8; 14];
        data[0] = 0b0000_0001;

        let frame = VanFrame::new(0x524, &data).unwrap();
        let status =
            NotificationStatus::from_frame(&frame, config.current_index_offset as usize).unwrap();

        assert_eq!(status.current_code(), Some(0));
    }
}
