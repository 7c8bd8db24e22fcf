use core::iter::FusedIterator;

use crate::{
    notification_text, FrameKind, Language, VanFrame, NOTIFICATION_BITMAP_LENGTH,
    NOTIFICATION_COUNT,
};

/// Payload lengths seen on the notification status frame. The short form
/// lacks the two flag bytes used by vehicles built after 2004.
pub(crate) const NOTIFICATION_DATA_LENGTHS: [usize; 2] = [14, 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    #[default]
    Info,
    Warning,
}

impl Severity {
    /// Warnings are the texts ending in `!`
    pub fn of(text: &str) -> Self {
        if text.ends_with('!') {
            Self::Warning
        } else {
            Self::Info
        }
    }
}

/// One decoded notification slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotificationRecord {
    pub code: u8,
    pub active: bool,
    /// The dashboard is showing this notification right now
    pub is_current: bool,
    /// Empty when the slot carries no meaning
    pub text: &'static str,
    pub severity: Severity,
}

impl NotificationRecord {
    /// Active and has something to show
    pub fn is_displayable(&self) -> bool {
        self.active && !self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotificationError {
    #[error("Expected a notification status frame but received ({0:?})")]
    WrongFrame(FrameKind),
    #[error("Received a notification status frame with an unexpected length ({0:?})")]
    UnexpectedLength(usize),
    #[error("Current message index offset ({0:?}) is outside the payload")]
    IndexOffsetOutOfRange(usize),
}

fn is_set(bitmap: &[u8; NOTIFICATION_BITMAP_LENGTH], code: u8) -> bool {
    bitmap
        .get(code as usize / 8)
        .is_some_and(|byte| (byte >> (code % 8)) & 1 == 1)
}

/// Decodes all 128 notification slots in ascending code order.
///
/// The flag for `code` is bit `code % 8` of byte `code / 8`. A `current_index`
/// of 128 or more, or one addressing an inactive slot, marks nothing current.
pub fn decode_notifications(
    bitmap: &[u8; NOTIFICATION_BITMAP_LENGTH],
    current_index: u8,
    language: Language,
) -> Notifications {
    Notifications {
        bitmap: *bitmap,
        current_index,
        language,
        next: 0,
    }
}

/// Iterator returned by [`decode_notifications`]. Always yields exactly
/// [`NOTIFICATION_COUNT`] records.
#[derive(Debug, Clone)]
pub struct Notifications {
    bitmap: [u8; NOTIFICATION_BITMAP_LENGTH],
    current_index: u8,
    language: Language,
    next: usize,
}

impl Iterator for Notifications {
    type Item = NotificationRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= NOTIFICATION_COUNT {
            return None;
        }

        let code = self.next as u8;
        self.next += 1;

        let active = is_set(&self.bitmap, code);
        let text = notification_text(code, self.language);

        Some(NotificationRecord {
            code,
            active,
            is_current: active && code == self.current_index,
            text,
            severity: Severity::of(text),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NOTIFICATION_COUNT.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Notifications {}

impl FusedIterator for Notifications {}

/// The raw content of a notification status frame: which notifications are
/// pending and which one the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotificationStatus {
    pub bitmap: [u8; NOTIFICATION_BITMAP_LENGTH],
    pub current_index: u8,
}

impl NotificationStatus {
    pub fn new(bitmap: [u8; NOTIFICATION_BITMAP_LENGTH], current_index: u8) -> Self {
        Self {
            bitmap,
            current_index,
        }
    }

    /// Reads the bitmap and the current message index out of a notification
    /// status payload. Flag bytes the payload does not carry read as zero.
    pub fn from_payload(data: &[u8], index_offset: usize) -> Result<Self, NotificationError> {
        if !NOTIFICATION_DATA_LENGTHS.contains(&data.len()) {
            return Err(NotificationError::UnexpectedLength(data.len()));
        }

        let current_index = *data
            .get(index_offset)
            .ok_or(NotificationError::IndexOffsetOutOfRange(index_offset))?;

        let mut bitmap = [0u8; NOTIFICATION_BITMAP_LENGTH];
        bitmap[..data.len()].copy_from_slice(data);

        Ok(Self::new(bitmap, current_index))
    }

    /// Like [`NotificationStatus::from_payload`], for a whole frame which must
    /// be a [`FrameKind::CarStatus2`] frame.
    pub fn from_frame(frame: &VanFrame, index_offset: usize) -> Result<Self, NotificationError> {
        match frame.kind() {
            FrameKind::CarStatus2 => Self::from_payload(frame.data(), index_offset),
            other => Err(NotificationError::WrongFrame(other)),
        }
    }

    pub fn is_active(&self, code: u8) -> bool {
        (code as usize) < NOTIFICATION_COUNT && is_set(&self.bitmap, code)
    }

    /// The code the dashboard is showing, if it is a pending notification
    pub fn current_code(&self) -> Option<u8> {
        self.is_active(self.current_index)
            .then_some(self.current_index)
    }

    /// Number of set flag bits. The bits of the current index byte are
    /// counted too, see [`NotificationStatus::displayable`] for what is shown.
    pub fn active_count(&self) -> usize {
        self.bitmap.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    pub fn records(&self, language: Language) -> Notifications {
        decode_notifications(&self.bitmap, self.current_index, language)
    }

    /// The active notifications that have a text
    pub fn displayable(&self, language: Language) -> impl Iterator<Item = NotificationRecord> {
        self.records(language)
            .filter(NotificationRecord::is_displayable)
    }

    /// The record of the notification currently on the dashboard
    pub fn current(&self, language: Language) -> Option<NotificationRecord> {
        self.records(language).find(|record| record.is_current)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        decode_notifications, FrameKind, Language, NotificationError, NotificationRecord,
        NotificationStatus, Severity, VanFrame, CURRENT_MESSAGE_INDEX_OFFSET, NOTIFICATION_COUNT,
    };

    fn single_bit(code: usize) -> [u8; 16] {
        let mut bitmap = [0u8; 16];
        bitmap[code / 8] = 1 << (code % 8);
        bitmap
    }

    #[test]
    fn tyre_pressure_is_current() {
        let mut records = decode_notifications(&single_bit(0), 0, Language::English);

        assert_eq!(
            records.next(),
            Some(NotificationRecord {
                code: 0,
                active: true,
                is_current: true,
                text: "Tyre pressure too low!",
                severity: Severity::Warning,
            })
        );

        assert!(records.all(|record| !record.active && !record.is_current));
    }

    #[test]
    fn all_zero_bitmap() {
        for language in Language::ALL {
            let records = decode_notifications(&[0; 16], 5, language);

            assert_eq!(records.len(), NOTIFICATION_COUNT);
            assert!(records.clone().all(|record| !record.active && !record.is_current));
            assert!(records
                .enumerate()
                .all(|(index, record)| record.code as usize == index));
        }
    }

    #[test]
    fn single_bit_selects_single_code() {
        for code in 0..NOTIFICATION_COUNT {
            let bitmap = single_bit(code);

            for record in decode_notifications(&bitmap, code as u8, Language::French) {
                assert_eq!(record.active, record.code as usize == code);
                assert_eq!(record.is_current, record.code as usize == code);
            }
        }
    }

    #[test]
    fn current_index_must_be_active_and_in_range() {
        let bitmap = [0xFF; 16];

        for current_index in 0..=u8::MAX {
            let current = decode_notifications(&bitmap, current_index, Language::German)
                .filter(|record| record.is_current)
                .count();

            assert_eq!(current, usize::from(current_index < 128));
        }

        // Addressing a slot that is not set
        assert!(decode_notifications(&single_bit(3), 4, Language::English)
            .all(|record| !record.is_current));
    }

    #[test]
    fn severity_follows_text() {
        assert_eq!(Severity::of("Brake pads worn!"), Severity::Warning);
        assert_eq!(Severity::of("Doors locked"), Severity::Info);
        assert_eq!(Severity::of("Contactsleutel ! "), Severity::Info);
        assert_eq!(Severity::of(""), Severity::Info);

        for language in Language::ALL {
            for record in decode_notifications(&[0; 16], 0, language) {
                assert_eq!(
                    record.severity == Severity::Warning,
                    record.text.ends_with('!')
                );
            }
        }
    }

    #[test]
    fn aliased_codes_decode_to_the_same_text() {
        let mut bitmap = [0u8; 16];
        bitmap[7] = 0b1110_0000;

        let status = NotificationStatus::new(bitmap, 0x3F);
        let mut displayable = status.displayable(Language::Spanish);

        for code in [0x3D, 0x3E, 0x3F] {
            let record = displayable.next().unwrap();
            assert_eq!(record.code, code);
            assert_eq!(record.text, "Faltan 7 captadores de presión neumática!");
        }

        assert_eq!(displayable.next(), None);
        assert_eq!(status.current_code(), Some(0x3F));
        assert_eq!(status.current(Language::Spanish).map(|record| record.code), Some(0x3F));
    }

    #[test]
    fn decoding_is_idempotent() {
        let bitmap = [0xA5, 0x5A, 0x00, 0xFF, 0x10, 0x01, 0x80, 0x7E, 0x0F, 0x24, 0, 0, 0, 0, 0, 0];

        assert!(decode_notifications(&bitmap, 0x27, Language::Dutch)
            .eq(decode_notifications(&bitmap, 0x27, Language::Dutch)));
    }

    #[test]
    fn status_from_payload() {
        let mut data = [0u8; 16];
        data[5] = 0b0000_0001;
        data[CURRENT_MESSAGE_INDEX_OFFSET] = 0x28;

        let status = NotificationStatus::from_payload(&data, CURRENT_MESSAGE_INDEX_OFFSET).unwrap();
        assert_eq!(status.current_index, 0x28);
        assert_eq!(status.current_code(), Some(0x28));
        assert_eq!(
            status.current(Language::English).map(|record| record.text),
            Some("Handbrake on!")
        );

        // The short form only lacks the last two flag bytes
        let short = NotificationStatus::from_payload(&data[..14], CURRENT_MESSAGE_INDEX_OFFSET)
            .unwrap();
        assert_eq!(short, status);

        assert_eq!(
            NotificationStatus::from_payload(&data[..15], CURRENT_MESSAGE_INDEX_OFFSET),
            Err(NotificationError::UnexpectedLength(15))
        );
        assert_eq!(
            NotificationStatus::from_payload(&data[..14], 14),
            Err(NotificationError::IndexOffsetOutOfRange(14))
        );
    }

    #[test]
    fn status_from_frame() {
        let mut data = [0u8; 16];
        data[0] = 0b0000_1000;
        data[CURRENT_MESSAGE_INDEX_OFFSET] = 0x03;

        let frame = VanFrame::new(0x524, &data).unwrap();
        let status = NotificationStatus::from_frame(&frame, CURRENT_MESSAGE_INDEX_OFFSET).unwrap();
        assert!(status.is_active(3));
        assert!(!status.is_active(200));

        let engine = VanFrame::new(0x8A4, &data).unwrap();
        assert_eq!(
            NotificationStatus::from_frame(&engine, CURRENT_MESSAGE_INDEX_OFFSET),
            Err(NotificationError::WrongFrame(FrameKind::Engine))
        );
    }

    #[test]
    fn index_byte_bits_have_no_text() {
        let mut data = [0u8; 16];
        data[CURRENT_MESSAGE_INDEX_OFFSET] = 0x7F;

        let status = NotificationStatus::from_payload(&data, CURRENT_MESSAGE_INDEX_OFFSET).unwrap();

        // The index byte sets flags 0x48..=0x4E, none of which has a text
        assert_eq!(status.active_count(), 7);
        assert_eq!(status.displayable(Language::Italian).count(), 0);
        assert_eq!(status.current_code(), None);
    }
}
