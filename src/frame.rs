use heapless::Vec;

use crate::{
    classify,
    codec::{bytes_to_hex, iden_from_hex, iden_to_hex, unpack_data_bytes, IDEN_HEX_LENGTH},
    is_satnav_frame, FrameKind, MAX_FRAME_DATA_LENGTH, MAX_FRAME_TEXT_LENGTH, MAX_IDEN,
};

/// A frame captured from the VAN bus, already checked (CRC, framing) by the
/// receiver that delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VanFrame {
    iden: u16,
    #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
    data: Vec<u8, MAX_FRAME_DATA_LENGTH>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    #[error("Received an identifier ({0:#05X}) that was out of the valid range (0..=0xFFF)")]
    IdenOutOfRange(u16),
    #[error("Received ({0:?}) bytes of data but a frame carries at most 28")]
    DataTooLong(usize),
    #[error("Tried to parse a frame from ({0:?}) bytes, which is too short to hold an identifier")]
    TooShort(usize),
    #[error("Tried to decode a hex digit but it was out of range ({0:?})")]
    IllegalHexDigit(u8),
    #[error("Received encoded data with a length ({0:?}) that was not a multiple of 2")]
    InvalidEncodedDataLength(usize),
}

impl VanFrame {
    /// Creates a new frame. `iden` must fit in 12 bits and `data` may hold at
    /// most [`MAX_FRAME_DATA_LENGTH`] bytes.
    pub fn new(iden: u16, data: &[u8]) -> Result<Self, FrameError> {
        if iden > MAX_IDEN {
            return Err(FrameError::IdenOutOfRange(iden));
        }

        let data = Vec::from_slice(data).map_err(|_| FrameError::DataTooLong(data.len()))?;

        Ok(Self { iden, data })
    }

    /// Gets the 12-bit identifier of the frame
    pub fn iden(&self) -> u16 {
        self.iden
    }

    /// Gets the payload of the frame
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn kind(&self) -> FrameKind {
        classify(self.iden, &self.data)
    }

    /// See [`is_satnav_frame`]
    pub fn is_satnav(&self) -> bool {
        is_satnav_frame(self.iden, &self.data)
    }

    /// Bit `i` is set when payload byte `i` differs from `previous`, or is
    /// present in only one of the two frames.
    pub fn changed_bytes(&self, previous: &VanFrame) -> u32 {
        let longest = self.data.len().max(previous.data.len());

        (0..longest)
            .filter(|&i| self.data.get(i) != previous.data.get(i))
            .fold(0, |mask, i| mask | (1 << i))
    }
}

impl VanFrame {
    /// Parses the dump form of a frame: three hex identifier digits followed
    /// by two hex digits per payload byte, without separators.
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, FrameError> {
        if buffer.len() < IDEN_HEX_LENGTH {
            return Err(FrameError::TooShort(buffer.len()));
        }

        let (iden_hex, data_hex) = buffer.split_at(IDEN_HEX_LENGTH);
        let iden = iden_from_hex(&[iden_hex[0], iden_hex[1], iden_hex[2]])?;
        let data = unpack_data_bytes(data_hex)?;

        Ok(Self { iden, data })
    }

    pub fn as_bytes(&self) -> Vec<u8, MAX_FRAME_TEXT_LENGTH> {
        let mut result = Vec::new();

        result
            .extend_from_slice(&iden_to_hex(self.iden))
            .expect("Failed to extend Vec");
        result
            .extend_from_slice(&bytes_to_hex(&self.data))
            .expect("Failed to extend Vec");

        result
    }
}
