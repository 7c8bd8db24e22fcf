use heapless::Vec;

use crate::{FrameError, MAX_FRAME_DATA_LENGTH, MAX_IDEN};

pub const IDEN_HEX_LENGTH: usize = 3;

/// Upper bound on the hex text of a frame payload
pub const MAX_ENCODED_DATA_LENGTH: usize = MAX_FRAME_DATA_LENGTH * 2;

/* Encoding */

pub fn to_hex_digit(value: u32) -> u8 {
    const HEX_LUT: &[u8] = "0123456789ABCDEF".as_bytes();

    HEX_LUT[(value & 0xF) as usize]
}

pub fn iden_to_hex(iden: u16) -> [u8; IDEN_HEX_LENGTH] {
    let raw = (iden & MAX_IDEN) as u32;

    [
        to_hex_digit(raw >> 8),
        to_hex_digit(raw >> 4),
        to_hex_digit(raw),
    ]
}

pub fn bytes_to_hex(data: &[u8]) -> Vec<u8, MAX_ENCODED_DATA_LENGTH> {
    let mut buf = Vec::new();

    for byte in data.iter().take(MAX_FRAME_DATA_LENGTH) {
        buf.push(to_hex_digit((byte >> 4) as u32))
            .expect("Failed to push to Vec");
        buf.push(to_hex_digit(*byte as u32))
            .expect("Failed to push to Vec");
    }

    buf
}

/* Decoding */

pub fn hex_digit_to_u8(byte: u8) -> Result<u8, FrameError> {
    Ok(match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => return Err(FrameError::IllegalHexDigit(byte)),
    })
}

pub fn u8_from_hex_nibbles(hex_nibbles: &[u8; 2]) -> Result<u8, FrameError> {
    let msn = hex_digit_to_u8(hex_nibbles[0])?;
    let lsn = hex_digit_to_u8(hex_nibbles[1])?;

    Ok((msn << 4) | lsn)
}

pub fn iden_from_hex(hex_nibbles: &[u8; IDEN_HEX_LENGTH]) -> Result<u16, FrameError> {
    let mut value = 0u16;

    for nibble in hex_nibbles.iter() {
        value <<= 4;
        value |= hex_digit_to_u8(*nibble)? as u16;
    }

    Ok(value)
}

pub fn unpack_data_bytes(hex_bytes: &[u8]) -> Result<Vec<u8, MAX_FRAME_DATA_LENGTH>, FrameError> {
    // Make sure data is multiple of 2 (otherwise we can't parse the hex digits)
    if hex_bytes.len() % 2 != 0 {
        return Err(FrameError::InvalidEncodedDataLength(hex_bytes.len()));
    }

    if hex_bytes.len() / 2 > MAX_FRAME_DATA_LENGTH {
        return Err(FrameError::DataTooLong(hex_bytes.len() / 2));
    }

    let mut buf = Vec::new();

    for pair in hex_bytes.chunks_exact(2) {
        let byte = u8_from_hex_nibbles(&[pair[0], pair[1]])?;
        buf.push(byte)
            .map_err(|_| FrameError::DataTooLong(hex_bytes.len() / 2))?;
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use crate::{
        codec::{bytes_to_hex, iden_from_hex, iden_to_hex, unpack_data_bytes},
        FrameError,
    };

    #[test]
    fn iden_hex() {
        assert_eq!(&iden_to_hex(0x8C4), b"8C4");
        assert_eq!(&iden_to_hex(0x04F), b"04F");
        assert_eq!(iden_from_hex(b"8c4"), Ok(0x8C4));
        assert_eq!(iden_from_hex(b"8G4"), Err(FrameError::IllegalHexDigit(b'G')));
    }

    #[test]
    fn data_hex() {
        assert_eq!(&bytes_to_hex(&[0x07, 0xA0, 0xFF])[..], b"07A0FF");
        assert_eq!(&unpack_data_bytes(b"07a0FF").unwrap()[..], &[0x07, 0xA0, 0xFF]);
        assert!(unpack_data_bytes(b"").unwrap().is_empty());

        let full = bytes_to_hex(&[0xA5; 28]);
        assert_eq!(full.len(), 56);
        assert_eq!(&unpack_data_bytes(&full).unwrap()[..], &[0xA5; 28]);

        assert_eq!(
            unpack_data_bytes(b"07A"),
            Err(FrameError::InvalidEncodedDataLength(3))
        );
        assert_eq!(
            unpack_data_bytes(&[b'0'; 58]),
            Err(FrameError::DataTooLong(29))
        );
    }
}
