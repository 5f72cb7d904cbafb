//! Float encode/decode primitives: `NEW_FLOAT_EXT` and the legacy,
//! decode-only `FLOAT_EXT`.

use crate::constants::{FLOAT_EXT, NEW_FLOAT_EXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    BufferTooShort,
    InvalidFormat(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::BufferTooShort => write!(f, "buffer too short decoding float"),
            DecodeError::InvalidFormat(msg) => write!(f, "invalid float encoding: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Always emits `NEW_FLOAT_EXT`; the encoder never produces the legacy
/// string-based `FLOAT_EXT` form.
pub fn encode_float(buf: &mut Vec<u8>, value: f64) {
    buf.push(NEW_FLOAT_EXT);
    buf.extend_from_slice(&value.to_bits().to_be_bytes());
}

/// Decodes `NEW_FLOAT_EXT` (8-byte IEEE-754 double) or the legacy
/// `FLOAT_EXT` (31-byte ASCII representation, null-padded).
pub fn decode_float(data: &[u8]) -> Result<(f64, usize), DecodeError> {
    let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
    match tag {
        NEW_FLOAT_EXT => {
            if data.len() < 9 {
                return Err(DecodeError::BufferTooShort);
            }
            let mut bits = [0u8; 8];
            bits.copy_from_slice(&data[1..9]);
            Ok((f64::from_bits(u64::from_be_bytes(bits)), 9))
        }
        FLOAT_EXT => {
            if data.len() < 32 {
                return Err(DecodeError::BufferTooShort);
            }
            let text = &data[1..32];
            let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
            let text = std::str::from_utf8(&text[..end])
                .map_err(|_| DecodeError::InvalidFormat("non-UTF-8 legacy float".into()))?;
            let value: f64 = text
                .trim()
                .parse()
                .map_err(|_| DecodeError::InvalidFormat(format!("unparsable legacy float {text:?}")))?;
            Ok((value, 32))
        }
        other => Err(DecodeError::InvalidFormat(format!("unexpected float tag {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_float_roundtrips() {
        let mut buf = Vec::new();
        encode_float(&mut buf, 3.14159);
        let (value, consumed) = decode_float(&buf).unwrap();
        assert!((value - 3.14159).abs() < f64::EPSILON);
        assert_eq!(consumed, buf.len());
    }

    #[test]
    fn legacy_float_ext_decodes() {
        let mut data = vec![FLOAT_EXT];
        let mut text = b"3.25".to_vec();
        text.resize(31, 0);
        data.extend_from_slice(&text);
        let (value, consumed) = decode_float(&data).unwrap();
        assert_eq!(value, 3.25);
        assert_eq!(consumed, 32);
    }

    #[test]
    fn encoder_never_produces_legacy_tag() {
        let mut buf = Vec::new();
        encode_float(&mut buf, 1.0);
        assert_eq!(buf[0], NEW_FLOAT_EXT);
    }
}
