//! Integer encode/decode primitives: `SMALL_INTEGER_EXT`, `INTEGER_EXT`,
//! `SMALL_BIG_EXT`, `LARGE_BIG_EXT`.
//!
//! The encoder picks the narrowest tag the value's magnitude allows; the
//! decoder accepts any of the four regardless of what the encoder would
//! have chosen, since a legally-encoded value may have come from another
//! implementation entirely.

use entities_data_handling::Integer;
use infrastructure_bignum_encoding::{bytes_to_integer, integer_to_bytes};

use crate::constants::{
    INTEGER_EXT, INTEGER_EXT_MAX, INTEGER_EXT_MIN, LARGE_BIG_EXT, SMALL_BIG_EXT,
    SMALL_INTEGER_EXT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A big integer's magnitude needs more than `u32::MAX` bytes.
    ValueTooLarge,
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::ValueTooLarge => write!(f, "integer magnitude too large to encode"),
        }
    }
}

impl std::error::Error for EncodeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    BufferTooShort,
    InvalidFormat(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::BufferTooShort => write!(f, "buffer too short decoding integer"),
            DecodeError::InvalidFormat(msg) => write!(f, "invalid integer encoding: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Writes `value` using the narrowest legal tag: `SMALL_INTEGER_EXT` for
/// `0..=255`, `INTEGER_EXT` for the rest of the signed-32-bit range,
/// `SMALL_BIG_EXT` for magnitudes that fit in 255 bytes, else
/// `LARGE_BIG_EXT`.
pub fn encode_integer(buf: &mut Vec<u8>, value: &Integer) -> Result<(), EncodeError> {
    if let Ok(small) = i64::try_from(value) {
        if (0..=255).contains(&small) {
            buf.push(SMALL_INTEGER_EXT);
            buf.push(small as u8);
            return Ok(());
        }
        if (INTEGER_EXT_MIN..=INTEGER_EXT_MAX).contains(&small) {
            buf.push(INTEGER_EXT);
            buf.extend_from_slice(&(small as i32).to_be_bytes());
            return Ok(());
        }
    }

    let (bytes, is_negative) = integer_to_bytes(value);
    let arity = bytes.len();
    let sign = u8::from(is_negative);

    if arity <= 255 {
        buf.push(SMALL_BIG_EXT);
        buf.push(arity as u8);
        buf.push(sign);
        buf.extend_from_slice(&bytes);
    } else {
        let arity_u32 = u32::try_from(arity).map_err(|_| EncodeError::ValueTooLarge)?;
        buf.push(LARGE_BIG_EXT);
        buf.extend_from_slice(&arity_u32.to_be_bytes());
        buf.push(sign);
        buf.extend_from_slice(&bytes);
    }
    Ok(())
}

/// Decodes any of the four integer tags starting at `data[0]`. Returns the
/// value and the number of bytes consumed.
pub fn decode_integer(data: &[u8]) -> Result<(Integer, usize), DecodeError> {
    let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
    match tag {
        SMALL_INTEGER_EXT => {
            let byte = *data.get(1).ok_or(DecodeError::BufferTooShort)?;
            Ok((Integer::from(byte), 2))
        }
        INTEGER_EXT => {
            if data.len() < 5 {
                return Err(DecodeError::BufferTooShort);
            }
            let value = i32::from_be_bytes([data[1], data[2], data[3], data[4]]);
            Ok((Integer::from(value), 5))
        }
        SMALL_BIG_EXT => {
            let arity = *data.get(1).ok_or(DecodeError::BufferTooShort)? as usize;
            decode_big(data, 2, arity)
        }
        LARGE_BIG_EXT => {
            if data.len() < 5 {
                return Err(DecodeError::BufferTooShort);
            }
            let arity = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
            decode_big(data, 5, arity)
        }
        other => Err(DecodeError::InvalidFormat(format!("unexpected integer tag {other}"))),
    }
}

fn decode_big(data: &[u8], sign_pos: usize, arity: usize) -> Result<(Integer, usize), DecodeError> {
    let is_negative = match data.get(sign_pos) {
        Some(0) => false,
        Some(_) => true,
        None => return Err(DecodeError::BufferTooShort),
    };
    let bytes_start = sign_pos + 1;
    let bytes_end = bytes_start + arity;
    let bytes = data.get(bytes_start..bytes_end).ok_or(DecodeError::BufferTooShort)?;
    Ok((bytes_to_integer(bytes, is_negative), bytes_end))
}
