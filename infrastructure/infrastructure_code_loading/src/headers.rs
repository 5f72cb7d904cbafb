//! Compound-type header encode/decode primitives: tuple arity, list count,
//! and map arity. Each header is written/read on its own; the caller is
//! responsible for looping over the element count to encode/decode the
//! elements themselves.

use crate::constants::{LARGE_TUPLE_EXT, LIST_EXT, MAP_EXT, NIL_EXT, SMALL_TUPLE_EXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    BufferTooShort,
    InvalidFormat(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::BufferTooShort => write!(f, "buffer too short decoding header"),
            DecodeError::InvalidFormat(msg) => write!(f, "invalid header: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Writes a tuple header: `SMALL_TUPLE_EXT` for arity `<= 255`, else
/// `LARGE_TUPLE_EXT`.
pub fn encode_tuple_header(buf: &mut Vec<u8>, arity: usize) {
    if arity <= 255 {
        buf.push(SMALL_TUPLE_EXT);
        buf.push(arity as u8);
    } else {
        buf.push(LARGE_TUPLE_EXT);
        buf.extend_from_slice(&(arity as u32).to_be_bytes());
    }
}

/// Decodes a tuple header, returning `(arity, bytes_consumed)`.
pub fn decode_tuple_header(data: &[u8]) -> Result<(usize, usize), DecodeError> {
    let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
    match tag {
        SMALL_TUPLE_EXT => {
            let arity = *data.get(1).ok_or(DecodeError::BufferTooShort)? as usize;
            Ok((arity, 2))
        }
        LARGE_TUPLE_EXT => {
            if data.len() < 5 {
                return Err(DecodeError::BufferTooShort);
            }
            let arity = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
            Ok((arity, 5))
        }
        other => Err(DecodeError::InvalidFormat(format!("unexpected tuple tag {other}"))),
    }
}

/// Writes a `LIST_EXT` header (4-byte element count). Callers encode an
/// empty proper list as bare `NIL_EXT` instead of calling this with `0`.
pub fn encode_list_header(buf: &mut Vec<u8>, length: usize) {
    buf.push(LIST_EXT);
    buf.extend_from_slice(&(length as u32).to_be_bytes());
}

/// Writes the `NIL_EXT` tag (empty list / list tail terminator).
pub fn encode_nil(buf: &mut Vec<u8>) {
    buf.push(NIL_EXT);
}

/// Decodes a list header, returning `(length, bytes_consumed)`. Does not
/// accept `NIL_EXT` — callers check for that tag themselves before falling
/// back to this.
pub fn decode_list_header(data: &[u8]) -> Result<(usize, usize), DecodeError> {
    let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
    if tag != LIST_EXT {
        return Err(DecodeError::InvalidFormat(format!("unexpected list tag {tag}")));
    }
    if data.len() < 5 {
        return Err(DecodeError::BufferTooShort);
    }
    let length = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
    Ok((length, 5))
}

/// Writes a `MAP_EXT` header (4-byte pair count).
pub fn encode_map_header(buf: &mut Vec<u8>, pair_count: usize) {
    buf.push(MAP_EXT);
    buf.extend_from_slice(&(pair_count as u32).to_be_bytes());
}

/// Decodes a map header, returning `(pair_count, bytes_consumed)`.
pub fn decode_map_header(data: &[u8]) -> Result<(usize, usize), DecodeError> {
    let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
    if tag != MAP_EXT {
        return Err(DecodeError::InvalidFormat(format!("unexpected map tag {tag}")));
    }
    if data.len() < 5 {
        return Err(DecodeError::BufferTooShort);
    }
    let pair_count = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
    Ok((pair_count, 5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_tuple_header_roundtrips() {
        let mut buf = Vec::new();
        encode_tuple_header(&mut buf, 2);
        assert_eq!(buf, vec![SMALL_TUPLE_EXT, 2]);
        assert_eq!(decode_tuple_header(&buf).unwrap(), (2, 2));
    }

    #[test]
    fn large_tuple_header_roundtrips() {
        let mut buf = Vec::new();
        encode_tuple_header(&mut buf, 300);
        assert_eq!(buf[0], LARGE_TUPLE_EXT);
        assert_eq!(decode_tuple_header(&buf).unwrap(), (300, 5));
    }

    #[test]
    fn list_header_roundtrips() {
        let mut buf = Vec::new();
        encode_list_header(&mut buf, 3);
        assert_eq!(decode_list_header(&buf).unwrap(), (3, 5));
    }

    #[test]
    fn map_header_roundtrips() {
        let mut buf = Vec::new();
        encode_map_header(&mut buf, 2);
        assert_eq!(decode_map_header(&buf).unwrap(), (2, 5));
    }

    #[test]
    fn empty_tuple_is_small_tuple_with_zero_arity() {
        let mut buf = Vec::new();
        encode_tuple_header(&mut buf, 0);
        assert_eq!(buf, vec![SMALL_TUPLE_EXT, 0]);
    }
}
