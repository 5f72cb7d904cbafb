//! Binary wire framing: `BINARY_EXT` and `BIT_BINARY_EXT`.

const BIT_BINARY_EXT: u8 = 77;
const BINARY_EXT: u8 = 109;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeBinaryError {
    BufferTooShort,
    InvalidTag(u8),
}

impl std::fmt::Display for DecodeBinaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeBinaryError::BufferTooShort => write!(f, "buffer too short decoding binary"),
            DecodeBinaryError::InvalidTag(tag) => write!(f, "unexpected binary tag {tag}"),
        }
    }
}

impl std::error::Error for DecodeBinaryError {}

/// Writes a `BINARY_EXT`: 4-byte length followed by the raw bytes.
pub fn encode_binary(buf: &mut Vec<u8>, data: &[u8]) {
    buf.push(BINARY_EXT);
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    buf.extend_from_slice(data);
}

/// Writes a `BIT_BINARY_EXT`: 4-byte length, 1-byte tail-bit count, then the
/// raw bytes (the final byte's unused low bits are whatever the caller put
/// there).
pub fn encode_bit_binary(buf: &mut Vec<u8>, data: &[u8], tail_bits: u8) {
    buf.push(BIT_BINARY_EXT);
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    buf.push(tail_bits);
    buf.extend_from_slice(data);
}

/// Decoded binary shape: a plain binary, or a bit-binary with its tail-bit
/// count.
pub enum DecodedBinary {
    Binary(Vec<u8>),
    BitBinary(Vec<u8>, u8),
}

/// Decodes `BINARY_EXT` or `BIT_BINARY_EXT` starting at `data[0]`, returning
/// the decoded shape and the number of bytes consumed.
pub fn decode_binary(data: &[u8]) -> Result<(DecodedBinary, usize), DecodeBinaryError> {
    let tag = *data.first().ok_or(DecodeBinaryError::BufferTooShort)?;
    match tag {
        BINARY_EXT => {
            if data.len() < 5 {
                return Err(DecodeBinaryError::BufferTooShort);
            }
            let len = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
            let start = 5;
            let end = start + len;
            let bytes = data.get(start..end).ok_or(DecodeBinaryError::BufferTooShort)?;
            Ok((DecodedBinary::Binary(bytes.to_vec()), end))
        }
        BIT_BINARY_EXT => {
            if data.len() < 6 {
                return Err(DecodeBinaryError::BufferTooShort);
            }
            let len = u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
            let tail_bits = data[5];
            let start = 6;
            let end = start + len;
            let bytes = data.get(start..end).ok_or(DecodeBinaryError::BufferTooShort)?;
            Ok((DecodedBinary::BitBinary(bytes.to_vec(), tail_bits), end))
        }
        other => Err(DecodeBinaryError::InvalidTag(other)),
    }
}
