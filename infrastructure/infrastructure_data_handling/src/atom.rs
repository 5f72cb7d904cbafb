//! Atom wire framing.
//!
//! Four tags carry atom text: two legacy, Latin-1 tags
//! (`ATOM_EXT`/`SMALL_ATOM_EXT`) and two modern, UTF-8 tags
//! (`ATOM_UTF8_EXT`/`SMALL_ATOM_UTF8_EXT`). The encoder always chooses the
//! UTF-8 tags — `SMALL_ATOM_UTF8_EXT` under 256 bytes, `ATOM_UTF8_EXT`
//! otherwise — but the decoder accepts all four, since legally-encoded
//! input may have come from a node that only ever emits the legacy tags.

const ATOM_EXT: u8 = 100;
const SMALL_ATOM_EXT: u8 = 115;
const ATOM_UTF8_EXT: u8 = 118;
const SMALL_ATOM_UTF8_EXT: u8 = 119;

const MAX_ATOM_BYTES: usize = 65535;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeAtomError {
    /// UTF-8 byte length exceeds the 65535-byte wire limit.
    TooLong,
}

impl std::fmt::Display for EncodeAtomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeAtomError::TooLong => write!(f, "atom text exceeds 65535 UTF-8 bytes"),
        }
    }
}

impl std::error::Error for EncodeAtomError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeAtomError {
    BufferTooShort,
    InvalidUtf8,
    InvalidTag(u8),
}

impl std::fmt::Display for DecodeAtomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeAtomError::BufferTooShort => write!(f, "buffer too short decoding atom"),
            DecodeAtomError::InvalidUtf8 => write!(f, "invalid UTF-8 in atom text"),
            DecodeAtomError::InvalidTag(tag) => write!(f, "unexpected atom tag {tag}"),
        }
    }
}

impl std::error::Error for DecodeAtomError {}

/// Writes `text` as `SMALL_ATOM_UTF8_EXT` (length `<= 255` bytes) or
/// `ATOM_UTF8_EXT` (length `<= 65535` bytes).
pub fn encode_atom(buf: &mut Vec<u8>, text: &str) -> Result<(), EncodeAtomError> {
    let bytes = text.as_bytes();
    if bytes.len() > MAX_ATOM_BYTES {
        return Err(EncodeAtomError::TooLong);
    }
    if bytes.len() <= 255 {
        buf.push(SMALL_ATOM_UTF8_EXT);
        buf.push(bytes.len() as u8);
    } else {
        buf.push(ATOM_UTF8_EXT);
        buf.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
    }
    buf.extend_from_slice(bytes);
    Ok(())
}

/// Decodes any of the four atom tags starting at `data[0]`, returning the
/// text and the number of bytes consumed. Legacy tags decode as Latin-1
/// (every byte maps 1:1 to the codepoint of the same value); modern tags
/// are validated as UTF-8.
pub fn decode_atom(data: &[u8]) -> Result<(String, usize), DecodeAtomError> {
    let tag = *data.first().ok_or(DecodeAtomError::BufferTooShort)?;
    match tag {
        SMALL_ATOM_EXT => decode_fixed(data, 1, 1, false),
        ATOM_EXT => decode_fixed(data, 1, 2, false),
        SMALL_ATOM_UTF8_EXT => decode_fixed(data, 1, 1, true),
        ATOM_UTF8_EXT => decode_fixed(data, 1, 2, true),
        other => Err(DecodeAtomError::InvalidTag(other)),
    }
}

fn decode_fixed(
    data: &[u8],
    len_pos: usize,
    len_width: usize,
    utf8: bool,
) -> Result<(String, usize), DecodeAtomError> {
    let len = match len_width {
        1 => *data.get(len_pos).ok_or(DecodeAtomError::BufferTooShort)? as usize,
        2 => {
            let hi = *data.get(len_pos).ok_or(DecodeAtomError::BufferTooShort)?;
            let lo = *data.get(len_pos + 1).ok_or(DecodeAtomError::BufferTooShort)?;
            u16::from_be_bytes([hi, lo]) as usize
        }
        _ => unreachable!(),
    };
    let data_start = len_pos + len_width;
    let data_end = data_start + len;
    let text_bytes = data.get(data_start..data_end).ok_or(DecodeAtomError::BufferTooShort)?;

    let text = if utf8 {
        std::str::from_utf8(text_bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeAtomError::InvalidUtf8)?
    } else {
        text_bytes.iter().map(|&b| b as char).collect()
    };

    Ok((text, data_end))
}
