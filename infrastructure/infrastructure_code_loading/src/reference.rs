//! Reference encode/decode primitives: `NEW_REFERENCE_EXT` (tag 114,
//! 1-byte creation) and `NEWER_REFERENCE_EXT` (tag 90, 4-byte creation).
//!
//! Both tags carry a 2-byte word count followed by that many big-endian
//! 4-byte words; `Reference::id` stores those words back to back. Unlike
//! [`crate::pid`], the encoder's canonical choice is the narrower
//! `NEW_REFERENCE_EXT` — `Reference::creation` is already a bare `u8`, so no
//! zero-extension is needed.

use entities_data_handling::{Atom, Reference};
use infrastructure_data_handling::{decode_atom, encode_atom, DecodeAtomError};

use crate::constants::{NEWER_REFERENCE_EXT, NEW_REFERENCE_EXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    BufferTooShort,
    InvalidFormat(String),
    AtomError(DecodeAtomError),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::BufferTooShort => write!(f, "buffer too short decoding reference"),
            DecodeError::InvalidFormat(msg) => write!(f, "invalid reference encoding: {msg}"),
            DecodeError::AtomError(e) => write!(f, "invalid reference node atom: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeAtomError> for DecodeError {
    fn from(e: DecodeAtomError) -> Self {
        DecodeError::AtomError(e)
    }
}

/// Always emits `NEW_REFERENCE_EXT` (1-byte creation).
pub fn encode_reference(buf: &mut Vec<u8>, reference: &Reference) {
    let word_count = (reference.id.len() / 4) as u16;
    buf.push(NEW_REFERENCE_EXT);
    buf.extend_from_slice(&word_count.to_be_bytes());
    let _ = encode_atom(buf, reference.node.as_str());
    buf.push(reference.creation);
    buf.extend_from_slice(&reference.id);
}

/// Decodes `NEW_REFERENCE_EXT` or `NEWER_REFERENCE_EXT`, returning the
/// reference and bytes consumed.
pub fn decode_reference(data: &[u8]) -> Result<(Reference, usize), DecodeError> {
    let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
    if tag != NEW_REFERENCE_EXT && tag != NEWER_REFERENCE_EXT {
        return Err(DecodeError::InvalidFormat(format!("unexpected reference tag {tag}")));
    }
    let hi = *data.get(1).ok_or(DecodeError::BufferTooShort)?;
    let lo = *data.get(2).ok_or(DecodeError::BufferTooShort)?;
    let word_count = u16::from_be_bytes([hi, lo]) as usize;

    let (node_text, mut pos) = decode_atom(&data[3..])?;
    pos += 3;

    let creation = if tag == NEWER_REFERENCE_EXT {
        let slice = data.get(pos..pos + 4).ok_or(DecodeError::BufferTooShort)?;
        pos += 4;
        u32::from_be_bytes([slice[0], slice[1], slice[2], slice[3]]) as u8
    } else {
        let byte = *data.get(pos).ok_or(DecodeError::BufferTooShort)?;
        pos += 1;
        byte
    };

    let id_len = word_count * 4;
    let id = data.get(pos..pos + id_len).ok_or(DecodeError::BufferTooShort)?.to_vec();
    pos += id_len;

    Ok((Reference::new(Atom::new(node_text), creation, id), pos))
}
