//! PID encode/decode primitives: `PID_EXT` (tag 103, 1-byte creation) and
//! `NEW_PID_EXT` (tag 88, 4-byte creation).
//!
//! The value model keeps `creation` as a single byte (see
//! `entities_data_handling::Pid`), so `NEW_PID_EXT`'s wider field is
//! narrowed on decode (low byte kept) and always zero-extended back out to
//! 4 bytes on encode — the encoder only ever emits `NEW_PID_EXT`.

use entities_data_handling::{Atom, Pid};
use infrastructure_data_handling::{decode_atom, encode_atom, DecodeAtomError};

use crate::constants::{NEW_PID_EXT, PID_EXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    BufferTooShort,
    InvalidFormat(String),
    AtomError(DecodeAtomError),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::BufferTooShort => write!(f, "buffer too short decoding pid"),
            DecodeError::InvalidFormat(msg) => write!(f, "invalid pid encoding: {msg}"),
            DecodeError::AtomError(e) => write!(f, "invalid pid node atom: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<DecodeAtomError> for DecodeError {
    fn from(e: DecodeAtomError) -> Self {
        DecodeError::AtomError(e)
    }
}

/// Always emits `NEW_PID_EXT`, zero-extending `creation` from `u8` to the
/// wire's 4-byte field.
pub fn encode_pid(buf: &mut Vec<u8>, pid: &Pid) {
    buf.push(NEW_PID_EXT);
    let _ = encode_atom(buf, pid.node.as_str());
    buf.extend_from_slice(&pid.id.to_be_bytes());
    buf.extend_from_slice(&pid.serial.to_be_bytes());
    buf.extend_from_slice(&(pid.creation as u32).to_be_bytes());
}

/// Decodes `PID_EXT` or `NEW_PID_EXT`, returning the pid and bytes consumed.
pub fn decode_pid(data: &[u8]) -> Result<(Pid, usize), DecodeError> {
    let tag = *data.first().ok_or(DecodeError::BufferTooShort)?;
    if tag != PID_EXT && tag != NEW_PID_EXT {
        return Err(DecodeError::InvalidFormat(format!("unexpected pid tag {tag}")));
    }
    let (node_text, mut pos) = decode_atom(&data[1..])?;
    pos += 1;

    let id = read_u32(data, pos)?;
    pos += 4;
    let serial = read_u32(data, pos)?;
    pos += 4;

    let creation = if tag == NEW_PID_EXT {
        let creation_word = read_u32(data, pos)?;
        pos += 4;
        creation_word as u8
    } else {
        let byte = *data.get(pos).ok_or(DecodeError::BufferTooShort)?;
        pos += 1;
        byte
    };

    Ok((Pid::new(Atom::new(node_text), id, serial, creation), pos))
}

fn read_u32(data: &[u8], pos: usize) -> Result<u32, DecodeError> {
    let slice = data.get(pos..pos + 4).ok_or(DecodeError::BufferTooShort)?;
    Ok(u32::from_be_bytes([slice[0], slice[1], slice[2], slice[3]]))
}
