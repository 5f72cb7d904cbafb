//! Reference leaf type.
//!
//! Wire forms: `NEW_REF_EXT` (tag 114, 1-byte creation) and `NEWER_REF_EXT`
//! (tag 90, 4-byte creation). Like [`super::Pid`], creation is narrowed to
//! `u8` in the value model regardless of which wire tag produced it.
//! `id` holds the big-endian 4-byte words from the wire back to back, so its
//! length is always a multiple of 4.

use super::Atom;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub node: Atom,
    pub creation: u8,
    pub id: Vec<u8>,
}

impl Reference {
    pub fn new(node: Atom, creation: u8, id: Vec<u8>) -> Self {
        debug_assert_eq!(id.len() % 4, 0, "reference id bytes must be a multiple of 4");
        Self { node, creation, id }
    }
}
