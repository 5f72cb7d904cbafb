//! Infrastructure Layer: Data Handling
//!
//! Atom and binary wire framing: the length-prefixed tags
//! (`ATOM_EXT`/`SMALL_ATOM_EXT`/`ATOM_UTF8_EXT`/`SMALL_ATOM_UTF8_EXT`,
//! `BINARY_EXT`/`BIT_BINARY_EXT`) that carry text and byte data on the wire.
//!
//! Depends only on the entities layer; `infrastructure_code_loading` and
//! `infrastructure_external_format` build on top of this for atoms
//! (node names, module/function names) embedded inside pids, references,
//! funs, and top-level terms.

pub mod atom;
pub mod binary;

pub use atom::{decode_atom, encode_atom, DecodeAtomError, EncodeAtomError};
pub use binary::{decode_binary, encode_binary, DecodeBinaryError};
