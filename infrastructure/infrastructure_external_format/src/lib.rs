//! Infrastructure Layer: External Term Format
//!
//! The recursive term decoder and encoder: the tag-dispatched parser that
//! consumes an ETF byte stream and emits a `Value` plus an unconsumed-tail
//! slice, and the symmetric walker that serializes `Value`s back to ETF.
//! This is where the wire-level primitives in `infrastructure_code_loading`
//! and `infrastructure_data_handling` get assembled into whole terms, where
//! per-call `Options` are threaded through and consulted, and where the
//! `80`-tagged compressed envelope is inflated/deflated.
//!
//! ## Modules
//!
//! - [`decoding`]: `decode`/`decode_term` — bytes to `Value`.
//! - [`encoding`]: `encode`/`enc_term` — `Value` to bytes.
//! - [`encode_fallback`]: the member-hook mechanism for host values with no
//!   built-in `Value` shape.
//! - [`options`]: `Options`, atom/byte-string representation, hook tables.
//! - [`compression`]: the zlib envelope.
//! - [`error`]: the single `CodecError` kind.

pub mod compression;
pub mod decoding;
pub mod encode_fallback;
pub mod encoding;
pub mod error;
pub mod options;

pub use decoding::{decode, decode_term};
pub use encode_fallback::{encode_member, EncodeFallback};
pub use encoding::{enc_term, encode};
pub use error::CodecError;
pub use options::{AtomCall, AtomRepr, ByteStringRepr, DecodeHook, EncodeHook, LogicalType, Options};
