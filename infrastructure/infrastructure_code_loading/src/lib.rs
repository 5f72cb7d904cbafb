//! Infrastructure Layer: Code Loading
//!
//! Per-wire-shape encode/decode primitives for every ETF tag except the
//! fun tags (`NEW_FUN_EXT`/`EXPORT_EXT`/legacy `FUN_EXT`), which need to
//! recurse into arbitrary nested terms and so live in
//! `infrastructure_external_format` alongside the general term dispatcher.
//!
//! Each module here is self-contained: it knows its own tag byte(s) and
//! wire layout, but nothing about how it's reached from a top-level decode.
//! `infrastructure_external_format` owns that recursive dispatch.

pub mod constants;
pub mod floats;
pub mod headers;
pub mod integers;
pub mod pid;
pub mod reference;

pub use floats::{decode_float, encode_float};
pub use headers::{
    decode_list_header, decode_map_header, decode_tuple_header, encode_list_header,
    encode_map_header, encode_nil, encode_tuple_header,
};
pub use integers::{decode_integer, encode_integer};
pub use pid::{decode_pid, encode_pid};
pub use reference::{decode_reference, encode_reference};
