//! Infrastructure Layer: Bignum Encoding
//!
//! Converts between `malachite::Integer` and the little-endian
//! magnitude-plus-sign byte decomposition that `SMALL_BIG_EXT`/
//! `LARGE_BIG_EXT` wrap in framing. This crate has no notion of the tag
//! bytes themselves — that framing lives in
//! `infrastructure_code_loading::decode_integers`/`encode_integers`, which
//! call through to [`integer_to_bytes`]/[`bytes_to_integer`] here.

mod codec;

pub use codec::{bytes_to_integer, integer_to_bytes};

pub use entities_data_handling::Integer;
