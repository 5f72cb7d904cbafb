//! Integer ⇄ byte-decomposition helpers.
//!
//! `integer_to_bytes` splits a `malachite::Integer` into its little-endian
//! magnitude bytes and a sign flag; `bytes_to_integer` is the inverse. Both
//! operate purely on the in-memory value, with no framing (arity byte, sign
//! byte, tag byte) attached — that belongs to the caller, which knows
//! whether it's writing `SMALL_BIG_EXT` or `LARGE_BIG_EXT`.

use entities_data_handling::Integer;

/// Splits `value` into little-endian magnitude bytes and a sign flag.
///
/// Zero encodes as a single `0x00` byte, matching the wire format's
/// requirement that even a zero-valued bignum carry at least one magnitude
/// byte.
pub fn integer_to_bytes(value: &Integer) -> (Vec<u8>, bool) {
    let is_negative = *value < Integer::from(0);
    let mut magnitude = if is_negative { -value.clone() } else { value.clone() };

    let base = Integer::from(256u32);
    let mut bytes = Vec::new();
    if magnitude == Integer::from(0) {
        bytes.push(0);
    } else {
        while magnitude > Integer::from(0) {
            let remainder = &magnitude % &base;
            let byte = u64::try_from(&remainder).unwrap_or(0) as u8;
            bytes.push(byte);
            magnitude /= &base;
        }
    }

    (bytes, is_negative)
}

/// Reconstructs an `Integer` from little-endian magnitude bytes and a sign
/// flag, the inverse of [`integer_to_bytes`].
pub fn bytes_to_integer(bytes: &[u8], is_negative: bool) -> Integer {
    let mut value = Integer::from(0);
    let mut place = Integer::from(1u32);
    for &byte in bytes {
        value += Integer::from(byte) * &place;
        place *= Integer::from(256u32);
    }
    if is_negative {
        -value
    } else {
        value
    }
}
