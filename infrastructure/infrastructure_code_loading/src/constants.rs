//! ETF Tag Constants
//!
//! The fixed mapping from one-byte tags to wire shapes. Each term type has a
//! unique tag byte that identifies its type and framing; these constants are
//! the single source of truth the rest of the workspace dispatches on.

/// The version magic byte every top-level ETF buffer starts with.
pub const VERSION_MAGIC: u8 = 131;

/// Introduces a zlib-compressed envelope immediately after `VERSION_MAGIC`.
pub const COMPRESSED_EXT: u8 = 80;

/// Small integer (0-255).
pub const SMALL_INTEGER_EXT: u8 = 97;
/// 32-bit signed integer.
pub const INTEGER_EXT: u8 = 98;
/// Old-format float (31-byte ASCII representation). Decode-only; the
/// encoder never emits this tag.
pub const FLOAT_EXT: u8 = 99;
/// Atom, old format, 2-byte length.
pub const ATOM_EXT: u8 = 100;
/// Reference, old format.
pub const REFERENCE_EXT: u8 = 101;
/// Port.
pub const PORT_EXT: u8 = 102;
/// PID, 1-byte creation.
pub const PID_EXT: u8 = 103;
/// Small tuple (arity <= 255).
pub const SMALL_TUPLE_EXT: u8 = 104;
/// Large tuple (arity > 255).
pub const LARGE_TUPLE_EXT: u8 = 105;
/// Nil — the empty list.
pub const NIL_EXT: u8 = 106;
/// A proper- or improper-list-producing string of bytes, decoded as text by
/// default.
pub const STRING_EXT: u8 = 107;
/// List, with an explicit tail term following the elements.
pub const LIST_EXT: u8 = 108;
/// Binary.
pub const BINARY_EXT: u8 = 109;
/// Big integer, 1-byte arity.
pub const SMALL_BIG_EXT: u8 = 110;
/// Big integer, 4-byte arity.
pub const LARGE_BIG_EXT: u8 = 111;
/// New-format fun (closure) with MD5 uniq.
pub const NEW_FUN_EXT: u8 = 112;
/// Export: `module:function/arity`.
pub const EXPORT_EXT: u8 = 113;
/// New-format reference, 1-byte creation.
pub const NEW_REFERENCE_EXT: u8 = 114;
/// Atom, old format, 1-byte length.
pub const SMALL_ATOM_EXT: u8 = 115;
/// Map.
pub const MAP_EXT: u8 = 116;
/// Old-format fun. Decode-only.
pub const FUN_EXT: u8 = 117;
/// Atom, UTF-8, 2-byte length.
pub const ATOM_UTF8_EXT: u8 = 118;
/// Atom, UTF-8, 1-byte length.
pub const SMALL_ATOM_UTF8_EXT: u8 = 119;
/// New-format PID, 4-byte creation.
pub const NEW_PID_EXT: u8 = 88;
/// New-format port, 4-byte id and creation.
pub const NEW_PORT_EXT: u8 = 89;
/// Newer-format reference, 4-byte creation.
pub const NEWER_REFERENCE_EXT: u8 = 90;
/// A binary tag wrapping a partially-used final byte.
pub const BIT_BINARY_EXT: u8 = 77;
/// 64-bit IEEE-754 double, big-endian.
pub const NEW_FLOAT_EXT: u8 = 70;

/// Largest value that fits in `INTEGER_EXT`'s signed 32-bit field.
pub const INTEGER_EXT_MAX: i64 = i32::MAX as i64;
/// Smallest value that fits in `INTEGER_EXT`'s signed 32-bit field.
pub const INTEGER_EXT_MIN: i64 = i32::MIN as i64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_magic_is_131() {
        assert_eq!(VERSION_MAGIC, 131);
    }

    #[test]
    fn tags_do_not_collide_in_the_ranges_this_codec_uses() {
        let tags = [
            SMALL_INTEGER_EXT, INTEGER_EXT, FLOAT_EXT, ATOM_EXT, REFERENCE_EXT, PORT_EXT,
            PID_EXT, SMALL_TUPLE_EXT, LARGE_TUPLE_EXT, NIL_EXT, STRING_EXT, LIST_EXT,
            BINARY_EXT, SMALL_BIG_EXT, LARGE_BIG_EXT, NEW_FUN_EXT, EXPORT_EXT,
            NEW_REFERENCE_EXT, SMALL_ATOM_EXT, MAP_EXT, FUN_EXT, ATOM_UTF8_EXT,
            SMALL_ATOM_UTF8_EXT, NEW_PID_EXT, NEW_PORT_EXT, NEWER_REFERENCE_EXT,
            BIT_BINARY_EXT, NEW_FLOAT_EXT,
        ];
        let mut sorted = tags.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), tags.len());
    }
}
