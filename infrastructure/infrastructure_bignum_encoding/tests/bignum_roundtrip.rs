use entities_data_handling::Integer;
use infrastructure_bignum_encoding::{bytes_to_integer, integer_to_bytes};

#[test]
fn arbitrary_values_roundtrip_through_byte_decomposition() {
    for value in [0i64, 1, -1, 255, 256, i32::MAX as i64, i32::MIN as i64] {
        let integer = Integer::from(value);
        let (bytes, is_negative) = integer_to_bytes(&integer);
        assert_eq!(bytes_to_integer(&bytes, is_negative), integer);
    }
}

#[test]
fn magnitudes_beyond_u64_roundtrip() {
    let value: Integer = Integer::from(3u32).pow(150);
    let (bytes, is_negative) = integer_to_bytes(&value);
    assert!(!is_negative);
    assert_eq!(bytes_to_integer(&bytes, is_negative), value);
}
