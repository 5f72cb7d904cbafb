use entities_data_handling::Value;
use infrastructure_external_format::{decode, encode, AtomRepr, ByteStringRepr, Options};

#[test]
fn scenario_small_atom_hello() {
    let data = vec![131, 115, 5, 104, 101, 108, 108, 111];
    let (value, tail) = decode(&data, &Options::new()).unwrap();
    assert_eq!(value, Value::atom("hello"));
    assert!(tail.is_empty());
}

#[test]
fn scenario_tuple_one_ok_decodes_and_reencodes() {
    let data = vec![131, 104, 2, 97, 1, 100, 0, 2, 111, 107];
    let (value, tail) = decode(&data, &Options::new()).unwrap();
    assert_eq!(value, Value::Tuple(vec![Value::integer(1), Value::atom("ok")]));
    assert!(tail.is_empty());

    let reencoded = encode(&value, &Options::new()).unwrap();
    assert_eq!(reencoded, vec![131, 104, 2, 97, 1, 119, 2, 111, 107]);
}

#[test]
fn scenario_list_one_ok() {
    let data = vec![131, 108, 0, 0, 0, 2, 97, 1, 100, 0, 2, 111, 107, 106];
    let (value, tail) = decode(&data, &Options::new()).unwrap();
    assert_eq!(value, Value::List(vec![Value::integer(1), Value::atom("ok")]));
    assert!(tail.is_empty());
}

#[test]
fn scenario_map_encode() {
    let value = Value::Map(vec![
        (Value::integer(1), Value::integer(2)),
        (Value::atom("ok"), Value::atom("error")),
    ]);
    let bytes = encode(&value, &Options::new()).unwrap();
    assert_eq!(
        bytes,
        vec![131, 116, 0, 0, 0, 2, 97, 1, 97, 2, 119, 2, 111, 107, 119, 5, 101, 114, 114, 111, 114]
    );
}

#[test]
fn scenario_small_big_two_pow_64() {
    let value = Value::integer(entities_data_handling::Integer::from(2u32).pow(64));
    let bytes = encode(&value, &Options::new()).unwrap();
    assert_eq!(bytes, vec![131, 110, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    let (decoded, tail) = decode(&bytes, &Options::new()).unwrap();
    assert_eq!(decoded, value);
    assert!(tail.is_empty());
}

#[test]
fn atom_option_variants_change_representation() {
    let data = vec![131, 119, 2, b'o', b'k'];

    let (as_str, _) = decode(&data, &Options::new().with_atom(AtomRepr::Str)).unwrap();
    assert_eq!(as_str, Value::str("ok"));

    let (as_bytes, _) = decode(&data, &Options::new().with_atom(AtomRepr::Bytes)).unwrap();
    assert_eq!(as_bytes, Value::byte_string(b"ok".to_vec()));

    let (as_strict, _) = decode(&data, &Options::new().with_atom(AtomRepr::StrictAtom)).unwrap();
    assert!(matches!(as_strict, Value::StrictAtom(_)));
}

#[test]
fn byte_string_option_variants_change_representation() {
    let data = vec![131, 107, 0, 5, b'h', b'e', b'l', b'l', b'o'];

    let (default, _) = decode(&data, &Options::new()).unwrap();
    assert_eq!(default, Value::str("hello"));

    let (as_bytes, _) = decode(&data, &Options::new().with_byte_string(ByteStringRepr::Bytes)).unwrap();
    assert_eq!(as_bytes, Value::byte_string(b"hello".to_vec()));

    let (as_list, _) = decode(&data, &Options::new().with_byte_string(ByteStringRepr::IntList)).unwrap();
    assert_eq!(
        as_list,
        Value::List(vec![104, 101, 108, 108, 111].into_iter().map(Value::integer).collect())
    );
}

#[test]
fn compressed_envelope_decodes_and_preserves_trailing_bytes() {
    let value = Value::str("hello world");
    let plain = encode(&value, &Options::new()).unwrap();
    let term_bytes = &plain[1..]; // drop the version prefix; the envelope carries its own

    let deflated = infrastructure_external_format::compression::deflate(term_bytes);
    let mut envelope = vec![131u8, 80];
    envelope.extend_from_slice(&(term_bytes.len() as u32).to_be_bytes());
    envelope.extend_from_slice(&deflated);
    envelope.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

    let (decoded, tail) = decode(&envelope, &Options::new()).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(tail, &[0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn atom_call_takes_precedence_over_atom_option() {
    let data = vec![131, 119, 2, b'o', b'k'];
    let options = Options::new()
        .with_atom(AtomRepr::Str)
        .with_atom_call(|text| Value::str(format!("called:{text}")));
    let (value, _) = decode(&data, &options).unwrap();
    assert_eq!(value, Value::str("called:ok"));
}
