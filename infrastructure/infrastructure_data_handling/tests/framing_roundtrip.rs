use infrastructure_data_handling::{decode_atom, decode_binary, encode_atom, encode_binary, DecodedBinary};

#[test]
fn atom_text_survives_a_roundtrip_regardless_of_length() {
    for text in ["ok", &"a".repeat(400)] {
        let mut buf = Vec::new();
        encode_atom(&mut buf, text).unwrap();
        let (decoded, consumed) = decode_atom(&buf).unwrap();
        assert_eq!(decoded, text);
        assert_eq!(consumed, buf.len());
    }
}

#[test]
fn binary_survives_a_roundtrip() {
    let mut buf = Vec::new();
    encode_binary(&mut buf, &[9, 8, 7, 6]);
    let (decoded, consumed) = decode_binary(&buf).unwrap();
    assert_eq!(consumed, buf.len());
    match decoded {
        DecodedBinary::Binary(bytes) => assert_eq!(bytes, vec![9, 8, 7, 6]),
        DecodedBinary::BitBinary(..) => panic!("expected plain binary"),
    }
}
