use api_facades::{decode, encode, loads, pack, unpack, DecodeHook, LogicalType, Options, Value};

/// `\x83P\x00\x00\x01\xc4x\x9c5...` from Pyrlang/Term's
/// `etf_decode_test.py` (`_decode_compressed`/`_decode_hook_compressed`):
/// a `COMPRESSED_EXT` envelope inflating to a "Lorem ipsum..." binary.
const COMPRESSED_LOREM_IPSUM: &[u8] = &[
    131, 80, 0, 0, 1, 196, 120, 156, 53, 144, 81, 82, 131, 49, 8, 132, 235, 77, 246, 0, 157, 158,
    66, 223, 124, 245, 0, 152, 208, 202, 76, 8, 105, 2, 157, 222, 206, 171, 73, 252, 245, 45, 4,
    88, 118, 63, 61, 157, 94, 190, 223, 109, 178, 66, 198, 10, 69, 181, 102, 19, 75, 28, 164, 236,
    103, 20, 235, 139, 139, 179, 199, 4, 85, 25, 178, 164, 72, 191, 129, 155, 100, 119, 113, 205,
    13, 176, 196, 82, 171, 112, 214, 145, 219, 210, 139, 84, 169, 209, 29, 225, 104, 244, 153,
    250, 96, 63, 180, 25, 74, 183, 78, 160, 38, 247, 160, 11, 62, 28, 220, 69, 83, 28, 42, 251,
    241, 200, 146, 244, 140, 123, 200, 66, 183, 229, 51, 42, 248, 201, 179, 136, 147, 139, 117,
    68, 107, 164, 197, 14, 229, 61, 148, 166, 246, 165, 95, 73, 25, 57, 12, 166, 116, 174, 233,
    201, 142, 4, 121, 202, 47, 120, 221, 146, 20, 206, 144, 25, 233, 228, 8, 43, 29, 147, 199,
    228, 47, 238, 149, 103, 38, 207, 143, 135, 181, 24, 121, 142, 211, 78, 38, 5, 175, 197, 40,
    210, 218, 63, 162, 12, 20, 184, 198, 77, 200, 209, 183, 33, 12, 154, 89, 196, 188, 224, 237,
    89, 120, 56, 199, 230, 152, 12, 172, 20, 226, 146, 115, 37, 134, 84, 242, 189, 145, 41, 198,
    52, 169, 220, 55, 197, 77, 42, 143, 150, 104, 131, 118, 110, 216, 245, 154, 152, 9, 149, 23,
    207, 221, 85, 107, 219, 6, 109, 64, 146, 56, 214, 31, 215, 208, 11, 126, 0,
];

const LOREM_IPSUM_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. ";

#[test]
fn compressed_lorem_ipsum_blob_decodes_via_aliases() {
    let options = Options::new();
    let expected = Value::byte_string(LOREM_IPSUM_TEXT.as_bytes().to_vec());

    let (unpacked, tail) = unpack(COMPRESSED_LOREM_IPSUM, &options).unwrap();
    assert_eq!(unpacked, expected);
    assert!(tail.is_empty());

    let (loaded, tail) = loads(COMPRESSED_LOREM_IPSUM, &options).unwrap();
    assert_eq!(loaded, expected);
    assert!(tail.is_empty());
}

#[test]
fn compressed_lorem_ipsum_blob_with_decode_hook_yields_str() {
    let hook = DecodeHook::new().bind(LogicalType::Bytes, |value| match value {
        Value::ByteString(bytes) => {
            Value::Str(String::from_utf8(bytes.into_bytes()).expect("fixture is valid UTF-8"))
        }
        other => other,
    });
    let options = Options::new().with_decode_hook(hook);

    let (decoded, tail) = decode(COMPRESSED_LOREM_IPSUM, &options).unwrap();
    assert_eq!(decoded, Value::str(LOREM_IPSUM_TEXT));
    assert!(tail.is_empty());
}

#[test]
fn encode_decode_round_trip_for_nested_structures() {
    let value = Value::Tuple(vec![
        Value::integer(1),
        Value::List(vec![Value::atom("a"), Value::atom("b")]),
        Value::Map(vec![(Value::atom("k"), Value::integer(42))]),
    ]);
    let options = Options::new();
    let bytes = encode(&value, &options).unwrap();
    let (decoded, tail) = decode(&bytes, &options).unwrap();
    assert_eq!(decoded, value);
    assert!(tail.is_empty());
}
