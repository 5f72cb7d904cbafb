//! `encode`/`decode` and their naming aliases. All behaviorally identical;
//! the aliases exist so callers migrating from another ETF binding can use
//! whichever name they already know.

use entities_data_handling::Value;
use infrastructure_external_format::{CodecError, Options};

/// Decodes a complete ETF buffer, returning the value and the unconsumed
/// tail.
pub fn decode<'a>(data: &'a [u8], options: &Options) -> Result<(Value, &'a [u8]), CodecError> {
    infrastructure_external_format::decode(data, options)
}

/// Encodes `value` into a fresh ETF buffer.
pub fn encode(value: &Value, options: &Options) -> Result<Vec<u8>, CodecError> {
    infrastructure_external_format::encode(value, options)
}

/// Alias for [`encode`].
pub fn pack(value: &Value, options: &Options) -> Result<Vec<u8>, CodecError> {
    encode(value, options)
}

/// Alias for [`decode`].
pub fn unpack<'a>(data: &'a [u8], options: &Options) -> Result<(Value, &'a [u8]), CodecError> {
    decode(data, options)
}

/// Alias for [`encode`].
pub fn dumps(value: &Value, options: &Options) -> Result<Vec<u8>, CodecError> {
    encode(value, options)
}

/// Alias for [`decode`].
pub fn loads<'a>(data: &'a [u8], options: &Options) -> Result<(Value, &'a [u8]), CodecError> {
    decode(data, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_match_primary_names() {
        let value = Value::atom("hello");
        let options = Options::new();
        assert_eq!(encode(&value, &options), pack(&value, &options));
        assert_eq!(encode(&value, &options), dumps(&value, &options));

        let bytes = encode(&value, &options).unwrap();
        assert_eq!(decode(&bytes, &options), unpack(&bytes, &options));
        assert_eq!(decode(&bytes, &options), loads(&bytes, &options));
    }

    #[test]
    fn round_trips_through_the_public_surface() {
        let value = Value::Tuple(vec![Value::integer(1), Value::atom("ok")]);
        let options = Options::new();
        let bytes = encode(&value, &options).unwrap();
        let (decoded, tail) = decode(&bytes, &options).unwrap();
        assert_eq!(decoded, value);
        assert!(tail.is_empty());
    }
}
