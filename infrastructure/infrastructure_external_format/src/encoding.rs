//! Recursive walker: `Value -> bytes`, choosing the most compact legal tag
//! per value.
//!
//! `encode` is the public entry point (writes the version prefix, then
//! delegates to `enc_term`); `enc_term` is the recursive step, reused for
//! tuple/list/map elements, fun free variables, and list tails.

use entities_data_handling::{Fun, Value};
use infrastructure_code_loading::constants::{STRING_EXT, VERSION_MAGIC};
use infrastructure_code_loading::{
    encode_list_header, encode_map_header, encode_nil, encode_pid, encode_reference,
    encode_tuple_header,
};
use infrastructure_data_handling::{encode_atom, encode_binary, encode_bit_binary};

use crate::error::CodecError;
use crate::options::Options;

/// Encodes `value` as a complete ETF buffer: the `131` version prefix
/// followed by `value`'s canonical encoding. Never compresses; compression
/// is opt-in via [`crate::compression::deflate`] wrapping this output.
pub fn encode(value: &Value, options: &Options) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![VERSION_MAGIC];
    enc_term(&mut buf, value, options)?;
    Ok(buf)
}

pub fn enc_term(buf: &mut Vec<u8>, value: &Value, options: &Options) -> Result<(), CodecError> {
    if let Some(hook) = options.encode_hook.as_ref().and_then(|h| h.for_value(value)) {
        if let Some(replacement) = hook(value) {
            return enc_term(buf, &replacement, options);
        }
    }

    match value {
        Value::Integer(i) => infrastructure_code_loading::encode_integer(buf, i)
            .map_err(|_| CodecError::Unencodable("integer magnitude too large".into())),
        Value::Float(f) => {
            infrastructure_code_loading::encode_float(buf, *f);
            Ok(())
        }
        Value::Boolean(true) => encode_atom(buf, "true").map_err(atom_too_long),
        Value::Boolean(false) => encode_atom(buf, "false").map_err(atom_too_long),
        Value::Null => encode_atom(buf, "undefined").map_err(atom_too_long),
        Value::Atom(a) => encode_atom(buf, a.as_str()).map_err(atom_too_long),
        Value::StrictAtom(a) => encode_atom(buf, a.as_str()).map_err(atom_too_long),
        Value::Str(s) => {
            encode_text(buf, s);
            Ok(())
        }
        Value::ByteString(bs) => {
            encode_binary(buf, bs.as_bytes());
            Ok(())
        }
        Value::BitString(bits) => {
            if bits.tail_bits() < 8 {
                encode_bit_binary(buf, bits.data(), bits.tail_bits());
            } else {
                encode_binary(buf, bits.data());
            }
            Ok(())
        }
        Value::Tuple(elements) => {
            encode_tuple_header(buf, elements.len());
            for element in elements {
                enc_term(buf, element, options)?;
            }
            Ok(())
        }
        Value::List(elements) => encode_list(buf, elements, options),
        Value::ImproperList(improper) => {
            encode_list_header(buf, improper.elements.len());
            for element in &improper.elements {
                enc_term(buf, element, options)?;
            }
            enc_term(buf, &improper.tail, options)
        }
        Value::Map(pairs) => {
            encode_map_header(buf, pairs.len());
            for (key, val) in pairs {
                enc_term(buf, key, options)?;
                enc_term(buf, val, options)?;
            }
            Ok(())
        }
        Value::Pid(pid) => {
            encode_pid(buf, pid);
            Ok(())
        }
        Value::Reference(reference) => {
            encode_reference(buf, reference);
            Ok(())
        }
        Value::Fun(fun) => encode_fun(buf, fun, options),
    }
}

fn atom_too_long<E>(_: E) -> CodecError {
    CodecError::Unencodable("atom text exceeds 65535 UTF-8 bytes".into())
}

/// Empty proper list is `NIL_EXT`; an all-`0..=255` proper list up to 65535
/// elements is `STRING_EXT`; everything else is `LIST_EXT` with a `NIL_EXT`
/// tail.
fn encode_list(buf: &mut Vec<u8>, elements: &[Value], options: &Options) -> Result<(), CodecError> {
    if elements.is_empty() {
        encode_nil(buf);
        return Ok(());
    }
    if elements.len() <= 65535 {
        if let Some(bytes) = as_small_integer_bytes(elements) {
            buf.push(STRING_EXT);
            buf.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
            buf.extend_from_slice(&bytes);
            return Ok(());
        }
    }
    encode_list_header(buf, elements.len());
    for element in elements {
        enc_term(buf, element, options)?;
    }
    encode_nil(buf);
    Ok(())
}

fn as_small_integer_bytes(elements: &[Value]) -> Option<Vec<u8>> {
    let mut bytes = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            Value::Integer(i) => {
                let small = i64::try_from(i).ok()?;
                if !(0..=255).contains(&small) {
                    return None;
                }
                bytes.push(small as u8);
            }
            _ => return None,
        }
    }
    Some(bytes)
}

/// A text string encodes as `STRING_EXT` (one byte per codepoint, matching
/// the decoder's latin-1 reading of `STRING_EXT`) when every codepoint fits
/// in a byte and the codepoint count fits the 2-byte length field;
/// otherwise as a `LIST_EXT` of `INT`-tagged codepoints.
fn encode_text(buf: &mut Vec<u8>, text: &str) {
    let codepoints: Vec<u32> = text.chars().map(|c| c as u32).collect();
    if codepoints.len() <= 65535 && codepoints.iter().all(|&c| c <= 255) {
        buf.push(STRING_EXT);
        buf.extend_from_slice(&(codepoints.len() as u16).to_be_bytes());
        buf.extend(codepoints.iter().map(|&c| c as u8));
        return;
    }
    encode_list_header(buf, codepoints.len());
    for cp in codepoints {
        infrastructure_code_loading::encode_integer(
            buf,
            &entities_data_handling::Integer::from(cp),
        )
        .expect("codepoint always fits a small integer encoding");
    }
    encode_nil(buf);
}

fn encode_fun(buf: &mut Vec<u8>, fun: &Fun, options: &Options) -> Result<(), CodecError> {
    match fun {
        Fun::Closure(closure) => {
            let mut body = Vec::new();
            body.push(closure.arity);
            body.extend_from_slice(&closure.uniq);
            body.extend_from_slice(&closure.index.to_be_bytes());
            body.extend_from_slice(&(closure.free_vars.len() as u32).to_be_bytes());
            encode_atom(&mut body, closure.module.as_str()).map_err(atom_too_long)?;
            enc_term(&mut body, &Value::integer(closure.old_index), options)?;
            enc_term(&mut body, &Value::integer(closure.old_uniq), options)?;
            encode_pid(&mut body, &closure.pid);
            for free_var in &closure.free_vars {
                enc_term(&mut body, free_var, options)?;
            }

            const NEW_FUN_EXT: u8 = 112;
            let total_size = (4 + 1 + body.len()) as u32;
            buf.push(NEW_FUN_EXT);
            buf.extend_from_slice(&total_size.to_be_bytes());
            buf.extend_from_slice(&body);
            Ok(())
        }
        Fun::Export(export) => {
            const EXPORT_EXT: u8 = 113;
            buf.push(EXPORT_EXT);
            encode_atom(buf, export.module.as_str()).map_err(atom_too_long)?;
            encode_atom(buf, export.function.as_str()).map_err(atom_too_long)?;
            enc_term(buf, &Value::integer(export.arity), options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_zero_uses_small_integer() {
        let bytes = encode(&Value::integer(0), &Options::new()).unwrap();
        assert_eq!(bytes, vec![131, 97, 0]);
    }

    #[test]
    fn tuple_one_ok_matches_spec_scenario_encoder_output() {
        let value = Value::Tuple(vec![Value::integer(1), Value::atom("ok")]);
        let bytes = encode(&value, &Options::new()).unwrap();
        assert_eq!(bytes, vec![131, 104, 2, 97, 1, 119, 2, 111, 107]);
    }

    #[test]
    fn map_matches_spec_scenario() {
        let value = Value::Map(vec![
            (Value::integer(1), Value::integer(2)),
            (Value::atom("ok"), Value::atom("error")),
        ]);
        let bytes = encode(&value, &Options::new()).unwrap();
        assert_eq!(
            bytes,
            vec![
                131, 116, 0, 0, 0, 2, 97, 1, 97, 2, 119, 2, 111, 107, 119, 5, 101, 114, 114, 111,
                114,
            ]
        );
    }

    #[test]
    fn ascii_string_encodes_as_string_ext() {
        let bytes = encode(&Value::str("hello"), &Options::new()).unwrap();
        assert_eq!(bytes, vec![131, 107, 0, 5, b'h', b'e', b'l', b'l', b'o']);
    }

    #[test]
    fn non_latin1_string_encodes_as_codepoint_list() {
        let bytes = encode(&Value::str("\u{394}\u{3a9}"), &Options::new()).unwrap();
        assert_eq!(bytes[0], 131);
        assert_eq!(bytes[1], 108); // LIST_EXT
        let (value, tail) = crate::decoding::decode(&bytes, &Options::new()).unwrap();
        assert_eq!(value, Value::List(vec![Value::integer(0x394u32), Value::integer(0x3a9u32)]));
        assert!(tail.is_empty());
    }

    #[test]
    fn small_big_two_to_the_64_matches_spec_scenario() {
        let value = Value::integer(entities_data_handling::Integer::from(2u32).pow(64));
        let bytes = encode(&value, &Options::new()).unwrap();
        assert_eq!(bytes, vec![131, 110, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn empty_list_is_nil() {
        let bytes = encode(&Value::List(vec![]), &Options::new()).unwrap();
        assert_eq!(bytes, vec![131, 106]);
    }

    #[test]
    fn bound_encode_hook_overrides_default_encoding_for_its_type() {
        use crate::options::{EncodeHook, LogicalType};

        let hook = EncodeHook::new()
            .bind(LogicalType::Int, |_| Some(Value::atom("intercepted")))
            .catch_all(|_| Some(Value::atom("should not run for a built-in Value")));
        let options = Options::new().with_encode_hook(hook);

        let bytes = encode(&Value::integer(4747), &options).unwrap();
        assert_eq!(bytes, encode(&Value::atom("intercepted"), &Options::new()).unwrap());

        // The catch-all is only consulted by the member-hook fallback for
        // host values with no Value shape, not by enc_term's own dispatch,
        // so an unrelated type passes through untouched.
        let floats = encode(&Value::Float(1.5), &options).unwrap();
        assert_eq!(floats, encode(&Value::Float(1.5), &Options::new()).unwrap());
    }
}
