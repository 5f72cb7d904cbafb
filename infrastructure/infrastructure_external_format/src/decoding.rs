//! Recursive descent decoder: `bytes -> (Value, tail)`.
//!
//! `decode` is the public entry point (version prefix + optional compressed
//! envelope); `decode_term` is the tag-dispatching recursive step every
//! nested value goes through, called directly by `decode` and by itself for
//! tuple/list/map elements, fun free variables, and references nested
//! inside other shapes.

use entities_data_handling::{Atom, Fun, FunClosure, FunExport, ImproperList, StrictAtom, Value};
use infrastructure_code_loading::constants::{
    ATOM_EXT, ATOM_UTF8_EXT, BINARY_EXT, BIT_BINARY_EXT, COMPRESSED_EXT, EXPORT_EXT, FLOAT_EXT,
    INTEGER_EXT, LARGE_BIG_EXT, LARGE_TUPLE_EXT, LIST_EXT, MAP_EXT, NEWER_REFERENCE_EXT,
    NEW_FLOAT_EXT, NEW_FUN_EXT, NEW_PID_EXT, NEW_REFERENCE_EXT, NIL_EXT, PID_EXT,
    SMALL_ATOM_EXT, SMALL_ATOM_UTF8_EXT, SMALL_BIG_EXT, SMALL_INTEGER_EXT, SMALL_TUPLE_EXT,
    STRING_EXT, VERSION_MAGIC,
};
use infrastructure_code_loading::{
    decode_float, decode_integer, decode_list_header, decode_map_header, decode_pid,
    decode_reference, decode_tuple_header,
};
use infrastructure_data_handling::{decode_atom, decode_binary, DecodedBinary};

use crate::compression::inflate;
use crate::error::CodecError;
use crate::options::{AtomRepr, ByteStringRepr, Options};

/// Top-level decode: requires the `131` version prefix, transparently
/// inflates a compressed envelope, and returns the decoded value plus the
/// unconsumed suffix of `data`.
pub fn decode<'a>(data: &'a [u8], options: &Options) -> Result<(Value, &'a [u8]), CodecError> {
    let first = *data.first().ok_or(CodecError::BufferTooShort)?;
    if first != VERSION_MAGIC {
        return Err(CodecError::MissingVersionMagic);
    }
    let rest = &data[1..];

    let second = *rest.first().ok_or(CodecError::BufferTooShort)?;
    if second == COMPRESSED_EXT {
        let header = rest.get(1..5).ok_or(CodecError::BufferTooShort)?;
        let expected_len = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
        let compressed = &rest[5..];
        let (inflated, zlib_consumed) = inflate(compressed, expected_len)?;
        let (value, consumed) = decode_term(&inflated, options)?;
        debug_assert_eq!(consumed, inflated.len());
        // Bytes in `compressed` past the zlib stream's own end belong to
        // whatever follows this envelope, not to the decoded term.
        return Ok((value, &compressed[zlib_consumed..]));
    }

    let (value, consumed) = decode_term(rest, options)?;
    Ok((value, &rest[consumed..]))
}

/// Decodes one term starting at `data[0]`, returning it and the number of
/// bytes consumed. Recurses for compound shapes.
pub fn decode_term(data: &[u8], options: &Options) -> Result<(Value, usize), CodecError> {
    let tag = *data.first().ok_or(CodecError::BufferTooShort)?;
    match tag {
        SMALL_INTEGER_EXT | INTEGER_EXT | SMALL_BIG_EXT | LARGE_BIG_EXT => {
            let (value, consumed) = decode_integer(data)?;
            Ok((options.apply_decode_hook(Value::Integer(value)), consumed))
        }
        NEW_FLOAT_EXT | FLOAT_EXT => {
            let (value, consumed) = decode_float(data)?;
            Ok((options.apply_decode_hook(Value::Float(value)), consumed))
        }
        ATOM_EXT | ATOM_UTF8_EXT | SMALL_ATOM_EXT | SMALL_ATOM_UTF8_EXT => {
            let (text, consumed) = decode_atom(data)?;
            Ok((decode_atom_value(text, options), consumed))
        }
        STRING_EXT => decode_string_ext(data, options),
        NIL_EXT => Ok((options.apply_decode_hook(Value::List(vec![])), 1)),
        LIST_EXT => decode_list(data, options),
        SMALL_TUPLE_EXT | LARGE_TUPLE_EXT => decode_tuple(data, options),
        MAP_EXT => decode_map(data, options),
        BINARY_EXT | BIT_BINARY_EXT => {
            let (decoded, consumed) = decode_binary(data)?;
            let value = match decoded {
                DecodedBinary::Binary(bytes) => {
                    options.apply_decode_hook(Value::byte_string(bytes))
                }
                DecodedBinary::BitBinary(bytes, tail_bits) => options.apply_decode_hook(
                    Value::BitString(entities_data_handling::BitString::new(bytes, tail_bits)),
                ),
            };
            Ok((value, consumed))
        }
        PID_EXT | NEW_PID_EXT => {
            let (pid, consumed) = decode_pid(data)?;
            Ok((options.apply_decode_hook(Value::Pid(pid)), consumed))
        }
        NEW_REFERENCE_EXT | NEWER_REFERENCE_EXT => {
            let (reference, consumed) = decode_reference(data)?;
            Ok((options.apply_decode_hook(Value::Reference(reference)), consumed))
        }
        NEW_FUN_EXT => decode_new_fun(data, options),
        EXPORT_EXT => decode_export(data, options),
        other => Err(CodecError::UnknownTag(other)),
    }
}

fn decode_atom_value(text: String, options: &Options) -> Value {
    let value = match text.as_str() {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        "undefined" => return Value::Null,
        _ => {
            if let Some(call) = &options.atom_call {
                call(&text)
            } else {
                match options.atom {
                    AtomRepr::Atom => Value::Atom(Atom::new(text)),
                    AtomRepr::StrictAtom => Value::StrictAtom(StrictAtom::new(text)),
                    AtomRepr::Str => Value::Str(text),
                    AtomRepr::Bytes => Value::byte_string(text.into_bytes()),
                }
            }
        }
    };
    options.apply_decode_hook(value)
}

fn decode_string_ext(data: &[u8], options: &Options) -> Result<(Value, usize), CodecError> {
    let hi = *data.get(1).ok_or(CodecError::BufferTooShort)?;
    let lo = *data.get(2).ok_or(CodecError::BufferTooShort)?;
    let len = u16::from_be_bytes([hi, lo]) as usize;
    let start = 3;
    let end = start + len;
    let bytes = data.get(start..end).ok_or(CodecError::BufferTooShort)?;

    let value = match options.byte_string {
        ByteStringRepr::Str => {
            let text: String = bytes.iter().map(|&b| b as char).collect();
            Value::Str(text)
        }
        ByteStringRepr::Bytes => Value::byte_string(bytes.to_vec()),
        ByteStringRepr::IntList => {
            Value::List(bytes.iter().map(|&b| Value::integer(b)).collect())
        }
    };
    Ok((options.apply_decode_hook(value), end))
}

fn decode_list(data: &[u8], options: &Options) -> Result<(Value, usize), CodecError> {
    let (count, header_len) = decode_list_header(data)?;
    let mut pos = header_len;
    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        let (value, consumed) = decode_term(&data[pos..], options)?;
        elements.push(value);
        pos += consumed;
    }
    let (tail, consumed) = decode_term(&data[pos..], options)?;
    pos += consumed;

    let value = if tail.is_nil() {
        Value::List(elements)
    } else {
        Value::ImproperList(ImproperList::new(elements, tail))
    };
    Ok((options.apply_decode_hook(value), pos))
}

fn decode_tuple(data: &[u8], options: &Options) -> Result<(Value, usize), CodecError> {
    let (arity, header_len) = decode_tuple_header(data)?;
    let mut pos = header_len;
    let mut elements = Vec::with_capacity(arity);
    for _ in 0..arity {
        let (value, consumed) = decode_term(&data[pos..], options)?;
        elements.push(value);
        pos += consumed;
    }
    Ok((options.apply_decode_hook(Value::Tuple(elements)), pos))
}

fn decode_map(data: &[u8], options: &Options) -> Result<(Value, usize), CodecError> {
    let (pair_count, header_len) = decode_map_header(data)?;
    let mut pos = header_len;
    let mut pairs = Vec::with_capacity(pair_count);
    for _ in 0..pair_count {
        let (key, consumed) = decode_term(&data[pos..], options)?;
        pos += consumed;
        let (value, consumed) = decode_term(&data[pos..], options)?;
        pos += consumed;
        pairs.push((key, value));
    }
    Ok((options.apply_decode_hook(Value::Map(pairs)), pos))
}

fn decode_new_fun(data: &[u8], options: &Options) -> Result<(Value, usize), CodecError> {
    if data.len() < 1 + 4 + 1 + 16 + 4 + 4 {
        return Err(CodecError::BufferTooShort);
    }
    let mut pos = 1;
    let _total_size = u32::from_be_bytes(data[pos..pos + 4].try_into().unwrap());
    pos += 4;
    let arity = data[pos];
    pos += 1;
    let mut uniq = [0u8; 16];
    uniq.copy_from_slice(&data[pos..pos + 16]);
    pos += 16;
    let index = u32::from_be_bytes(data[pos..pos + 4].try_into().unwrap());
    pos += 4;
    let free_count = u32::from_be_bytes(data[pos..pos + 4].try_into().unwrap()) as usize;
    pos += 4;

    let (module_text, consumed) = decode_atom(&data[pos..])?;
    pos += consumed;
    let module = Atom::new(module_text);

    let (old_index_value, consumed) = decode_term(&data[pos..], options)?;
    pos += consumed;
    let old_index = value_to_i32(&old_index_value);

    let (old_uniq_value, consumed) = decode_term(&data[pos..], options)?;
    pos += consumed;
    let old_uniq = value_to_i32(&old_uniq_value);

    let (pid, consumed) = decode_pid(&data[pos..])?;
    pos += consumed;

    let mut free_vars = Vec::with_capacity(free_count);
    for _ in 0..free_count {
        let (value, consumed) = decode_term(&data[pos..], options)?;
        free_vars.push(value);
        pos += consumed;
    }

    let closure = FunClosure { arity, uniq, index, module, old_index, old_uniq, pid, free_vars };
    Ok((options.apply_decode_hook(Value::Fun(Fun::Closure(closure))), pos))
}

fn decode_export(data: &[u8], options: &Options) -> Result<(Value, usize), CodecError> {
    let mut pos = 1;
    let (module_text, consumed) = decode_atom(&data[pos..])?;
    pos += consumed;
    let (function_text, consumed) = decode_atom(&data[pos..])?;
    pos += consumed;
    let (arity_value, consumed) = decode_term(&data[pos..], options)?;
    pos += consumed;
    let arity = value_to_i32(&arity_value) as u8;

    let export = FunExport { module: Atom::new(module_text), function: Atom::new(function_text), arity };
    Ok((options.apply_decode_hook(Value::Fun(Fun::Export(export))), pos))
}

fn value_to_i32(value: &Value) -> i32 {
    match value {
        Value::Integer(i) => i64::try_from(i).unwrap_or(0) as i32,
        _ => 0,
    }
}
