//! The compressed envelope: tag `80` following the version prefix, wrapping
//! a 4-byte big-endian uncompressed length and a zlib-deflated payload.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::CodecError;

/// Inflates `payload` and checks the result against `expected_len`. Returns
/// the inflated bytes along with how many bytes of `payload` the zlib
/// stream actually consumed, since `payload` may be the remainder of a
/// larger buffer rather than an exact-length slice.
pub fn inflate(payload: &[u8], expected_len: u32) -> Result<(Vec<u8>, usize), CodecError> {
    let mut decoder = ZlibDecoder::new(payload);
    let mut out = Vec::with_capacity(expected_len as usize);
    decoder
        .read_to_end(&mut out)
        .map_err(|e| CodecError::MalformedEnvelope(e.to_string()))?;
    if out.len() as u32 != expected_len {
        return Err(CodecError::MalformedEnvelope(format!(
            "declared length {expected_len} does not match inflated length {}",
            out.len()
        )));
    }
    let consumed = decoder.total_in() as usize;
    Ok((out, consumed))
}

/// Deflates `payload` at the default compression level. Only used by
/// callers that opt in to compression explicitly; the encoder does not
/// compress by default.
pub fn deflate(payload: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).expect("writing to an in-memory buffer cannot fail");
    encoder.finish().expect("finishing an in-memory buffer cannot fail")
}
