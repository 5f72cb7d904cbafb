//! API Facades Layer
//!
//! The public surface: `encode`/`decode` plus their ergonomic aliases
//! (`pack`/`unpack`, `dumps`/`loads`), re-exporting the `Value` model and
//! the configuration types a caller needs to build `Options`. No behavior
//! lives here — every facade calls straight through to
//! `infrastructure_external_format`.

pub mod codec_facades;

pub use codec_facades::{decode, dumps, encode, loads, pack, unpack};

pub use entities_data_handling::{
    Atom, BitString, ByteString, Fun, FunClosure, FunExport, ImproperList, Pid, Reference,
    StrictAtom, Value,
};
pub use infrastructure_external_format::{
    encode_member, AtomCall, AtomRepr, ByteStringRepr, CodecError, DecodeHook, EncodeFallback,
    EncodeHook, LogicalType, Options,
};
