//! The `Value` union: the in-memory shape every decoded ETF term takes, and
//! the shape the encoder walks to produce ETF bytes.
//!
//! Values are immutable once built. The decoder builds them bottom-up; the
//! encoder walks them top-down without mutating anything. See
//! `infrastructure_external_format` for the tag-choice rules that decide how
//! each variant is serialized.

use malachite::Integer;

use crate::{Atom, BitString, ByteString, Fun, Pid, Reference, StrictAtom};

/// An improper list: a list whose tail is not the empty list. Exposed as its
/// own type (rather than folded into `Value::List` via an optional tail) so
/// callers can pattern-match "proper vs improper" without inspecting an
/// `Option`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImproperList {
    pub elements: Vec<Value>,
    pub tail: Box<Value>,
}

impl ImproperList {
    pub fn new(elements: Vec<Value>, tail: Value) -> Self {
        Self { elements, tail: Box::new(tail) }
    }
}

/// The union of every value the codec can decode or encode.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Arbitrary-precision signed integer. Wire form (`SMALL_INTEGER_EXT`,
    /// `INTEGER_EXT`, `SMALL_BIG_EXT`, `LARGE_BIG_EXT`) is chosen by
    /// magnitude at encode time; all of them decode back into this one
    /// variant.
    Integer(Integer),
    /// 64-bit IEEE-754 double (`NEW_FLOAT_EXT`).
    Float(f64),
    /// The atoms `true` and `false` decode here unconditionally, regardless
    /// of the caller's atom-representation option.
    Boolean(bool),
    /// The atom `undefined` decodes here unconditionally.
    Null,
    /// A plain atom (any other atom text).
    Atom(Atom),
    /// An atom decoded under the `"StrictAtom"` option — same text storage
    /// as `Atom`, but a type callers can't accidentally treat as a string.
    StrictAtom(StrictAtom),
    /// A host text string. Chosen on encode for values that look like text;
    /// also what `STRING_EXT` payloads decode to under the default
    /// `byte_string` option.
    Str(String),
    /// An immutable byte vector (`BINARY_EXT`).
    ByteString(ByteString),
    /// A byte vector with a partially-used final byte (`BIT_BINARY_EXT`).
    BitString(BitString),
    /// A fixed-arity ordered sequence (`SMALL_TUPLE_EXT`/`LARGE_TUPLE_EXT`).
    Tuple(Vec<Value>),
    /// A proper list (`LIST_EXT` with a `NIL_EXT` tail, or `NIL_EXT` itself
    /// when empty).
    List(Vec<Value>),
    /// A list whose tail is not `NIL_EXT`.
    ImproperList(ImproperList),
    /// An insertion-ordered sequence of key/value pairs (`MAP_EXT`). Key
    /// uniqueness is not enforced by the codec.
    Map(Vec<(Value, Value)>),
    /// A process identifier.
    Pid(Pid),
    /// A reference.
    Reference(Reference),
    /// A closure or an export.
    Fun(Fun),
}

impl Value {
    pub fn integer(v: impl Into<Integer>) -> Self {
        Value::Integer(v.into())
    }

    pub fn atom(text: impl Into<String>) -> Self {
        Value::Atom(Atom::new(text))
    }

    pub fn str(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    pub fn byte_string(bytes: impl Into<Vec<u8>>) -> Self {
        Value::ByteString(ByteString::new(bytes.into()))
    }

    pub fn is_proper_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::List(elements) if elements.is_empty())
    }
}
