//! Per-call configuration: atom/byte-string representation policy, and the
//! decode/encode hook tables.
//!
//! Hook tables are keyed by [`LogicalType`], a closed enumeration, rather
//! than by host type, so bindings stay portable across callers (per the
//! "dynamic typing of the source" design note: a typed configuration record
//! replaces the original's duck-typed option dict).

use std::collections::HashMap;

use entities_data_handling::Value;

/// How a decoded atom is represented in the resulting [`Value`]. Does not
/// affect `true`/`false`/`undefined`, which always coerce to
/// `Value::Boolean`/`Value::Null` regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AtomRepr {
    #[default]
    Atom,
    StrictAtom,
    Str,
    Bytes,
}

/// How a `STRING_EXT` payload is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteStringRepr {
    #[default]
    Str,
    Bytes,
    IntList,
}

/// Closed set of logical type tags hook tables key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Int,
    Float,
    Atom,
    Bytes,
    Str,
    Tuple,
    List,
    Map,
    Pid,
    Reference,
    Fun,
    BitString,
    Bool,
    Null,
}

impl LogicalType {
    pub(crate) fn of(value: &Value) -> Self {
        match value {
            Value::Integer(_) => LogicalType::Int,
            Value::Float(_) => LogicalType::Float,
            Value::Boolean(_) => LogicalType::Bool,
            Value::Null => LogicalType::Null,
            Value::Atom(_) | Value::StrictAtom(_) => LogicalType::Atom,
            Value::Str(_) => LogicalType::Str,
            Value::ByteString(_) => LogicalType::Bytes,
            Value::BitString(_) => LogicalType::BitString,
            Value::Tuple(_) => LogicalType::Tuple,
            Value::List(_) | Value::ImproperList(_) => LogicalType::List,
            Value::Map(_) => LogicalType::Map,
            Value::Pid(_) => LogicalType::Pid,
            Value::Reference(_) => LogicalType::Reference,
            Value::Fun(_) => LogicalType::Fun,
        }
    }
}

/// A caller-supplied atom transform, invoked with the atom's text; its
/// return replaces the decoded atom outright. Takes precedence over
/// [`AtomRepr`].
pub type AtomCall = Box<dyn Fn(&str) -> Value>;

/// `decode_hook`: applied to a freshly-built value of the matching logical
/// type, before it's inserted into its parent container. The return value
/// replaces the decoded value.
#[derive(Default)]
pub struct DecodeHook {
    table: HashMap<LogicalType, Box<dyn Fn(Value) -> Value>>,
}

impl DecodeHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, ty: LogicalType, f: impl Fn(Value) -> Value + 'static) -> Self {
        self.table.insert(ty, Box::new(f));
        self
    }

    pub(crate) fn apply(&self, value: Value) -> Value {
        match self.table.get(&LogicalType::of(&value)) {
            Some(f) => f(value),
            None => value,
        }
    }
}

/// `encode_hook`: a per-type callable that runs before the default encoder
/// for that type, plus an optional catch-all consulted by the member-hook
/// fallback (see [`crate::encoding::EncodeFallback`]). A bare catch-all,
/// with no per-type bindings, is the backward-compatible shorthand the
/// source promotes `{"catch_all": fn}` from.
#[derive(Default)]
pub struct EncodeHook {
    by_type: HashMap<LogicalType, Box<dyn Fn(&Value) -> Option<Value>>>,
    catch_all: Option<Box<dyn Fn(&Value) -> Option<Value>>>,
}

impl EncodeHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, ty: LogicalType, f: impl Fn(&Value) -> Option<Value> + 'static) -> Self {
        self.by_type.insert(ty, Box::new(f));
        self
    }

    pub fn catch_all(mut self, f: impl Fn(&Value) -> Option<Value> + 'static) -> Self {
        self.catch_all = Some(Box::new(f));
        self
    }

    /// The per-type hook for `value`'s logical type, if bound.
    pub(crate) fn for_value(&self, value: &Value) -> Option<&(dyn Fn(&Value) -> Option<Value>)> {
        self.by_type.get(&LogicalType::of(value)).map(|b| b.as_ref())
    }

    pub(crate) fn catch_all_fn(&self) -> Option<&(dyn Fn(&Value) -> Option<Value>)> {
        self.catch_all.as_deref()
    }
}

/// Immutable per-call configuration. Unknown option keys at the public
/// surface are ignored rather than rejected (forward-compat); since this is
/// a typed record rather than a dict, "unknown keys" only arises for
/// callers constructing `Options` from loosely-typed input at the facade
/// layer, not here.
#[derive(Default)]
pub struct Options {
    pub atom: AtomRepr,
    pub atom_call: Option<AtomCall>,
    pub byte_string: ByteStringRepr,
    pub decode_hook: Option<DecodeHook>,
    pub encode_hook: Option<EncodeHook>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_atom(mut self, repr: AtomRepr) -> Self {
        self.atom = repr;
        self
    }

    pub fn with_atom_call(mut self, f: impl Fn(&str) -> Value + 'static) -> Self {
        self.atom_call = Some(Box::new(f));
        self
    }

    pub fn with_byte_string(mut self, repr: ByteStringRepr) -> Self {
        self.byte_string = repr;
        self
    }

    pub fn with_decode_hook(mut self, hook: DecodeHook) -> Self {
        self.decode_hook = Some(hook);
        self
    }

    pub fn with_encode_hook(mut self, hook: EncodeHook) -> Self {
        self.encode_hook = Some(hook);
        self
    }

    pub(crate) fn apply_decode_hook(&self, value: Value) -> Value {
        match &self.decode_hook {
            Some(hook) => hook.apply(value),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_atom_and_str() {
        let options = Options::new();
        assert_eq!(options.atom, AtomRepr::Atom);
        assert_eq!(options.byte_string, ByteStringRepr::Str);
    }

    #[test]
    fn decode_hook_applies_only_to_bound_type() {
        let hook = DecodeHook::new().bind(LogicalType::Int, |_| Value::integer(999));
        let out = hook.apply(Value::integer(1));
        assert_eq!(out, Value::integer(999));
        let untouched = hook.apply(Value::Float(1.0));
        assert_eq!(untouched, Value::Float(1.0));
    }
}
