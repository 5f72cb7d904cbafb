//! The member-hook fallback for values with no built-in [`Value`] shape.
//!
//! The source language is dynamically typed: `encode()` there accepts any
//! object, checks it for a well-known "encode as ETF" method, falls back to
//! a catch-all hook, and finally synthesizes `Tuple(Atom(class_name),
//! Map(fields))` from the object's class name and public fields. Rust has
//! no runtime reflection to replay that duck-typing, so [`EncodeFallback`]
//! makes the three-way precedence an explicit trait: overriding
//! `encode_as_etf` plays the role of "the object defines the method",
//! its default implementation plays the role of "it doesn't" — consulting
//! the catch-all hook first and only synthesizing the tuple if nothing else
//! resolves it.

use entities_data_handling::Value;

use crate::error::CodecError;
use crate::options::Options;

/// Implemented by host types that aren't already expressible as a
/// [`Value`] variant.
pub trait EncodeFallback {
    fn class_name(&self) -> &str;
    fn fields(&self) -> Vec<(String, Value)>;

    /// The member hook. Override to provide a custom representation
    /// (equivalent to the source object defining its own encode method).
    /// The default defers to the catch-all `encode_hook`, then to
    /// [`EncodeFallback::fallback_value`].
    fn encode_as_etf(&self, options: &Options) -> Value {
        let fallback = self.fallback_value();
        match options.encode_hook.as_ref().and_then(|h| h.catch_all_fn()) {
            Some(hook) => hook(&fallback).unwrap_or(fallback),
            None => fallback,
        }
    }

    /// `Tuple(Atom(class_name), Map(fields))`, the synthesized
    /// representation used when no method and no hook resolves the value.
    fn fallback_value(&self) -> Value {
        let pairs = self
            .fields()
            .into_iter()
            .map(|(name, value)| (Value::atom(name), value))
            .collect();
        Value::Tuple(vec![Value::atom(self.class_name()), Value::Map(pairs)])
    }
}

/// Encodes a value implementing [`EncodeFallback`] by resolving it through
/// the member-hook precedence, then encoding the result normally.
pub fn encode_member<T: EncodeFallback>(
    value: &T,
    options: &Options,
) -> Result<Vec<u8>, CodecError> {
    crate::encoding::encode(&value.encode_as_etf(options), options)
}
