//! Atom Types
//!
//! An atom is interned symbolic text. ETF carries two logically distinct
//! flavors of atom-shaped value on the wire:
//!
//! - a plain [`Atom`], which many hosts happily coerce to/from a string, and
//! - a [`StrictAtom`], which shares the same text storage but is a distinct
//!   Rust type so a caller can opt out of that implicit coercion.
//!
//! Both are ≤255 codepoints / ≤65535 bytes of UTF-8 text per the wire format;
//! the codec enforces the length limit at encode time (see
//! `infrastructure_code_loading::encode_atom`), not here.

use std::fmt;

/// A plain atom: interned text that many callers treat as interchangeable
/// with a host string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(String);

impl Atom {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// An atom that refuses implicit coercion to a host string. Carries the same
/// text as [`Atom`]; the two compare unequal as *values* (different variant),
/// even when their text is identical, because callers use the type itself to
/// signal intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrictAtom(String);

impl StrictAtom {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Text-only equality against a plain [`Atom`], for callers that do want
    /// to compare across the strict/non-strict distinction explicitly.
    pub fn same_text(&self, other: &Atom) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for StrictAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
