//! Function leaf type.
//!
//! ETF serializes two distinct shapes under the umbrella of "a fun":
//!
//! - a closure (`NEW_FUN_EXT`, tag 112) carrying its defining module, index,
//!   uniq digest, captured free variables, and owning pid, or
//! - an export (`EXPORT_EXT`, tag 113), a bare `module:function/arity`
//!   reference with no captured state.
//!
//! `Fun` models both as an enum rather than cramming export fields into the
//! closure shape, since the wire layouts don't overlap.

use super::{Atom, Pid, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Fun {
    Closure(FunClosure),
    Export(FunExport),
}

/// A captured closure, reproducing `NEW_FUN_EXT`'s fields exactly so the
/// encoder can reconstruct the identical wire layout on re-encode.
#[derive(Debug, Clone, PartialEq)]
pub struct FunClosure {
    pub arity: u8,
    pub uniq: [u8; 16],
    pub index: u32,
    pub module: Atom,
    pub old_index: i32,
    pub old_uniq: i32,
    pub pid: Pid,
    pub free_vars: Vec<Value>,
}

/// A `module:function/arity` export reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunExport {
    pub module: Atom,
    pub function: Atom,
    pub arity: u8,
}
