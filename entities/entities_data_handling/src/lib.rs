//! Entities Layer: Data Handling
//!
//! Defines the in-memory `Value` union that the codec decodes into and encodes
//! from, plus the small leaf types (`Atom`, `BitString`, `Pid`, `Reference`,
//! `Fun`) that `Value` is built from.
//!
//! This is the innermost layer of the workspace: it has no dependency on any
//! other crate here, and nothing in it knows about the wire format.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright ETF Codec Contributors 2026. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod atom;
pub mod bitstring;
pub mod pid;
pub mod reference;
pub mod fun;
pub mod value;

pub use atom::{Atom, StrictAtom};
pub use bitstring::{BitString, ByteString};
pub use pid::Pid;
pub use reference::Reference;
pub use fun::{Fun, FunClosure, FunExport};
pub use value::{Value, ImproperList};

pub use malachite::Integer;
