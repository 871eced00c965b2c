// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Optval
//!
//! Optional-with-default argument values. `OptionalValue<T>` represents an
//! argument that may be explicitly provided (`Present`) or left at its
//! default (`Absent`), together with the conversions that let callers pass
//! ordinary string, integer, and fractional literals directly where the
//! wrapper is expected.
//!
//! ## Modules
//!
//! - `value`: The two-variant sum type and its core combinators — mapping,
//!   short-circuiting sequencing, both-or-nothing application, first-present
//!   fallback, total accessors, and `Option<T>` conversions.
//! - `arith`: Elementwise lifting of arithmetic operators with absorbing
//!   `Absent`, plus lifted `Zero`/`One` identities.
//! - `convert`: Literal-construction capability traits (`FromText`,
//!   `FromInteger`, `FromFraction`) and the `From` bridges wiring bare
//!   literals through `present`.
//! - `combine`: The value-lifting monoid (`Combine`/`Identity`) over
//!   contained values, kept distinct from the fallback operation.
//! - `container`: Conversion into any single-or-empty container
//!   (`SingleOrEmpty`) and iterator support.
//!
//! ## Purpose
//!
//! These primitives let function signatures state "this argument is
//! optional" in the type, keep the absent state composable through
//! arithmetic and combination, and spare call sites the ceremony of manual
//! wrapping — while every operation stays total: nothing here panics,
//! blocks, or fails.
//!
//! Refer to each module for detailed APIs and examples.

pub mod arith;
pub mod combine;
pub mod container;
pub mod convert;
pub mod value;
