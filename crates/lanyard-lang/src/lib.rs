// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// lanyard-lang — Everyday helpers for values the standard library leaves a
// little rough: optional arrays, null-safe comparison, string abbreviation
// and padding, tolerant date comparison, and predicate composition over
// argument tuples.

pub mod array;
pub mod datetime;
pub mod function;
pub mod object;
pub mod predicate;
pub mod string;

// Re-export the most used entry points so callers can write
// `lanyard_lang::abbreviate` etc.
pub use datetime::Epsilon;
pub use object::{Emptiness, first_non_null, safe_compare_to};
pub use predicate::{Predicate, PredicateExt};
pub use string::{abbreviate, join, split};
