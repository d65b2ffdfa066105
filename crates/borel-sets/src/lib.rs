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

//! # Borel Sets
//!
//! **The one-dimensional sigma-algebra for the Borel event stack.**
//!
//! An event on a single variable is a *complex set*: a canonical, minimal,
//! pairwise-disjoint union of atomic pieces. For continuous variables the
//! atoms are intervals with per-side inclusivity; for discrete variables
//! they are subsets of a finite, explicit symbol universe. This crate
//! maintains the canonical form under every operation and lifts the atomic
//! algebra of `borel-core` to full union / intersection / complement /
//! difference / containment semantics with exact, closed-form results.
//!
//! ## Architecture
//!
//! - **`universe`**: Immutable, `Arc`-shared symbol universes and the typed
//!   `SymbolIndex` into them. Complements of discrete sets are always taken
//!   against an explicit universe — never inferred.
//! - **`symbol_set`**: Subsets of one universe backed by a bit set.
//! - **`interval_set`**: Sorted, disjoint, coalesced interval unions over
//!   any `Float` value type.
//! - **`set`**: `ComplexSet`, the kind-dispatched sum of both, with
//!   exhaustive matching in every operation. Mixing kinds (or universes) in
//!   a binary operation is an error, never a silent coercion.
//! - **`error`**: The `SetError` taxonomy. Emptiness is a value, not an
//!   error: the empty set is a first-class, canonical result everywhere.
//!
//! ## Design Philosophy
//!
//! 1. **Canonical form**: no empty atoms are ever stored, continuous atoms
//!    are sorted and non-mergeable, so structural equality is set equality.
//! 2. **Fail-fast construction**: invariant violations are rejected when a
//!    set is built; algebra operations assume canonical inputs.
//! 3. **Immutable values**: operations return new instances; nothing is
//!    mutated in place.

pub mod error;
pub mod interval_set;
pub mod set;
pub mod symbol_set;
pub mod universe;
