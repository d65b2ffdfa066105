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

//! # Borel Events
//!
//! **The product sigma-algebra over a space of variables.**
//!
//! A [`simple_event::SimpleEvent`] is an axis-aligned box: every variable is
//! assigned a one-dimensional `ComplexSet`, and the box is the Cartesian
//! product of those assignments (unassigned variables are implicitly
//! unconstrained). An [`event::Event`] is a disjoint union of such boxes —
//! the externally meaningful event type. All algebra normalizes back into
//! this disjoint form.
//!
//! ## Architecture
//!
//! - **`variable`**: Named variables tagged with their domain kind
//!   (continuous, or symbolic with an explicit universe) and a
//!   deterministic total order, so every sweep over a variable space is
//!   reproducible.
//! - **`point`**: Sample points (one value per variable) for containment
//!   queries.
//! - **`simple_event`**: Box algebra — per-dimension intersection, and the
//!   axis-sweep complement decomposition. The complement of a box is *not*
//!   a box; the sweep carves it into pairwise-disjoint boxes without
//!   double-counting overlap regions.
//! - **`event`**: Disjoint unions of boxes, with the disjointing fixed
//!   point, the one-differing-dimension simplification pass, and the full
//!   union / intersection / complement / difference / containment algebra.
//! - **`error`**: The `EventError` taxonomy, wrapping the set-level errors.
//!
//! ## Design Philosophy
//!
//! Every operation is a pure function from immutable, canonical-form inputs
//! to a new immutable, canonical-form output. There is no shared mutable
//! state anywhere; all types are plain values that are safe to move across
//! threads.

pub mod error;
pub mod event;
pub mod point;
pub mod simple_event;
pub mod variable;
