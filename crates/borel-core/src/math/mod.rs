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

//! # Math Primitives
//!
//! Exact interval arithmetic for measurable-space events. Unlike the usual
//! closed-open integer intervals of scheduling code, event algebra over the
//! reals needs *per-side* boundary inclusivity: `[0, 5)` and `[5, 10]` merge
//! into `[0, 10]`, while `[0, 5)` and `(5, 10]` leave the point `5` out.
//!
//! ## Submodules
//!
//! - `bound`: The `Bound` inclusivity flag (`Open`/`Closed`) together with
//!   the endpoint combination rules used by intersections, unions, and
//!   complements.
//! - `interval`: The generic `SimpleInterval<T>` atom over a `Float` value
//!   type, with validation, predicates (emptiness, containment,
//!   connectivity), set operations (intersection/union/complement/
//!   difference), and conversions.
//!
//! Unbounded sides use the `Float` infinity sentinels; an infinite endpoint
//! is never inclusive, so no interval ever "contains" infinity as a value.

pub mod bound;
pub mod interval;
