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

//! # Borel Core
//!
//! Foundational primitives for the Borel event-algebra ecosystem. This crate
//! consolidates the reusable building blocks that the one-dimensional set
//! algebra and the product algebra are built on: exact interval arithmetic
//! with per-side boundary inclusivity, and strongly typed indices.
//!
//! ## Modules
//!
//! - `math`: Boundary-inclusivity flags (`Bound`) and the generic interval
//!   atom `SimpleInterval<T>` over any `Float` value type, with validation,
//!   set operations (intersection/union/complement/difference), predicates
//!   (emptiness, containment, connectivity), and `Display` rendering in
//!   standard interval notation.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`) used
//!   to address symbols inside a finite universe without mixing index
//!   spaces.
//!
//! ## Purpose
//!
//! Higher-level crates (`borel-sets`, `borel-events`) lift these atoms into
//! canonical disjoint unions and multi-dimensional events. Everything here
//! is an immutable value type: operations never mutate in place and always
//! return new instances, so the whole stack stays trivially `Send + Sync`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod utils;
