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

//! Error taxonomy for the one-dimensional set algebra.
//!
//! All failures here are construction-time or call-time rejections of
//! ill-formed operands. They are reported synchronously and are recoverable;
//! none are fatal. The empty set is *not* an error — it is a canonical,
//! first-class value.

use crate::set::SetKind;

/// The error type for set construction and algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum SetError {
    /// An interval was constructed with `lower > upper` or a NaN endpoint.
    InvalidBound {
        /// The offending lower endpoint.
        lower: f64,
        /// The offending upper endpoint.
        upper: f64,
    },
    /// A binary operation paired a continuous operand with a symbolic one.
    KindMismatch {
        /// The kind of the left operand.
        left: SetKind,
        /// The kind of the right operand.
        right: SetKind,
    },
    /// A binary operation paired symbol sets from different universes.
    UniverseMismatch,
    /// A symbol name is not a member of the universe it was looked up in.
    UnknownSymbol {
        /// The name that failed to resolve.
        symbol: String,
    },
}

impl std::fmt::Display for SetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBound { lower, upper } => {
                write!(
                    f,
                    "Invalid interval bounds: lower = {}, upper = {} (bounds must be non-NaN with lower <= upper)",
                    lower, upper
                )
            }
            Self::KindMismatch { left, right } => {
                write!(
                    f,
                    "Cannot combine a {} set with a {} set",
                    left, right
                )
            }
            Self::UniverseMismatch => {
                write!(f, "Cannot combine symbol sets over different universes")
            }
            Self::UnknownSymbol { symbol } => {
                write!(f, "Symbol '{}' is not a member of the universe", symbol)
            }
        }
    }
}

impl std::error::Error for SetError {}
