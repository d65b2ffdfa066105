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

//! The event-level error taxonomy.
//!
//! Event algebra can fail in the same ways one-dimensional set algebra can
//! (kind mismatches, universe mismatches, unknown symbols), plus one way of
//! its own: a containment query against a point that does not carry a value
//! for a constrained variable. Set-level errors are wrapped rather than
//! flattened so the source chain stays intact.

use borel_sets::error::SetError;

/// Errors raised by the product-algebra operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EventError {
    /// A one-dimensional set operation failed.
    Set(SetError),
    /// A point was queried against an event that constrains a variable the
    /// point carries no value for.
    MissingAssignment {
        /// The name of the unassigned variable.
        variable: String,
    },
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set(err) => write!(f, "set operation failed: {}", err),
            Self::MissingAssignment { variable } => {
                write!(f, "point has no value for variable '{}'", variable)
            }
        }
    }
}

impl std::error::Error for EventError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Set(err) => Some(err),
            Self::MissingAssignment { .. } => None,
        }
    }
}

impl From<SetError> for EventError {
    fn from(err: SetError) -> Self {
        Self::Set(err)
    }
}
