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

//! The per-variable event type, dispatched over the variable's domain kind.
//!
//! A `ComplexSet` is what a single dimension of an event assigns to its
//! variable: either a canonical interval union (continuous domains) or a
//! symbol set against an explicit universe (discrete domains). Domain-kind
//! dispatch is a tagged sum with exhaustive matching in every operation —
//! no runtime type inspection. Binary operations across kinds are rejected
//! with a descriptive error, never silently coerced.

use crate::{error::SetError, interval_set::IntervalSet, symbol_set::SymbolSet};
use borel_core::math::{bound::Bound, interval::SimpleInterval};

/// The domain kind of a variable or set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SetKind {
    /// Totally ordered, dense domain (intervals over the reals).
    Continuous,
    /// Finite set of discrete symbols (no order required).
    Symbolic,
}

impl std::fmt::Display for SetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuous => write!(f, "continuous"),
            Self::Symbolic => write!(f, "symbolic"),
        }
    }
}

/// An event on one variable: an interval union or a symbol set.
///
/// # Examples
///
/// ```rust
/// # use borel_core::math::interval::SimpleInterval;
/// # use borel_sets::set::ComplexSet;
///
/// let a = ComplexSet::from(SimpleInterval::closed(0.0, 5.0));
/// let b = ComplexSet::from(SimpleInterval::closed(3.0, 8.0));
/// let both = a.intersection(&b).unwrap();
/// assert_eq!(both, ComplexSet::from(SimpleInterval::closed(3.0, 5.0)));
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum ComplexSet {
    /// A canonical disjoint interval union.
    Continuous(IntervalSet<f64>),
    /// A subset of a finite symbol universe.
    Symbolic(SymbolSet),
}

impl ComplexSet {
    /// Creates a continuous set from a single interval, validating the
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidBound`] if an endpoint is NaN or
    /// `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::bound::Bound;
    /// # use borel_sets::set::ComplexSet;
    ///
    /// let set = ComplexSet::interval(0.0, 1.0, Bound::Closed, Bound::Open).unwrap();
    /// assert!(!set.is_empty());
    /// assert!(ComplexSet::interval(2.0, 1.0, Bound::Closed, Bound::Closed).is_err());
    /// ```
    pub fn interval(lower: f64, upper: f64, left: Bound, right: Bound) -> Result<Self, SetError> {
        SimpleInterval::try_new(lower, upper, left, right)
            .map(|atom| Self::Continuous(IntervalSet::from(atom)))
            .ok_or(SetError::InvalidBound { lower, upper })
    }

    /// Returns the domain kind of this set.
    #[inline]
    pub fn kind(&self) -> SetKind {
        match self {
            Self::Continuous(_) => SetKind::Continuous,
            Self::Symbolic(_) => SetKind::Symbolic,
        }
    }

    /// Returns `true` if the set denotes the empty event.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Continuous(set) => set.is_empty(),
            Self::Symbolic(set) => set.is_empty(),
        }
    }

    /// Calculates the union of two sets of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::KindMismatch`] for continuous × symbolic
    /// operands, or [`SetError::UniverseMismatch`] for symbol sets over
    /// different universes.
    pub fn union(&self, other: &Self) -> Result<Self, SetError> {
        match (self, other) {
            (Self::Continuous(a), Self::Continuous(b)) => Ok(Self::Continuous(a.union(b))),
            (Self::Symbolic(a), Self::Symbolic(b)) => Ok(Self::Symbolic(a.union(b)?)),
            (a, b) => Err(SetError::KindMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }

    /// Calculates the intersection of two sets of the same kind.
    ///
    /// # Errors
    ///
    /// Same as [`ComplexSet::union`].
    pub fn intersection(&self, other: &Self) -> Result<Self, SetError> {
        match (self, other) {
            (Self::Continuous(a), Self::Continuous(b)) => {
                Ok(Self::Continuous(a.intersection(b)))
            }
            (Self::Symbolic(a), Self::Symbolic(b)) => Ok(Self::Symbolic(a.intersection(b)?)),
            (a, b) => Err(SetError::KindMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }

    /// Calculates the complement: over the reals for continuous sets, or
    /// against the explicit universe for symbol sets.
    pub fn complement(&self) -> Self {
        match self {
            Self::Continuous(set) => Self::Continuous(set.complement()),
            Self::Symbolic(set) => Self::Symbolic(set.complement()),
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Errors
    ///
    /// Same as [`ComplexSet::union`].
    pub fn difference(&self, other: &Self) -> Result<Self, SetError> {
        self.intersection(&other.complement())
    }

    /// Returns `true` if `other` is a subset of `self`.
    ///
    /// # Errors
    ///
    /// Same as [`ComplexSet::union`].
    pub fn contains_set(&self, other: &Self) -> Result<bool, SetError> {
        match (self, other) {
            (Self::Continuous(a), Self::Continuous(b)) => Ok(a.contains_set(b)),
            (Self::Symbolic(a), Self::Symbolic(b)) => a.contains_set(b),
            (a, b) => Err(SetError::KindMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }
}

impl From<IntervalSet<f64>> for ComplexSet {
    fn from(set: IntervalSet<f64>) -> Self {
        Self::Continuous(set)
    }
}

impl From<SimpleInterval<f64>> for ComplexSet {
    fn from(atom: SimpleInterval<f64>) -> Self {
        Self::Continuous(IntervalSet::from(atom))
    }
}

impl From<SymbolSet> for ComplexSet {
    fn from(set: SymbolSet) -> Self {
        Self::Symbolic(set)
    }
}

impl std::fmt::Display for ComplexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuous(set) => write!(f, "{}", set),
            Self::Symbolic(set) => write!(f, "{}", set),
        }
    }
}
