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

//! Named variables of a product space.
//!
//! A variable is a name plus a domain: the whole real line for continuous
//! variables, or an explicit finite symbol universe for symbolic ones.
//! Variables carry a deterministic total order (by name, then kind, then
//! universe) so that box assignments can live in ordered maps and every
//! sweep over a variable space is reproducible.

use borel_sets::{
    interval_set::IntervalSet,
    set::{ComplexSet, SetKind},
    symbol_set::SymbolSet,
    universe::{same_universe, SymbolUniverse},
};
use std::cmp::Ordering;
use std::sync::Arc;

/// A named dimension of the product space.
///
/// # Examples
///
/// ```rust
/// # use borel_events::variable::Variable;
/// # use borel_sets::set::SetKind;
/// # use borel_sets::universe::SymbolUniverse;
///
/// let x = Variable::continuous("x");
/// assert_eq!(x.kind(), SetKind::Continuous);
///
/// let color = Variable::symbolic("color", SymbolUniverse::shared(["red", "green"]));
/// assert_eq!(color.kind(), SetKind::Symbolic);
/// assert!(!color.domain().is_empty());
/// ```
#[derive(Clone, Debug)]
pub enum Variable {
    /// A variable ranging over the real line.
    Continuous {
        /// The variable's name.
        name: String,
    },
    /// A variable ranging over a finite symbol universe.
    Symbolic {
        /// The variable's name.
        name: String,
        /// The universe of admissible symbols.
        universe: Arc<SymbolUniverse>,
    },
}

impl Variable {
    /// Creates a continuous variable with the given name.
    pub fn continuous<S: Into<String>>(name: S) -> Self {
        Self::Continuous { name: name.into() }
    }

    /// Creates a symbolic variable over the given universe.
    pub fn symbolic<S: Into<String>>(name: S, universe: Arc<SymbolUniverse>) -> Self {
        Self::Symbolic {
            name: name.into(),
            universe,
        }
    }

    /// Returns the variable's name.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Continuous { name } => name,
            Self::Symbolic { name, .. } => name,
        }
    }

    /// Returns the variable's domain kind.
    #[inline]
    pub fn kind(&self) -> SetKind {
        match self {
            Self::Continuous { .. } => SetKind::Continuous,
            Self::Symbolic { .. } => SetKind::Symbolic,
        }
    }

    /// Returns the symbol universe of a symbolic variable.
    #[inline]
    pub fn universe(&self) -> Option<&Arc<SymbolUniverse>> {
        match self {
            Self::Continuous { .. } => None,
            Self::Symbolic { universe, .. } => Some(universe),
        }
    }

    /// Returns the variable's full domain as a set: the whole real line, or
    /// the full symbol universe.
    pub fn domain(&self) -> ComplexSet {
        match self {
            Self::Continuous { .. } => ComplexSet::Continuous(IntervalSet::reals()),
            Self::Symbolic { universe, .. } => {
                ComplexSet::Symbolic(SymbolSet::full(universe.clone()))
            }
        }
    }

    /// Returns `true` if the given set is a valid assignment for this
    /// variable: matching kind, and for symbolic variables the same
    /// universe.
    pub fn admits(&self, set: &ComplexSet) -> bool {
        match (self, set) {
            (Self::Continuous { .. }, ComplexSet::Continuous(_)) => true,
            (Self::Symbolic { universe, .. }, ComplexSet::Symbolic(set)) => {
                same_universe(universe, set.universe())
            }
            _ => false,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Continuous { .. } => 0,
            Self::Symbolic { .. } => 1,
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| self.kind_rank().cmp(&other.kind_rank()))
            .then_with(|| match (self, other) {
                (
                    Self::Symbolic { universe: a, .. },
                    Self::Symbolic { universe: b, .. },
                ) => a.symbols().cmp(b.symbols()),
                _ => Ordering::Equal,
            })
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
