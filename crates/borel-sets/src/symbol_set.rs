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

//! Discrete events over a finite symbol universe.
//!
//! A `SymbolSet` is a subset of one [`SymbolUniverse`], stored as a bit set
//! over the universe's member indices. All set algebra is exact bit algebra;
//! the complement is taken against the set's own (explicit) universe.
//! Binary operations require both operands to share a universe and fail
//! with [`SetError::UniverseMismatch`] otherwise.

use crate::{
    error::SetError,
    universe::{same_universe, SymbolIndex, SymbolUniverse},
};
use fixedbitset::FixedBitSet;
use std::sync::Arc;

/// A subset of a finite symbol universe.
///
/// # Examples
///
/// ```rust
/// # use borel_sets::symbol_set::SymbolSet;
/// # use borel_sets::universe::SymbolUniverse;
///
/// let universe = SymbolUniverse::shared(["a", "b", "c"]);
/// let ab = SymbolSet::new(universe.clone(), ["a", "b"]).unwrap();
/// let bc = SymbolSet::new(universe.clone(), ["b", "c"]).unwrap();
///
/// assert_eq!(ab.complement(), SymbolSet::new(universe.clone(), ["c"]).unwrap());
/// assert_eq!(ab.union(&bc).unwrap(), SymbolSet::full(universe));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    universe: Arc<SymbolUniverse>,
    members: FixedBitSet,
}

impl SymbolSet {
    /// Creates a set containing the given symbol names.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UnknownSymbol`] if any name is not a member of
    /// the universe, identifying the offending name.
    pub fn new<I, S>(universe: Arc<SymbolUniverse>, symbols: I) -> Result<Self, SetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = FixedBitSet::with_capacity(universe.len());
        for symbol in symbols {
            let symbol = symbol.as_ref();
            let index = universe
                .index_of(symbol)
                .ok_or_else(|| SetError::UnknownSymbol {
                    symbol: symbol.to_string(),
                })?;
            members.insert(index.get());
        }
        Ok(Self { universe, members })
    }

    /// Creates the empty set over the given universe.
    #[inline]
    pub fn empty(universe: Arc<SymbolUniverse>) -> Self {
        let members = FixedBitSet::with_capacity(universe.len());
        Self { universe, members }
    }

    /// Creates the set containing every symbol of the universe.
    #[inline]
    pub fn full(universe: Arc<SymbolUniverse>) -> Self {
        let mut members = FixedBitSet::with_capacity(universe.len());
        members.insert_range(..);
        Self { universe, members }
    }

    /// Returns the universe this set is defined against.
    #[inline]
    pub fn universe(&self) -> &Arc<SymbolUniverse> {
        &self.universe
    }

    /// Returns the number of symbols in the set.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.members.count_ones(..)
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_clear()
    }

    /// Returns `true` if the set contains every symbol of its universe.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cardinality() == self.universe.len()
    }

    /// Returns `true` if the symbol at `index` is a member.
    #[inline]
    pub fn contains_index(&self, index: SymbolIndex) -> bool {
        self.members.contains(index.get())
    }

    /// Returns `true` if the named symbol is a member.
    ///
    /// A name outside the universe is simply not contained.
    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.universe
            .index_of(symbol)
            .is_some_and(|index| self.contains_index(index))
    }

    /// Iterates the member names in universe order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.members
            .ones()
            .filter_map(|i| self.universe.symbol(SymbolIndex::new(i)))
    }

    /// Calculates the union of two sets.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UniverseMismatch`] if the operands are defined
    /// against different universes.
    pub fn union(&self, other: &Self) -> Result<Self, SetError> {
        self.check_universe(other)?;
        let mut members = self.members.clone();
        members.union_with(&other.members);
        Ok(Self {
            universe: self.universe.clone(),
            members,
        })
    }

    /// Calculates the intersection of two sets.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UniverseMismatch`] if the operands are defined
    /// against different universes.
    pub fn intersection(&self, other: &Self) -> Result<Self, SetError> {
        self.check_universe(other)?;
        let mut members = self.members.clone();
        members.intersect_with(&other.members);
        Ok(Self {
            universe: self.universe.clone(),
            members,
        })
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UniverseMismatch`] if the operands are defined
    /// against different universes.
    pub fn difference(&self, other: &Self) -> Result<Self, SetError> {
        self.check_universe(other)?;
        let mut members = self.members.clone();
        members.difference_with(&other.members);
        Ok(Self {
            universe: self.universe.clone(),
            members,
        })
    }

    /// Calculates the complement against the set's universe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_sets::symbol_set::SymbolSet;
    /// # use borel_sets::universe::SymbolUniverse;
    ///
    /// let universe = SymbolUniverse::shared(["a", "b", "c"]);
    /// let ab = SymbolSet::new(universe.clone(), ["a", "b"]).unwrap();
    /// let c = ab.complement();
    /// assert!(c.contains("c"));
    /// assert!(!c.contains("a"));
    /// ```
    pub fn complement(&self) -> Self {
        let mut members = self.members.clone();
        members.toggle_range(..);
        Self {
            universe: self.universe.clone(),
            members,
        }
    }

    /// Returns `true` if `other` is a subset of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::UniverseMismatch`] if the operands are defined
    /// against different universes.
    pub fn contains_set(&self, other: &Self) -> Result<bool, SetError> {
        self.check_universe(other)?;
        Ok(other.members.is_subset(&self.members))
    }

    fn check_universe(&self, other: &Self) -> Result<(), SetError> {
        if same_universe(&self.universe, &other.universe) {
            Ok(())
        } else {
            Err(SetError::UniverseMismatch)
        }
    }
}

impl std::fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        let names: Vec<&str> = self.iter().collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
