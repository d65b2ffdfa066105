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

//! Finite symbol universes for discrete variables.
//!
//! Discrete events are subsets of a finite universe of symbols. The universe
//! is an explicit, required parameter of every discrete set — complements
//! are always taken against it, never against an inferred collection.
//! Universes are immutable once built and are shared between sets and
//! variables via `Arc`, so equality checks are usually a pointer comparison.

use borel_core::utils::index::{TypedIndex, TypedIndexTag};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A tag type for symbol indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SymbolIndexTag;

impl TypedIndexTag for SymbolIndexTag {
    const NAME: &'static str = "SymbolIndex";
}

/// A typed index into the ordered member list of a [`SymbolUniverse`].
pub type SymbolIndex = TypedIndex<SymbolIndexTag>;

/// An immutable, deduplicated, ordered collection of symbol names.
///
/// Symbols are sorted lexicographically at construction so that a universe
/// built from `["c", "a", "b", "a"]` equals one built from `["a", "b", "c"]`
/// and every member has a stable [`SymbolIndex`].
///
/// # Examples
///
/// ```rust
/// # use borel_sets::universe::SymbolUniverse;
///
/// let universe = SymbolUniverse::new(["a", "b", "c"]);
/// assert_eq!(universe.len(), 3);
/// assert_eq!(universe.index_of("b").map(|i| i.get()), Some(1));
/// assert!(universe.index_of("d").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SymbolUniverse {
    symbols: Vec<String>,
    lookup: FxHashMap<String, SymbolIndex>,
}

impl SymbolUniverse {
    /// Creates a new universe from the given symbol names.
    ///
    /// Duplicates are removed and the members are sorted, so the resulting
    /// index assignment depends only on the set of names.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        symbols.sort();
        symbols.dedup();

        let lookup = symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), SymbolIndex::new(i)))
            .collect();

        Self { symbols, lookup }
    }

    /// Creates a new universe and wraps it in an `Arc` for sharing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_sets::universe::SymbolUniverse;
    ///
    /// let universe = SymbolUniverse::shared(["u", "v", "w"]);
    /// assert_eq!(universe.len(), 3);
    /// ```
    pub fn shared<I, S>(symbols: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self::new(symbols))
    }

    /// Returns the number of symbols in the universe.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the universe has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Resolves a symbol name to its index, if the name is a member.
    #[inline]
    pub fn index_of(&self, symbol: &str) -> Option<SymbolIndex> {
        self.lookup.get(symbol).copied()
    }

    /// Returns the name at the given index, if in range.
    #[inline]
    pub fn symbol(&self, index: SymbolIndex) -> Option<&str> {
        self.symbols.get(index.get()).map(String::as_str)
    }

    /// Returns the ordered member names.
    #[inline]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl PartialEq for SymbolUniverse {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for SymbolUniverse {}

impl std::fmt::Display for SymbolUniverse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.symbols.join(", "))
    }
}

/// Returns `true` if two shared universes are the same, by pointer identity
/// or by structural equality.
#[inline]
pub fn same_universe(a: &Arc<SymbolUniverse>, b: &Arc<SymbolUniverse>) -> bool {
    Arc::ptr_eq(a, b) || a == b
}
