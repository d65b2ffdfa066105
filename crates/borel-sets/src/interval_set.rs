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

//! Canonical disjoint unions of intervals.
//!
//! An `IntervalSet` is the "complex set" of a continuous variable: a sorted,
//! pairwise-disjoint sequence of interval atoms in which no two adjacent
//! atoms are mergeable. Every constructor and operation re-establishes this
//! canonical form, so structural equality *is* set equality and no
//! approximate comparison is ever needed.
//!
//! The subtle operation here is `complement`: by De Morgan, the complement
//! of a union of atoms is the **intersection** of the per-atom complements,
//! not their union. It is implemented exactly that way and tested
//! explicitly.

use borel_core::math::interval::SimpleInterval;
use num_traits::Float;

/// A canonical disjoint union of [`SimpleInterval`] atoms.
///
/// # Invariants
///
/// - No empty atoms are stored; the empty set has zero atoms.
/// - Atoms are sorted by lower endpoint.
/// - No two atoms are connected (overlapping or touching with an inclusive
///   side); any such pair would have been coalesced into one atom.
///
/// # Examples
///
/// ```rust
/// # use borel_core::math::interval::SimpleInterval;
/// # use borel_sets::interval_set::IntervalSet;
///
/// // [0, 5) u [5, 10] coalesces into the single atom [0, 10].
/// let set = IntervalSet::new([
///     SimpleInterval::closed_open(0.0, 5.0),
///     SimpleInterval::closed(5.0, 10.0),
/// ]);
/// assert_eq!(set.atoms(), &[SimpleInterval::closed(0.0, 10.0)]);
/// ```
#[derive(Clone, PartialEq)]
pub struct IntervalSet<T>
where
    T: Float,
{
    atoms: Vec<SimpleInterval<T>>,
}

impl<T> IntervalSet<T>
where
    T: Float,
{
    /// Creates a set from the given atoms, dropping empties and coalescing
    /// overlapping or touching atoms into canonical form.
    pub fn new<I>(atoms: I) -> Self
    where
        I: IntoIterator<Item = SimpleInterval<T>>,
    {
        let mut atoms: Vec<SimpleInterval<T>> =
            atoms.into_iter().filter(|a| !a.is_empty()).collect();
        atoms.sort_by(SimpleInterval::cmp_lower);

        let mut coalesced: Vec<SimpleInterval<T>> = Vec::with_capacity(atoms.len());
        for atom in atoms {
            if let Some(last) = coalesced.last_mut() {
                // Non-empty atoms union into a single interval iff connected.
                if let Some(merged) = last.union(atom) {
                    *last = merged;
                    continue;
                }
            }
            coalesced.push(atom);
        }

        Self { atoms: coalesced }
    }

    /// The empty set.
    #[inline]
    pub fn empty() -> Self {
        Self { atoms: Vec::new() }
    }

    /// The whole real line.
    #[inline]
    pub fn reals() -> Self {
        Self {
            atoms: vec![SimpleInterval::reals()],
        }
    }

    /// Returns the canonical atoms.
    #[inline]
    pub fn atoms(&self) -> &[SimpleInterval<T>] {
        &self.atoms
    }

    /// Returns `true` if the set has no atoms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns `true` if `value` lies in any atom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    /// # use borel_sets::interval_set::IntervalSet;
    ///
    /// let set = IntervalSet::new([
    ///     SimpleInterval::closed(0.0, 1.0),
    ///     SimpleInterval::closed(3.0, 4.0),
    /// ]);
    /// assert!(set.contains_point(0.5));
    /// assert!(!set.contains_point(2.0));
    /// ```
    pub fn contains_point(&self, value: T) -> bool {
        self.atoms.iter().any(|a| a.contains_point(value))
    }

    /// Returns `true` if `other` is a subset of `self`.
    pub fn contains_set(&self, other: &Self) -> bool {
        other.difference(self).is_empty()
    }

    /// Calculates the union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.atoms.iter().chain(other.atoms.iter()).copied())
    }

    /// Calculates the intersection of two sets.
    ///
    /// Every atom of `self` is paired with every atom of `other`; the
    /// pairwise intersections are collected and re-canonicalized. The pair
    /// count is `|self| * |other|`, which stays small because both operands
    /// are continually coalesced.
    pub fn intersection(&self, other: &Self) -> Self {
        let pairs = self
            .atoms
            .iter()
            .flat_map(|a| other.atoms.iter().map(move |b| a.intersection(*b)));
        Self::new(pairs)
    }

    /// Calculates the complement over the reals.
    ///
    /// By De Morgan, the complement of a union of atoms is the
    /// *intersection* of the per-atom complements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    /// # use borel_sets::interval_set::IntervalSet;
    ///
    /// let set = IntervalSet::from(SimpleInterval::closed(2.0, 4.0));
    /// let complement = set.complement();
    /// assert_eq!(complement.atoms(), &[
    ///     SimpleInterval::open(f64::NEG_INFINITY, 2.0),
    ///     SimpleInterval::open(4.0, f64::INFINITY),
    /// ]);
    /// ```
    pub fn complement(&self) -> Self {
        let mut result = Self::reals();
        for atom in &self.atoms {
            result = result.intersection(&Self::new(atom.complement()));
        }
        result
    }

    /// Calculates the set difference `self - other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.intersection(&other.complement())
    }

    /// Returns `true` if no two atoms are connected.
    ///
    /// Canonical sets always satisfy this; the check exists as a testing
    /// aid for the coalescing pass.
    pub fn is_disjoint(&self) -> bool {
        for (i, a) in self.atoms.iter().enumerate() {
            for b in &self.atoms[i + 1..] {
                if a.is_connected_to(*b) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T> Default for IntervalSet<T>
where
    T: Float,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<SimpleInterval<T>> for IntervalSet<T>
where
    T: Float,
{
    fn from(atom: SimpleInterval<T>) -> Self {
        Self::new([atom])
    }
}

impl<T> FromIterator<SimpleInterval<T>> for IntervalSet<T>
where
    T: Float,
{
    fn from_iter<I: IntoIterator<Item = SimpleInterval<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> std::fmt::Debug for IntervalSet<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.atoms).finish()
    }
}

impl<T> std::fmt::Display for IntervalSet<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, " u ")?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}
