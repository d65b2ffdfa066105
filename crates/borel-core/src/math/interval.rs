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

use crate::math::bound::Bound;
use num_traits::Float;
use smallvec::SmallVec;
use std::{
    cmp::Ordering,
    ops::{BitAnd, BitOr},
};

/// An interval over a dense, totally ordered value type, with per-side
/// boundary inclusivity.
///
/// This is the atomic piece ("simple set") of a one-dimensional event on a
/// continuous variable. It supports the standard set-theoretic operations
/// (intersection, union, complement, difference) as well as containment and
/// connectivity queries, all with exact boundary semantics — no numeric
/// tolerance anywhere.
///
/// Unbounded sides are represented by the `Float` infinity sentinels. An
/// infinite endpoint is always open: infinity is a sentinel, never a member.
///
/// # Invariants
///
/// - Neither endpoint is NaN.
/// - `lower <= upper`.
/// - A degenerate interval (`lower == upper`) with at least one open side is
///   empty and is canonicalized to [`SimpleInterval::empty`] at
///   construction, so structural equality is set equality.
///
/// # Examples
///
/// ```rust
/// # use borel_core::math::interval::SimpleInterval;
///
/// let a = SimpleInterval::closed_open(0.0, 5.0);
/// let b = SimpleInterval::closed(5.0, 10.0);
/// // [0, 5) and [5, 10] touch with an inclusive side, so they merge.
/// assert_eq!(a.union(b), Some(SimpleInterval::closed(0.0, 10.0)));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct SimpleInterval<T>
where
    T: Float,
{
    lower: T,
    upper: T,
    left: Bound,
    right: Bound,
}

impl<T> SimpleInterval<T>
where
    T: Float,
{
    /// Creates a new `SimpleInterval`.
    ///
    /// Infinite endpoints are normalized to open, and an empty degenerate
    /// input (a single point with an exclusive side) reduces to the
    /// canonical empty interval.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is NaN or if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::bound::Bound;
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let iv = SimpleInterval::new(0.0, 1.0, Bound::Closed, Bound::Open);
    /// assert!(iv.contains_point(0.0));
    /// assert!(!iv.contains_point(1.0));
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T, left: Bound, right: Bound) -> Self {
        match Self::try_new(lower, upper, left, right) {
            Some(interval) => interval,
            None => panic!("Invalid interval: bounds must be non-NaN with lower <= upper"),
        }
    }

    /// Creates a new `SimpleInterval` if the inputs are valid.
    ///
    /// Returns `None` if either endpoint is NaN or if `lower > upper`.
    /// Applies the same normalization as [`SimpleInterval::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::bound::Bound;
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// assert!(SimpleInterval::try_new(0.0, 1.0, Bound::Open, Bound::Open).is_some());
    /// assert!(SimpleInterval::try_new(1.0, 0.0, Bound::Open, Bound::Open).is_none());
    /// assert!(SimpleInterval::try_new(f64::NAN, 0.0, Bound::Open, Bound::Open).is_none());
    /// ```
    pub fn try_new(lower: T, upper: T, left: Bound, right: Bound) -> Option<Self> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return None;
        }

        // Infinity is a sentinel, never a member.
        let left = if lower.is_infinite() { Bound::Open } else { left };
        let right = if upper.is_infinite() { Bound::Open } else { right };

        if lower == upper && (left.is_open() || right.is_open()) {
            return Some(Self::empty());
        }

        Some(Self {
            lower,
            upper,
            left,
            right,
        })
    }

    /// Creates a new `SimpleInterval` without validating or normalizing in
    /// release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure the invariants documented on the type hold.
    /// A `debug_assert!` catches violations during development.
    #[inline]
    pub fn new_unchecked(lower: T, upper: T, left: Bound, right: Bound) -> Self {
        debug_assert!(
            !lower.is_nan() && !upper.is_nan() && lower <= upper,
            "Invalid interval: bounds must be non-NaN with lower <= upper"
        );
        Self {
            lower,
            upper,
            left,
            right,
        }
    }

    /// The canonical empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let empty = SimpleInterval::<f64>::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self {
            lower: T::zero(),
            upper: T::zero(),
            left: Bound::Open,
            right: Bound::Open,
        }
    }

    /// The whole real line `(-inf, inf)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let reals = SimpleInterval::<f64>::reals();
    /// assert!(reals.contains_point(1e300));
    /// assert!(!reals.contains_point(f64::INFINITY));
    /// ```
    #[inline]
    pub fn reals() -> Self {
        Self {
            lower: T::neg_infinity(),
            upper: T::infinity(),
            left: Bound::Open,
            right: Bound::Open,
        }
    }

    /// The closed interval `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`SimpleInterval::new`].
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Bound::Closed, Bound::Closed)
    }

    /// The open interval `(lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`SimpleInterval::new`].
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Bound::Open, Bound::Open)
    }

    /// The half-open interval `[lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`SimpleInterval::new`].
    #[inline]
    pub fn closed_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Bound::Closed, Bound::Open)
    }

    /// The half-open interval `(lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`SimpleInterval::new`].
    #[inline]
    pub fn open_closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, Bound::Open, Bound::Closed)
    }

    /// The single-point interval `[value, value]`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN. A singleton at infinity normalizes to the
    /// empty interval.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self::new(value, value, Bound::Closed, Bound::Closed)
    }

    /// Returns the lower endpoint.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper endpoint.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns the inclusivity of the lower endpoint.
    #[inline]
    pub fn left(&self) -> Bound {
        self.left
    }

    /// Returns the inclusivity of the upper endpoint.
    #[inline]
    pub fn right(&self) -> Bound {
        self.right
    }

    /// Returns `true` if the interval denotes the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// assert!(SimpleInterval::open(0.0, 0.0).is_empty());
    /// assert!(!SimpleInterval::singleton(0.0).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
            || (self.lower == self.upper && (self.left.is_open() || self.right.is_open()))
    }

    /// Returns `true` if `value` lies inside the interval.
    ///
    /// NaN is never contained, and neither is an infinite value: unbounded
    /// sides are open by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let iv = SimpleInterval::open_closed(0.0, 5.0);
    /// assert!(!iv.contains_point(0.0));
    /// assert!(iv.contains_point(5.0));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        let above_lower = match self.left {
            Bound::Closed => value >= self.lower,
            Bound::Open => value > self.lower,
        };
        let below_upper = match self.right {
            Bound::Closed => value <= self.upper,
            Bound::Open => value < self.upper,
        };
        above_lower && below_upper && !self.is_empty()
    }

    /// Returns `true` if `other` is a subset of `self`.
    ///
    /// The empty interval is a subset of everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let a = SimpleInterval::closed(0.0, 10.0);
    /// assert!(a.contains_interval(SimpleInterval::open(0.0, 10.0)));
    /// assert!(!SimpleInterval::open(0.0, 10.0).contains_interval(a));
    /// ```
    pub fn contains_interval(&self, other: Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let lower_ok = self.lower < other.lower
            || (self.lower == other.lower && (self.left.is_closed() || other.left.is_open()));
        let upper_ok = other.upper < self.upper
            || (other.upper == self.upper && (self.right.is_closed() || other.right.is_open()));
        lower_ok && upper_ok
    }

    /// Returns `true` if the union of the two intervals is itself a single
    /// interval — they overlap, or they touch at a boundary with at least
    /// one inclusive side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let a = SimpleInterval::closed_open(0.0, 5.0);
    /// assert!(a.is_connected_to(SimpleInterval::closed(5.0, 10.0)));
    /// assert!(!a.is_connected_to(SimpleInterval::open(5.0, 10.0)));
    /// ```
    pub fn is_connected_to(&self, other: Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.intersection(other).is_empty() {
            return true;
        }
        let touches_right = self.upper == other.lower
            && (self.right.is_closed() || other.left.is_closed());
        let touches_left = other.upper == self.lower
            && (other.right.is_closed() || self.left.is_closed());
        touches_right || touches_left
    }

    /// Calculates the intersection of two intervals.
    ///
    /// The result takes the larger lower and the smaller upper endpoint; a
    /// shared boundary point is inclusive only if it is inclusive in both
    /// operands. An empty result is the canonical empty interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let a = SimpleInterval::closed(0.0, 5.0);
    /// let b = SimpleInterval::open(3.0, 8.0);
    /// assert_eq!(a.intersection(b), SimpleInterval::open_closed(3.0, 5.0));
    ///
    /// // Touching at an exclusive boundary yields the empty set.
    /// let c = SimpleInterval::closed_open(-2.0, 0.0);
    /// assert!(a.intersection(c).is_empty());
    /// ```
    pub fn intersection(&self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }

        let (lower, left) = match self.lower.partial_cmp(&other.lower) {
            Some(Ordering::Less) => (other.lower, other.left),
            Some(Ordering::Greater) => (self.lower, self.left),
            _ => (self.lower, self.left.intersect(other.left)),
        };
        let (upper, right) = match self.upper.partial_cmp(&other.upper) {
            Some(Ordering::Less) => (self.upper, self.right),
            Some(Ordering::Greater) => (other.upper, other.right),
            _ => (self.upper, self.right.intersect(other.right)),
        };

        if lower > upper || (lower == upper && (left.is_open() || right.is_open())) {
            return Self::empty();
        }
        Self {
            lower,
            upper,
            left,
            right,
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Returns `Some(union)` if the intervals are connected (see
    /// [`SimpleInterval::is_connected_to`]) and `None` if the union would
    /// not be a single interval. The union of anything with the empty
    /// interval is the other operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let a = SimpleInterval::closed_open(0.0, 5.0);
    /// let b = SimpleInterval::closed(5.0, 10.0);
    /// assert_eq!(a.union(b), Some(SimpleInterval::closed(0.0, 10.0)));
    ///
    /// let gap = SimpleInterval::closed(7.0, 8.0);
    /// assert_eq!(a.union(gap), None);
    /// ```
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.is_empty() {
            return Some(other);
        }
        if other.is_empty() {
            return Some(*self);
        }
        if !self.is_connected_to(other) {
            return None;
        }

        let (lower, left) = match self.lower.partial_cmp(&other.lower) {
            Some(Ordering::Less) => (self.lower, self.left),
            Some(Ordering::Greater) => (other.lower, other.left),
            _ => (self.lower, self.left.union(other.left)),
        };
        let (upper, right) = match self.upper.partial_cmp(&other.upper) {
            Some(Ordering::Less) => (other.upper, other.right),
            Some(Ordering::Greater) => (self.upper, self.right),
            _ => (self.upper, self.right.union(other.right)),
        };

        Some(Self {
            lower,
            upper,
            left,
            right,
        })
    }

    /// Calculates the complement of the interval over the reals.
    ///
    /// # Returns
    ///
    /// 0, 1, or 2 intervals: the left-unbounded piece below `lower` and the
    /// right-unbounded piece above `upper`, each with inverted inclusivity
    /// at the cut point. The complement of the empty interval is the whole
    /// real line; the complement of the real line is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let pieces = SimpleInterval::closed(2.0, 4.0).complement();
    /// assert_eq!(pieces.len(), 2);
    /// assert_eq!(pieces[0], SimpleInterval::open(f64::NEG_INFINITY, 2.0));
    /// assert_eq!(pieces[1], SimpleInterval::open(4.0, f64::INFINITY));
    /// ```
    pub fn complement(&self) -> SmallVec<Self, 2> {
        if self.is_empty() {
            return smallvec::smallvec![Self::reals()];
        }

        let mut result = SmallVec::new();
        if self.lower > T::neg_infinity() {
            result.push(Self {
                lower: T::neg_infinity(),
                upper: self.lower,
                left: Bound::Open,
                right: self.left.invert(),
            });
        }
        if self.upper < T::infinity() {
            result.push(Self {
                lower: self.upper,
                upper: T::infinity(),
                left: self.right.invert(),
                right: Bound::Open,
            });
        }
        result
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A vector of 0, 1, or 2 disjoint intervals: empty when `other` covers
    /// `self`, two pieces when `other` splits `self`, one piece otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use borel_core::math::interval::SimpleInterval;
    ///
    /// let base = SimpleInterval::closed(0.0, 10.0);
    /// let hole = SimpleInterval::closed(4.0, 6.0);
    /// let diff = base.difference(hole);
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], SimpleInterval::closed_open(0.0, 4.0));
    /// assert_eq!(diff[1], SimpleInterval::open_closed(6.0, 10.0));
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<Self, 2> {
        let overlap = self.intersection(other);
        if overlap.is_empty() {
            return smallvec::smallvec![*self];
        }

        let mut result = SmallVec::new();
        for piece in overlap.complement() {
            let remainder = self.intersection(piece);
            if !remainder.is_empty() {
                result.push(remainder);
            }
        }
        result
    }

    /// Compares two intervals by lower endpoint, with closed bounds ordering
    /// before open ones at equal values.
    ///
    /// This is the sort key the canonical disjoint-union representation uses.
    /// The invariant that endpoints are never NaN makes the order total.
    pub fn cmp_lower(&self, other: &Self) -> Ordering {
        self.lower
            .partial_cmp(&other.lower)
            .unwrap_or(Ordering::Equal)
            .then(self.left.cmp(&other.left))
    }
}

impl<T> BitAnd for SimpleInterval<T>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for SimpleInterval<T>
where
    T: Float,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> Default for SimpleInterval<T>
where
    T: Float,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for SimpleInterval<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleInterval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> std::fmt::Display for SimpleInterval<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        let open = if self.left.is_closed() { '[' } else { '(' };
        let close = if self.right.is_closed() { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.lower, self.upper, close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = SimpleInterval::closed(0.0, 10.0);
        assert_eq!(iv.lower(), 0.0);
        assert_eq!(iv.upper(), 10.0);
        assert_eq!(iv.left(), Bound::Closed);
        assert_eq!(iv.right(), Bound::Closed);
        assert!(!iv.is_empty());
    }

    #[test]
    fn test_try_new() {
        assert!(SimpleInterval::try_new(0.0, 1.0, Bound::Open, Bound::Open).is_some());
        assert!(SimpleInterval::try_new(1.0, 1.0, Bound::Closed, Bound::Closed).is_some());
        // Invalid: lower > upper
        assert!(SimpleInterval::try_new(1.0, 0.0, Bound::Open, Bound::Open).is_none());
        // Invalid: NaN
        assert!(SimpleInterval::try_new(f64::NAN, 0.0, Bound::Open, Bound::Open).is_none());
        assert!(SimpleInterval::try_new(0.0, f64::NAN, Bound::Open, Bound::Open).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        SimpleInterval::closed(10.0, 5.0);
    }

    #[test]
    fn test_degenerate_canonicalization() {
        // A zero-width interval with an exclusive side reduces to the
        // canonical empty marker, not a zero-width box.
        let degenerate = SimpleInterval::new(5.0, 5.0, Bound::Closed, Bound::Open);
        assert_eq!(degenerate, SimpleInterval::empty());

        // Both sides inclusive: a real singleton.
        let point = SimpleInterval::singleton(5.0);
        assert!(!point.is_empty());
        assert!(point.contains_point(5.0));
    }

    #[test]
    fn test_infinite_bounds_normalized_open() {
        let iv = SimpleInterval::new(f64::NEG_INFINITY, 0.0, Bound::Closed, Bound::Closed);
        assert_eq!(iv.left(), Bound::Open);
        assert!(!iv.contains_point(f64::NEG_INFINITY));
        assert!(iv.contains_point(-1e300));

        // A "singleton at infinity" is empty.
        assert!(SimpleInterval::singleton(f64::INFINITY).is_empty());
    }

    #[test]
    fn test_contains_point() {
        let iv = SimpleInterval::closed_open(0.0, 10.0);
        assert!(iv.contains_point(0.0));
        assert!(iv.contains_point(9.999));
        assert!(!iv.contains_point(10.0));
        assert!(!iv.contains_point(-0.001));
        assert!(!iv.contains_point(f64::NAN));
    }

    #[test]
    fn test_contains_interval() {
        let a = SimpleInterval::closed(0.0, 10.0);
        assert!(a.contains_interval(a));
        assert!(a.contains_interval(SimpleInterval::open(0.0, 10.0)));
        assert!(a.contains_interval(SimpleInterval::empty()));
        assert!(!SimpleInterval::open(0.0, 10.0).contains_interval(a));
        assert!(!a.contains_interval(SimpleInterval::closed(5.0, 11.0)));
        assert!(!SimpleInterval::<f64>::empty().contains_interval(a));
    }

    #[test]
    fn test_intersection_bound_combination() {
        let a = SimpleInterval::closed(0.0, 5.0);
        let b = SimpleInterval::open(0.0, 5.0);
        // Inclusive only where both operands are inclusive.
        assert_eq!(a.intersection(b), b);

        let c = SimpleInterval::closed(5.0, 10.0);
        assert_eq!(a.intersection(c), SimpleInterval::singleton(5.0));

        let d = SimpleInterval::open(5.0, 10.0);
        assert!(a.intersection(d).is_empty());
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = SimpleInterval::closed(0.0, 1.0);
        let b = SimpleInterval::closed(2.0, 3.0);
        assert_eq!(a.intersection(b), SimpleInterval::empty());
        assert_eq!(a & b, SimpleInterval::empty());
    }

    #[test]
    fn test_union_touching_merges() {
        // [0, 5) u [5, 10] == [0, 10]
        let a = SimpleInterval::closed_open(0.0, 5.0);
        let b = SimpleInterval::closed(5.0, 10.0);
        assert_eq!(a.union(b), Some(SimpleInterval::closed(0.0, 10.0)));
        assert_eq!(b.union(a), Some(SimpleInterval::closed(0.0, 10.0)));
        assert_eq!(a | b, Some(SimpleInterval::closed(0.0, 10.0)));
    }

    #[test]
    fn test_union_exclusive_touch_does_not_merge() {
        // [0, 5) u (5, 10] leaves the point 5 out.
        let a = SimpleInterval::closed_open(0.0, 5.0);
        let b = SimpleInterval::open_closed(5.0, 10.0);
        assert_eq!(a.union(b), None);
    }

    #[test]
    fn test_union_with_empty() {
        let a = SimpleInterval::closed(0.0, 1.0);
        assert_eq!(a.union(SimpleInterval::empty()), Some(a));
        assert_eq!(SimpleInterval::empty().union(a), Some(a));
    }

    #[test]
    fn test_union_bound_combination_at_equal_endpoints() {
        let a = SimpleInterval::open(0.0, 5.0);
        let b = SimpleInterval::closed(0.0, 5.0);
        assert_eq!(a.union(b), Some(b));
    }

    #[test]
    fn test_complement_bounded() {
        // complement([2, 4]) == (-inf, 2) u (4, inf)
        let pieces = SimpleInterval::closed(2.0, 4.0).complement();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], SimpleInterval::open(f64::NEG_INFINITY, 2.0));
        assert_eq!(pieces[1], SimpleInterval::open(4.0, f64::INFINITY));

        // Inverted inclusivity at the cut points.
        let pieces = SimpleInterval::open(2.0, 4.0).complement();
        assert_eq!(
            pieces[0],
            SimpleInterval::new(f64::NEG_INFINITY, 2.0, Bound::Open, Bound::Closed)
        );
        assert_eq!(
            pieces[1],
            SimpleInterval::new(4.0, f64::INFINITY, Bound::Closed, Bound::Open)
        );
    }

    #[test]
    fn test_complement_unbounded() {
        let pieces = SimpleInterval::new(0.0, f64::INFINITY, Bound::Closed, Bound::Open)
            .complement();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0], SimpleInterval::open(f64::NEG_INFINITY, 0.0));

        assert!(SimpleInterval::<f64>::reals().complement().is_empty());

        let pieces = SimpleInterval::<f64>::empty().complement();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0], SimpleInterval::reals());
    }

    #[test]
    fn test_difference() {
        let base = SimpleInterval::closed(0.0, 10.0);

        // Disjoint: no effect.
        let diff = base.difference(SimpleInterval::closed(12.0, 15.0));
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0], base);

        // Full cover: empty result.
        assert!(base.difference(SimpleInterval::closed(-5.0, 15.0)).is_empty());

        // Clip right.
        let diff = base.difference(SimpleInterval::closed(8.0, 15.0));
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0], SimpleInterval::closed_open(0.0, 8.0));

        // Split: the hole case, with inverted bounds at the cut.
        let diff = base.difference(SimpleInterval::open(4.0, 6.0));
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0], SimpleInterval::closed(0.0, 4.0));
        assert_eq!(diff[1], SimpleInterval::closed(6.0, 10.0));
    }

    #[test]
    fn test_is_connected_to() {
        let a = SimpleInterval::closed_open(0.0, 5.0);
        assert!(a.is_connected_to(SimpleInterval::closed(3.0, 8.0)));
        assert!(a.is_connected_to(SimpleInterval::closed(5.0, 8.0)));
        assert!(!a.is_connected_to(SimpleInterval::open(5.0, 8.0)));
        assert!(!a.is_connected_to(SimpleInterval::closed(6.0, 8.0)));
        assert!(!a.is_connected_to(SimpleInterval::empty()));
    }

    #[test]
    fn test_cmp_lower() {
        let a = SimpleInterval::closed(0.0, 1.0);
        let b = SimpleInterval::closed(2.0, 3.0);
        assert_eq!(a.cmp_lower(&b), Ordering::Less);
        assert_eq!(b.cmp_lower(&a), Ordering::Greater);

        // Closed sorts before open at equal lower endpoints.
        let c = SimpleInterval::open(0.0, 1.0);
        assert_eq!(a.cmp_lower(&c), Ordering::Less);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SimpleInterval::closed(0.0, 1.0)), "[0, 1]");
        assert_eq!(format!("{}", SimpleInterval::open_closed(0.0, 1.0)), "(0, 1]");
        assert_eq!(
            format!("{}", SimpleInterval::<f64>::reals()),
            "(-inf, inf)"
        );
        assert_eq!(format!("{}", SimpleInterval::<f64>::empty()), "∅");
    }
}
