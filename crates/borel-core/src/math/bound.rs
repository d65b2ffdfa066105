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

/// The inclusivity of one side of an interval.
///
/// Event algebra needs open, closed, and half-open intervals uniformly, so
/// inclusivity is an explicit enumerated flag per side rather than a single
/// "closed" boolean on the whole interval.
///
/// # Examples
///
/// ```rust
/// # use borel_core::math::bound::Bound;
///
/// assert_eq!(Bound::Closed.invert(), Bound::Open);
/// assert_eq!(Bound::Closed.intersect(Bound::Open), Bound::Open);
/// assert_eq!(Bound::Closed.union(Bound::Open), Bound::Closed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Bound {
    /// The endpoint itself belongs to the interval.
    Closed,
    /// The endpoint is excluded from the interval.
    Open,
}

impl Bound {
    /// Returns `true` if the endpoint is included.
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Bound::Closed)
    }

    /// Returns `true` if the endpoint is excluded.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Bound::Open)
    }

    /// Flips the inclusivity.
    ///
    /// This is the rule applied at the cut points of a complement: the
    /// complement of `[2, 4]` is `(-inf, 2)` and `(4, inf)` — the closed
    /// endpoints become open on the other side of the cut, and vice versa.
    #[inline]
    pub const fn invert(self) -> Self {
        match self {
            Bound::Closed => Bound::Open,
            Bound::Open => Bound::Closed,
        }
    }

    /// Combines two inclusivity flags at a shared intersection endpoint.
    ///
    /// A point on the boundary belongs to the intersection only if it
    /// belongs to both operands, so the result is `Closed` iff both flags
    /// are `Closed`.
    #[inline]
    pub const fn intersect(self, other: Self) -> Self {
        match (self, other) {
            (Bound::Closed, Bound::Closed) => Bound::Closed,
            _ => Bound::Open,
        }
    }

    /// Combines two inclusivity flags at a shared union endpoint.
    ///
    /// A point on the boundary belongs to the union if it belongs to either
    /// operand, so the result is `Closed` if either flag is `Closed`.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        match (self, other) {
            (Bound::Open, Bound::Open) => Bound::Open,
            _ => Bound::Closed,
        }
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Closed => write!(f, "closed"),
            Bound::Open => write!(f, "open"),
        }
    }
}
