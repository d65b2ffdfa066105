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

//! Sample points of the product space.
//!
//! A point assigns one concrete value per variable and is the argument of
//! event containment queries. Points are plain value maps; they carry no
//! validation of their own — mismatched kinds surface when the point is
//! tested against an event.

use crate::variable::Variable;
use borel_sets::set::SetKind;
use std::collections::BTreeMap;

/// A concrete value for one variable.
#[derive(Clone, PartialEq, Debug)]
pub enum PointValue {
    /// A real number.
    Continuous(f64),
    /// A symbol name.
    Symbolic(String),
}

impl PointValue {
    /// Returns the domain kind this value belongs to.
    #[inline]
    pub fn kind(&self) -> SetKind {
        match self {
            Self::Continuous(_) => SetKind::Continuous,
            Self::Symbolic(_) => SetKind::Symbolic,
        }
    }
}

impl From<f64> for PointValue {
    fn from(value: f64) -> Self {
        Self::Continuous(value)
    }
}

impl From<&str> for PointValue {
    fn from(value: &str) -> Self {
        Self::Symbolic(value.to_string())
    }
}

impl From<String> for PointValue {
    fn from(value: String) -> Self {
        Self::Symbolic(value)
    }
}

impl std::fmt::Display for PointValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuous(value) => write!(f, "{}", value),
            Self::Symbolic(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// An assignment of one value per variable.
///
/// # Examples
///
/// ```rust
/// # use borel_events::point::Point;
/// # use borel_events::variable::Variable;
///
/// let x = Variable::continuous("x");
/// let point = Point::new().with(x.clone(), 0.5);
/// assert!(point.get(&x).is_some());
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Point {
    values: BTreeMap<Variable, PointValue>,
}

impl Point {
    /// Creates an empty point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the point with the given value added, replacing any previous
    /// value for the variable.
    pub fn with<V: Into<PointValue>>(mut self, variable: Variable, value: V) -> Self {
        self.values.insert(variable, value.into());
        self
    }

    /// Inserts a value for a variable in place.
    pub fn insert<V: Into<PointValue>>(&mut self, variable: Variable, value: V) {
        self.values.insert(variable, value.into());
    }

    /// Returns the value assigned to the given variable, if any.
    #[inline]
    pub fn get(&self, variable: &Variable) -> Option<&PointValue> {
        self.values.get(variable)
    }

    /// Returns the number of assigned variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the point assigns no variables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the assignments in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &PointValue)> + '_ {
        self.values.iter()
    }
}

impl FromIterator<(Variable, PointValue)> for Point {
    fn from_iter<I: IntoIterator<Item = (Variable, PointValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, (variable, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", variable, value)?;
        }
        write!(f, ")")
    }
}
