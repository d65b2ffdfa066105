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

//! Axis-aligned boxes of the product space.
//!
//! A `SimpleEvent` maps variables to one-dimensional sets; the box it
//! denotes is the Cartesian product of those assignments. A variable the
//! box does not mention is unconstrained, i.e. implicitly assigned its full
//! domain. A box with any empty assignment is the empty event, as is the
//! box over zero variables.
//!
//! Boxes are closed under intersection (per-dimension intersection over the
//! merged variable set) but not under complement or difference — those
//! return a list of pairwise-disjoint boxes, produced by the axis sweep:
//! the piece for dimension `i` complements dimension `i`, keeps the
//! original assignment on every already-swept dimension, and leaves every
//! later dimension unconstrained. Keeping the original assignments on the
//! swept prefix is what makes the pieces disjoint instead of
//! double-counting the overlap regions.

use crate::{error::EventError, event::Event, point::Point, point::PointValue, variable::Variable};
use borel_sets::{error::SetError, set::ComplexSet};
use std::collections::BTreeMap;

/// An axis-aligned box: per-variable set assignments, combined by product.
///
/// # Examples
///
/// ```rust
/// # use borel_core::math::interval::SimpleInterval;
/// # use borel_events::simple_event::SimpleEvent;
/// # use borel_events::variable::Variable;
///
/// let x = Variable::continuous("x");
/// let y = Variable::continuous("y");
/// let unit = SimpleEvent::new()
///     .with(x, SimpleInterval::closed(0.0, 1.0).into())
///     .unwrap()
///     .with(y, SimpleInterval::closed(0.0, 1.0).into())
///     .unwrap();
/// assert!(!unit.is_empty());
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SimpleEvent {
    assignments: BTreeMap<Variable, ComplexSet>,
}

impl SimpleEvent {
    /// Creates a box over zero variables, which denotes the empty event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a box from variable/set pairs.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Set`] if any set does not match its variable's
    /// kind or universe.
    pub fn from_assignments<I>(assignments: I) -> Result<Self, EventError>
    where
        I: IntoIterator<Item = (Variable, ComplexSet)>,
    {
        let mut event = Self::new();
        for (variable, set) in assignments {
            event = event.with(variable, set)?;
        }
        Ok(event)
    }

    /// Creates the box that leaves every given variable unconstrained, i.e.
    /// the universal event over those variables.
    pub fn unconstrained<I>(variables: I) -> Self
    where
        I: IntoIterator<Item = Variable>,
    {
        let assignments = variables
            .into_iter()
            .map(|variable| {
                let domain = variable.domain();
                (variable, domain)
            })
            .collect();
        Self { assignments }
    }

    /// Returns the box with the given assignment added, replacing any
    /// previous assignment for the variable.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Set`] with a [`SetError::KindMismatch`] if the
    /// set's kind differs from the variable's, or a
    /// [`SetError::UniverseMismatch`] if a symbolic set is defined against
    /// a different universe than the variable.
    pub fn with(mut self, variable: Variable, set: ComplexSet) -> Result<Self, EventError> {
        if !variable.admits(&set) {
            let err = if variable.kind() == set.kind() {
                SetError::UniverseMismatch
            } else {
                SetError::KindMismatch {
                    left: variable.kind(),
                    right: set.kind(),
                }
            };
            return Err(err.into());
        }
        self.assignments.insert(variable, set);
        Ok(self)
    }

    /// Iterates the constrained variables in order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.assignments.keys()
    }

    /// Iterates the assignments in variable order.
    pub fn assignments(&self) -> impl Iterator<Item = (&Variable, &ComplexSet)> + '_ {
        self.assignments.iter()
    }

    /// Returns the set assigned to the given variable, if the box
    /// constrains it.
    #[inline]
    pub fn assignment(&self, variable: &Variable) -> Option<&ComplexSet> {
        self.assignments.get(variable)
    }

    /// Returns the set assigned to the given variable, or the variable's
    /// full domain if the box does not constrain it.
    pub fn assignment_or_domain(&self, variable: &Variable) -> ComplexSet {
        self.assignments
            .get(variable)
            .cloned()
            .unwrap_or_else(|| variable.domain())
    }

    /// Returns the number of constrained variables.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if the box denotes the empty event: it constrains no
    /// variables, or some assignment is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty() || self.assignments.values().any(ComplexSet::is_empty)
    }

    /// Returns the box extended with an explicit full-domain assignment for
    /// every listed variable it does not already constrain.
    pub fn completed_over<'a, I>(&self, variables: I) -> Self
    where
        I: IntoIterator<Item = &'a Variable>,
    {
        let mut assignments = self.assignments.clone();
        for variable in variables {
            if !assignments.contains_key(variable) {
                assignments.insert(variable.clone(), variable.domain());
            }
        }
        Self { assignments }
    }

    /// Calculates the intersection of two boxes over the union of their
    /// variable sets. Dimensions constrained by only one operand keep that
    /// operand's assignment.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Set`] if the boxes assign incompatible sets to
    /// a shared variable.
    pub fn intersection(&self, other: &Self) -> Result<Self, EventError> {
        let mut assignments = BTreeMap::new();
        for (variable, set) in &self.assignments {
            let combined = match other.assignments.get(variable) {
                Some(other_set) => set.intersection(other_set)?,
                None => set.clone(),
            };
            assignments.insert(variable.clone(), combined);
        }
        for (variable, set) in &other.assignments {
            if !self.assignments.contains_key(variable) {
                assignments.insert(variable.clone(), set.clone());
            }
        }
        Ok(Self { assignments })
    }

    /// Calculates the complement of the box within the product space of its
    /// own variables, as a list of pairwise-disjoint boxes.
    ///
    /// Piece `i` of the sweep complements the `i`-th dimension, keeps the
    /// original assignment on every earlier dimension and is unconstrained
    /// on every later one. Empty pieces are dropped; the box over zero
    /// variables has an empty complement.
    pub fn complement(&self) -> Vec<Self> {
        let mut pieces = Vec::new();
        for (i, (variable, assignment)) in self.assignments.iter().enumerate() {
            let mut piece = BTreeMap::new();
            piece.insert(variable.clone(), assignment.complement());
            for (j, (other_variable, other_assignment)) in self.assignments.iter().enumerate() {
                match j.cmp(&i) {
                    std::cmp::Ordering::Less => {
                        piece.insert(other_variable.clone(), other_assignment.clone());
                    }
                    std::cmp::Ordering::Equal => {}
                    std::cmp::Ordering::Greater => {
                        piece.insert(other_variable.clone(), other_variable.domain());
                    }
                }
            }
            let piece = Self { assignments: piece };
            if !piece.is_empty() {
                pieces.push(piece);
            }
        }
        pieces
    }

    /// Calculates the complement as a normalized [`Event`].
    ///
    /// # Errors
    ///
    /// Same as [`Event::new`].
    pub fn complement_event(&self) -> Result<Event, EventError> {
        Event::new(self.complement())
    }

    /// Calculates the union of two boxes as a normalized [`Event`]:
    /// disjoint boxes stay side by side, overlapping ones are carved into
    /// disjoint pieces.
    ///
    /// # Errors
    ///
    /// Same as [`Event::new`].
    pub fn union(&self, other: &Self) -> Result<Event, EventError> {
        Event::new([self.clone(), other.clone()])
    }

    /// Calculates the difference `self - other` as a list of
    /// pairwise-disjoint boxes.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Set`] if the boxes assign incompatible sets to
    /// a shared variable.
    pub fn difference(&self, other: &Self) -> Result<Vec<Self>, EventError> {
        let shared = self.intersection(other)?;
        if shared.is_empty() {
            return Ok(vec![self.clone()]);
        }
        let mut pieces = Vec::new();
        for piece in shared.complement() {
            let remainder = self.intersection(&piece)?;
            if !remainder.is_empty() {
                pieces.push(remainder);
            }
        }
        Ok(pieces)
    }

    /// Returns `true` if the point lies inside the box.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingAssignment`] if the point carries no
    /// value for a constrained variable, or [`EventError::Set`] if a value
    /// has the wrong kind for its variable.
    pub fn contains(&self, point: &Point) -> Result<bool, EventError> {
        if self.is_empty() {
            return Ok(false);
        }
        for (variable, set) in &self.assignments {
            let value = point
                .get(variable)
                .ok_or_else(|| EventError::MissingAssignment {
                    variable: variable.name().to_string(),
                })?;
            if !Self::set_contains_value(set, value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn set_contains_value(set: &ComplexSet, value: &PointValue) -> Result<bool, EventError> {
        match (set, value) {
            (ComplexSet::Continuous(set), PointValue::Continuous(value)) => {
                Ok(set.contains_point(*value))
            }
            (ComplexSet::Symbolic(set), PointValue::Symbolic(symbol)) => Ok(set.contains(symbol)),
            (set, value) => Err(SetError::KindMismatch {
                left: set.kind(),
                right: value.kind(),
            }
            .into()),
        }
    }
}

impl std::fmt::Display for SimpleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.assignments.is_empty() {
            return write!(f, "∅");
        }
        write!(f, "{{")?;
        for (i, (variable, set)) in self.assignments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", variable, set)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borel_core::math::interval::SimpleInterval;
    use borel_sets::{symbol_set::SymbolSet, universe::SymbolUniverse};

    fn x() -> Variable {
        Variable::continuous("x")
    }

    fn y() -> Variable {
        Variable::continuous("y")
    }

    fn boxed(x_lower: f64, x_upper: f64, y_lower: f64, y_upper: f64) -> SimpleEvent {
        SimpleEvent::from_assignments([
            (x(), SimpleInterval::closed(x_lower, x_upper).into()),
            (y(), SimpleInterval::closed(y_lower, y_upper).into()),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_cases() {
        assert!(SimpleEvent::new().is_empty());

        let degenerate = SimpleEvent::from_assignments([(
            x(),
            ComplexSet::from(SimpleInterval::<f64>::empty()),
        )])
        .unwrap();
        assert!(degenerate.is_empty());

        assert!(!boxed(0.0, 1.0, 0.0, 1.0).is_empty());
        assert!(!SimpleEvent::unconstrained([x(), y()]).is_empty());
    }

    #[test]
    fn test_with_rejects_mismatches() {
        let universe = SymbolUniverse::shared(["a", "b"]);
        let s = Variable::symbolic("s", universe.clone());

        // Continuous variable, symbolic set.
        let err = SimpleEvent::new()
            .with(x(), ComplexSet::from(SymbolSet::full(universe.clone())))
            .unwrap_err();
        assert!(matches!(err, EventError::Set(SetError::KindMismatch { .. })));

        // Symbolic variable, foreign universe.
        let foreign = SymbolUniverse::shared(["u", "v"]);
        let err = SimpleEvent::new()
            .with(s, ComplexSet::from(SymbolSet::full(foreign)))
            .unwrap_err();
        assert!(matches!(err, EventError::Set(SetError::UniverseMismatch)));
    }

    #[test]
    fn test_intersection_merges_variable_sets() {
        let a = SimpleEvent::from_assignments([(x(), SimpleInterval::closed(0.0, 2.0).into())])
            .unwrap();
        let b = SimpleEvent::from_assignments([
            (x(), SimpleInterval::closed(1.0, 3.0).into()),
            (y(), SimpleInterval::closed(0.0, 1.0).into()),
        ])
        .unwrap();

        let shared = a.intersection(&b).unwrap();
        assert_eq!(
            shared.assignment(&x()),
            Some(&ComplexSet::from(SimpleInterval::closed(1.0, 2.0)))
        );
        // The dimension only `b` constrains keeps `b`'s assignment.
        assert_eq!(
            shared.assignment(&y()),
            Some(&ComplexSet::from(SimpleInterval::closed(0.0, 1.0)))
        );
    }

    #[test]
    fn test_intersection_disjoint_is_empty() {
        let a = boxed(0.0, 1.0, 0.0, 1.0);
        let b = boxed(2.0, 3.0, 0.0, 1.0);
        assert!(a.intersection(&b).unwrap().is_empty());
    }

    #[test]
    fn test_complement_sweep_shape() {
        let unit = boxed(0.0, 1.0, 0.0, 1.0);
        let pieces = unit.complement();
        assert_eq!(pieces.len(), 2);

        // First piece: x complemented, y unconstrained.
        assert_eq!(
            pieces[0].assignment(&x()),
            Some(&ComplexSet::from(SimpleInterval::closed(0.0, 1.0)).complement())
        );
        assert_eq!(pieces[0].assignment(&y()), Some(&y().domain()));

        // Second piece: x keeps its original assignment, y complemented.
        assert_eq!(
            pieces[1].assignment(&x()),
            Some(&ComplexSet::from(SimpleInterval::closed(0.0, 1.0)))
        );
        assert_eq!(
            pieces[1].assignment(&y()),
            Some(&ComplexSet::from(SimpleInterval::closed(0.0, 1.0)).complement())
        );
    }

    #[test]
    fn test_complement_pieces_are_disjoint() {
        let unit = boxed(0.0, 1.0, 0.0, 1.0);
        let pieces = unit.complement();
        for (i, a) in pieces.iter().enumerate() {
            // Disjoint from the box itself and from every other piece.
            assert!(a.intersection(&unit).unwrap().is_empty());
            for b in pieces.iter().skip(i + 1) {
                assert!(a.intersection(b).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_complement_of_universal_is_empty() {
        let pieces = SimpleEvent::unconstrained([x(), y()]).complement();
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_difference() {
        let a = SimpleEvent::from_assignments([(x(), SimpleInterval::closed(0.0, 3.0).into())])
            .unwrap();
        let b = SimpleEvent::from_assignments([(x(), SimpleInterval::closed(1.0, 2.0).into())])
            .unwrap();

        let pieces = a.difference(&b).unwrap();
        assert_eq!(pieces.len(), 1);
        let expected = ComplexSet::from(SimpleInterval::closed(0.0, 3.0))
            .difference(&SimpleInterval::closed(1.0, 2.0).into())
            .unwrap();
        assert_eq!(pieces[0].assignment(&x()), Some(&expected));

        // Disjoint operands: difference is the whole left operand.
        let c = SimpleEvent::from_assignments([(x(), SimpleInterval::closed(9.0, 10.0).into())])
            .unwrap();
        assert_eq!(a.difference(&c).unwrap(), vec![a.clone()]);
    }

    #[test]
    fn test_difference_covers_without_overlap() {
        // a - b carved into boxes: each piece inside a, outside b, pairwise
        // disjoint.
        let a = boxed(0.0, 2.0, 0.0, 2.0);
        let b = boxed(1.0, 3.0, 1.0, 3.0);
        let pieces = a.difference(&b).unwrap();
        assert!(!pieces.is_empty());
        for (i, piece) in pieces.iter().enumerate() {
            assert!(piece.intersection(&b).unwrap().is_empty());
            assert_eq!(piece.intersection(&a).unwrap(), piece.clone());
            for other in pieces.iter().skip(i + 1) {
                assert!(piece.intersection(other).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_union_of_disjoint_boxes_keeps_both() {
        let a = boxed(0.0, 1.0, 0.0, 1.0);
        let b = boxed(5.0, 6.0, 5.0, 6.0);
        let union = a.union(&b).unwrap();
        assert_eq!(union.simple_events().len(), 2);
    }

    #[test]
    fn test_complement_event_round_trip() {
        let unit = boxed(0.0, 1.0, 0.0, 1.0);
        let complement = unit.complement_event().unwrap();
        let restored = complement.complement().unwrap();
        assert!(restored
            .equivalent(&Event::from_simple_event(unit).unwrap())
            .unwrap());
    }

    #[test]
    fn test_contains() {
        let unit = boxed(0.0, 1.0, 0.0, 1.0);
        let inside = Point::new().with(x(), 0.5).with(y(), 0.5);
        let outside = Point::new().with(x(), 0.5).with(y(), 1.5);
        assert!(unit.contains(&inside).unwrap());
        assert!(!unit.contains(&outside).unwrap());

        // Empty event contains nothing.
        assert!(!SimpleEvent::new().contains(&inside).unwrap());
    }

    #[test]
    fn test_contains_missing_value() {
        let unit = boxed(0.0, 1.0, 0.0, 1.0);
        let partial = Point::new().with(x(), 0.5);
        let err = unit.contains(&partial).unwrap_err();
        assert_eq!(
            err,
            EventError::MissingAssignment {
                variable: "y".to_string()
            }
        );
    }

    #[test]
    fn test_contains_kind_mismatch() {
        let unit = boxed(0.0, 1.0, 0.0, 1.0);
        let wrong = Point::new().with(x(), "a").with(y(), 0.5);
        assert!(matches!(
            unit.contains(&wrong).unwrap_err(),
            EventError::Set(SetError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_mixed_kinds() {
        let universe = SymbolUniverse::shared(["red", "green", "blue"]);
        let color = Variable::symbolic("color", universe.clone());
        let event = SimpleEvent::from_assignments([
            (x(), SimpleInterval::closed(0.0, 1.0).into()),
            (
                color.clone(),
                SymbolSet::new(universe, ["red", "green"]).unwrap().into(),
            ),
        ])
        .unwrap();

        let hit = Point::new().with(x(), 0.5).with(color.clone(), "red");
        let miss = Point::new().with(x(), 0.5).with(color.clone(), "blue");
        assert!(event.contains(&hit).unwrap());
        assert!(!event.contains(&miss).unwrap());

        let pieces = event.complement();
        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert!(piece.intersection(&event).unwrap().is_empty());
        }
    }

    #[test]
    fn test_display() {
        let event = SimpleEvent::from_assignments([(
            x(),
            SimpleInterval::closed(0.0, 1.0).into(),
        )])
        .unwrap();
        assert_eq!(format!("{}", event), "{x: [0, 1]}");
        assert_eq!(format!("{}", SimpleEvent::new()), "∅");
    }
}
