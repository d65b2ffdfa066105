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

//! Events: disjoint unions of axis-aligned boxes.
//!
//! An `Event` is the externally meaningful event type of the product
//! algebra. Construction normalizes any list of boxes into canonical form:
//! every box is completed over the event's full variable set, empty boxes
//! are dropped, overlapping boxes are carved into pairwise-disjoint pieces
//! (the disjointing fixed point), and boxes that differ in exactly one
//! dimension are merged back together. All algebra goes through this
//! normalization, so the disjointness invariant holds on every value that
//! escapes this module.

use crate::{
    error::EventError,
    point::Point,
    simple_event::SimpleEvent,
    variable::Variable,
};
use std::collections::BTreeSet;

/// A disjoint union of axis-aligned boxes over a fixed variable set.
///
/// # Examples
///
/// ```rust
/// # use borel_core::math::interval::SimpleInterval;
/// # use borel_events::event::Event;
/// # use borel_events::simple_event::SimpleEvent;
/// # use borel_events::variable::Variable;
///
/// let x = Variable::continuous("x");
/// let a = SimpleEvent::from_assignments([(x.clone(), SimpleInterval::closed(0.0, 2.0).into())]).unwrap();
/// let b = SimpleEvent::from_assignments([(x.clone(), SimpleInterval::closed(1.0, 3.0).into())]).unwrap();
///
/// let union = Event::new([a, b]).unwrap();
/// assert!(!union.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Event {
    variables: BTreeSet<Variable>,
    simple_events: Vec<SimpleEvent>,
}

impl Event {
    /// Creates the empty event over zero variables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an event from a list of boxes and normalizes it: the
    /// variable set is the union of all box variables, every box is
    /// completed over it, empty boxes are dropped, the rest are made
    /// pairwise disjoint and then simplified.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Set`] if any pair of boxes assigns
    /// incompatible sets to a shared variable.
    pub fn new<I>(simple_events: I) -> Result<Self, EventError>
    where
        I: IntoIterator<Item = SimpleEvent>,
    {
        let members: Vec<SimpleEvent> = simple_events.into_iter().collect();

        // The variable set covers every input box, dropped or not, so the
        // complement of an event built from only-empty boxes still knows
        // its space.
        let variables: BTreeSet<Variable> = members
            .iter()
            .flat_map(|member| member.variables().cloned())
            .collect();

        let members: Vec<SimpleEvent> = members
            .iter()
            .map(|member| member.completed_over(&variables))
            .filter(|member| !member.is_empty())
            .collect();

        let members = make_disjoint(members)?;
        Self::from_disjoint(variables, members)
    }

    /// Wraps a single box as an event.
    ///
    /// # Errors
    ///
    /// Same as [`Event::new`].
    pub fn from_simple_event(simple_event: SimpleEvent) -> Result<Self, EventError> {
        Self::new([simple_event])
    }

    /// Builds an event from boxes already known to be pairwise disjoint and
    /// complete over `variables`, running only the simplification pass.
    fn from_disjoint(
        variables: BTreeSet<Variable>,
        members: Vec<SimpleEvent>,
    ) -> Result<Self, EventError> {
        let simple_events = simplify(members, &variables)?;
        Ok(Self {
            variables,
            simple_events,
        })
    }

    /// Returns the event's variable set.
    #[inline]
    pub fn variables(&self) -> &BTreeSet<Variable> {
        &self.variables
    }

    /// Returns the pairwise-disjoint boxes whose union is the event.
    #[inline]
    pub fn simple_events(&self) -> &[SimpleEvent] {
        &self.simple_events
    }

    /// Returns `true` if the event denotes the empty set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.simple_events.is_empty()
    }

    /// Calculates the union of two events.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Set`] if the operands assign incompatible sets
    /// to a shared variable.
    pub fn union(&self, other: &Self) -> Result<Self, EventError> {
        let members = self
            .simple_events
            .iter()
            .chain(other.simple_events.iter())
            .cloned();
        Self::new(members)
    }

    /// Calculates the intersection of two events.
    ///
    /// Pairwise box intersections of two disjoint families are disjoint, so
    /// no re-disjointing is needed.
    ///
    /// # Errors
    ///
    /// Same as [`Event::union`].
    pub fn intersection(&self, other: &Self) -> Result<Self, EventError> {
        let variables: BTreeSet<Variable> = self
            .variables
            .union(&other.variables)
            .cloned()
            .collect();
        let mut members = Vec::new();
        for a in &self.simple_events {
            for b in &other.simple_events {
                let shared = a.intersection(b)?;
                if !shared.is_empty() {
                    members.push(shared);
                }
            }
        }
        Self::from_disjoint(variables, members)
    }

    /// Calculates the complement within the product space of the event's
    /// own variables.
    ///
    /// The complement of the empty event is the universal event over its
    /// variables; with zero variables that is again the empty event. For a
    /// non-empty event the member complements are intersected, De Morgan
    /// style.
    ///
    /// # Errors
    ///
    /// Same as [`Event::union`].
    pub fn complement(&self) -> Result<Self, EventError> {
        let mut members = match self.simple_events.first() {
            None => {
                let universal = SimpleEvent::unconstrained(self.variables.iter().cloned());
                return Self::from_disjoint(
                    self.variables.clone(),
                    if universal.is_empty() {
                        Vec::new()
                    } else {
                        vec![universal]
                    },
                );
            }
            Some(first) => first.complement(),
        };

        for member in &self.simple_events[1..] {
            let pieces = member.complement();
            let mut next = Vec::new();
            for a in &members {
                for b in &pieces {
                    let shared = a.intersection(b)?;
                    if !shared.is_empty() {
                        next.push(shared);
                    }
                }
            }
            members = next;
        }

        Self::from_disjoint(self.variables.clone(), members)
    }

    /// Calculates the difference `self - other`.
    ///
    /// Subtracting an empty event returns `self` unchanged. Going through
    /// the complement instead would lose `self` whenever `other` has no
    /// variables, since the zero-variable complement is empty.
    ///
    /// # Errors
    ///
    /// Same as [`Event::union`].
    pub fn difference(&self, other: &Self) -> Result<Self, EventError> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        self.intersection(&other.complement()?)
    }

    /// Returns `true` if the point lies in the event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::MissingAssignment`] if the point carries no
    /// value for one of the event's variables, or [`EventError::Set`] if a
    /// value has the wrong kind.
    pub fn contains(&self, point: &Point) -> Result<bool, EventError> {
        for member in &self.simple_events {
            if member.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `true` if `other` is a subset of `self`.
    ///
    /// # Errors
    ///
    /// Same as [`Event::union`].
    pub fn contains_event(&self, other: &Self) -> Result<bool, EventError> {
        Ok(other.difference(self)?.is_empty())
    }

    /// Returns `true` if the two events denote the same set, regardless of
    /// how it is carved into boxes.
    ///
    /// Structural equality ([`PartialEq`]) compares the box decompositions;
    /// this compares the denoted sets via mutual difference.
    ///
    /// # Errors
    ///
    /// Same as [`Event::union`].
    pub fn equivalent(&self, other: &Self) -> Result<bool, EventError> {
        Ok(self.difference(other)?.is_empty() && other.difference(self)?.is_empty())
    }
}

/// Structural equality: same variable set and the same boxes, in any order.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
            && self.simple_events.len() == other.simple_events.len()
            && self
                .simple_events
                .iter()
                .all(|member| other.simple_events.contains(member))
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.simple_events.is_empty() {
            return write!(f, "∅");
        }
        for (i, member) in self.simple_events.iter().enumerate() {
            if i > 0 {
                write!(f, " u ")?;
            }
            write!(f, "{}", member)?;
        }
        Ok(())
    }
}

/// Appends `candidate` unless an identical box is already present.
fn push_unique(members: &mut Vec<SimpleEvent>, candidate: SimpleEvent) {
    if !members.contains(&candidate) {
        members.push(candidate);
    }
}

/// One round of disjointing: each box minus all others becomes a settled
/// disjoint piece; every pairwise overlap is collected for the next round.
fn split_disjoint(
    members: &[SimpleEvent],
) -> Result<(Vec<SimpleEvent>, Vec<SimpleEvent>), EventError> {
    let mut disjoint = Vec::new();
    let mut overlaps = Vec::new();
    for (i, member) in members.iter().enumerate() {
        let mut remainders = vec![member.clone()];
        for (j, other) in members.iter().enumerate() {
            if i == j {
                continue;
            }
            let shared = member.intersection(other)?;
            if shared.is_empty() {
                continue;
            }
            // Each unordered pair contributes its overlap once.
            if j > i {
                push_unique(&mut overlaps, shared);
            }
            let mut next = Vec::new();
            for piece in &remainders {
                next.extend(piece.difference(other)?);
            }
            remainders = next;
        }
        for piece in remainders {
            push_unique(&mut disjoint, piece);
        }
    }
    Ok((disjoint, overlaps))
}

/// Carves a list of boxes into pairwise-disjoint boxes with the same union.
///
/// Iterates [`split_disjoint`] to a fixed point: settled pieces accumulate,
/// the collected overlaps (each strictly smaller than its parents) are fed
/// into the next round until none remain.
fn make_disjoint(members: Vec<SimpleEvent>) -> Result<Vec<SimpleEvent>, EventError> {
    let (mut disjoint, mut overlaps) = split_disjoint(&members)?;
    while !overlaps.is_empty() {
        let (settled, rest) = split_disjoint(&overlaps)?;
        for piece in settled {
            push_unique(&mut disjoint, piece);
        }
        overlaps = rest;
    }
    Ok(disjoint)
}

/// Merges boxes that differ in exactly one dimension until no such pair
/// remains. Identical boxes collapse to one.
fn simplify(
    mut members: Vec<SimpleEvent>,
    variables: &BTreeSet<Variable>,
) -> Result<Vec<SimpleEvent>, EventError> {
    'scan: loop {
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                if let Some(merged) = merge_on_one_axis(&members[i], &members[j], variables)? {
                    let mut next: Vec<SimpleEvent> = members
                        .iter()
                        .enumerate()
                        .filter(|(k, _)| *k != i && *k != j)
                        .map(|(_, member)| member.clone())
                        .collect();
                    next.push(merged);
                    members = next;
                    continue 'scan;
                }
            }
        }
        return Ok(members);
    }
}

/// If `a` and `b` agree on all but one dimension, returns the box with that
/// dimension's assignments united; identical boxes yield `a` itself.
fn merge_on_one_axis(
    a: &SimpleEvent,
    b: &SimpleEvent,
    variables: &BTreeSet<Variable>,
) -> Result<Option<SimpleEvent>, EventError> {
    let mut differing = None;
    for variable in variables {
        if a.assignment(variable) != b.assignment(variable) {
            if differing.is_some() {
                return Ok(None);
            }
            differing = Some(variable);
        }
    }
    let Some(variable) = differing else {
        return Ok(Some(a.clone()));
    };
    let united = a
        .assignment_or_domain(variable)
        .union(&b.assignment_or_domain(variable))?;
    Ok(Some(a.clone().with(variable.clone(), united)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Variable;
    use borel_core::math::interval::SimpleInterval;
    use borel_sets::{set::ComplexSet, symbol_set::SymbolSet, universe::SymbolUniverse};
    use rand::{rngs::StdRng, Rng, SeedableRng};

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

    fn assert_pairwise_disjoint(event: &Event) {
        let members = event.simple_events();
        for (i, a) in members.iter().enumerate() {
            for b in members.iter().skip(i + 1) {
                assert!(
                    a.intersection(b).unwrap().is_empty(),
                    "members overlap: {} and {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_empty_event() {
        let event = Event::empty();
        assert!(event.is_empty());
        assert!(event.variables().is_empty());
        // Zero variables: the complement is empty as well.
        assert!(event.complement().unwrap().is_empty());
    }

    #[test]
    fn test_construction_drops_empty_boxes_keeps_variables() {
        let hollow = SimpleEvent::from_assignments([(
            x(),
            ComplexSet::from(SimpleInterval::<f64>::empty()),
        )])
        .unwrap();
        let event = Event::new([hollow]).unwrap();
        assert!(event.is_empty());
        assert_eq!(event.variables().len(), 1);

        // Its complement is the universal event over x.
        let complement = event.complement().unwrap();
        assert_eq!(complement.simple_events().len(), 1);
        assert_eq!(
            complement.simple_events()[0].assignment(&x()),
            Some(&x().domain())
        );
    }

    #[test]
    fn test_union_of_overlapping_boxes_is_disjoint() {
        // Two overlapping unit squares carve into three disjoint boxes.
        let a = boxed(0.0, 1.0, 0.0, 1.0);
        let b = boxed(0.5, 1.5, 0.5, 1.5);
        let union = Event::new([a, b]).unwrap();

        assert_eq!(union.simple_events().len(), 3);
        assert_pairwise_disjoint(&union);
    }

    #[test]
    fn test_union_sampling_agrees_with_operands() {
        let a = boxed(0.0, 1.0, 0.0, 1.0);
        let b = boxed(0.5, 1.5, 0.5, 1.5);
        let union = Event::new([a.clone(), b.clone()]).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let point = Point::new()
                .with(x(), rng.gen_range(-0.5..2.0))
                .with(y(), rng.gen_range(-0.5..2.0));
            let expected =
                a.contains(&point).unwrap() || b.contains(&point).unwrap();
            assert_eq!(union.contains(&point).unwrap(), expected, "at {}", point);
        }
    }

    #[test]
    fn test_adjacent_boxes_simplify_to_one() {
        let lower = boxed(0.0, 1.0, 0.0, 1.0);
        let upper = boxed(0.0, 1.0, 1.0, 2.0);
        let union = Event::new([lower, upper]).unwrap();

        let expected = Event::new([boxed(0.0, 1.0, 0.0, 2.0)]).unwrap();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_intersection() {
        let a = Event::new([boxed(0.0, 2.0, 0.0, 2.0)]).unwrap();
        let b = Event::new([boxed(1.0, 3.0, 1.0, 3.0)]).unwrap();
        let shared = a.intersection(&b).unwrap();
        assert_eq!(shared, Event::new([boxed(1.0, 2.0, 1.0, 2.0)]).unwrap());

        let far = Event::new([boxed(10.0, 11.0, 10.0, 11.0)]).unwrap();
        assert!(a.intersection(&far).unwrap().is_empty());
    }

    #[test]
    fn test_complement_and_back() {
        let event = Event::new([boxed(0.0, 1.0, 0.0, 1.0)]).unwrap();
        let complement = event.complement().unwrap();
        assert_pairwise_disjoint(&complement);

        // An event and its complement partition the space.
        assert!(event.intersection(&complement).unwrap().is_empty());
        let everything = event.union(&complement).unwrap();
        let universal =
            Event::new([SimpleEvent::unconstrained([x(), y()])]).unwrap();
        assert!(everything.equivalent(&universal).unwrap());

        // Double complement restores the denoted set.
        let restored = complement.complement().unwrap();
        assert!(restored.equivalent(&event).unwrap());
    }

    #[test]
    fn test_de_morgan() {
        let a = Event::new([boxed(0.0, 1.0, 0.0, 1.0)]).unwrap();
        let b = Event::new([boxed(0.5, 1.5, 0.5, 1.5)]).unwrap();

        let lhs = a.union(&b).unwrap().complement().unwrap();
        let rhs = a
            .complement()
            .unwrap()
            .intersection(&b.complement().unwrap())
            .unwrap();
        assert!(lhs.equivalent(&rhs).unwrap());
    }

    #[test]
    fn test_difference() {
        let a = Event::new([boxed(0.0, 2.0, 0.0, 2.0)]).unwrap();
        let b = Event::new([boxed(1.0, 3.0, 1.0, 3.0)]).unwrap();
        let diff = a.difference(&b).unwrap();
        assert_pairwise_disjoint(&diff);

        // Sampled points: in the difference iff in a and not in b.
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let point = Point::new()
                .with(x(), rng.gen_range(-1.0..4.0))
                .with(y(), rng.gen_range(-1.0..4.0));
            let expected =
                a.contains(&point).unwrap() && !b.contains(&point).unwrap();
            assert_eq!(diff.contains(&point).unwrap(), expected, "at {}", point);
        }

        assert!(a.difference(&a).unwrap().is_empty());
    }

    #[test]
    fn test_difference_with_empty_is_identity() {
        let a = Event::new([boxed(0.0, 1.0, 0.0, 1.0)]).unwrap();
        let diff = a.difference(&Event::empty()).unwrap();
        assert_eq!(diff, a);
        assert!(diff.equivalent(&a).unwrap());

        // The empty event contains nothing but is contained in everything.
        assert!(!Event::empty().contains_event(&a).unwrap());
        assert!(a.contains_event(&Event::empty()).unwrap());
        assert!(!a.equivalent(&Event::empty()).unwrap());
    }

    #[test]
    fn test_operations_across_different_variable_sets() {
        // An event constraining only x against one constraining x and y.
        let line = Event::new([SimpleEvent::from_assignments([(
            x(),
            SimpleInterval::closed(0.0, 1.0).into(),
        )])
        .unwrap()])
        .unwrap();
        let square = Event::new([boxed(0.5, 2.0, 0.0, 1.0)]).unwrap();

        let shared = line.intersection(&square).unwrap();
        assert_eq!(shared.variables().len(), 2);
        // x is constrained by both operands, y only by the square.
        let inside = Point::new().with(x(), 0.75).with(y(), 0.5);
        let above = Point::new().with(x(), 0.75).with(y(), 2.0);
        assert!(shared.contains(&inside).unwrap());
        assert!(!shared.contains(&above).unwrap());

        let union = line.union(&square).unwrap();
        assert_eq!(union.variables().len(), 2);
        assert_pairwise_disjoint(&union);
        // The line operand leaves y unconstrained in the union.
        let line_only = Point::new().with(x(), 0.25).with(y(), 5.0);
        let outside = Point::new().with(x(), 3.0).with(y(), 0.5);
        assert!(union.contains(&line_only).unwrap());
        assert!(!union.contains(&outside).unwrap());
    }

    #[test]
    fn test_containment() {
        let big = Event::new([boxed(0.0, 4.0, 0.0, 4.0)]).unwrap();
        let small = Event::new([boxed(1.0, 2.0, 1.0, 2.0)]).unwrap();
        assert!(big.contains_event(&small).unwrap());
        assert!(!small.contains_event(&big).unwrap());
        assert!(big.contains_event(&Event::empty()).unwrap());
    }

    #[test]
    fn test_equivalence_ignores_decomposition() {
        // The same rectangle carved two ways.
        let whole = Event::new([boxed(0.0, 2.0, 0.0, 1.0)]).unwrap();
        let halves = Event::new([boxed(0.0, 1.0, 0.0, 1.0), boxed(1.0, 2.0, 0.0, 1.0)])
            .unwrap();
        assert!(whole.equivalent(&halves).unwrap());
        // Simplification merges the halves, so these are structurally equal
        // too.
        assert_eq!(whole, halves);
    }

    #[test]
    fn test_mixed_kind_event() {
        let universe = SymbolUniverse::shared(["red", "green", "blue"]);
        let color = Variable::symbolic("color", universe.clone());

        let warm = SimpleEvent::from_assignments([
            (x(), SimpleInterval::closed(0.0, 1.0).into()),
            (
                color.clone(),
                SymbolSet::new(universe.clone(), ["red"]).unwrap().into(),
            ),
        ])
        .unwrap();
        let cool = SimpleEvent::from_assignments([
            (x(), SimpleInterval::closed(0.0, 1.0).into()),
            (
                color.clone(),
                SymbolSet::new(universe, ["blue"]).unwrap().into(),
            ),
        ])
        .unwrap();

        // Same interval, color sets differ: the one-axis merge unites them.
        let event = Event::new([warm, cool]).unwrap();
        assert_eq!(event.simple_events().len(), 1);

        let red = Point::new().with(x(), 0.5).with(color.clone(), "red");
        let green = Point::new().with(x(), 0.5).with(color.clone(), "green");
        assert!(event.contains(&red).unwrap());
        assert!(!event.contains(&green).unwrap());

        let complement = event.complement().unwrap();
        assert_pairwise_disjoint(&complement);
        assert!(complement.contains(&green).unwrap());
        assert!(!complement.contains(&red).unwrap());
    }

    #[test]
    fn test_three_way_overlap_terminates_disjoint() {
        let a = boxed(0.0, 2.0, 0.0, 2.0);
        let b = boxed(1.0, 3.0, 1.0, 3.0);
        let c = boxed(0.5, 2.5, 0.5, 2.5);
        let union = Event::new([a.clone(), b.clone(), c.clone()]).unwrap();
        assert_pairwise_disjoint(&union);

        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..1000 {
            let point = Point::new()
                .with(x(), rng.gen_range(-0.5..3.5))
                .with(y(), rng.gen_range(-0.5..3.5));
            let expected = a.contains(&point).unwrap()
                || b.contains(&point).unwrap()
                || c.contains(&point).unwrap();
            assert_eq!(union.contains(&point).unwrap(), expected, "at {}", point);
        }
    }

    #[test]
    fn test_display() {
        let event = Event::new([boxed(0.0, 1.0, 0.0, 1.0)]).unwrap();
        assert_eq!(format!("{}", event), "{x: [0, 1], y: [0, 1]}");
        assert_eq!(format!("{}", Event::empty()), "∅");
    }
}
