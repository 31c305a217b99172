//! A collection of independent curves with one selected for editing.

use kurbo::Size;

use crate::control_loop::ControlLoop;
use crate::knot::SplineEngine;
use crate::vector::Vector2;

/// A control loop together with the curve last generated from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slot {
    pub control: ControlLoop,
    /// Derived from `control`; rebuilt by [`CurveSet::refresh`].
    knot: Vec<Vector2>,
}

impl Slot {
    /// The curve as of the last refresh.
    pub fn knot(&self) -> &[Vector2] {
        &self.knot
    }
}

/// An ordered set of curves, always holding at least one.
///
/// The selection starts at the first curve. Selecting past the last curve
/// creates a new, empty one.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSet {
    slots: Vec<Slot>,
    selected: usize,
}

impl Default for CurveSet {
    fn default() -> Self {
        CurveSet::new()
    }
}

impl CurveSet {
    /// A set with a single empty curve, selected.
    pub fn new() -> CurveSet {
        CurveSet {
            slots: vec![Slot::default()],
            selected: 0,
        }
    }

    /// Build a set from existing loops, selecting the first.
    ///
    /// An empty iterator gives the same result as [`CurveSet::new`].
    pub fn from_loops(loops: impl IntoIterator<Item = ControlLoop>) -> CurveSet {
        let mut slots: Vec<Slot> = loops
            .into_iter()
            .map(|control| Slot {
                control,
                knot: Vec::new(),
            })
            .collect();
        if slots.is_empty() {
            slots.push(Slot::default());
        }
        CurveSet { slots, selected: 0 }
    }

    /// Move the selection to the next curve, creating it if needed.
    pub fn select_next(&mut self) {
        self.selected += 1;
        if self.selected >= self.slots.len() {
            self.slots.push(Slot::default());
            log::debug!("created curve {}", self.selected);
        }
    }

    /// Move the selection to the previous curve, stopping at the first.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Discard every curve and start over with a single empty one.
    pub fn reset(&mut self) {
        log::debug!("discarding {} curves", self.slots.len());
        *self = CurveSet::new();
    }

    pub fn current(&self) -> &ControlLoop {
        &self.slots[self.selected].control
    }

    pub fn current_mut(&mut self) -> &mut ControlLoop {
        &mut self.slots[self.selected].control
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the set has no curves, which never holds after construction.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn loops(&self) -> impl Iterator<Item = &ControlLoop> + '_ {
        self.slots.iter().map(|slot| &slot.control)
    }

    /// The cached curve of every slot, in order.
    pub fn knots(&self) -> impl Iterator<Item = &[Vector2]> + '_ {
        self.slots.iter().map(Slot::knot)
    }

    /// Move the control points of every curve.
    pub fn advance(&mut self, bounds: Size) {
        for slot in &mut self.slots {
            slot.control.advance(bounds);
        }
    }

    /// Regenerate every cached curve from its current control points.
    pub fn refresh(&mut self, engine: &SplineEngine, steps: usize) {
        for slot in &mut self.slots {
            slot.knot = engine.generate(&slot.control, steps);
        }
    }
}
