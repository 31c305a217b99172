//! Conversion of curves to kurbo shapes for drawing.

use kurbo::{BezPath, Circle};

use crate::control_loop::ControlLoop;
use crate::curve_set::CurveSet;
use crate::vector::Vector2;

/// Render a generated curve as a closed polyline.
pub fn knot_path(knot: &[Vector2]) -> BezPath {
    let mut path = BezPath::new();
    knot_extend(knot, &mut path);
    path
}

/// Append a closed polyline through `knot` to `path`.
///
/// Nothing is appended for an empty curve.
pub fn knot_extend(knot: &[Vector2], path: &mut BezPath) {
    let mut pts = knot.iter().map(|p| p.to_point());
    if let Some(first) = pts.next() {
        path.move_to(first);
        for p in pts {
            path.line_to(p);
        }
        path.close_path();
    }
}

/// Render every cached curve in the set, one subpath each.
pub fn render_set(set: &CurveSet) -> BezPath {
    let mut path = BezPath::new();
    for knot in set.knots() {
        knot_extend(knot, &mut path);
    }
    path
}

/// A dot for each control point of `lp`.
pub fn control_markers(lp: &ControlLoop, radius: f64) -> Vec<Circle> {
    lp.points()
        .iter()
        .map(|p| Circle::new(p.to_point(), radius))
        .collect()
}
