//! Smooth closed curves through a loop of control points.
//!
//! The curve is assembled from one short piece per control point. Each
//! piece is evaluated over a *local window*: the midpoint of the incoming
//! edge, the control point itself, and the midpoint of the outgoing edge.
//! Consecutive pieces meet at the edge midpoints, so the result is a closed
//! curve that passes near, but not through, the control points.

use kurbo::{Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::control_loop::ControlLoop;
use crate::util;
use crate::vector::Vector2;

/// Arithmetic used while blending.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", rename_all = "lowercase")
)]
pub enum Precision {
    /// Round every intermediate result up to an integer.
    ///
    /// This reproduces the slightly lopsided curves of the classic
    /// screensaver exactly.
    Integer,
    /// Blend in floating point and round each output point once.
    Float,
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Integer
    }
}

/// Generates the dense closed curve for a [`ControlLoop`].
///
/// The engine holds no state besides its [`Precision`]; its output is a
/// pure function of the control points and the step count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SplineEngine {
    pub precision: Precision,
}

impl SplineEngine {
    pub fn new(precision: Precision) -> SplineEngine {
        SplineEngine { precision }
    }

    /// Compute the curve for `lp` with `steps` points per control point.
    ///
    /// Returns `steps * lp.len()` points, or nothing if the loop has fewer
    /// than three points. The caller is expected to draw it closed.
    ///
    /// `steps` must be at least 1. Zero panics in debug builds and yields
    /// an empty curve otherwise.
    pub fn generate(&self, lp: &ControlLoop, steps: usize) -> Vec<Vector2> {
        self.generate_points(lp.points(), steps)
    }

    /// Like [`generate`](SplineEngine::generate), but on a bare slice.
    pub fn generate_points(&self, points: &[Vector2], steps: usize) -> Vec<Vector2> {
        debug_assert!(steps > 0, "steps must be positive");
        let n = points.len();
        if n < 3 || steps == 0 {
            return Vec::new();
        }
        let mut result = Vec::with_capacity(n * steps);
        for i in -2..(n as isize - 2) {
            let pts = window(points, i);
            match self.precision {
                Precision::Integer => {
                    result.extend(parameters(steps).map(|t| blend(&pts, t)));
                }
                Precision::Float => {
                    let pts = [pts[0].to_point(), pts[1].to_point(), pts[2].to_point()];
                    result.extend(
                        parameters(steps).map(|t| Vector2::rounded(blend_float(&pts, t))),
                    );
                }
            }
        }
        log::trace!(
            "generated {} points from {} control points ({} steps)",
            result.len(),
            n,
            steps
        );
        result
    }
}

/// Compute the curve with integer precision.
///
/// See [`SplineEngine::generate`].
pub fn generate(lp: &ControlLoop, steps: usize) -> Vec<Vector2> {
    SplineEngine::default().generate(lp, steps)
}

/// The local window centred on `points[i + 1]`.
///
/// Indices wrap around the loop, and `i` may be negative.
pub fn window(points: &[Vector2], i: isize) -> [Vector2; 3] {
    let n = points.len();
    let p0 = points[util::wrap_index(i, n)];
    let p1 = points[util::wrap_index(i + 1, n)];
    let p2 = points[util::wrap_index(i + 2, n)];
    [Vector2::midpoint(p0, p1), p1, Vector2::midpoint(p1, p2)]
}

/// Evaluate the blend of `pts` at parameter `t`.
///
/// The last point is weighted by `t` and the blend of the remaining points
/// by `1 - t`, recursively. `pts` must not be empty.
pub fn blend(pts: &[Vector2], t: f64) -> Vector2 {
    let deg = pts.len() - 1;
    if deg == 0 {
        return pts[0];
    }
    pts[deg] * t + blend(&pts[..deg], t) * (1.0 - t)
}

fn blend_float(pts: &[Point], t: f64) -> Point {
    let deg = pts.len() - 1;
    if deg == 0 {
        return pts[0];
    }
    let inner: Vec2 = blend_float(&pts[..deg], t).to_vec2();
    (pts[deg].to_vec2() * t + inner * (1.0 - t)).to_point()
}

/// `0/steps, 1/steps, ..., (steps-1)/steps`.
fn parameters(steps: usize) -> impl Iterator<Item = f64> {
    let alpha = 1.0 / steps as f64;
    (0..steps).map(move |i| i as f64 * alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i64, y: i64) -> Vector2 {
        Vector2::new(x, y)
    }

    fn pts(coords: &[(i64, i64)]) -> Vec<Vector2> {
        coords.iter().map(|&(x, y)| v(x, y)).collect()
    }

    fn square() -> Vec<Vector2> {
        pts(&[(0, 0), (100, 0), (100, 100), (0, 100)])
    }

    #[test]
    fn degenerate_inputs_are_empty() {
        let engine = SplineEngine::default();
        for n in 0..3 {
            let points: Vec<_> = (0..n).map(|i| v(i, i)).collect();
            for steps in 1..5 {
                assert!(engine.generate_points(&points, steps).is_empty());
            }
        }
        assert!(generate(&ControlLoop::new(), 10).is_empty());
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn zero_steps_is_empty_in_release() {
        let engine = SplineEngine::default();
        assert!(engine.generate_points(&square(), 0).is_empty());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "steps must be positive")]
    fn zero_steps_panics_in_debug() {
        SplineEngine::default().generate_points(&square(), 0);
    }

    #[test]
    fn output_length() {
        for precision in [Precision::Integer, Precision::Float].iter() {
            let engine = SplineEngine::new(*precision);
            for n in 3..9 {
                let points: Vec<_> = (0..n).map(|i| v(i * 17 % 50, i * 31 % 70)).collect();
                for steps in 1..12 {
                    assert_eq!(engine.generate_points(&points, steps).len(), n as usize * steps);
                }
            }
        }
    }

    #[test]
    fn window_order_wraps_around() {
        let square = square();
        assert_eq!(window(&square, -2), [v(50, 100), v(0, 100), v(0, 50)]);
        assert_eq!(window(&square, -1), [v(0, 50), v(0, 0), v(50, 0)]);
        assert_eq!(window(&square, 0), [v(50, 0), v(100, 0), v(100, 50)]);
        assert_eq!(window(&square, 1), [v(100, 50), v(100, 100), v(50, 100)]);
    }

    #[test]
    fn square_with_four_steps() {
        let curve = SplineEngine::default().generate_points(&square(), 4);
        let expected = pts(&[
            (50, 100),
            (29, 88),
            (13, 75),
            (4, 63),
            (0, 50),
            (13, 29),
            (25, 13),
            (38, 4),
            (50, 0),
            (73, 13),
            (88, 25),
            (97, 38),
            (100, 50),
            (88, 73),
            (75, 88),
            (63, 97),
        ]);
        assert_eq!(curve, expected);
    }

    #[test]
    fn triangle_rounding_drift() {
        let triangle = pts(&[(0, 0), (10, 0), (5, 9)]);
        let curve = SplineEngine::default().generate_points(&triangle, 3);
        let expected = pts(&[
            (8, 5),
            (7, 7),
            (5, 7),
            (3, 5),
            (4, 3),
            (5, 1),
            (5, 0),
            (9, 2),
            (10, 4),
        ]);
        assert_eq!(curve, expected);
    }

    #[test]
    fn negative_coordinates() {
        let points = pts(&[(3, 7), (-5, 2), (11, -4)]);
        let curve = SplineEngine::default().generate_points(&points, 2);
        assert_eq!(
            curve,
            pts(&[(3, -1), (8, 0), (7, 2), (3, 6), (-1, 5), (1, 2)])
        );
    }

    #[test]
    fn each_piece_starts_at_incoming_midpoint() {
        let square = square();
        let steps = 7;
        for precision in [Precision::Integer, Precision::Float].iter() {
            let curve = SplineEngine::new(*precision).generate_points(&square, steps);
            for (k, i) in (-2..2).enumerate() {
                assert_eq!(curve[k * steps], window(&square, i)[0]);
            }
        }
    }

    #[test]
    fn generate_is_deterministic() {
        let points = pts(&[(12, 400), (333, 17), (700, 590), (250, 250), (80, 300)]);
        let lp = ControlLoop::from_points(points);
        let first = generate(&lp, 35);
        let second = generate(&lp, 35);
        assert_eq!(first, second);
        let engine = SplineEngine::new(Precision::Float);
        assert_eq!(engine.generate(&lp, 35), engine.generate(&lp, 35));
    }

    #[test]
    fn float_precision_stays_close() {
        let points = pts(&[(12, 400), (333, 17), (700, 590), (250, 250)]);
        let exact = SplineEngine::new(Precision::Float).generate_points(&points, 20);
        let drifted = SplineEngine::new(Precision::Integer).generate_points(&points, 20);
        for (a, b) in exact.iter().zip(&drifted) {
            assert!((*b - *a).length() <= 6.0, "{} vs {}", a, b);
        }
    }

    #[test]
    fn single_step_yields_window_starts() {
        let square = square();
        let curve = generate(&ControlLoop::from_points(square.clone()), 1);
        assert_eq!(curve, pts(&[(50, 100), (0, 50), (50, 0), (100, 50)]));
    }

    #[test]
    fn blend_endpoints() {
        let w = [v(0, 0), v(10, 10), v(20, 0)];
        assert_eq!(blend(&w, 0.0), v(0, 0));
        assert_eq!(blend(&w[..1], 0.3), v(0, 0));
        assert_eq!(blend(&[v(0, 0), v(10, 0)], 0.5), v(5, 0));
    }
}
