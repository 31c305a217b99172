//! Integer 2D vectors.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use kurbo::{Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

/// A point or displacement in screen space.
///
/// Coordinates are stored as integers. Every arithmetic operation rounds
/// its result *up* to the next integer, so repeated blending drifts
/// slightly towards positive infinity. The curves drawn by [`generate`]
/// depend on this drift; see [`Precision`] for the alternative.
///
/// [`generate`]: crate::generate
/// [`Precision`]: crate::Precision
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Vector2 {
    pub x: i64,
    pub y: i64,
}

impl Vector2 {
    pub const fn new(x: i64, y: i64) -> Vector2 {
        Vector2 { x, y }
    }

    /// Build a vector from real coordinates, rounding each one up.
    pub fn from_f64(x: f64, y: f64) -> Vector2 {
        Vector2 {
            x: x.ceil() as i64,
            y: y.ceil() as i64,
        }
    }

    /// Round a real point to the nearest integer coordinates.
    pub fn rounded(p: Point) -> Vector2 {
        Vector2 {
            x: p.x.round() as i64,
            y: p.y.round() as i64,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// Multiply by a real scalar, rounding each coordinate up.
    pub fn scale(self, k: f64) -> Vector2 {
        Vector2::from_f64(self.x as f64 * k, self.y as f64 * k)
    }

    /// The midpoint between `a` and `b`, under the same rounding rule.
    pub fn midpoint(a: Vector2, b: Vector2) -> Vector2 {
        (a + b) * 0.5
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        let x = self.x as f64;
        let y = self.y as f64;
        (x * x + y * y).sqrt()
    }

    pub fn int_pair(self) -> (i64, i64) {
        (self.x, self.y)
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        self.scale(k)
    }
}

impl From<(i64, i64)> for Vector2 {
    fn from((x, y): (i64, i64)) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (i64, i64) {
    fn from(v: Vector2) -> (i64, i64) {
        v.int_pair()
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Point {
        v.to_point()
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Vec2 {
        v.to_vec2()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
