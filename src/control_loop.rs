//! Closed loops of bouncing control points.

use kurbo::Size;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
#[cfg(feature = "serde")]
use serde_::{de, Deserialize, Deserializer, Serialize};

use crate::vector::Vector2;

/// Upper (exclusive) bound of each sampled velocity component.
const MAX_SPEED: f64 = 2.0;

/// An ordered, closed sequence of control points.
///
/// Each point carries a velocity; `points[i]` and `velocities[i]` always
/// belong together, and the two sequences always have the same length.
/// Adjacency wraps around: the last point is a neighbour of the first.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_"))]
pub struct ControlLoop {
    points: Vec<Vector2>,
    velocities: Vec<Vector2>,
}

impl ControlLoop {
    pub fn new() -> ControlLoop {
        ControlLoop::default()
    }

    /// Create a loop from existing points, giving each a random velocity.
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> ControlLoop {
        let mut rng = rand::thread_rng();
        let mut result = ControlLoop::new();
        for p in points {
            result.append_point_with(p, &mut rng);
        }
        result
    }

    /// Append a point with a freshly randomized velocity.
    pub fn append_point(&mut self, p: Vector2) {
        self.append_point_with(p, &mut rand::thread_rng());
    }

    /// Append a point, drawing its velocity from `rng`.
    pub fn append_point_with<R: Rng + ?Sized>(&mut self, p: Vector2, rng: &mut R) {
        let velocity = random_velocity(rng);
        self.points.push(p);
        self.velocities.push(velocity);
    }

    /// Remove the oldest point. Does nothing if the loop is empty.
    pub fn remove_first(&mut self) {
        if self.points.is_empty() {
            return;
        }
        self.points.remove(0);
        self.velocities.remove(0);
    }

    /// Move every point by its velocity, bouncing off the edges of `bounds`.
    ///
    /// The point is moved first and the velocity reflected afterwards, so a
    /// point that crosses an edge is left outside for one frame and only
    /// turns back on the next call. The two axes are handled independently.
    pub fn advance(&mut self, bounds: Size) {
        for (p, v) in self.points.iter_mut().zip(self.velocities.iter_mut()) {
            *p = *p + *v;
            let x = p.x as f64;
            let y = p.y as f64;
            if x > bounds.width || x < 0.0 {
                *v = Vector2::new(-v.x, v.y);
            }
            if y > bounds.height || y < 0.0 {
                *v = Vector2::new(v.x, -v.y);
            }
        }
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    pub fn velocities(&self) -> &[Vector2] {
        &self.velocities
    }

    /// Replace the velocity of the point at `index`.
    ///
    /// Returns `false` if there is no such point.
    pub fn set_velocity(&mut self, index: usize, velocity: Vector2) -> bool {
        match self.velocities.get_mut(index) {
            Some(v) => {
                *v = velocity;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(point, velocity)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        self.points.iter().copied().zip(self.velocities.iter().copied())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(crate = "serde_")]
struct RawControlLoop {
    points: Vec<Vector2>,
    velocities: Vec<Vector2>,
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ControlLoop {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawControlLoop { points, velocities } = RawControlLoop::deserialize(deserializer)?;
        if points.len() != velocities.len() {
            return Err(de::Error::custom(format_args!(
                "{} points but {} velocities",
                points.len(),
                velocities.len()
            )));
        }
        Ok(ControlLoop { points, velocities })
    }
}

/// Sample a velocity with each component uniform in `[0, 2)`.
///
/// The result goes through the usual rounding rule, so the stored
/// components are whole numbers between 0 and 2.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    let speed = Uniform::from(0.0..MAX_SPEED);
    let x = speed.sample(rng);
    let y = speed.sample(rng);
    Vector2::from_f64(x, y)
}
