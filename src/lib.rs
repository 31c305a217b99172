//! Animated closed curves through bouncing control points.
//!
//! This crate is the engine behind a simple screensaver: the user clicks
//! control points onto one or more closed loops, each loop is turned into a
//! smooth curve every frame, and (unless paused) the control points drift
//! around the screen, bouncing off its edges.
//!
//! The windowing layer owns a [`SessionState`], feeds it [`Command`]s from
//! its input events, calls [`SessionState::frame`] once per frame and draws
//! the resulting curves, for example via [`render::render_set`].
//!
//! The curve itself comes from [`SplineEngine`]: each control point and the
//! midpoints of its two edges are blended into a short piece of curve, and
//! the pieces are joined into a closed polyline.

mod config;
mod control_loop;
mod curve_set;
mod knot;
pub mod render;
mod session;
mod util;
mod vector;

pub use config::Config;
pub use control_loop::{random_velocity, ControlLoop};
pub use curve_set::{CurveSet, Slot};
pub use knot::{blend, generate, window, Precision, SplineEngine};
pub use session::{Command, SessionState};
pub use util::hue_to_rgb;
pub use vector::Vector2;
