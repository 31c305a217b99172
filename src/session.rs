//! Interactive state driven once per frame.

use kurbo::Size;

use crate::config::Config;
use crate::curve_set::CurveSet;
use crate::knot::SplineEngine;
use crate::util;
use crate::vector::Vector2;

/// User commands, as produced by the windowing layer's input handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Discard every curve.
    Restart,
    TogglePause,
    /// One more point per control point.
    MoreSteps,
    /// One fewer point per control point, never going below one.
    FewerSteps,
    ToggleHelp,
    PreviousCurve,
    NextCurve,
    DeleteFirstPoint,
    /// Append a control point to the selected curve.
    AddPoint(Vector2),
}

/// Everything the frame loop needs between frames.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub curves: CurveSet,
    steps: usize,
    pub paused: bool,
    pub show_help: bool,
    /// Cleared by [`Command::Quit`]; the driver stops looping once false.
    pub running: bool,
    hue: u16,
    pub engine: SplineEngine,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::from_config(&Config::default())
    }
}

impl SessionState {
    pub fn new() -> SessionState {
        SessionState::default()
    }

    pub fn from_config(config: &Config) -> SessionState {
        SessionState {
            curves: CurveSet::new(),
            steps: config.steps.max(1),
            paused: config.paused,
            show_help: false,
            running: true,
            hue: 0,
            engine: SplineEngine::new(config.precision),
        }
    }

    /// Points generated per control point.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Set the resolution, raising anything below 1 to 1.
    pub fn set_steps(&mut self, steps: usize) {
        self.steps = steps.max(1);
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn apply(&mut self, command: Command) {
        log::debug!("{:?}", command);
        match command {
            Command::Quit => self.running = false,
            Command::Restart => self.curves.reset(),
            Command::TogglePause => self.paused = !self.paused,
            Command::MoreSteps => self.steps += 1,
            Command::FewerSteps => self.set_steps(self.steps - 1),
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::PreviousCurve => self.curves.select_previous(),
            Command::NextCurve => self.curves.select_next(),
            Command::DeleteFirstPoint => self.curves.current_mut().remove_first(),
            Command::AddPoint(p) => self.curves.current_mut().append_point(p),
        }
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Step the animation by one frame.
    ///
    /// Cycles the stroke hue, moves the control points unless paused, and
    /// regenerates every curve. Afterwards the curves in [`CurveSet::knots`]
    /// are ready to draw.
    pub fn frame(&mut self, bounds: Size) {
        self.hue = (self.hue + 1) % 360;
        if !self.paused {
            self.curves.advance(bounds);
        }
        self.curves.refresh(&self.engine, self.steps);
    }

    /// RGB colour to stroke the curves with this frame.
    pub fn stroke_color(&self) -> (u8, u8, u8) {
        util::hue_to_rgb(self.hue)
    }

    /// Rows of the help overlay, as `(key, description)` pairs.
    pub fn help_lines(&self) -> Vec<(String, String)> {
        let mut lines: Vec<(String, String)> = [
            ("F1", "Show Help"),
            ("D", "Delete Point"),
            ("R", "Restart"),
            ("P", "Pause/Play"),
            ("Num+", "More points"),
            ("Num-", "Less points"),
            ("[", "Previous curve"),
            ("]", "Next curve"),
            ("", ""),
        ]
        .iter()
        .map(|(key, text)| (key.to_string(), text.to_string()))
        .collect();
        lines.push((self.steps.to_string(), "Current support points".into()));
        lines.push((
            self.curves.selected_index().to_string(),
            "Selected curve".into(),
        ));
        lines
    }
}
