//! A headless run of the screensaver.
//!
//! This places random control points on a few curves, lets them bounce
//! for a while, and outputs the last frame as an SVG.

use rand::distributions::{Distribution, Uniform};

use knot::{render, Command, Config, SessionState, Vector2};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = Config::default();
    let bounds = config.bounds();
    let mut state = SessionState::from_config(&config);
    let mut rng = rand::thread_rng();
    const CURVES: usize = 3;
    const POINTS: usize = 6;
    const FRAMES: usize = 500;

    let xs = Uniform::from(0..i64::from(config.width));
    let ys = Uniform::from(0..i64::from(config.height));
    for curve in 0..CURVES {
        if curve > 0 {
            state.apply(Command::NextCurve);
        }
        for _ in 0..POINTS {
            let p = Vector2::new(xs.sample(&mut rng), ys.sample(&mut rng));
            state.apply(Command::AddPoint(p));
        }
    }
    state.apply(Command::TogglePause);
    for _ in 0..FRAMES {
        state.frame(bounds);
    }
    log::info!(
        "{} curves after {} frames at {} steps",
        state.curves.len(),
        FRAMES,
        state.steps()
    );

    let (r, g, b) = state.stroke_color();
    let path = render::render_set(&state.curves);
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="{}" width="{}" style="background: #000">
      <path d="{}" fill="none" stroke="rgb({}, {}, {})" stroke-width="3" />"##,
        config.height,
        config.width,
        path.to_svg(),
        r,
        g,
        b
    );
    for lp in state.curves.loops() {
        for marker in render::control_markers(lp, 3.0) {
            println!(
                r#"      <circle cx="{}" cy="{}" r="{}" fill="white" />"#,
                marker.center.x, marker.center.y, marker.radius
            );
        }
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
