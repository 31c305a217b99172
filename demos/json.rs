//! Render curves from a JSON file as an SVG.
//!
//! The file holds a list of loops, each a list of `[x, y]` control points,
//! for example `{"loops": [[[0, 0], [100, 0], [100, 100], [0, 100]]], "steps": 8}`.
//! Set `"float": true` to blend without intermediate rounding.

use serde_::Deserialize;

use knot::{render, Config, ControlLoop, CurveSet, Precision, SplineEngine, Vector2};

#[derive(Deserialize, Debug)]
#[serde(crate = "serde_")]
struct Drawing {
    loops: Vec<Vec<(i64, i64)>>,
    #[serde(default = "default_steps")]
    steps: usize,
    #[serde(default)]
    float: bool,
}

fn default_steps() -> usize {
    Config::default().steps
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("needs filename"))?;
    let data = std::fs::read_to_string(path)?;
    let drawing: Drawing = serde_json::from_str(&data)?;

    let loops = drawing
        .loops
        .iter()
        .map(|pts| ControlLoop::from_points(pts.iter().map(|&p| Vector2::from(p))));
    let mut set = CurveSet::from_loops(loops);
    let precision = if drawing.float {
        Precision::Float
    } else {
        Precision::Integer
    };
    set.refresh(&SplineEngine::new(precision), drawing.steps.max(1));
    log::info!("rendering {} curves", set.len());

    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="600" width="800">
      <path d="{}" fill="none" stroke="#000" />"##,
        render::render_set(&set).to_svg()
    );
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
    Ok(())
}
