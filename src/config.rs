//! Startup settings.

use kurbo::Size;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::knot::Precision;

/// Initial settings for a [`SessionState`](crate::SessionState).
///
/// With the `serde` feature this can be read from and written to TOML;
/// missing keys take their default values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct Config {
    /// Viewport width; points bounce off `x = 0` and `x = width`.
    pub width: u32,
    pub height: u32,
    /// Initial points per control point. Values below 1 are raised to 1.
    pub steps: usize,
    /// Whether the animation starts paused.
    pub paused: bool,
    pub precision: Precision,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 800,
            height: 600,
            steps: 35,
            paused: true,
            precision: Precision::Integer,
        }
    }
}

impl Config {
    /// The area the control points bounce around in.
    pub fn bounds(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(feature = "serde")]
impl Config {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Config> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a TOML file, falling back to the defaults.
    pub fn load_from_file(path: &std::path::Path) -> Config {
        match std::fs::read_to_string(path) {
            Ok(content) => match Config::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("loaded settings from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("ignoring malformed settings in {}: {}", path.display(), e);
                    Config::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Config::default()
            }
        }
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let config = Config::default();
        assert_eq!(config.bounds(), Size::new(800.0, 600.0));
        assert_eq!(config.steps, 35);
        assert!(config.paused);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_toml() {
        let config = Config::from_toml_str("width = 1024\nprecision = \"float\"\n").unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 600);
        assert_eq!(config.precision, Precision::Float);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_round_trip() {
        let config = Config {
            width: 640,
            height: 480,
            steps: 12,
            paused: false,
            precision: Precision::Float,
        };
        let s = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&s).unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml_str("width = \"wide\"").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("knot-config-that-does-not-exist.toml");
        assert_eq!(Config::load_from_file(&path), Config::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("knot-config-{}.toml", std::process::id()));
        let config = Config {
            steps: 3,
            ..Config::default()
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(Config::load_from_file(&path), config);
        let _ = std::fs::remove_file(&path);
    }
}
