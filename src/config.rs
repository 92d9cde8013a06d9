//! Startup configuration
//!
//! Everything here is fixed for the lifetime of the process. Defaults live in
//! the constants below; a handful of `SORTTY_*` environment variables can
//! override them at startup, and [`Config::validate`] rejects anything the
//! renderer or driver cannot work with before the UI comes up.

use std::fmt;
use std::time::Duration;

/// Animation frames per second; the sorter advances at most once per frame
pub const DEFAULT_FPS: u32 = 120;

/// Number of bars to sort
pub const DEFAULT_BARS: usize = 64;

/// Smallest bar height
pub const BAR_MIN: u32 = 10;

/// Largest bar height; heights are scaled against this when drawn
pub const BAR_MAX: u32 = 470;

/// Empty columns on each side of the bar chart
pub const PADDING_SIDE: u16 = 2;

pub const ENV_FPS: &str = "SORTTY_FPS";
pub const ENV_BARS: &str = "SORTTY_BARS";
pub const ENV_SEED: &str = "SORTTY_SEED";
pub const ENV_HEADLESS: &str = "SORTTY_HEADLESS";

/// Configuration errors, reported once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable did not hold a valid number
    InvalidNumber { var: &'static str, value: String },

    /// Bar count of zero
    ZeroBars,

    /// Frame rate of zero
    ZeroFps,

    /// Height bounds that are empty or include zero
    EmptyRange { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{} must be a non-negative integer, got '{}'", var, value)
            }
            ConfigError::ZeroBars => write!(f, "Bar count must be at least 1"),
            ConfigError::ZeroFps => write!(f, "Frame rate must be at least 1"),
            ConfigError::EmptyRange { min, max } => {
                write!(f, "Invalid bar height range {}..={}", min, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fps: u32,
    pub bars: usize,
    pub bar_min: u32,
    pub bar_max: u32,
    /// Dataset seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fps: DEFAULT_FPS,
            bars: DEFAULT_BARS,
            bar_min: BAR_MIN,
            bar_max: BAR_MAX,
            seed: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `SORTTY_FPS`, `SORTTY_BARS` and `SORTTY_SEED`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(fps) = parse_var(&lookup, ENV_FPS)? {
            config.fps = fps;
        }
        if let Some(bars) = parse_var(&lookup, ENV_BARS)? {
            config.bars = bars;
        }
        config.seed = parse_var(&lookup, ENV_SEED)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bars == 0 {
            return Err(ConfigError::ZeroBars);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.bar_min == 0 || self.bar_min > self.bar_max {
            return Err(ConfigError::EmptyRange {
                min: self.bar_min,
                max: self.bar_max,
            });
        }
        Ok(())
    }

    /// Time budget for one frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fps, DEFAULT_FPS);
        assert_eq!(config.bars, DEFAULT_BARS);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_FPS, "30"),
            (ENV_BARS, " 12 "),
            (ENV_SEED, "99"),
        ]))
        .unwrap();

        assert_eq!(config.fps, 30);
        assert_eq!(config.bars, 12);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[(ENV_FPS, ""), (ENV_SEED, "  ")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup(&[(ENV_BARS, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: ENV_BARS,
                value: "lots".to_string()
            }
        );
        assert!(err.to_string().contains("SORTTY_BARS"));
    }

    #[test]
    fn test_zero_values_rejected() {
        assert_eq!(
            Config::from_lookup(lookup(&[(ENV_BARS, "0")])),
            Err(ConfigError::ZeroBars)
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(ENV_FPS, "0")])),
            Err(ConfigError::ZeroFps)
        );
    }

    #[test]
    fn test_bad_height_range() {
        let config = Config {
            bar_min: 50,
            bar_max: 10,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRange { min: 50, max: 10 })
        );
    }

    #[test]
    fn test_frame_interval() {
        let config = Config {
            fps: 50,
            ..Config::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }
}
