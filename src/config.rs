//! Configuration management for the exercise tracker

use crate::{
    constants::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GATE_VISIBILITY, DEFAULT_POLL_INTERVAL_MS,
        DEFAULT_PUSHUP_SIDE_VISIBILITY, DEFAULT_SQUAT_SIDE_VISIBILITY,
    },
    form::{PushupFormThresholds, SquatFormThresholds},
    phase::{PushupPhaseThresholds, SquatPhaseThresholds},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coarse visibility gate
    pub visibility: VisibilityConfig,

    /// Squat thresholds
    pub squat: SquatConfig,

    /// Push-up thresholds
    pub pushup: PushupConfig,

    /// Frame loop and overlay canvas
    pub session: SessionConfig,
}

/// Visibility gate configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Minimum visibility (inclusive) of every required landmark
    pub threshold: f32,
}

/// Squat configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatConfig {
    /// Ankle, knee and hip of a side must all exceed this for the side to be used
    pub side_visibility: f32,

    /// Phase boundaries on the knee angle
    pub phases: SquatPhaseThresholds,

    /// Form rule limits
    pub form: SquatFormThresholds,
}

/// Push-up configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushupConfig {
    /// Right shoulder must exceed this for the right side to be used
    pub side_visibility: f32,

    /// Phase boundaries on the elbow angle
    pub phases: PushupPhaseThresholds,

    /// Form rule limits
    pub form: PushupFormThresholds,
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Landmark provider polling interval in milliseconds
    pub poll_interval_ms: u64,

    /// Overlay canvas width in pixels
    pub canvas_width: u32,

    /// Overlay canvas height in pixels
    pub canvas_height: u32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GATE_VISIBILITY,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for SquatConfig {
    fn default() -> Self {
        Self {
            side_visibility: DEFAULT_SQUAT_SIDE_VISIBILITY,
            phases: SquatPhaseThresholds::default(),
            form: SquatFormThresholds::default(),
        }
    }
}

impl Default for PushupConfig {
    fn default() -> Self {
        Self {
            side_visibility: DEFAULT_PUSHUP_SIDE_VISIBILITY,
            phases: PushupPhaseThresholds::default(),
            form: PushupFormThresholds::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] when the YAML does not match the schema
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        check_unit("visibility.threshold", self.visibility.threshold)?;
        check_unit("squat.side_visibility", self.squat.side_visibility)?;
        check_unit("pushup.side_visibility", self.pushup.side_visibility)?;

        let squat = &self.squat.phases;
        check_angle("squat.phases.standing", squat.standing)?;
        check_angle("squat.phases.descent", squat.descent)?;
        check_angle("squat.phases.bottom", squat.bottom)?;
        if !(squat.standing > squat.descent && squat.descent > squat.bottom) {
            return Err(Error::ConfigError(
                "Squat phase thresholds must satisfy standing > descent > bottom".to_string(),
            ));
        }
        check_angle("squat.form.min_back_angle", self.squat.form.min_back_angle)?;
        check_angle("squat.form.max_knee_angle", self.squat.form.max_knee_angle)?;

        let pushup = &self.pushup.phases;
        check_angle("pushup.phases.top", pushup.top)?;
        check_angle("pushup.phases.bottom", pushup.bottom)?;
        if pushup.top <= pushup.bottom {
            return Err(Error::ConfigError(
                "Push-up phase thresholds must satisfy top > bottom".to_string(),
            ));
        }
        let form = &self.pushup.form;
        check_angle("pushup.form.min_elbow_angle", form.min_elbow_angle)?;
        check_angle("pushup.form.max_elbow_angle", form.max_elbow_angle)?;
        check_angle("pushup.form.min_back_angle", form.min_back_angle)?;
        if form.min_elbow_angle > form.max_elbow_angle {
            return Err(Error::ConfigError(
                "Push-up elbow band must satisfy min_elbow_angle <= max_elbow_angle".to_string(),
            ));
        }

        if self.session.canvas_width == 0 || self.session.canvas_height == 0 {
            return Err(Error::ConfigError("Canvas size must be greater than 0".to_string()));
        }

        Ok(())
    }
}

fn check_unit(name: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::ConfigError(format!("{name} must be between 0.0 and 1.0, got {value}")))
    }
}

fn check_angle(name: &str, value: f64) -> Result<()> {
    if (0.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::ConfigError(format!("{name} must be between 0 and 180 degrees, got {value}")))
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Exercise Rep Tracker Configuration

# Coarse visibility gate over shoulders, elbows, hips, knees and ankles
visibility:
  threshold: 0.15

# Squat tracking
squat:
  side_visibility: 0.1
  phases:
    standing: 160.0
    descent: 120.0
    bottom: 75.0
  form:
    min_back_angle: 120.0
    max_knee_angle: 160.0

# Push-up tracking
pushup:
  side_visibility: 0.5
  phases:
    top: 160.0
    bottom: 90.0
  form:
    min_elbow_angle: 75.0
    max_elbow_angle: 130.0
    min_back_angle: 150.0

# Frame loop and overlay
session:
  poll_interval_ms: 100
  canvas_width: 1280
  canvas_height: 720
"#;
