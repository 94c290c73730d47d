//! Exercise-specific parameters plugged into the shared analysis engine.
//!
//! Each profile supplies its landmark chain, side policy, phase thresholds,
//! form rules and user-facing texts. The engine itself lives in
//! [`crate::analyzer`].

/// Squat tracking (ankle-knee-hip primary angle)
pub mod squat;

/// Push-up tracking (shoulder-elbow-wrist primary angle)
pub mod pushup;

use crate::{
    config::Config,
    error::FrameRejection,
    form::FormVerdict,
    geometry::joint_angle,
    landmarks::{Joint, LandmarkFrame},
    overlay::{JointAnnotation, PostureBanner},
    phase::Phase,
    side::Side,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Squat,
    Pushup,
}

impl Exercise {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Pushup => "pushup",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "squat" | "squats" => Ok(Self::Squat),
            "pushup" | "push-up" | "push_up" | "pushups" | "push-ups" => Ok(Self::Pushup),
            _ => Err(Error::UnknownExercise(s.to_string())),
        }
    }
}

/// What one body side yields once the frame is known to be analyzable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideAnalysis {
    pub primary_angle: f64,
    pub phase: Phase,
    pub form: FormVerdict,
    pub annotation: Option<JointAnnotation>,
}

/// Trait for exercise profiles
pub trait ExerciseProfile: Send + Sync {
    fn exercise(&self) -> Exercise;

    /// Pick the side to analyze, or `None` when no side is usable
    fn select_side(&self, frame: &LandmarkFrame) -> Option<Side>;

    /// Primary angle, phase and form for `side`
    ///
    /// # Errors
    ///
    /// Returns [`FrameRejection::DegenerateGeometry`] when a needed joint
    /// angle is undefined.
    fn analyze_side(&self, frame: &LandmarkFrame, side: Side) -> std::result::Result<SideAnalysis, FrameRejection>;

    /// Overall posture verdict shown in the banner
    fn posture_correct(&self, phase: Phase, form: &FormVerdict) -> bool;

    /// Banner for a visible, analyzed frame
    fn banner(&self, correct: bool) -> PostureBanner;

    /// Phase label when nothing could be classified
    fn idle_label(&self) -> &'static str;

    /// Coaching tip shown next to the video
    fn tip(&self) -> &'static str;

    /// Degrees of bend that fill the depth progress bar
    fn progress_span(&self) -> f64;
}

/// Angle at joint `b` on `side`, rejecting coincident landmarks
pub(crate) fn side_angle(
    frame: &LandmarkFrame,
    side: Side,
    a: Joint,
    b: Joint,
    c: Joint,
) -> std::result::Result<f64, FrameRejection> {
    joint_angle(
        frame.joint(a, side).xy(),
        frame.joint(b, side).xy(),
        frame.joint(c, side).xy(),
    )
    .ok_or(FrameRejection::DegenerateGeometry)
}

/// Movement depth as a 0-100% share of `span` degrees of bend
#[must_use]
pub fn depth_progress(angle: f64, span: f64) -> f64 {
    ((180.0 - angle) / span * 100.0).clamp(0.0, 100.0)
}

/// Create a profile for `exercise` with thresholds from `config`
#[must_use]
pub fn create_profile(exercise: Exercise, config: &Config) -> Box<dyn ExerciseProfile> {
    match exercise {
        Exercise::Squat => Box::new(squat::SquatProfile::new(config.squat.clone())),
        Exercise::Pushup => Box::new(pushup::PushupProfile::new(config.pushup.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_from_str() {
        assert_eq!("squat".parse::<Exercise>().unwrap(), Exercise::Squat);
        assert_eq!("Push-Up".parse::<Exercise>().unwrap(), Exercise::Pushup);
        assert!(matches!("lunge".parse::<Exercise>(), Err(Error::UnknownExercise(_))));
    }

    #[test]
    fn test_depth_progress() {
        assert_eq!(depth_progress(180.0, 100.0), 0.0);
        assert_eq!(depth_progress(130.0, 100.0), 50.0);
        assert_eq!(depth_progress(30.0, 100.0), 100.0);
        assert_eq!(depth_progress(90.0, 90.0), 100.0);
    }

    #[test]
    fn test_create_profile() {
        let config = Config::default();
        assert_eq!(create_profile(Exercise::Squat, &config).exercise(), Exercise::Squat);
        assert_eq!(create_profile(Exercise::Pushup, &config).exercise(), Exercise::Pushup);
    }
}
