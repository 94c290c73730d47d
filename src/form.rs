//! Form evaluation from secondary joint angles.
//!
//! Each exercise applies an ordered rule list; the first failing rule names
//! the reason, otherwise the form is good.

use crate::constants::{
    DEFAULT_PUSHUP_MAX_ELBOW_ANGLE, DEFAULT_PUSHUP_MIN_BACK_ANGLE, DEFAULT_PUSHUP_MIN_ELBOW_ANGLE,
    DEFAULT_SQUAT_MAX_KNEE_ANGLE, DEFAULT_SQUAT_MIN_BACK_ANGLE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the form passed or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormReason {
    /// Squat: torso leaning too far forward
    BackTooFarForward,
    /// Squat: knee nearly straight
    KneesNotBentEnough,
    /// Squat: all rules passed
    GoodPosture,
    /// Push-up: elbow outside the accepted band
    ElbowAngleIncorrect,
    /// Push-up: hips dropping below the shoulder-ankle line
    BackSagging,
    /// Push-up: all rules passed
    GoodForm,
    /// No form judgment was possible for this frame
    NotEvaluated,
}

impl FormReason {
    /// Message shown in the form-check panel
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::BackTooFarForward => "Back angle too forward",
            Self::KneesNotBentEnough => "Knees not bent enough",
            Self::GoodPosture => "Back and knee posture good",
            Self::ElbowAngleIncorrect => "Elbow angle incorrect",
            Self::BackSagging => "Back not aligned",
            Self::GoodForm => "Good form!",
            Self::NotEvaluated => "Ensure your full body is visible",
        }
    }

    #[must_use]
    pub fn is_good(self) -> bool {
        matches!(self, Self::GoodPosture | Self::GoodForm)
    }
}

impl fmt::Display for FormReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-frame form judgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormVerdict {
    pub ok: bool,
    pub reason: FormReason,
}

impl FormVerdict {
    #[must_use]
    pub fn from_reason(reason: FormReason) -> Self {
        Self {
            ok: reason.is_good(),
            reason,
        }
    }

    #[must_use]
    pub fn not_evaluated() -> Self {
        Self::from_reason(FormReason::NotEvaluated)
    }
}

/// Posture banner state shown over the video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureStatus {
    /// Body not fully observed
    OutOfFrame,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatFormThresholds {
    /// Shoulder-hip-knee angle below this is leaning too far forward
    pub min_back_angle: f64,
    /// Ankle-knee-hip angle above this is not bent enough
    pub max_knee_angle: f64,
}

impl Default for SquatFormThresholds {
    fn default() -> Self {
        Self {
            min_back_angle: DEFAULT_SQUAT_MIN_BACK_ANGLE,
            max_knee_angle: DEFAULT_SQUAT_MAX_KNEE_ANGLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushupFormThresholds {
    /// Elbow angles strictly below this are wrong
    pub min_elbow_angle: f64,
    /// Elbow angles strictly above this are wrong
    pub max_elbow_angle: f64,
    /// Shoulder-hip-ankle angle below this is sagging
    pub min_back_angle: f64,
}

impl Default for PushupFormThresholds {
    fn default() -> Self {
        Self {
            min_elbow_angle: DEFAULT_PUSHUP_MIN_ELBOW_ANGLE,
            max_elbow_angle: DEFAULT_PUSHUP_MAX_ELBOW_ANGLE,
            min_back_angle: DEFAULT_PUSHUP_MIN_BACK_ANGLE,
        }
    }
}

/// Squat rules: back first, then knee bend
#[must_use]
pub fn evaluate_squat_form(back_angle: f64, knee_angle: f64, thresholds: &SquatFormThresholds) -> FormVerdict {
    let reason = if back_angle < thresholds.min_back_angle {
        FormReason::BackTooFarForward
    } else if knee_angle > thresholds.max_knee_angle {
        FormReason::KneesNotBentEnough
    } else {
        FormReason::GoodPosture
    };
    FormVerdict::from_reason(reason)
}

/// Push-up rules: elbow band first, then back line
#[must_use]
pub fn evaluate_pushup_form(
    elbow_angle: f64,
    back_angle: f64,
    thresholds: &PushupFormThresholds,
) -> FormVerdict {
    let elbow_bad = elbow_angle > thresholds.max_elbow_angle || elbow_angle < thresholds.min_elbow_angle;
    let reason = if elbow_bad {
        FormReason::ElbowAngleIncorrect
    } else if back_angle < thresholds.min_back_angle {
        FormReason::BackSagging
    } else {
        FormReason::GoodForm
    };
    FormVerdict::from_reason(reason)
}
