//! Exercise phase classification from the primary joint angle.
//!
//! Classification is a pure function of the current angle. No smoothing is
//! applied, so an angle hovering on a boundary flickers between phases.

use crate::{
    constants::{
        DEFAULT_PUSHUP_BOTTOM_ANGLE, DEFAULT_PUSHUP_TOP_ANGLE, DEFAULT_SQUAT_BOTTOM_ANGLE,
        DEFAULT_SQUAT_DESCENT_ANGLE, DEFAULT_SQUAT_STANDING_ANGLE,
    },
    side::Side,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Squat phase boundaries on the ankle-knee-hip angle, lower bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatPhaseThresholds {
    /// At or above: standing
    pub standing: f64,
    /// At or above (and below `standing`): descent
    pub descent: f64,
    /// At or above (and below `descent`): bottom; below: ascent
    pub bottom: f64,
}

impl Default for SquatPhaseThresholds {
    fn default() -> Self {
        Self {
            standing: DEFAULT_SQUAT_STANDING_ANGLE,
            descent: DEFAULT_SQUAT_DESCENT_ANGLE,
            bottom: DEFAULT_SQUAT_BOTTOM_ANGLE,
        }
    }
}

/// Push-up phase boundaries on the shoulder-elbow-wrist angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushupPhaseThresholds {
    /// Strictly above: top (plank)
    pub top: f64,
    /// At or below: bottom; between `bottom` and `top`: lowering
    pub bottom: f64,
}

impl Default for PushupPhaseThresholds {
    fn default() -> Self {
        Self {
            top: DEFAULT_PUSHUP_TOP_ANGLE,
            bottom: DEFAULT_PUSHUP_BOTTOM_ANGLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquatPhase {
    Standing,
    Descent,
    Bottom,
    Ascent,
}

impl SquatPhase {
    #[must_use]
    pub fn classify(angle: f64, thresholds: &SquatPhaseThresholds) -> Self {
        if angle >= thresholds.standing {
            Self::Standing
        } else if angle >= thresholds.descent {
            Self::Descent
        } else if angle >= thresholds.bottom {
            Self::Bottom
        } else {
            Self::Ascent
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standing => "Standing (Start/End Position)",
            Self::Descent => "Descent Phase",
            Self::Bottom => "Bottom of Squat",
            Self::Ascent => "Ascent Phase (Coming Up)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushupPhase {
    Top,
    Lowering,
    Bottom,
}

impl PushupPhase {
    #[must_use]
    pub fn classify(angle: f64, thresholds: &PushupPhaseThresholds) -> Self {
        if angle > thresholds.top {
            Self::Top
        } else if angle > thresholds.bottom {
            Self::Lowering
        } else {
            Self::Bottom
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top Position (Plank)",
            Self::Lowering => "Lowering Down",
            Self::Bottom => "Bottom of Push-Up",
        }
    }
}

/// The single active phase of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "exercise", content = "phase", rename_all = "snake_case")]
pub enum Phase {
    Squat(SquatPhase),
    Pushup(PushupPhase),
}

impl Phase {
    /// Whether this is the resting/start position of the exercise
    #[must_use]
    pub fn is_baseline(self) -> bool {
        matches!(self, Self::Squat(SquatPhase::Standing) | Self::Pushup(PushupPhase::Top))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Squat(p) => p.label(),
            Self::Pushup(p) => p.label(),
        }
    }

    /// Label annotated with the analyzed side, e.g. "Bottom of Squat (left side)"
    #[must_use]
    pub fn label_with_side(self, side: Side) -> String {
        format!("{} ({} side)", self.label(), side)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squat_bands() {
        let t = SquatPhaseThresholds::default();
        assert_eq!(SquatPhase::classify(180.0, &t), SquatPhase::Standing);
        assert_eq!(SquatPhase::classify(160.0, &t), SquatPhase::Standing);
        assert_eq!(SquatPhase::classify(159.99, &t), SquatPhase::Descent);
        assert_eq!(SquatPhase::classify(120.0, &t), SquatPhase::Descent);
        assert_eq!(SquatPhase::classify(119.99, &t), SquatPhase::Bottom);
        assert_eq!(SquatPhase::classify(75.0, &t), SquatPhase::Bottom);
        assert_eq!(SquatPhase::classify(74.99, &t), SquatPhase::Ascent);
        assert_eq!(SquatPhase::classify(0.0, &t), SquatPhase::Ascent);
    }

    #[test]
    fn test_pushup_bands() {
        let t = PushupPhaseThresholds::default();
        assert_eq!(PushupPhase::classify(180.0, &t), PushupPhase::Top);
        assert_eq!(PushupPhase::classify(160.01, &t), PushupPhase::Top);
        assert_eq!(PushupPhase::classify(160.0, &t), PushupPhase::Lowering);
        assert_eq!(PushupPhase::classify(90.01, &t), PushupPhase::Lowering);
        assert_eq!(PushupPhase::classify(90.0, &t), PushupPhase::Bottom);
        assert_eq!(PushupPhase::classify(10.0, &t), PushupPhase::Bottom);
    }

    #[test]
    fn test_baselines() {
        assert!(Phase::Squat(SquatPhase::Standing).is_baseline());
        assert!(!Phase::Squat(SquatPhase::Ascent).is_baseline());
        assert!(Phase::Pushup(PushupPhase::Top).is_baseline());
        assert!(!Phase::Pushup(PushupPhase::Bottom).is_baseline());
    }

    #[test]
    fn test_label_with_side() {
        let phase = Phase::Squat(SquatPhase::Bottom);
        assert_eq!(phase.label_with_side(Side::Left), "Bottom of Squat (left side)");
        let phase = Phase::Pushup(PushupPhase::Top);
        assert_eq!(phase.label_with_side(Side::Right), "Top Position (Plank) (right side)");
    }
}
