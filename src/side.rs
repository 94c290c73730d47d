//! Body side selection.
//!
//! The side is recomputed from scratch every frame, so it may switch back and
//! forth as visibility fluctuates.

use crate::landmarks::{Joint, LandmarkFrame, LandmarkIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which limb chain is analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Squat: a side is usable when its ankle, knee and hip all exceed
/// `threshold`. Left wins when both are usable.
#[must_use]
pub fn select_squat_side(frame: &LandmarkFrame, threshold: f32) -> Option<Side> {
    let usable = |side: Side| {
        [Joint::Ankle, Joint::Knee, Joint::Hip].iter().all(|&joint| {
            let lm = frame.joint(joint, side);
            lm.is_present() && lm.visibility > threshold
        })
    };

    if usable(Side::Left) {
        Some(Side::Left)
    } else if usable(Side::Right) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Push-up: right when the right shoulder exceeds `threshold`, otherwise left.
#[must_use]
pub fn select_pushup_side(frame: &LandmarkFrame, threshold: f32) -> Side {
    let shoulder = frame.get(LandmarkIndex::RightShoulder);
    if shoulder.is_present() && shoulder.visibility > threshold {
        Side::Right
    } else {
        Side::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Landmark;

    fn frame_with(visibility: f32, overrides: &[(LandmarkIndex, f32)]) -> LandmarkFrame {
        let mut lms = [Landmark::new(0.5, 0.5, 0.0, visibility); 33];
        for &(idx, vis) in overrides {
            lms[idx.index()].visibility = vis;
        }
        LandmarkFrame::new(lms)
    }

    #[test]
    fn test_squat_prefers_left() {
        let frame = frame_with(0.9, &[]);
        assert_eq!(select_squat_side(&frame, 0.1), Some(Side::Left));
    }

    #[test]
    fn test_squat_falls_back_to_right() {
        let frame = frame_with(0.9, &[(LandmarkIndex::LeftKnee, 0.05)]);
        assert_eq!(select_squat_side(&frame, 0.1), Some(Side::Right));
    }

    #[test]
    fn test_squat_threshold_is_strict() {
        let frame = frame_with(0.1, &[]);
        assert_eq!(select_squat_side(&frame, 0.1), None);

        let frame = frame_with(0.11, &[]);
        assert_eq!(select_squat_side(&frame, 0.1), Some(Side::Left));
    }

    #[test]
    fn test_squat_no_side() {
        let frame = frame_with(
            0.9,
            &[(LandmarkIndex::LeftAnkle, 0.0), (LandmarkIndex::RightHip, 0.0)],
        );
        assert_eq!(select_squat_side(&frame, 0.1), None);
    }

    #[test]
    fn test_pushup_prefers_right_when_shoulder_clear() {
        let frame = frame_with(0.9, &[]);
        assert_eq!(select_pushup_side(&frame, 0.5), Side::Right);
    }

    #[test]
    fn test_pushup_threshold_is_strict() {
        let frame = frame_with(0.9, &[(LandmarkIndex::RightShoulder, 0.5)]);
        assert_eq!(select_pushup_side(&frame, 0.5), Side::Left);
    }

    #[test]
    fn test_pushup_ignores_other_right_landmarks() {
        // Only the right shoulder matters, unlike the squat policy
        let frame = frame_with(
            0.9,
            &[(LandmarkIndex::RightElbow, 0.0), (LandmarkIndex::RightWrist, 0.0)],
        );
        assert_eq!(select_pushup_side(&frame, 0.5), Side::Right);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
