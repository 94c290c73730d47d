use super::{side_angle, Exercise, ExerciseProfile, SideAnalysis};
use crate::{
    config::SquatConfig,
    constants::SQUAT_PROGRESS_SPAN,
    error::FrameRejection,
    form::{evaluate_squat_form, FormVerdict, PostureStatus},
    landmarks::{Joint, LandmarkFrame},
    overlay::{Color, PostureBanner},
    phase::{Phase, SquatPhase},
    side::{select_squat_side, Side},
};

/// Squat profile
pub struct SquatProfile {
    config: SquatConfig,
}

impl SquatProfile {
    #[must_use]
    pub fn new(config: SquatConfig) -> Self {
        Self { config }
    }
}

impl Default for SquatProfile {
    fn default() -> Self {
        Self::new(SquatConfig::default())
    }
}

impl ExerciseProfile for SquatProfile {
    fn exercise(&self) -> Exercise {
        Exercise::Squat
    }

    fn select_side(&self, frame: &LandmarkFrame) -> Option<Side> {
        select_squat_side(frame, self.config.side_visibility)
    }

    fn analyze_side(&self, frame: &LandmarkFrame, side: Side) -> Result<SideAnalysis, FrameRejection> {
        // The knee angle doubles as the primary angle
        let knee_angle = side_angle(frame, side, Joint::Ankle, Joint::Knee, Joint::Hip)?;
        let back_angle = side_angle(frame, side, Joint::Shoulder, Joint::Hip, Joint::Knee)?;

        Ok(SideAnalysis {
            primary_angle: knee_angle,
            phase: Phase::Squat(SquatPhase::classify(knee_angle, &self.config.phases)),
            form: evaluate_squat_form(back_angle, knee_angle, &self.config.form),
            annotation: None,
        })
    }

    /// Ascent never counts as correct, even with good angles
    fn posture_correct(&self, phase: Phase, form: &FormVerdict) -> bool {
        form.ok
            && matches!(
                phase,
                Phase::Squat(SquatPhase::Standing | SquatPhase::Descent | SquatPhase::Bottom)
            )
    }

    fn banner(&self, correct: bool) -> PostureBanner {
        if correct {
            PostureBanner {
                status: PostureStatus::Correct,
                message: "✅ Correct Posture",
                color: Color::GREEN,
            }
        } else {
            PostureBanner {
                status: PostureStatus::Incorrect,
                message: "❌ Wrong Posture",
                color: Color::RED,
            }
        }
    }

    fn idle_label(&self) -> &'static str {
        "You are not standing and coming in frame 🫠"
    }

    fn tip(&self) -> &'static str {
        "Keep your back straight and chest up throughout the movement."
    }

    fn progress_span(&self) -> f64 {
        SQUAT_PROGRESS_SPAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormReason;

    #[test]
    fn test_ascent_is_never_correct() {
        let profile = SquatProfile::default();
        let good = FormVerdict::from_reason(FormReason::GoodPosture);
        assert!(profile.posture_correct(Phase::Squat(SquatPhase::Bottom), &good));
        assert!(profile.posture_correct(Phase::Squat(SquatPhase::Standing), &good));
        assert!(!profile.posture_correct(Phase::Squat(SquatPhase::Ascent), &good));
    }

    #[test]
    fn test_bad_form_is_never_correct() {
        let profile = SquatProfile::default();
        let bad = FormVerdict::from_reason(FormReason::BackTooFarForward);
        assert!(!profile.posture_correct(Phase::Squat(SquatPhase::Descent), &bad));
    }

    #[test]
    fn test_banner_texts() {
        let profile = SquatProfile::default();
        assert_eq!(profile.banner(true).message, "✅ Correct Posture");
        assert_eq!(profile.banner(false).color, Color::RED);
    }
}
