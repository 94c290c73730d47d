use super::{side_angle, Exercise, ExerciseProfile, SideAnalysis};
use crate::{
    config::PushupConfig,
    constants::PUSHUP_PROGRESS_SPAN,
    error::FrameRejection,
    form::{evaluate_pushup_form, FormReason, FormVerdict, PostureStatus},
    landmarks::{Joint, LandmarkFrame, LandmarkIndex},
    overlay::{Color, JointAnnotation, PostureBanner},
    phase::{Phase, PushupPhase},
    side::{select_pushup_side, Side},
};

/// Push-up profile
pub struct PushupProfile {
    config: PushupConfig,
}

impl PushupProfile {
    #[must_use]
    pub fn new(config: PushupConfig) -> Self {
        Self { config }
    }

    fn annotation(frame: &LandmarkFrame, side: Side, reason: FormReason) -> Option<JointAnnotation> {
        let (text, joint) = match reason {
            FormReason::ElbowAngleIncorrect => ("↙ Elbow angle wrong", Joint::Elbow),
            FormReason::BackSagging => ("⬇ Back sagging", Joint::Hip),
            _ => return None,
        };
        let anchor = LandmarkIndex::of(joint, side);
        Some(JointAnnotation::at(text, anchor, frame.get(anchor)))
    }
}

impl Default for PushupProfile {
    fn default() -> Self {
        Self::new(PushupConfig::default())
    }
}

impl ExerciseProfile for PushupProfile {
    fn exercise(&self) -> Exercise {
        Exercise::Pushup
    }

    fn select_side(&self, frame: &LandmarkFrame) -> Option<Side> {
        Some(select_pushup_side(frame, self.config.side_visibility))
    }

    fn analyze_side(&self, frame: &LandmarkFrame, side: Side) -> Result<SideAnalysis, FrameRejection> {
        let elbow_angle = side_angle(frame, side, Joint::Shoulder, Joint::Elbow, Joint::Wrist)?;
        let back_angle = side_angle(frame, side, Joint::Shoulder, Joint::Hip, Joint::Ankle)?;
        let form = evaluate_pushup_form(elbow_angle, back_angle, &self.config.form);

        Ok(SideAnalysis {
            primary_angle: elbow_angle,
            phase: Phase::Pushup(PushupPhase::classify(elbow_angle, &self.config.phases)),
            form,
            annotation: Self::annotation(frame, side, form.reason),
        })
    }

    /// Phase plays no part for push-ups
    fn posture_correct(&self, _phase: Phase, form: &FormVerdict) -> bool {
        form.ok
    }

    fn banner(&self, correct: bool) -> PostureBanner {
        if correct {
            PostureBanner {
                status: PostureStatus::Correct,
                message: "✅ Good Posture",
                color: Color::GREEN,
            }
        } else {
            PostureBanner {
                status: PostureStatus::Incorrect,
                message: "❌ Bad Posture",
                color: Color::WARNING_RED,
            }
        }
    }

    fn idle_label(&self) -> &'static str {
        "Get in position and enter frame 🫠"
    }

    fn tip(&self) -> &'static str {
        "Lower your chest fully and keep your body straight."
    }

    fn progress_span(&self) -> f64 {
        PUSHUP_PROGRESS_SPAN
    }
}
