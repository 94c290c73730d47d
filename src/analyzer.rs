//! Per-frame exercise analysis.
//!
//! [`ExerciseAnalyzer`] wires the visibility gate, side selection, angle
//! geometry, phase classification, form rules and the repetition counter for
//! one exercise. Each call consumes one landmark frame (or "no landmarks")
//! and returns one result; the counter is the only state carried between
//! calls.

use crate::{
    config::Config,
    error::FrameRejection,
    exercises::{create_profile, depth_progress, Exercise, ExerciseProfile},
    form::{FormVerdict, PostureStatus},
    landmarks::LandmarkFrame,
    overlay::Overlay,
    phase::Phase,
    rep_counter::RepCounterState,
    side::Side,
    visibility::VisibilityGate,
    Result,
};
use log::{debug, trace};
use serde::Serialize;

/// What the renderer shows for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Whether the body was observed well enough to analyze
    pub visible: bool,
    pub side: Option<Side>,
    /// Primary joint angle in degrees
    pub primary_angle: Option<f64>,
    pub phase: Option<Phase>,
    /// Phase label with the side, or the exercise's idle prompt
    pub phase_label: String,
    pub rep_count: u32,
    /// True on the frame that completed a repetition
    pub rep_completed: bool,
    pub form: FormVerdict,
    pub posture: PostureStatus,
    pub tip: &'static str,
    /// Movement depth for the progress bar (0-100)
    pub depth_progress: Option<f64>,
    /// Why the frame was only partially analyzed
    pub rejection: Option<FrameRejection>,
}

impl AnalysisResult {
    /// Tip split into one entry per sentence
    #[must_use]
    pub fn tip_lines(&self) -> Vec<String> {
        self.tip
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{s}."))
            .collect()
    }
}

/// Result plus the overlay side-channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameAnalysis {
    pub result: AnalysisResult,
    pub overlay: Overlay,
}

/// Exercise analyzer for one tracking session
pub struct ExerciseAnalyzer {
    profile: Box<dyn ExerciseProfile>,
    gate: VisibilityGate,
    counter: RepCounterState,
}

impl ExerciseAnalyzer {
    /// Create an analyzer with the default thresholds
    #[must_use]
    pub fn new(exercise: Exercise) -> Self {
        let config = Config::default();
        Self::with_profile(create_profile(exercise, &config), VisibilityGate::new(config.visibility.threshold))
    }

    /// Create an analyzer from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn from_config(exercise: Exercise, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_profile(
            create_profile(exercise, config),
            VisibilityGate::new(config.visibility.threshold),
        ))
    }

    /// Create an analyzer around a custom profile
    #[must_use]
    pub fn with_profile(profile: Box<dyn ExerciseProfile>, gate: VisibilityGate) -> Self {
        Self {
            profile,
            gate,
            counter: RepCounterState::new(),
        }
    }

    #[must_use]
    pub fn exercise(&self) -> Exercise {
        self.profile.exercise()
    }

    #[must_use]
    pub fn counter(&self) -> &RepCounterState {
        &self.counter
    }

    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.counter.count()
    }

    /// Start a new session
    pub fn reset(&mut self) {
        debug!("Resetting {} session after {} reps", self.exercise(), self.counter.count());
        self.counter.reset();
    }

    /// Analyze one frame. `None` means the provider found no person.
    pub fn analyze(&mut self, frame: Option<&LandmarkFrame>) -> FrameAnalysis {
        let frame = match self.gate.check(frame) {
            Ok(frame) => frame,
            Err(rejection) => return self.rejected(rejection),
        };

        let Some(side) = self.profile.select_side(frame) else {
            trace!("No usable {} side", self.exercise());
            return self.rejected(FrameRejection::NoUsableSide);
        };

        let analysis = match self.profile.analyze_side(frame, side) {
            Ok(analysis) => analysis,
            Err(rejection) => return self.rejected(rejection),
        };

        let rep_completed = self.counter.update(analysis.phase.is_baseline());
        if rep_completed {
            debug!("{} rep {} completed ({} side)", self.exercise(), self.counter.count(), side);
        }
        trace!(
            "{} angle {:.1} -> {:?}, form {:?}",
            side,
            analysis.primary_angle,
            analysis.phase,
            analysis.form.reason
        );

        let correct = self.profile.posture_correct(analysis.phase, &analysis.form);
        let banner = self.profile.banner(correct);

        FrameAnalysis {
            result: AnalysisResult {
                visible: true,
                side: Some(side),
                primary_angle: Some(analysis.primary_angle),
                phase: Some(analysis.phase),
                phase_label: analysis.phase.label_with_side(side),
                rep_count: self.counter.count(),
                rep_completed,
                form: analysis.form,
                posture: banner.status,
                tip: self.profile.tip(),
                depth_progress: Some(depth_progress(analysis.primary_angle, self.profile.progress_span())),
                rejection: None,
            },
            overlay: Overlay::new(banner, analysis.annotation),
        }
    }

    /// Result for a frame that never reached phase classification.
    /// The counter is left untouched.
    fn rejected(&self, rejection: FrameRejection) -> FrameAnalysis {
        let out_of_frame = rejection.is_out_of_frame();
        let overlay = if out_of_frame {
            Overlay::out_of_frame()
        } else {
            Overlay::new(self.profile.banner(false), None)
        };

        FrameAnalysis {
            result: AnalysisResult {
                visible: !out_of_frame,
                side: None,
                primary_angle: None,
                phase: None,
                phase_label: self.profile.idle_label().to_string(),
                rep_count: self.counter.count(),
                rep_completed: false,
                form: FormVerdict::not_evaluated(),
                posture: overlay.banner.status,
                tip: self.profile.tip(),
                depth_progress: None,
                rejection: Some(rejection),
            },
            overlay,
        }
    }
}
