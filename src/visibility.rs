//! Coarse visibility gate.
//!
//! The gate is looser than the side selectors' thresholds so a user standing
//! at the edge of visibility sees a stable "come into frame" message instead
//! of flicker between states.

use crate::{
    constants::DEFAULT_GATE_VISIBILITY,
    error::FrameRejection,
    landmarks::{LandmarkFrame, LandmarkIndex},
};

/// Landmarks that must be observed before any analysis happens
pub const REQUIRED_LANDMARKS: [LandmarkIndex; 10] = [
    LandmarkIndex::LeftShoulder,
    LandmarkIndex::RightShoulder,
    LandmarkIndex::LeftElbow,
    LandmarkIndex::RightElbow,
    LandmarkIndex::LeftHip,
    LandmarkIndex::RightHip,
    LandmarkIndex::LeftKnee,
    LandmarkIndex::RightKnee,
    LandmarkIndex::LeftAnkle,
    LandmarkIndex::RightAnkle,
];

/// Pass/fail check over a fixed set of landmarks
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    required: &'static [LandmarkIndex],
    threshold: f32,
}

impl VisibilityGate {
    /// Gate over [`REQUIRED_LANDMARKS`] with an inclusive `threshold`
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            required: &REQUIRED_LANDMARKS,
            threshold,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// First required landmark that is absent or below threshold
    #[must_use]
    pub fn first_missing(&self, frame: &LandmarkFrame) -> Option<LandmarkIndex> {
        self.required.iter().copied().find(|&idx| {
            let lm = frame.get(idx);
            !lm.is_present() || lm.visibility < self.threshold
        })
    }

    #[must_use]
    pub fn passes(&self, frame: &LandmarkFrame) -> bool {
        self.first_missing(frame).is_none()
    }

    /// Gate a possibly-absent frame. "No landmarks" fails like a hidden body.
    ///
    /// # Errors
    ///
    /// Returns [`FrameRejection::InsufficientVisibility`] when the frame is
    /// absent or any required landmark is not visible enough.
    pub fn check<'a>(
        &self,
        frame: Option<&'a LandmarkFrame>,
    ) -> std::result::Result<&'a LandmarkFrame, FrameRejection> {
        let frame = frame.ok_or(FrameRejection::InsufficientVisibility)?;
        match self.first_missing(frame) {
            Some(idx) => {
                log::trace!("Visibility gate failed on {}", idx);
                Err(FrameRejection::InsufficientVisibility)
            }
            None => Ok(frame),
        }
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(DEFAULT_GATE_VISIBILITY)
    }
}
