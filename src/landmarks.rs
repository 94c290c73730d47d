//! Body landmark frames as delivered by the pose estimator.
//!
//! Landmark names are bound to fixed positions once, so every lookup is an
//! array index and a required landmark can never be "not found".

use crate::{constants::NUM_POSE_LANDMARKS, side::Side, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// The 33 body landmarks in provider order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    LeftMouth = 9,
    RightMouth = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const COUNT: usize = NUM_POSE_LANDMARKS;

    /// All landmarks in provider order
    pub const ALL: [Self; NUM_POSE_LANDMARKS] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftMouth,
        Self::RightMouth,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this landmark in a frame
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Anatomical label, e.g. `leftShoulder`
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "leftEyeInner",
            Self::LeftEye => "leftEye",
            Self::LeftEyeOuter => "leftEyeOuter",
            Self::RightEyeInner => "rightEyeInner",
            Self::RightEye => "rightEye",
            Self::RightEyeOuter => "rightEyeOuter",
            Self::LeftEar => "leftEar",
            Self::RightEar => "rightEar",
            Self::LeftMouth => "leftMouth",
            Self::RightMouth => "rightMouth",
            Self::LeftShoulder => "leftShoulder",
            Self::RightShoulder => "rightShoulder",
            Self::LeftElbow => "leftElbow",
            Self::RightElbow => "rightElbow",
            Self::LeftWrist => "leftWrist",
            Self::RightWrist => "rightWrist",
            Self::LeftPinky => "leftPinky",
            Self::RightPinky => "rightPinky",
            Self::LeftIndex => "leftIndex",
            Self::RightIndex => "rightIndex",
            Self::LeftThumb => "leftThumb",
            Self::RightThumb => "rightThumb",
            Self::LeftHip => "leftHip",
            Self::RightHip => "rightHip",
            Self::LeftKnee => "leftKnee",
            Self::RightKnee => "rightKnee",
            Self::LeftAnkle => "leftAnkle",
            Self::RightAnkle => "rightAnkle",
            Self::LeftHeel => "leftHeel",
            Self::RightHeel => "rightHeel",
            Self::LeftFootIndex => "leftFootIndex",
            Self::RightFootIndex => "rightFootIndex",
        }
    }

    /// Landmark of `joint` on the given body side
    #[must_use]
    pub fn of(joint: Joint, side: Side) -> Self {
        match (joint, side) {
            (Joint::Shoulder, Side::Left) => Self::LeftShoulder,
            (Joint::Shoulder, Side::Right) => Self::RightShoulder,
            (Joint::Elbow, Side::Left) => Self::LeftElbow,
            (Joint::Elbow, Side::Right) => Self::RightElbow,
            (Joint::Wrist, Side::Left) => Self::LeftWrist,
            (Joint::Wrist, Side::Right) => Self::RightWrist,
            (Joint::Hip, Side::Left) => Self::LeftHip,
            (Joint::Hip, Side::Right) => Self::RightHip,
            (Joint::Knee, Side::Left) => Self::LeftKnee,
            (Joint::Knee, Side::Right) => Self::RightKnee,
            (Joint::Ankle, Side::Left) => Self::LeftAnkle,
            (Joint::Ankle, Side::Right) => Self::RightAnkle,
        }
    }
}

impl fmt::Display for LandmarkIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LandmarkIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|lm| lm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown landmark name: {s}")))
    }
}

/// Bilateral limb joints used by the exercise analyzers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}

/// A single landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized X (0.0 = left edge, 1.0 = right edge)
    pub x: f32,
    /// Normalized Y (0.0 = top edge, 1.0 = bottom edge)
    pub y: f32,
    /// Relative depth, unused by the planar analysis
    #[serde(default)]
    pub z: f32,
    /// Provider confidence that the landmark is visible (0.0-1.0)
    #[serde(default)]
    pub visibility: f32,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// A landmark with non-finite values is treated as absent
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.visibility.is_finite()
    }

    /// Planar position for angle computation
    #[must_use]
    pub fn xy(&self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

impl Default for Landmark {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// One estimation cycle's worth of landmarks, always exactly 33
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkFrame {
    landmarks: [Landmark; NUM_POSE_LANDMARKS],
}

impl LandmarkFrame {
    #[must_use]
    pub fn new(landmarks: [Landmark; NUM_POSE_LANDMARKS]) -> Self {
        Self { landmarks }
    }

    /// Build a frame from provider output
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly 33 landmarks
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        let landmarks: [Landmark; NUM_POSE_LANDMARKS] = landmarks.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "Expected {} landmarks, got {}",
                NUM_POSE_LANDMARKS,
                landmarks.len()
            ))
        })?;
        Ok(Self { landmarks })
    }

    #[must_use]
    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[index.index()]
    }

    /// Landmark of `joint` on `side`
    #[must_use]
    pub fn joint(&self, joint: Joint, side: Side) -> &Landmark {
        self.get(LandmarkIndex::of(joint, side))
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandmarkIndex, &Landmark)> {
        LandmarkIndex::ALL.iter().copied().zip(self.landmarks.iter())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }

    #[must_use]
    pub fn into_landmarks(self) -> [Landmark; NUM_POSE_LANDMARKS] {
        self.landmarks
    }
}

impl Index<LandmarkIndex> for LandmarkFrame {
    type Output = Landmark;

    fn index(&self, index: LandmarkIndex) -> &Landmark {
        self.get(index)
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkFrame {
    type Error = Error;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        Self::from_slice(&landmarks)
    }
}

impl From<LandmarkFrame> for Vec<Landmark> {
    fn from(frame: LandmarkFrame) -> Self {
        frame.landmarks.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order_matches_provider() {
        for (i, lm) in LandmarkIndex::ALL.iter().enumerate() {
            assert_eq!(lm.index(), i);
            assert_eq!(LandmarkIndex::from_index(i), Some(*lm));
        }
        assert_eq!(LandmarkIndex::from_index(33), None);
        assert_eq!(LandmarkIndex::LeftShoulder.index(), 11);
        assert_eq!(LandmarkIndex::RightAnkle.index(), 28);
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!("leftKnee".parse::<LandmarkIndex>().unwrap(), LandmarkIndex::LeftKnee);
        assert_eq!("RIGHTWRIST".parse::<LandmarkIndex>().unwrap(), LandmarkIndex::RightWrist);
        assert!("tail".parse::<LandmarkIndex>().is_err());
    }

    #[test]
    fn test_joint_lookup_by_side() {
        assert_eq!(LandmarkIndex::of(Joint::Knee, Side::Left), LandmarkIndex::LeftKnee);
        assert_eq!(LandmarkIndex::of(Joint::Wrist, Side::Right), LandmarkIndex::RightWrist);
    }

    #[test]
    fn test_from_slice_requires_exactly_33() {
        let short = vec![Landmark::default(); 32];
        assert!(LandmarkFrame::from_slice(&short).is_err());

        let long = vec![Landmark::default(); 34];
        assert!(LandmarkFrame::from_slice(&long).is_err());

        let exact = vec![Landmark::new(0.5, 0.5, 0.0, 0.9); 33];
        let frame = LandmarkFrame::from_slice(&exact).unwrap();
        assert_eq!(frame[LandmarkIndex::Nose].visibility, 0.9);
    }

    #[test]
    fn test_non_finite_landmark_is_absent() {
        assert!(Landmark::new(0.1, 0.2, 0.0, 0.5).is_present());
        assert!(!Landmark::new(f32::NAN, 0.2, 0.0, 0.5).is_present());
        assert!(!Landmark::new(0.1, 0.2, 0.0, f32::INFINITY).is_present());
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let json = r#"[{"x":0.1,"y":0.2,"z":0.0,"visibility":0.9}]"#;
        assert!(serde_json::from_str::<LandmarkFrame>(json).is_err());
    }
}
