//! Constants used throughout the application

/// Number of body landmarks delivered per frame
pub const NUM_POSE_LANDMARKS: usize = 33;

/// Coarse visibility gate threshold (inclusive)
pub const DEFAULT_GATE_VISIBILITY: f32 = 0.15;

/// Squat side selection: ankle, knee and hip must all exceed this
pub const DEFAULT_SQUAT_SIDE_VISIBILITY: f32 = 0.1;

/// Push-up side selection: right shoulder must exceed this to use the right side
pub const DEFAULT_PUSHUP_SIDE_VISIBILITY: f32 = 0.5;

/// Squat phase boundaries on the ankle-knee-hip angle (degrees)
pub const DEFAULT_SQUAT_STANDING_ANGLE: f64 = 160.0;
pub const DEFAULT_SQUAT_DESCENT_ANGLE: f64 = 120.0;
pub const DEFAULT_SQUAT_BOTTOM_ANGLE: f64 = 75.0;

/// Squat form limits (degrees)
pub const DEFAULT_SQUAT_MIN_BACK_ANGLE: f64 = 120.0;
pub const DEFAULT_SQUAT_MAX_KNEE_ANGLE: f64 = 160.0;

/// Push-up phase boundaries on the shoulder-elbow-wrist angle (degrees)
pub const DEFAULT_PUSHUP_TOP_ANGLE: f64 = 160.0;
pub const DEFAULT_PUSHUP_BOTTOM_ANGLE: f64 = 90.0;

/// Push-up form limits (degrees)
pub const DEFAULT_PUSHUP_MIN_ELBOW_ANGLE: f64 = 75.0;
pub const DEFAULT_PUSHUP_MAX_ELBOW_ANGLE: f64 = 130.0;
pub const DEFAULT_PUSHUP_MIN_BACK_ANGLE: f64 = 150.0;

/// Angular span mapped onto the 0-100% depth progress bar
pub const SQUAT_PROGRESS_SPAN: f64 = 100.0;
pub const PUSHUP_PROGRESS_SPAN: f64 = 90.0;

/// Landmark provider polling interval
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default overlay canvas size (matches the requested capture resolution)
pub const DEFAULT_CANVAS_WIDTH: u32 = 1280;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 720;

/// Vertical position of the posture banner in pixels
pub const BANNER_Y: i32 = 40;

/// Pixel offset of joint annotations from their landmark
pub const ANNOTATION_OFFSET_X: i32 = 10;
pub const ANNOTATION_OFFSET_Y: i32 = -10;

/// Minimum ray length for a joint angle to be defined
pub const EPSILON: f64 = 1e-9;
