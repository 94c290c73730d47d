//! Exercise repetition tracking from pose landmarks.
//!
//! This library turns a stream of 33-point body pose landmark frames into
//! per-frame exercise feedback:
//! - Joint angles computed from three landmarks
//! - Movement phase classification (squat and push-up)
//! - Repetition counting with a two-way latch
//! - Form rules and an overall posture banner
//! - Overlay hints (banner and joint annotations) for a renderer
//!
//! The analysis pipeline for every frame is:
//! 1. Coarse visibility gate over shoulders, elbows, hips, knees and ankles
//! 2. Side selection (left or right body side)
//! 3. Primary and auxiliary joint angles
//! 4. Phase classification and repetition counter update
//! 5. Form evaluation and posture verdict
//!
//! # Examples
//!
//! ## Analyzing Frames
//!
//! ```no_run
//! use exercise_rep_tracker::{
//!     analyzer::ExerciseAnalyzer,
//!     exercises::Exercise,
//!     landmarks::{Landmark, LandmarkFrame},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut analyzer = ExerciseAnalyzer::new(Exercise::Squat);
//!
//! // Landmarks normally come from a pose estimator
//! let landmarks = vec![Landmark::new(0.5, 0.5, 0.0, 0.9); 33];
//! let frame = LandmarkFrame::from_slice(&landmarks)?;
//!
//! let analysis = analyzer.analyze(Some(&frame));
//! println!("{} - reps: {}", analysis.result.phase_label, analysis.result.rep_count);
//! println!("Banner: {}", analysis.overlay.banner.message);
//!
//! // No person in the frame
//! let analysis = analyzer.analyze(None);
//! assert!(!analysis.result.visible);
//! # Ok(())
//! # }
//! ```
//!
//! ## Replaying a Recording
//!
//! ```no_run
//! use exercise_rep_tracker::{
//!     analyzer::ExerciseAnalyzer,
//!     config::Config,
//!     exercises::Exercise,
//!     recording::{Pacing, ReplaySource},
//!     session::Session,
//! };
//! use std::ops::ControlFlow;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("config.yaml")?;
//! let analyzer = ExerciseAnalyzer::from_config(Exercise::Pushup, &config)?;
//! let source = ReplaySource::open("pushups.jsonl", Pacing::Realtime)?;
//!
//! let mut session = Session::new(source, analyzer, config.session.poll_interval());
//! let summary = session.run(|analysis| {
//!     if analysis.result.rep_completed {
//!         println!("Rep {}", analysis.result.rep_count);
//!     }
//!     ControlFlow::Continue(())
//! })?;
//! println!("{} reps in {:?}", summary.rep_count, summary.elapsed);
//! # Ok(())
//! # }
//! ```

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

/// Pose landmark indices and frames
pub mod landmarks;

/// Body side selection
pub mod side;

/// Joint angle geometry
pub mod geometry;

/// Coarse visibility gate
pub mod visibility;

/// Movement phase classification
pub mod phase;

/// Repetition counting
pub mod rep_counter;

/// Form rules and posture verdicts
pub mod form;

/// Overlay hints for the renderer
pub mod overlay;

/// Squat and push-up profiles
pub mod exercises;

/// Per-frame analysis pipeline
pub mod analyzer;

/// Frame loop and landmark providers
pub mod session;

/// Landmark recordings and replay
pub mod recording;

pub use error::{Error, FrameRejection, Result};
