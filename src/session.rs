//! Frame loop between a landmark provider and the analyzer.

use crate::{
    analyzer::{ExerciseAnalyzer, FrameAnalysis},
    landmarks::LandmarkFrame,
    Error, Result,
};
use log::{debug, info};
use serde::Serialize;
use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

/// Outcome of one provider poll
#[derive(Debug, Clone, PartialEq)]
pub enum SourcePoll {
    /// No new frame since the last poll
    NotReady,
    /// A frame was processed but no person was found
    NoLandmarks,
    /// Most recent landmark frame
    Frame(LandmarkFrame),
    /// The provider has no more frames
    Finished,
}

/// Provider of pose landmark frames
pub trait LandmarkSource {
    /// Return the most recent frame available `elapsed` after session start.
    /// Older undelivered frames are dropped, never queued.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider fails to produce frames
    fn poll(&mut self, elapsed: Duration) -> Result<SourcePoll>;

    /// Release the underlying capture resource. Must be idempotent.
    fn release(&mut self);
}

/// Totals reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub frames_analyzed: u64,
    pub frames_not_visible: u64,
    pub rep_count: u32,
    pub elapsed: Duration,
}

/// One analysis session owning its provider
///
/// The provider is released when [`Session::run`] returns and, failing that,
/// when the session is dropped (including during unwinding).
pub struct Session<S: LandmarkSource> {
    source: S,
    analyzer: ExerciseAnalyzer,
    interval: Duration,
    released: bool,
}

impl<S: LandmarkSource> Session<S> {
    /// Create a session polling `source` every `interval`
    pub fn new(source: S, analyzer: ExerciseAnalyzer, interval: Duration) -> Self {
        Self {
            source,
            analyzer,
            interval,
            released: false,
        }
    }

    #[must_use]
    pub fn analyzer(&self) -> &ExerciseAnalyzer {
        &self.analyzer
    }

    pub fn analyzer_mut(&mut self) -> &mut ExerciseAnalyzer {
        &mut self.analyzer
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Drive the frame loop until the provider finishes or `on_frame` breaks.
    ///
    /// # Errors
    ///
    /// Returns the provider's error, or [`Error::SourceError`] when the
    /// session was already released
    pub fn run<F>(&mut self, on_frame: F) -> Result<SessionSummary>
    where
        F: FnMut(&FrameAnalysis) -> ControlFlow<()>,
    {
        if self.released {
            return Err(Error::SourceError("Session already released".to_string()));
        }

        info!(
            "Starting {} session (poll interval {:?})",
            self.analyzer.exercise(),
            self.interval
        );
        let result = self.frame_loop(on_frame);
        self.release();

        if let Ok(summary) = &result {
            info!(
                "Session finished: {} frames, {} not visible, {} reps",
                summary.frames_analyzed, summary.frames_not_visible, summary.rep_count
            );
        }
        result
    }

    fn frame_loop<F>(&mut self, mut on_frame: F) -> Result<SessionSummary>
    where
        F: FnMut(&FrameAnalysis) -> ControlFlow<()>,
    {
        let start = Instant::now();
        let mut summary = SessionSummary::default();

        loop {
            let tick = Instant::now();
            let poll = self.source.poll(start.elapsed())?;

            let analysis = match poll {
                SourcePoll::Finished => break,
                SourcePoll::NotReady => None,
                SourcePoll::NoLandmarks => Some(self.analyzer.analyze(None)),
                SourcePoll::Frame(frame) => Some(self.analyzer.analyze(Some(&frame))),
            };

            if let Some(analysis) = analysis {
                summary.frames_analyzed += 1;
                if !analysis.result.visible {
                    summary.frames_not_visible += 1;
                }
                if on_frame(&analysis).is_break() {
                    debug!("Frame callback stopped the session");
                    break;
                }
            } else if self.interval.is_zero() {
                thread::yield_now();
            }

            let spent = tick.elapsed();
            if spent < self.interval {
                thread::sleep(self.interval - spent);
            }
        }

        summary.rep_count = self.analyzer.rep_count();
        summary.elapsed = start.elapsed();
        Ok(summary)
    }

    /// Release the provider
    pub fn release(&mut self) {
        if !self.released {
            self.source.release();
            self.released = true;
            debug!("Landmark source released");
        }
    }
}

impl<S: LandmarkSource> Drop for Session<S> {
    fn drop(&mut self) {
        self.release();
    }
}
