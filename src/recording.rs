//! JSON-lines landmark recordings and a replay provider.
//!
//! Each line holds one frame: `{"t_ms": 120, "landmarks": [...33 landmarks]}`.
//! `landmarks` may be `null` or omitted for frames where no person was found.

use crate::{
    landmarks::LandmarkFrame,
    session::{LandmarkSource, SourcePoll},
    Error, Result,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Duration;

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Capture time in milliseconds since the recording started
    pub t_ms: u64,
    #[serde(default)]
    pub landmarks: Option<LandmarkFrame>,
}

impl RecordedFrame {
    #[must_use]
    pub fn new(t_ms: u64, landmarks: Option<LandmarkFrame>) -> Self {
        Self { t_ms, landmarks }
    }

    fn into_poll(self) -> SourcePoll {
        match self.landmarks {
            Some(frame) => SourcePoll::Frame(frame),
            None => SourcePoll::NoLandmarks,
        }
    }
}

/// How replayed frames are handed out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Follow the recorded timestamps; frames superseded before they are
    /// polled are dropped
    Realtime,
    /// Deliver every record in order, ignoring timestamps
    EveryFrame,
}

/// Landmark provider replaying a recording
pub struct ReplaySource {
    reader: Box<dyn BufRead + Send>,
    pacing: Pacing,
    line: usize,
    pending: Option<RecordedFrame>,
    dropped: u64,
    released: bool,
}

impl ReplaySource {
    /// Open a recording file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened
    pub fn open<P: AsRef<Path>>(path: P, pacing: Pacing) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        info!("Replaying landmarks from {} ({:?})", path.display(), pacing);
        Ok(Self::new(Box::new(BufReader::new(file)), pacing))
    }

    #[must_use]
    pub fn new(reader: Box<dyn BufRead + Send>, pacing: Pacing) -> Self {
        Self {
            reader,
            pacing,
            line: 0,
            pending: None,
            dropped: 0,
            released: false,
        }
    }

    /// Frames skipped because a newer one was already due
    #[must_use]
    pub fn dropped_frames(&self) -> u64 {
        self.dropped
    }

    fn next_record(&mut self) -> Result<Option<RecordedFrame>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = buf.trim();
            if text.is_empty() {
                continue;
            }
            return serde_json::from_str(text)
                .map(Some)
                .map_err(|e| Error::RecordingError {
                    line: self.line,
                    message: e.to_string(),
                });
        }
    }

    fn poll_realtime(&mut self, elapsed: Duration) -> Result<SourcePoll> {
        let now_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let mut latest: Option<RecordedFrame> = None;

        loop {
            if self.pending.is_none() {
                self.pending = self.next_record()?;
            }
            match self.pending.take() {
                Some(record) if record.t_ms <= now_ms => {
                    if latest.replace(record).is_some() {
                        self.dropped += 1;
                    }
                }
                Some(record) => {
                    self.pending = Some(record);
                    break;
                }
                None => break,
            }
        }

        Ok(match latest {
            Some(record) => record.into_poll(),
            None if self.pending.is_some() => SourcePoll::NotReady,
            None => SourcePoll::Finished,
        })
    }
}

impl LandmarkSource for ReplaySource {
    fn poll(&mut self, elapsed: Duration) -> Result<SourcePoll> {
        if self.released {
            return Ok(SourcePoll::Finished);
        }
        match self.pacing {
            Pacing::Realtime => self.poll_realtime(elapsed),
            Pacing::EveryFrame => Ok(self
                .next_record()?
                .map_or(SourcePoll::Finished, RecordedFrame::into_poll)),
        }
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.pending = None;
        self.reader = Box::new(io::empty());
        debug!("Replay released after {} lines, {} frames dropped", self.line, self.dropped);
    }
}

/// Write frames as a JSON-lines recording
///
/// # Errors
///
/// Returns an error if a frame cannot be serialized or written
pub fn write_recording<W: Write>(mut writer: W, frames: &[RecordedFrame]) -> Result<()> {
    for frame in frames {
        serde_json::to_writer(&mut writer, frame)
            .map_err(|e| Error::InvalidInput(format!("Failed to serialize frame: {e}")))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
