//! Touch input source implementations.
//!
//! Each source delivers raw transitions to the driver loop. Live platform
//! sources plug in by implementing `TouchSource`.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use swipe_common::error::{SwipeError, SwipeResult};
use swipe_gesture_model::event::TouchEvent;

use crate::TouchSource;

/// Replays a fixed list of transitions, then reports exhaustion.
pub struct ReplaySource {
    events: VecDeque<TouchEvent>,
}

impl ReplaySource {
    /// Create a source with pre-loaded events.
    pub fn new(events: Vec<TouchEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl TouchSource for ReplaySource {
    fn poll(&mut self) -> SwipeResult<Option<TouchEvent>> {
        Ok(self.events.pop_front())
    }

    fn name(&self) -> &str {
        "replay"
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Reads transitions line by line from a JSONL recording.
pub struct JsonlTouchSource {
    reader: BufReader<File>,
    path: PathBuf,
    line_no: usize,
    exhausted: bool,
}

impl JsonlTouchSource {
    /// Open a recording. Lines starting with `#` are treated as headers.
    pub fn open(path: impl AsRef<Path>) -> SwipeResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(SwipeError::FileNotFound { path });
        }
        let file = File::open(&path)?;
        Ok(Self {
            reader: BufReader::new(file),
            path,
            line_no: 0,
            exhausted: false,
        })
    }
}

impl TouchSource for JsonlTouchSource {
    fn poll(&mut self) -> SwipeResult<Option<TouchEvent>> {
        let mut line = String::new();
        loop {
            if self.exhausted {
                return Ok(None);
            }
            line.clear();
            let read = self.reader.read_line(&mut line).map_err(|e| {
                self.exhausted = true;
                SwipeError::input(format!("Failed reading {}: {e}", self.path.display()))
            })?;
            if read == 0 {
                self.exhausted = true;
                return Ok(None);
            }
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return serde_json::from_str(trimmed).map(Some).map_err(|e| {
                SwipeError::input(format!(
                    "{}:{}: invalid touch event: {e}",
                    self.path.display(),
                    self.line_no
                ))
            });
        }
    }

    fn name(&self) -> &str {
        "jsonl"
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
