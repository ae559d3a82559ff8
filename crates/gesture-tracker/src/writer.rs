//! JSONL telemetry output.
//!
//! A `TelemetryWriter` is a subscriber: every published record becomes one
//! line. The sink is flushed whenever a gesture ends or is cancelled, so a
//! reader tailing the file sees whole gestures; `BufWriter` flushes the
//! rest when the writer is dropped. Write failures are logged and never
//! reach the tracker.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use swipe_common::error::{SwipeError, SwipeResult};
use swipe_gesture_model::telemetry::{SwipeTelemetry, TelemetryStreamHeader};

use crate::subscribers::SwipeSubscriber;

/// Streams telemetry records as JSONL into any byte sink.
pub struct TelemetryWriter<W: Write + Send = BufWriter<File>> {
    sink: W,
    label: String,
    gestures_completed: u64,
}

impl TelemetryWriter {
    /// Create (or truncate) `path` and write the stream header.
    pub fn create(path: &Path, header: &TelemetryStreamHeader) -> SwipeResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        tracing::debug!(path = %path.display(), "Telemetry file opened");
        Self::with_label(BufWriter::new(file), header, path.display().to_string())
    }
}

impl<W: Write + Send> TelemetryWriter<W> {
    /// Wrap an arbitrary sink; the header is written immediately.
    pub fn new(sink: W, header: &TelemetryStreamHeader) -> SwipeResult<Self> {
        Self::with_label(sink, header, "writer".to_string())
    }

    fn with_label(
        mut sink: W,
        header: &TelemetryStreamHeader,
        label: String,
    ) -> SwipeResult<Self> {
        let header_json = serde_json::to_string(header)?;
        writeln!(sink, "# {header_json}")
            .map_err(|e| SwipeError::output(format!("{label}: header not written: {e}")))?;
        Ok(Self {
            sink,
            label,
            gestures_completed: 0,
        })
    }

    /// Append one record; flushes after the terminal transition of a gesture.
    pub fn write_record(&mut self, record: &SwipeTelemetry) -> SwipeResult<()> {
        serde_json::to_writer(&mut self.sink, record)?;
        self.sink
            .write_all(b"\n")
            .map_err(|e| SwipeError::output(format!("{}: record not written: {e}", self.label)))?;

        if record.is_final() {
            self.gestures_completed += 1;
            self.sink
                .flush()
                .map_err(|e| SwipeError::output(format!("{}: flush failed: {e}", self.label)))?;
        }
        Ok(())
    }

    /// Gestures whose terminal record has been written.
    pub fn gestures_completed(&self) -> u64 {
        self.gestures_completed
    }

    /// Recover the sink, e.g. to inspect an in-memory buffer.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write + Send> SwipeSubscriber for TelemetryWriter<W> {
    fn on_swipe(&mut self, record: &SwipeTelemetry) {
        if let Err(e) = self.write_record(record) {
            tracing::warn!(error = %e, "Dropping telemetry record");
        }
    }

    fn name(&self) -> &str {
        "jsonl-writer"
    }
}
