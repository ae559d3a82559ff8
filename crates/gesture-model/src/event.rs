//! Raw touch transition types.
//!
//! A gesture is reported as a sequence of transitions: one `start`,
//! any number of `move`s, then a terminal `end` or `cancel`. Recorded
//! transitions use the same JSONL layout as the tracker's output files:
//! one JSON object per line, `#`-prefixed lines are headers.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

/// Milliseconds since the Unix epoch.
pub type TimestampMs = u64;

/// The four kinds of touch transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Start,
    Move,
    End,
    Cancel,
}

impl TransitionKind {
    /// True only for the transition that opens a gesture.
    pub fn is_initial(self) -> bool {
        self == TransitionKind::Start
    }

    /// True while the contact is still down (start and move).
    pub fn is_ongoing(self) -> bool {
        matches!(self, TransitionKind::Start | TransitionKind::Move)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransitionKind::Start => "start",
            TransitionKind::Move => "move",
            TransitionKind::End => "end",
            TransitionKind::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    /// Arrival time. `None` means the tracker stamps it on arrival.
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<TimestampMs>,

    /// Which transition this is.
    #[serde(rename = "type")]
    pub kind: TransitionKind,

    /// Contacts carried by the event. Only the first one is tracked.
    pub touches: Vec<Point2D>,
}

impl TouchEvent {
    /// Create an event with a single contact and no timestamp.
    pub fn new(kind: TransitionKind, x: f64, y: f64) -> Self {
        Self {
            timestamp_ms: None,
            kind,
            touches: vec![Point2D::new(x, y)],
        }
    }

    /// Create a `start` transition.
    pub fn start(x: f64, y: f64) -> Self {
        Self::new(TransitionKind::Start, x, y)
    }

    /// Create a `move` transition.
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::new(TransitionKind::Move, x, y)
    }

    /// Create an `end` transition.
    pub fn end(x: f64, y: f64) -> Self {
        Self::new(TransitionKind::End, x, y)
    }

    /// Create a `cancel` transition.
    pub fn cancel(x: f64, y: f64) -> Self {
        Self::new(TransitionKind::Cancel, x, y)
    }

    /// Attach an explicit timestamp.
    pub fn at(mut self, timestamp_ms: TimestampMs) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// The tracked contact: the first touch, if any.
    pub fn primary_point(&self) -> Option<Point2D> {
        self.touches.first().copied()
    }
}

/// Parse touch transitions from JSONL content (one JSON object per line).
pub fn parse_transitions(jsonl: &str) -> Result<Vec<TouchEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize touch transitions to JSONL format.
pub fn serialize_transitions(events: &[TouchEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}
