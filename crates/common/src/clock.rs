//! Clocks for stamping touch transitions.
//!
//! Input sources usually deliver transitions without a timestamp; the
//! tracker stamps them on arrival. Timestamps are milliseconds since the
//! Unix epoch so published records carry a wall-clock `eventTime`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub use swipe_gesture_model::event::TimestampMs;

/// Source of arrival timestamps.
pub trait EventClock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> TimestampMs;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl EventClock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        chrono::Utc::now().timestamp_millis().max(0) as TimestampMs
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep a handle
/// while the tracker owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`.
    pub fn new(start_ms: TimestampMs) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now_ms: TimestampMs) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Move forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl EventClock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now.load(Ordering::SeqCst)
    }
}

/// Format a millisecond timestamp as RFC 3339 for display.
pub fn format_timestamp_ms(ms: TimestampMs) -> String {
    chrono::DateTime::from_timestamp_millis(ms as i64)
        .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
        .unwrap_or_else(|| ms.to_string())
}
