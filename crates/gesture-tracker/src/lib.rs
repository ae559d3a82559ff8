//! Swipe Gesture Tracker
//!
//! Observes raw touch transitions (start, move, end, cancel) for one
//! input surface and republishes each as a `SwipeTelemetry` record on
//! the `swipe` channel:
//!
//! - **Session:** origin and last sample of the active gesture
//! - **Telemetry:** distances, speeds, and compass direction per transition
//! - **Subscribers:** synchronous fan-out, closures or typed sinks
//! - **Echo:** process-wide toggle for pretty-printing to the console
//!
//! `TrackerDriver` pumps a `TouchSource` into a tracker on a tokio task.

pub mod echo;
pub mod session;
pub mod sources;
pub mod subscribers;
pub mod telemetry;
pub mod tracker;
pub mod writer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use swipe_common::error::SwipeResult;
use swipe_gesture_model::event::TouchEvent;

pub use echo::{is_verbose_echo_enabled, toggle_verbose_echo, ConsoleEcho, EchoToggle};
pub use session::GestureSession;
pub use subscribers::{SubscriberId, SwipeSubscriber};
pub use telemetry::compute_telemetry;
pub use tracker::SwipeTracker;

/// Trait for touch input sources.
pub trait TouchSource: Send {
    /// Poll for the next transition. Returns `None` if none is available.
    fn poll(&mut self) -> SwipeResult<Option<TouchEvent>>;

    /// Source name for logging.
    fn name(&self) -> &str;

    /// Whether the source will never produce another event.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Pumps transitions from a source into a tracker.
pub struct TrackerDriver {
    source: Box<dyn TouchSource>,
    tracker: SwipeTracker,
    stop_flag: Arc<AtomicBool>,
    source_errors: u64,
}

impl TrackerDriver {
    pub fn new(source: Box<dyn TouchSource>, tracker: SwipeTracker) -> Self {
        Self {
            source,
            tracker,
            stop_flag: Arc::new(AtomicBool::new(false)),
            source_errors: 0,
        }
    }

    /// Run until the source is exhausted or the stop flag is set.
    ///
    /// Source errors are logged and counted, never fatal. Returns the
    /// number of records published during this run.
    pub async fn run(&mut self) -> u64 {
        tracing::info!(source = %self.source.name(), "Swipe tracker started");
        let published_before = self.tracker.records_published();

        while !self.stop_flag.load(Ordering::Relaxed) {
            match self.source.poll() {
                Ok(Some(event)) => {
                    self.tracker.handle_event(&event);
                    tokio::task::yield_now().await;
                }
                Ok(None) if self.source.is_exhausted() => break,
                Ok(None) => {
                    // No event available, yield briefly
                    tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
                }
                Err(e) => {
                    self.source_errors += 1;
                    tracing::warn!(error = %e, "Touch source error");
                    tokio::task::yield_now().await;
                }
            }
        }

        let published = self.tracker.records_published() - published_before;
        tracing::info!(
            records = published,
            source_errors = self.source_errors,
            "Swipe tracker stopped"
        );
        published
    }

    /// Get the stop flag for external coordination.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Number of source errors seen so far.
    pub fn source_errors(&self) -> u64 {
        self.source_errors
    }

    pub fn tracker(&self) -> &SwipeTracker {
        &self.tracker
    }

    pub fn into_tracker(self) -> SwipeTracker {
        self.tracker
    }
}
