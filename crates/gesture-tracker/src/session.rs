//! Tracking state for the touch gesture currently in progress.

use swipe_gesture_model::event::{TimestampMs, TransitionKind};
use swipe_gesture_model::geometry::Point2D;

/// Origin and most recent sample of the active gesture.
///
/// There is no idle state: a start transition overwrites everything,
/// and anything else only replaces the "last" sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    origin: Point2D,
    last: Point2D,
    first_event_time: TimestampMs,
    last_event_time: TimestampMs,
}

impl GestureSession {
    /// A session whose origin and last sample are both `point`.
    pub fn new(point: Point2D, timestamp_ms: TimestampMs) -> Self {
        Self {
            origin: point,
            last: point,
            first_event_time: timestamp_ms,
            last_event_time: timestamp_ms,
        }
    }

    /// Re-anchor the session at the start of a new gesture.
    pub fn begin(&mut self, point: Point2D, timestamp_ms: TimestampMs) {
        *self = Self::new(point, timestamp_ms);
    }

    /// Record a later sample; origin and first event time stay put.
    pub fn advance(&mut self, point: Point2D, timestamp_ms: TimestampMs) {
        self.last = point;
        self.last_event_time = timestamp_ms;
    }

    /// Apply one transition: `start` begins, everything else advances.
    pub fn begin_or_advance(
        &mut self,
        kind: TransitionKind,
        point: Point2D,
        timestamp_ms: TimestampMs,
    ) {
        if kind.is_initial() {
            self.begin(point, timestamp_ms);
        } else {
            self.advance(point, timestamp_ms);
        }
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    pub fn origin_x(&self) -> f64 {
        self.origin.x
    }

    pub fn origin_y(&self) -> f64 {
        self.origin.y
    }

    pub fn last(&self) -> Point2D {
        self.last
    }

    pub fn last_x(&self) -> f64 {
        self.last.x
    }

    pub fn last_y(&self) -> f64 {
        self.last.y
    }

    pub fn first_event_time(&self) -> TimestampMs {
        self.first_event_time
    }

    pub fn last_event_time(&self) -> TimestampMs {
        self.last_event_time
    }
}
