//! The swipe tracker: one gesture session plus its subscribers.

use swipe_common::clock::{EventClock, SystemClock};
use swipe_gesture_model::event::{TimestampMs, TouchEvent, TransitionKind};
use swipe_gesture_model::geometry::Point2D;
use swipe_gesture_model::telemetry::{SwipeTelemetry, SWIPE_CHANNEL};
use tokio::sync::mpsc;

use crate::session::GestureSession;
use crate::subscribers::{ChannelSubscriber, SubscriberId, SubscriberList, SwipeSubscriber};
use crate::telemetry::compute_telemetry;

/// Turns touch transitions into published telemetry for one input surface.
///
/// Create one tracker per surface; trackers share nothing.
pub struct SwipeTracker {
    session: Option<GestureSession>,
    subscribers: SubscriberList,
    clock: Box<dyn EventClock>,
    records_published: u64,
}

impl SwipeTracker {
    /// Create a tracker stamping transitions with the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a tracker stamping transitions with the given clock.
    pub fn with_clock(clock: impl EventClock + 'static) -> Self {
        Self {
            session: None,
            subscribers: SubscriberList::new(),
            clock: Box::new(clock),
            records_published: 0,
        }
    }

    /// Register a subscriber on the swipe channel.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriberId
    where
        S: SwipeSubscriber + 'static,
    {
        self.subscribers.subscribe(subscriber)
    }

    /// Subscribe through a channel, for consumers running on another task.
    pub fn subscribe_channel(&mut self) -> mpsc::UnboundedReceiver<SwipeTelemetry> {
        let (subscriber, receiver) = ChannelSubscriber::new();
        self.subscribers.subscribe(subscriber);
        receiver
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// State of the current gesture, if any transition has been seen.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Number of records published so far.
    pub fn records_published(&self) -> u64 {
        self.records_published
    }

    /// Process a transition stamped with the tracker's clock.
    pub fn handle(&mut self, kind: TransitionKind, point: Point2D) -> SwipeTelemetry {
        let now = self.clock.now_ms();
        self.handle_at(kind, point, now)
    }

    /// Process a raw touch event, using its timestamp if it carries one.
    ///
    /// Returns `None` if the event has no touch points.
    pub fn handle_event(&mut self, event: &TouchEvent) -> Option<SwipeTelemetry> {
        let Some(point) = event.primary_point() else {
            tracing::warn!(kind = %event.kind, "Touch event without touch points ignored");
            return None;
        };
        let timestamp_ms = event
            .timestamp_ms
            .unwrap_or_else(|| self.clock.now_ms());
        Some(self.handle_at(event.kind, point, timestamp_ms))
    }

    /// Process a transition with an explicit timestamp.
    ///
    /// Computes the record against the current session, publishes it to
    /// every subscriber, then applies the transition to the session.
    pub fn handle_at(
        &mut self,
        kind: TransitionKind,
        point: Point2D,
        timestamp_ms: TimestampMs,
    ) -> SwipeTelemetry {
        if self.session.is_none() && !kind.is_initial() {
            tracing::debug!(
                %kind,
                x = point.x,
                y = point.y,
                "Transition before any start; anchoring session here"
            );
        }
        let session = self
            .session
            .get_or_insert_with(|| GestureSession::new(point, timestamp_ms));

        let record = compute_telemetry(session, point, timestamp_ms, kind);

        tracing::trace!(
            channel = SWIPE_CHANNEL,
            %kind,
            direction = %record.cardinal8,
            distance = record.total_distance,
            duration_ms = record.duration,
            "Publishing telemetry"
        );
        self.subscribers.publish(&record);
        self.records_published += 1;

        session.begin_or_advance(kind, point, timestamp_ms);
        record
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SwipeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeTracker")
            .field("session", &self.session)
            .field("subscribers", &self.subscribers)
            .field("records_published", &self.records_published)
            .finish()
    }
}
