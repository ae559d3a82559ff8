//! Fan-out of telemetry records to registered subscribers.

use swipe_gesture_model::telemetry::SwipeTelemetry;
use tokio::sync::mpsc;

/// Something that receives every published telemetry record.
pub trait SwipeSubscriber: Send {
    /// Called once per published record, in publish order.
    fn on_swipe(&mut self, record: &SwipeTelemetry);

    /// Subscriber name for logging.
    fn name(&self) -> &str {
        "subscriber"
    }
}

impl<F> SwipeSubscriber for F
where
    F: FnMut(&SwipeTelemetry) + Send,
{
    fn on_swipe(&mut self, record: &SwipeTelemetry) {
        self(record)
    }

    fn name(&self) -> &str {
        "closure"
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Ordered list of subscribers. Delivery is synchronous, in
/// registration order, once per record.
#[derive(Default)]
pub struct SubscriberList {
    next_id: u64,
    entries: Vec<(SubscriberId, Box<dyn SwipeSubscriber>)>,
}

impl SubscriberList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriberId
    where
        S: SwipeSubscriber + 'static,
    {
        self.subscribe_boxed(Box::new(subscriber))
    }

    fn subscribe_boxed(&mut self, subscriber: Box<dyn SwipeSubscriber>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        tracing::debug!(id = id.0, subscriber = %subscriber.name(), "Subscriber registered");
        self.entries.push((id, subscriber));
        id
    }

    /// Remove a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver a record to every subscriber. Returns how many received it.
    pub fn publish(&mut self, record: &SwipeTelemetry) -> usize {
        for (_, subscriber) in self.entries.iter_mut() {
            subscriber.on_swipe(record);
        }
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, s)| (id.0, s.name())))
            .finish()
    }
}

/// Forwards records into an unbounded channel for async consumers.
///
/// Records are dropped silently once the receiver is gone.
pub struct ChannelSubscriber {
    sender: mpsc::UnboundedSender<SwipeTelemetry>,
}

impl ChannelSubscriber {
    /// Create a subscriber and the receiver that drains it.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SwipeTelemetry>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl SwipeSubscriber for ChannelSubscriber {
    fn on_swipe(&mut self, record: &SwipeTelemetry) {
        if self.sender.send(record.clone()).is_err() {
            tracing::trace!("Telemetry receiver dropped");
        }
    }

    fn name(&self) -> &str {
        "channel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use swipe_gesture_model::geometry::Point2D;
    use swipe_gesture_model::event::TransitionKind;

    use crate::session::GestureSession;
    use crate::telemetry::compute_telemetry;

    fn record(t: u64) -> SwipeTelemetry {
        let session = GestureSession::new(Point2D::new(0.0, 0.0), 0);
        compute_telemetry(&session, Point2D::new(1.0, 0.0), t, TransitionKind::Move)
    }

    #[test]
    fn test_publish_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut list = SubscriberList::new();

        let a = log.clone();
        list.subscribe(move |r: &SwipeTelemetry| a.lock().unwrap().push(("a", r.event_time)));
        let b = log.clone();
        list.subscribe(move |r: &SwipeTelemetry| b.lock().unwrap().push(("b", r.event_time)));

        assert_eq!(list.publish(&record(7)), 2);
        assert_eq!(*log.lock().unwrap(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut list = SubscriberList::new();

        let c = count.clone();
        let id = list.subscribe(move |_: &SwipeTelemetry| *c.lock().unwrap() += 1);
        list.publish(&record(1));
        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
        assert_eq!(list.publish(&record(2)), 0);
        assert_eq!(*count.lock().unwrap(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_publish_with_no_subscribers() {
        let mut list = SubscriberList::new();
        assert_eq!(list.publish(&record(1)), 0);
    }

    #[test]
    fn test_channel_subscriber_forwards() {
        let (subscriber, mut receiver) = ChannelSubscriber::new();
        let mut list = SubscriberList::new();
        list.subscribe(subscriber);

        list.publish(&record(3));
        list.publish(&record(4));

        assert_eq!(receiver.try_recv().unwrap().event_time, 3);
        assert_eq!(receiver.try_recv().unwrap().event_time, 4);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_subscriber_survives_dropped_receiver() {
        let (subscriber, receiver) = ChannelSubscriber::new();
        drop(receiver);
        let mut list = SubscriberList::new();
        list.subscribe(subscriber);
        assert_eq!(list.publish(&record(1)), 1);
    }
}
