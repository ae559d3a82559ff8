//! Generate a synthetic swipe and run it through the tracker.

use std::path::PathBuf;

use swipe_common::clock::{EventClock, SystemClock};
use swipe_common::config::AppConfig;
use swipe_gesture_model::event::{TimestampMs, TouchEvent, TransitionKind};
use swipe_gesture_model::geometry::Point2D;
use swipe_gesture_tracker::sources::ReplaySource;
use swipe_gesture_tracker::TrackerDriver;

/// A straight-line swipe at constant speed.
#[derive(Debug, Clone)]
pub struct SwipePlan {
    pub from: Point2D,
    pub to: Point2D,
    /// Move transitions between start and the terminal transition.
    pub steps: u32,
    pub duration_ms: u64,
    /// End with `cancel` instead of `end`.
    pub cancel: bool,
}

impl SwipePlan {
    /// Expand the plan into timestamped transitions starting at `start_ms`.
    pub fn transitions(&self, start_ms: TimestampMs) -> Vec<TouchEvent> {
        let segments = u64::from(self.steps) + 1;
        let mut events = Vec::with_capacity(self.steps as usize + 2);

        events.push(TouchEvent::start(self.from.x, self.from.y).at(start_ms));
        for i in 1..segments {
            let point = self.point_at(i as f64 / segments as f64);
            let t = self.time_at(start_ms, i, segments);
            events.push(TouchEvent::move_to(point.x, point.y).at(t));
        }

        let kind = if self.cancel {
            TransitionKind::Cancel
        } else {
            TransitionKind::End
        };
        events.push(
            TouchEvent::new(kind, self.to.x, self.to.y)
                .at(start_ms.saturating_add(self.duration_ms)),
        );
        events
    }

    /// Timestamp of segment boundary `i`, pinned at `TimestampMs::MAX`.
    fn time_at(&self, start_ms: TimestampMs, i: u64, segments: u64) -> TimestampMs {
        // The quotient never exceeds `duration_ms`; only the product needs u128.
        let offset = u128::from(self.duration_ms) * u128::from(i) / u128::from(segments);
        start_ms.saturating_add(offset as u64)
    }

    fn point_at(&self, t: f64) -> Point2D {
        Point2D::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }
}

pub async fn run(
    config: &AppConfig,
    plan: SwipePlan,
    output: Option<PathBuf>,
    echo: bool,
) -> anyhow::Result<()> {
    println!(
        "Simulating swipe ({}, {}) -> ({}, {}) over {}ms in {} step(s)",
        plan.from.x, plan.from.y, plan.to.x, plan.to.y, plan.duration_ms, plan.steps
    );
    println!();

    let events = plan.transitions(SystemClock.now_ms());
    let (tracker, receiver) = super::build_tracker(config, output, echo)?;

    let mut driver = TrackerDriver::new(Box::new(ReplaySource::new(events)), tracker);
    driver.run().await;

    drop(driver);
    super::print_summary(receiver);
    Ok(())
}
