use proptest::prelude::*;

use swipe_common::clock::ManualClock;
use swipe_gesture_model::event::TransitionKind;
use swipe_gesture_model::geometry::Point2D;
use swipe_gesture_model::telemetry::{Cardinal4, Cardinal8};
use swipe_gesture_tracker::SwipeTracker;

fn kind_strategy() -> impl Strategy<Value = TransitionKind> {
    prop_oneof![
        Just(TransitionKind::Start),
        Just(TransitionKind::Move),
        Just(TransitionKind::End),
        Just(TransitionKind::Cancel),
    ]
}

fn step_strategy() -> impl Strategy<Value = (TransitionKind, f64, f64, u64)> {
    (
        kind_strategy(),
        -5_000.0f64..5_000.0,
        -5_000.0f64..5_000.0,
        0u64..200,
    )
}

proptest! {
    #[test]
    fn telemetry_invariants_hold_for_any_sequence(
        steps in prop::collection::vec(step_strategy(), 1..40)
    ) {
        let mut tracker = SwipeTracker::with_clock(ManualClock::new(0));
        let mut now = 1_700_000_000_000u64;

        for (kind, x, y, gap) in steps {
            now += gap;
            let record = tracker.handle_at(kind, Point2D::new(x, y), now);

            let distances = [
                record.total_distance_x,
                record.total_distance_y,
                record.total_distance,
                record.latest_distance_x,
                record.latest_distance_y,
                record.latest_distance,
            ];
            prop_assert!(distances.iter().all(|d| *d >= 0.0));
            prop_assert_eq!(
                record.total_distance,
                record.total_distance_x.hypot(record.total_distance_y)
            );

            let speeds = [
                record.overall_speed_x,
                record.overall_speed_y,
                record.overall_speed,
                record.latest_speed_x,
                record.latest_speed_y,
                record.latest_speed,
            ];
            prop_assert!(speeds.iter().all(|s| s.is_finite() && *s >= 0.0));

            prop_assert!((0.0..360.0).contains(&record.theta), "theta={}", record.theta);
            prop_assert!(matches!(
                record.cardinal4,
                Cardinal4::N | Cardinal4::S | Cardinal4::E | Cardinal4::W
            ));
            if !matches!(
                record.cardinal8,
                Cardinal8::NE | Cardinal8::NW | Cardinal8::SE | Cardinal8::SW
            ) {
                prop_assert_eq!(record.cardinal8, Cardinal8::from(record.cardinal4));
            }

            prop_assert_eq!(record.initial, kind == TransitionKind::Start);
            prop_assert_eq!(
                record.ongoing,
                matches!(kind, TransitionKind::Start | TransitionKind::Move)
            );
            prop_assert_eq!(record.event_time, now);
        }
    }

    #[test]
    fn start_always_resets_motion(
        x in -5_000.0f64..5_000.0,
        y in -5_000.0f64..5_000.0,
        t in 0u64..1_000_000,
    ) {
        let mut tracker = SwipeTracker::with_clock(ManualClock::new(0));
        tracker.handle_at(TransitionKind::Start, Point2D::new(0.0, 0.0), 0);
        tracker.handle_at(TransitionKind::Move, Point2D::new(123.0, -45.0), 10);

        let record = tracker.handle_at(TransitionKind::Start, Point2D::new(x, y), t);
        prop_assert_eq!(record.total_distance, 0.0);
        prop_assert_eq!(record.latest_distance, 0.0);
        prop_assert_eq!(record.overall_speed, 0.0);
        prop_assert_eq!(record.latest_speed, 0.0);
        prop_assert_eq!(record.duration, 0);
        prop_assert_eq!(record.origin_x, x);
        prop_assert_eq!(record.origin_y, y);
    }
}
