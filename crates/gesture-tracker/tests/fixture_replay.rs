use std::path::PathBuf;

use swipe_common::clock::ManualClock;
use swipe_gesture_model::telemetry::{Cardinal4, Cardinal8};
use swipe_gesture_tracker::sources::JsonlTouchSource;
use swipe_gesture_tracker::{SwipeTracker, TrackerDriver};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-swipes.jsonl")
}

#[tokio::test]
async fn sample_fixture_replays_two_gestures() {
    let source = JsonlTouchSource::open(fixture_path()).expect("fixture should open");
    let mut tracker = SwipeTracker::with_clock(ManualClock::new(0));
    let mut receiver = tracker.subscribe_channel();

    let mut driver = TrackerDriver::new(Box::new(source), tracker);
    assert_eq!(driver.run().await, 10);
    assert_eq!(driver.source_errors(), 0);

    let mut records = Vec::new();
    while let Ok(record) = receiver.try_recv() {
        records.push(record);
    }
    let finals: Vec<_> = records.iter().filter(|r| !r.ongoing).collect();
    assert_eq!(finals.len(), 2);

    let drag = finals[0];
    assert_eq!(drag.cardinal4, Cardinal4::E);
    assert_eq!(drag.cardinal8, Cardinal8::E);
    assert_eq!(drag.duration, 83);
    assert_eq!(drag.latest_distance, 0.0);
    assert_eq!(drag.latest_speed, 0.0);

    let flick = finals[1];
    assert_eq!(flick.origin_x, 50.0);
    assert_eq!(flick.cardinal4, Cardinal4::N);
    assert_eq!(flick.cardinal8, Cardinal8::NE);
    assert_eq!(flick.duration, 50);
    assert!(flick.theta > 270.0 && flick.theta < 360.0);

    assert_eq!(records.iter().filter(|r| r.initial).count(), 2);
}
