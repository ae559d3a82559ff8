pub mod config;
pub mod replay;
pub mod simulate;

use std::path::PathBuf;

use swipe_common::clock::{format_timestamp_ms, EventClock, SystemClock};
use swipe_common::config::AppConfig;
use swipe_gesture_model::telemetry::{SwipeTelemetry, TelemetryStreamHeader};
use swipe_gesture_tracker::writer::TelemetryWriter;
use swipe_gesture_tracker::{
    is_verbose_echo_enabled, toggle_verbose_echo, ConsoleEcho, SwipeTracker,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Build a tracker wired to console echo, an optional JSONL writer, and
/// a channel the command drains for its summary.
pub fn build_tracker(
    config: &AppConfig,
    output: Option<PathBuf>,
    echo_requested: bool,
) -> anyhow::Result<(SwipeTracker, UnboundedReceiver<SwipeTelemetry>)> {
    if (config.tracker.verbose_echo || echo_requested) != is_verbose_echo_enabled() {
        toggle_verbose_echo();
    }

    let mut tracker = SwipeTracker::new();
    tracker.subscribe(ConsoleEcho::stdout());

    if let Some(path) = output.or_else(|| config.tracker.telemetry_output.clone()) {
        let header = TelemetryStreamHeader {
            opened_at: Some(format_timestamp_ms(SystemClock.now_ms())),
            ..TelemetryStreamHeader::default()
        };
        let writer = TelemetryWriter::create(&path, &header)
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", path.display()))?;
        println!("Writing telemetry to: {}", path.display());
        tracker.subscribe(writer);
    }

    let receiver = tracker.subscribe_channel();
    Ok((tracker, receiver))
}

/// Print one line per finished gesture.
pub fn print_summary(mut receiver: UnboundedReceiver<SwipeTelemetry>) {
    let mut gestures = 0usize;
    let mut records = 0usize;
    while let Ok(record) = receiver.try_recv() {
        records += 1;
        if record.ongoing {
            continue;
        }
        gestures += 1;
        println!(
            "  Gesture {gestures}: {} ({:.1}°) {:.1} units in {}ms, {:.3} units/ms",
            record.cardinal8,
            record.theta,
            record.total_distance,
            record.duration,
            record.overall_speed
        );
    }
    println!();
    println!("{records} record(s), {gestures} completed gesture(s)");
}
