//! Replay a recorded touch stream.

use std::path::PathBuf;

use swipe_common::config::AppConfig;
use swipe_gesture_tracker::sources::JsonlTouchSource;
use swipe_gesture_tracker::TrackerDriver;

pub async fn run(
    config: &AppConfig,
    path: PathBuf,
    output: Option<PathBuf>,
    echo: bool,
) -> anyhow::Result<()> {
    println!("Replaying touch recording: {}", path.display());

    let source = JsonlTouchSource::open(&path)
        .map_err(|e| anyhow::anyhow!("Failed to open recording: {e}"))?;
    let (tracker, receiver) = super::build_tracker(config, output, echo)?;

    let mut driver = TrackerDriver::new(Box::new(source), tracker);
    driver.run().await;

    if driver.source_errors() > 0 {
        println!(
            "{} line(s) could not be parsed and were skipped",
            driver.source_errors()
        );
    }

    // Dropping the driver flushes the telemetry writer.
    drop(driver);
    super::print_summary(receiver);
    Ok(())
}
