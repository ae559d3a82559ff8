//! Verbose console echo of published telemetry.
//!
//! The echo flag is process-wide and starts disabled. Flipping it only
//! affects `ConsoleEcho` subscribers; the telemetry path ignores it.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use swipe_gesture_model::telemetry::{SwipeTelemetry, SWIPE_CHANNEL};

use crate::subscribers::SwipeSubscriber;

/// An on/off switch for console echo.
#[derive(Debug, Default)]
pub struct EchoToggle {
    enabled: AtomicBool,
}

impl EchoToggle {
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::SeqCst)
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}

static VERBOSE_ECHO: EchoToggle = EchoToggle::new();

/// The process-wide echo toggle.
pub fn verbose_echo() -> &'static EchoToggle {
    &VERBOSE_ECHO
}

/// Whether verbose echo is currently enabled.
pub fn is_verbose_echo_enabled() -> bool {
    VERBOSE_ECHO.is_enabled()
}

/// Flip verbose echo and return the new state.
pub fn toggle_verbose_echo() -> bool {
    let enabled = VERBOSE_ECHO.toggle();
    tracing::debug!(enabled, "Verbose echo toggled");
    enabled
}

/// Pretty-prints each record while its toggle is enabled.
pub struct ConsoleEcho<W: Write + Send> {
    toggle: &'static EchoToggle,
    out: W,
}

impl ConsoleEcho<std::io::Stdout> {
    /// Echo to stdout, gated by the process-wide toggle.
    pub fn stdout() -> Self {
        Self::new(verbose_echo(), std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleEcho<W> {
    pub fn new(toggle: &'static EchoToggle, out: W) -> Self {
        Self { toggle, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &SwipeTelemetry) -> std::io::Result<()> {
        let phase = if record.initial {
            "start"
        } else if record.ongoing {
            "move"
        } else {
            "end"
        };
        let body = serde_json::to_string_pretty(record).map_err(std::io::Error::other)?;
        writeln!(
            self.out,
            "[{SWIPE_CHANNEL}] {phase} {} ({:.1}) {:.1}px in {}ms",
            record.cardinal8, record.theta, record.total_distance, record.duration
        )?;
        writeln!(self.out, "{body}")?;
        self.out.flush()
    }
}

impl<W: Write + Send> SwipeSubscriber for ConsoleEcho<W> {
    fn on_swipe(&mut self, record: &SwipeTelemetry) {
        if !self.toggle.is_enabled() {
            return;
        }
        if let Err(e) = self.write_record(record) {
            tracing::warn!(error = %e, "Failed to echo telemetry");
        }
    }

    fn name(&self) -> &str {
        "console-echo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipe_gesture_model::event::TransitionKind;
    use swipe_gesture_model::geometry::Point2D;

    use crate::session::GestureSession;
    use crate::telemetry::compute_telemetry;

    #[test]
    fn test_global_toggle_sequence() {
        assert!(!is_verbose_echo_enabled());
        assert!(toggle_verbose_echo());
        assert!(is_verbose_echo_enabled());
        assert!(!toggle_verbose_echo());
        assert!(!is_verbose_echo_enabled());
    }

    #[test]
    fn test_local_toggle() {
        let toggle = EchoToggle::new();
        assert!(!toggle.is_enabled());
        assert!(toggle.toggle());
        toggle.set(false);
        assert!(!toggle.is_enabled());
    }

    #[test]
    fn test_echo_respects_toggle() {
        static TOGGLE: EchoToggle = EchoToggle::new();
        let session = GestureSession::new(Point2D::new(0.0, 0.0), 0);
        let record = compute_telemetry(&session, Point2D::new(0.0, -50.0), 50, TransitionKind::Move);

        let mut echo = ConsoleEcho::new(&TOGGLE, Vec::new());
        echo.on_swipe(&record);

        TOGGLE.set(true);
        echo.on_swipe(&record);

        let output = String::from_utf8(echo.into_inner()).unwrap();
        assert_eq!(output.matches("[swipe]").count(), 1);
        assert!(output.contains("[swipe] move N (270.0) 50.0px in 50ms"));
        assert!(output.contains("\"cardinal4\": \"N\""));
    }
}
