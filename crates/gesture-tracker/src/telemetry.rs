//! Per-transition telemetry computation.
//!
//! Everything here is total: elapsed times of zero produce speeds of
//! zero, and timestamps that run backwards saturate to zero elapsed.

use swipe_gesture_model::event::{TimestampMs, TransitionKind};
use swipe_gesture_model::geometry::Point2D;
use swipe_gesture_model::telemetry::{Cardinal4, Cardinal8, SwipeTelemetry};

use crate::session::GestureSession;

/// Lower bound (exclusive) of the diagonal band, in degrees.
const DIAGONAL_MIN_DEG: f64 = 22.5;
/// Upper bound (exclusive) of the diagonal band, in degrees.
const DIAGONAL_MAX_DEG: f64 = 67.5;

/// Compute the telemetry record for one transition.
///
/// `session` is the state *before* this transition is applied. A start
/// transition is measured against a fresh session anchored at `point`,
/// so whatever the session held from an earlier gesture is ignored.
pub fn compute_telemetry(
    session: &GestureSession,
    point: Point2D,
    timestamp_ms: TimestampMs,
    kind: TransitionKind,
) -> SwipeTelemetry {
    let anchored;
    let session = if kind.is_initial() {
        anchored = GestureSession::new(point, timestamp_ms);
        &anchored
    } else {
        session
    };

    let origin = session.origin();
    let last = session.last();

    let d_x = point.x - origin.x;
    let d_y = point.y - origin.y;
    let total_distance_x = d_x.abs();
    let total_distance_y = d_y.abs();
    let total_distance = total_distance_x.hypot(total_distance_y);

    let latest_distance_x = (point.x - last.x).abs();
    let latest_distance_y = (point.y - last.y).abs();
    let latest_distance = latest_distance_x.hypot(latest_distance_y);

    let duration = timestamp_ms.saturating_sub(session.first_event_time());
    let millis_since_last = timestamp_ms.saturating_sub(session.last_event_time());

    let (cardinal4, cardinal8) = classify_direction(origin, point);

    SwipeTelemetry {
        event_time: timestamp_ms,
        duration,
        initial: kind.is_initial(),
        ongoing: kind.is_ongoing(),
        origin_x: origin.x,
        origin_y: origin.y,
        current_x: point.x,
        current_y: point.y,
        total_distance_x,
        total_distance_y,
        total_distance,
        latest_distance_x,
        latest_distance_y,
        latest_distance,
        cardinal4,
        cardinal8,
        theta: theta_degrees(d_x, d_y),
        overall_speed_x: per_ms(total_distance_x, duration),
        overall_speed_y: per_ms(total_distance_y, duration),
        overall_speed: per_ms(total_distance, duration),
        latest_speed_x: per_ms(latest_distance_x, millis_since_last),
        latest_speed_y: per_ms(latest_distance_y, millis_since_last),
        latest_speed: per_ms(latest_distance, millis_since_last),
    }
}

/// Distance per millisecond; zero when no time has elapsed.
fn per_ms(distance: f64, elapsed_ms: u64) -> f64 {
    if elapsed_ms == 0 {
        0.0
    } else {
        distance / elapsed_ms as f64
    }
}

/// Bucket the displacement from `origin` to `point`.
///
/// Vertical wins ties in the four-way bucket. The eight-way bucket only
/// goes diagonal strictly inside (22.5°, 67.5°) of the absolute angle.
fn classify_direction(origin: Point2D, point: Point2D) -> (Cardinal4, Cardinal8) {
    let horizontal = if origin.x > point.x {
        Cardinal4::W
    } else {
        Cardinal4::E
    };
    let vertical = if origin.y > point.y {
        Cardinal4::N
    } else {
        Cardinal4::S
    };

    let abs_x = (point.x - origin.x).abs();
    let abs_y = (point.y - origin.y).abs();

    let cardinal4 = if abs_x > abs_y { horizontal } else { vertical };

    let tangent_deg = abs_y.atan2(abs_x).to_degrees();
    let cardinal8 = eight_way(cardinal4, vertical, horizontal, tangent_deg);

    (cardinal4, cardinal8)
}

fn eight_way(
    cardinal4: Cardinal4,
    vertical: Cardinal4,
    horizontal: Cardinal4,
    tangent_deg: f64,
) -> Cardinal8 {
    if tangent_deg > DIAGONAL_MIN_DEG && tangent_deg < DIAGONAL_MAX_DEG {
        Cardinal8::diagonal(vertical, horizontal).unwrap_or_else(|| cardinal4.into())
    } else {
        cardinal4.into()
    }
}

/// Angle of `(d_x, d_y)` in degrees clockwise from East, in `[0, 360)`.
///
/// Screen Y grows downward, so positive `d_y` points South (90°).
fn theta_degrees(d_x: f64, d_y: f64) -> f64 {
    let mut theta = d_y.atan2(d_x).to_degrees();
    if theta < 0.0 {
        theta += 360.0;
    }
    // Tiny negative angles round up to exactly 360.
    if theta >= 360.0 {
        theta -= 360.0;
    }
    theta
}
