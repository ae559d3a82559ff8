//! The telemetry record published on the `swipe` channel.
//!
//! Field names serialize in camelCase; this shape is what existing
//! consumers read, so it must not drift.

use serde::{Deserialize, Serialize};

use crate::event::TimestampMs;
use crate::geometry::Point2D;

/// Name of the channel telemetry records are published on.
pub const SWIPE_CHANNEL: &str = "swipe";

/// Schema version written into telemetry stream headers.
pub const TELEMETRY_SCHEMA_VERSION: &str = "1.0";

/// Four-way compass bucket of the total displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal4 {
    N,
    S,
    E,
    W,
}

/// Eight-way compass bucket of the total displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal8 {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Cardinal4 {
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinal4::N => "N",
            Cardinal4::S => "S",
            Cardinal4::E => "E",
            Cardinal4::W => "W",
        }
    }
}

impl Cardinal8 {
    /// Combine a vertical (`N`/`S`) and a horizontal (`E`/`W`) heading.
    ///
    /// Returns `None` if the arguments are not one of each.
    pub fn diagonal(vertical: Cardinal4, horizontal: Cardinal4) -> Option<Self> {
        match (vertical, horizontal) {
            (Cardinal4::N, Cardinal4::E) => Some(Cardinal8::NE),
            (Cardinal4::N, Cardinal4::W) => Some(Cardinal8::NW),
            (Cardinal4::S, Cardinal4::E) => Some(Cardinal8::SE),
            (Cardinal4::S, Cardinal4::W) => Some(Cardinal8::SW),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinal8::N => "N",
            Cardinal8::S => "S",
            Cardinal8::E => "E",
            Cardinal8::W => "W",
            Cardinal8::NE => "NE",
            Cardinal8::NW => "NW",
            Cardinal8::SE => "SE",
            Cardinal8::SW => "SW",
        }
    }
}

impl From<Cardinal4> for Cardinal8 {
    fn from(dir: Cardinal4) -> Self {
        match dir {
            Cardinal4::N => Cardinal8::N,
            Cardinal4::S => Cardinal8::S,
            Cardinal4::E => Cardinal8::E,
            Cardinal4::W => Cardinal8::W,
        }
    }
}

impl std::fmt::Display for Cardinal4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Cardinal8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived motion metrics for one touch transition.
///
/// "Total" values are measured from the gesture origin, "latest" values
/// from the previously processed transition. Speeds are distance per
/// millisecond and are `0` whenever the elapsed time is `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeTelemetry {
    /// Arrival time of this transition (ms since epoch).
    pub event_time: TimestampMs,
    /// Milliseconds since the gesture's start transition.
    pub duration: u64,
    /// True only for the start transition.
    pub initial: bool,
    /// True for start and move, false for end and cancel.
    pub ongoing: bool,

    pub origin_x: f64,
    pub origin_y: f64,
    pub current_x: f64,
    pub current_y: f64,

    pub total_distance_x: f64,
    pub total_distance_y: f64,
    pub total_distance: f64,
    pub latest_distance_x: f64,
    pub latest_distance_y: f64,
    pub latest_distance: f64,

    pub cardinal4: Cardinal4,
    pub cardinal8: Cardinal8,
    /// Degrees clockwise from East, in `[0, 360)`.
    pub theta: f64,

    pub overall_speed_x: f64,
    pub overall_speed_y: f64,
    pub overall_speed: f64,
    pub latest_speed_x: f64,
    pub latest_speed_y: f64,
    pub latest_speed: f64,
}

impl SwipeTelemetry {
    pub fn origin(&self) -> Point2D {
        Point2D::new(self.origin_x, self.origin_y)
    }

    pub fn current(&self) -> Point2D {
        Point2D::new(self.current_x, self.current_y)
    }

    /// True for the terminal transition of a gesture.
    pub fn is_final(&self) -> bool {
        !self.ongoing
    }
}

/// Header line written at the top of telemetry JSONL files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Channel the records were published on.
    pub channel: String,

    /// Wall-clock time the stream was opened (RFC 3339).
    #[serde(default)]
    pub opened_at: Option<String>,
}

impl Default for TelemetryStreamHeader {
    fn default() -> Self {
        Self {
            schema_version: TELEMETRY_SCHEMA_VERSION.to_string(),
            channel: SWIPE_CHANNEL.to_string(),
            opened_at: None,
        }
    }
}

/// Parse telemetry records from JSONL content, skipping `#` header lines.
pub fn parse_telemetry(jsonl: &str) -> Result<Vec<SwipeTelemetry>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize telemetry records to JSONL format.
pub fn serialize_telemetry(records: &[SwipeTelemetry]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SwipeTelemetry {
        SwipeTelemetry {
            event_time: 1_700_000_000_100,
            duration: 100,
            initial: false,
            ongoing: true,
            origin_x: 100.0,
            origin_y: 100.0,
            current_x: 150.0,
            current_y: 100.0,
            total_distance_x: 50.0,
            total_distance_y: 0.0,
            total_distance: 50.0,
            latest_distance_x: 50.0,
            latest_distance_y: 0.0,
            latest_distance: 50.0,
            cardinal4: Cardinal4::E,
            cardinal8: Cardinal8::E,
            theta: 0.0,
            overall_speed_x: 0.5,
            overall_speed_y: 0.0,
            overall_speed: 0.5,
            latest_speed_x: 0.5,
            latest_speed_y: 0.0,
            latest_speed: 0.5,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        let expected = [
            "eventTime",
            "duration",
            "initial",
            "ongoing",
            "originX",
            "originY",
            "currentX",
            "currentY",
            "totalDistanceX",
            "totalDistanceY",
            "totalDistance",
            "latestDistanceX",
            "latestDistanceY",
            "latestDistance",
            "cardinal4",
            "cardinal8",
            "theta",
            "overallSpeedX",
            "overallSpeedY",
            "overallSpeed",
            "latestSpeedX",
            "latestSpeedY",
            "latestSpeed",
        ];
        assert_eq!(obj.len(), expected.len());
        for key in expected {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj["cardinal4"], "E");
        assert_eq!(obj["eventTime"], 1_700_000_000_100u64);
    }

    #[test]
    fn test_diagonal_serializes_as_two_letters() {
        let json = serde_json::to_string(&Cardinal8::SW).unwrap();
        assert_eq!(json, "\"SW\"");
    }

    #[test]
    fn test_diagonal_combination() {
        assert_eq!(
            Cardinal8::diagonal(Cardinal4::N, Cardinal4::E),
            Some(Cardinal8::NE)
        );
        assert_eq!(
            Cardinal8::diagonal(Cardinal4::S, Cardinal4::W),
            Some(Cardinal8::SW)
        );
        assert_eq!(Cardinal8::diagonal(Cardinal4::E, Cardinal4::N), None);
    }

    #[test]
    fn test_parse_telemetry_skips_header() {
        let header = serde_json::to_string(&TelemetryStreamHeader::default()).unwrap();
        let jsonl = format!(
            "# {header}\n{}",
            serialize_telemetry(&[sample()]).unwrap()
        );
        let parsed = parse_telemetry(&jsonl).unwrap();
        assert_eq!(parsed, vec![sample()]);
        assert!(header.contains("\"channel\":\"swipe\""));
    }

    #[test]
    fn test_point_accessors() {
        let record = sample();
        assert_eq!(record.origin(), Point2D::new(100.0, 100.0));
        assert_eq!(record.current(), Point2D::new(150.0, 100.0));
        assert!(!record.is_final());
    }
}
