//! Deterministic deployment fixtures.
//!
//! Years are used as instants (`Jan 1, 00:00 UTC`) to keep spans readable.

use chrono::{DateTime, TimeZone, Utc};
use collate_core::{Snapshot, Span};

pub mod connection;
pub mod recorder;

/// First instant of `year`, UTC.
#[must_use]
pub fn year(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Span from the start of `from` to the start of `to`.
#[must_use]
pub fn span(from: i32, to: i32) -> Span {
    Span::new(year(from), year(to))
}

/// Span from the start of `from` that has not been closed yet.
#[must_use]
pub fn open_span(from: i32) -> Span {
    Span::new(year(from), year(9999))
}

/// Fixture deployment for a station code, if one exists.
#[must_use]
pub fn by_station(station: &str) -> Option<Snapshot> {
    match station {
        recorder::STATION => Some(recorder::direct_recorder()),
        recorder::SERVICED_STATION => Some(recorder::serviced_recorder()),
        connection::STATION => Some(connection::connection_routed()),
        connection::SWAPPED_STATION => Some(connection::sensor_swap()),
        _ => None,
    }
}

/// Every fixture deployment merged into a single network-wide snapshot.
#[must_use]
pub fn network() -> Snapshot {
    let mut snapshot = Snapshot::default();
    for station in [
        recorder::STATION,
        recorder::SERVICED_STATION,
        connection::STATION,
        connection::SWAPPED_STATION,
    ] {
        if let Some(s) = by_station(station) {
            snapshot.extend(s);
        }
    }
    snapshot
}
