use std::cmp::Ordering;

use crate::types::Collection;

/// Total order over collections.
///
/// Keys, in priority order:
/// - installed sensor station, then location (ascending)
/// - component number, then channel number (ascending)
/// - span start (earlier first)
/// - stream sampling rate (higher first)
#[must_use]
pub fn compare_collections(a: &Collection, b: &Collection) -> Ordering {
    a.installed_sensor
        .station
        .cmp(&b.installed_sensor.station)
        .then_with(|| a.installed_sensor.location.cmp(&b.installed_sensor.location))
        .then_with(|| a.component.number.cmp(&b.component.number))
        .then_with(|| a.channel.number.cmp(&b.channel.number))
        .then_with(|| a.span.start.cmp(&b.span.start))
        // total_cmp keeps the order total even for NaN rates
        .then_with(|| b.stream.sampling_rate.total_cmp(&a.stream.sampling_rate))
}

/// True if `a` sorts strictly before `b`.
#[must_use]
pub fn precedes(a: &Collection, b: &Collection) -> bool {
    compare_collections(a, b) == Ordering::Less
}

/// Sort collections into their canonical order.
///
/// The sort is stable: collections equal on every key keep their input order.
pub fn sort_collections(collections: &mut [Collection]) {
    collections.sort_by(compare_collections);
}
