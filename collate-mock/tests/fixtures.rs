use std::time::{Duration, Instant};

use collate_core::{Registry, Snapshot};
use collate_mock::MockRegistry;
use collate_mock::fixtures::{self, connection, recorder};

#[test]
fn every_fixture_station_resolves() {
    for station in [
        recorder::STATION,
        recorder::SERVICED_STATION,
        connection::STATION,
        connection::SWAPPED_STATION,
    ] {
        let snap = fixtures::by_station(station).expect("fixture exists");
        assert!(!snap.is_empty(), "{station} fixture is empty");
    }
    assert!(fixtures::by_station("NOPE").is_none());
}

#[test]
fn network_is_the_union_of_fixtures() {
    let network = fixtures::network();
    let total: usize = [
        recorder::STATION,
        recorder::SERVICED_STATION,
        connection::STATION,
        connection::SWAPPED_STATION,
    ]
    .iter()
    .filter_map(|s| fixtures::by_station(s))
    .map(|s| s.len())
    .sum();
    assert_eq!(network.len(), total);
    assert!(!network.is_empty());
    assert!(Snapshot::default().is_empty());
    assert!(fixtures::by_station("NOPE").is_none());
}

#[test]
fn fixture_spans_are_well_formed() {
    let network = fixtures::network();
    let spans = network
        .streams
        .iter()
        .map(|s| s.span)
        .chain(network.connections.iter().map(|c| c.span))
        .chain(network.gains.iter().map(|g| g.span))
        .chain(network.calibrations.iter().map(|c| c.span));
    for span in spans {
        assert!(span.start <= span.end, "{span:?}");
    }
}

#[test]
fn reads_are_counted() {
    let registry = MockRegistry::network();
    assert_eq!(registry.reads(), 0);
    let _ = registry.streams();
    let _ = registry.components();
    assert_eq!(registry.reads(), 2);
}

#[test]
fn delay_blocks_each_read() {
    let registry = MockRegistry::network().with_delay(Duration::from_millis(20));
    let started = Instant::now();
    let _ = registry.channels();
    assert!(started.elapsed() >= Duration::from_millis(20));
}
