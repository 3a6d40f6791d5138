use collate_core::{JoinStrategy, Site, build_collections, build_collections_with};
use collate_mock::fixtures::{self, recorder, span};

fn abc() -> Site {
    Site::new(recorder::STATION, recorder::LOCATION)
}

fn kik() -> Site {
    Site::new(recorder::SERVICED_STATION, recorder::SERVICED_LOCATION)
}

#[test]
fn basic_direct_recorder_join() {
    let snap = recorder::direct_recorder();
    let got = build_collections(&snap, &abc());
    assert_eq!(got.len(), 1);

    let c = &got[0];
    assert_eq!(c.span, span(2001, 2009));
    assert_eq!(c.code(), "HHZ");
    assert_eq!(c.azimuth(None), 90.0);
    assert_eq!(c.dip(None), 0.0);
}

#[test]
fn recorder_datalogger_is_synthesized_from_the_sensor() {
    let snap = recorder::direct_recorder();
    let got = build_collections(&snap, &abc());
    let logger = &got[0].deployed_datalogger;
    assert_eq!(logger.install.equipment.make, "X");
    assert_eq!(logger.install.equipment.model, "Z");
    assert_eq!(logger.install.equipment.serial, "1");
    // the synthesized datalogger keeps the recorder span, not the narrowed one
    assert_eq!(logger.install.span, span(2000, 2010));
    assert!(logger.place.is_empty() && logger.role.is_empty());
}

#[test]
fn recorder_outside_stream_span_yields_nothing() {
    let mut snap = recorder::direct_recorder();
    snap.installed_recorders[0].sensor.install.span = span(1990, 1995);
    assert!(build_collections(&snap, &abc()).is_empty());
}

#[test]
fn other_sites_are_ignored() {
    let snap = recorder::direct_recorder();
    assert!(build_collections(&snap, &Site::new("ABC", "02")).is_empty());
    assert!(build_collections(&snap, &Site::new("abc", "01")).is_empty());
}

#[test]
fn channel_rate_must_match_stream() {
    let mut snap = recorder::direct_recorder();
    snap.channels[0].sampling_rate = 50.0;
    assert!(build_collections(&snap, &abc()).is_empty());
}

#[test]
fn component_must_match_sensor_model() {
    let mut snap = recorder::direct_recorder();
    snap.components[0].model = "y".into();
    assert!(build_collections(&snap, &abc()).is_empty());
}

#[test]
fn serviced_recorder_joins_every_component_to_every_matching_channel() {
    let snap = recorder::serviced_recorder();
    let got = build_collections(&snap, &kik());
    // two recorders x three components x three 200 Hz channels
    assert_eq!(got.len(), 18);
    assert!(got.iter().all(|c| c.channel.sampling_rate == 200.0));

    let first = got
        .iter()
        .filter(|c| c.installed_sensor.install.equipment.serial == "2001")
        .count();
    assert_eq!(first, 9);
    for c in got
        .iter()
        .filter(|c| c.installed_sensor.install.equipment.serial == "2002")
    {
        assert_eq!(c.span, fixtures::open_span(2018));
    }
}

#[test]
fn gains_are_filtered_and_sorted_by_start() {
    let snap = recorder::serviced_recorder();
    let got = build_collections(&snap, &kik());

    let early = got
        .iter()
        .find(|c| c.installed_sensor.install.equipment.serial == "2001" && c.component.subsource == "Z")
        .expect("vertical on first recorder");
    let starts: Vec<_> = early.gains.iter().map(|g| g.span.start).collect();
    assert_eq!(starts, vec![fixtures::year(2010), fixtures::year(2015)]);

    let late = got
        .iter()
        .find(|c| c.installed_sensor.install.equipment.serial == "2002" && c.component.subsource == "Z")
        .expect("vertical on second recorder");
    assert_eq!(late.gains.len(), 1);
    assert_eq!(late.gains[0].factor, 2.0);

    let horizontal = got
        .iter()
        .find(|c| c.component.subsource == "N")
        .expect("north component");
    assert!(horizontal.gains.is_empty());
}

#[test]
fn calibrations_follow_unit_and_number() {
    let snap = recorder::serviced_recorder();
    let got = build_collections(&snap, &kik());
    for c in &got {
        let serial = &c.installed_sensor.install.equipment.serial;
        if c.component.number == 1 {
            assert_eq!(c.sensor_calibrations.len(), 1);
            assert_eq!(&c.sensor_calibrations[0].serial, serial);
            assert_eq!(c.sensor_calibrations[0].model, "FBA-ES-T");
        } else {
            assert!(c.sensor_calibrations.is_empty());
        }
        if c.channel.number == 1 {
            assert_eq!(c.datalogger_calibrations.len(), 1);
            assert_eq!(&c.datalogger_calibrations[0].serial, serial);
            assert_eq!(c.datalogger_calibrations[0].model, "Basalt");
        } else {
            assert!(c.datalogger_calibrations.is_empty());
        }
    }
}

/// Every lookup strategy, matched exhaustively so a new variant must be added here.
fn all_strategies() -> Vec<JoinStrategy> {
    let mut all = vec![JoinStrategy::Scan, JoinStrategy::Indexed];
    all.retain(|s| match s {
        JoinStrategy::Scan | JoinStrategy::Indexed => true,
    });
    all
}

#[test]
fn every_strategy_joins_the_direct_recorder() {
    let snap = recorder::direct_recorder();
    for strategy in all_strategies() {
        let got = build_collections_with(&snap, &abc(), strategy);
        assert_eq!(got.len(), 1, "{strategy:?}");
        assert_eq!(got[0].code(), "HHZ");
    }
}

#[test]
fn strategies_agree_on_recorders() {
    let snap = fixtures::network();
    for site in [abc(), kik()] {
        assert_eq!(
            build_collections_with(&snap, &site, JoinStrategy::Scan),
            build_collections_with(&snap, &site, JoinStrategy::Indexed),
        );
    }
}
