//! Sites recorded by bundled sensor+datalogger units.

use collate_core::{
    Calibration, Channel, Component, Equipment, Gain, Install, InstalledRecorder,
    InstalledSensor, Snapshot, Stream,
};

use super::{open_span, span};

/// Station of the minimal direct recorder deployment.
pub const STATION: &str = "ABC";
/// Location of the minimal direct recorder deployment.
pub const LOCATION: &str = "01";

/// Station whose recorder was replaced during a service visit.
pub const SERVICED_STATION: &str = "KIK";
/// Location of the serviced recorder deployment.
pub const SERVICED_LOCATION: &str = "20";

/// One recorder, one stream, one component, one channel.
///
/// Joins to a single collection spanning 2001 to 2009 with code `HHZ`.
#[must_use]
pub fn direct_recorder() -> Snapshot {
    Snapshot {
        installed_recorders: vec![InstalledRecorder {
            sensor: InstalledSensor {
                install: Install {
                    equipment: Equipment::new("X", "Y", "1"),
                    span: span(2000, 2010),
                },
                station: STATION.into(),
                location: LOCATION.into(),
                ..Default::default()
            },
            datalogger_model: "Z".into(),
        }],
        streams: vec![Stream {
            station: STATION.into(),
            location: LOCATION.into(),
            band: "H".into(),
            source: "H".into(),
            axial: "false".into(),
            sampling_rate: 100.0,
            span: span(2001, 2009),
            ..Default::default()
        }],
        components: vec![Component {
            make: "X".into(),
            model: "Y".into(),
            number: 1,
            subsource: "Z".into(),
            dip: 0.0,
            azimuth: 90.0,
            ..Default::default()
        }],
        channels: vec![Channel {
            make: "X".into(),
            model: "Z".into(),
            number: 1,
            sampling_rate: 100.0,
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn etna(serial: &str, from: i32, to: Option<i32>) -> InstalledRecorder {
    InstalledRecorder {
        sensor: InstalledSensor {
            install: Install {
                equipment: Equipment::new("Kinemetrics", "FBA-ES-T", serial),
                span: to.map_or_else(|| open_span(from), |to| span(from, to)),
            },
            station: SERVICED_STATION.into(),
            location: SERVICED_LOCATION.into(),
            azimuth: 10.0,
            factor: 1.0,
            ..Default::default()
        },
        datalogger_model: "Basalt".into(),
    }
}

/// A strong motion recorder replaced in 2018, recording a 200 Hz stream.
///
/// Three components join against three 200 Hz channels for each recorder;
/// the 50 Hz channel never matches the stream.
#[must_use]
pub fn serviced_recorder() -> Snapshot {
    let component = |number: i32, subsource: &str, dip: f64, azimuth: f64| Component {
        make: "Kinemetrics".into(),
        model: "FBA-ES-T".into(),
        number,
        source: "N".into(),
        subsource: subsource.into(),
        dip,
        azimuth,
        response: "fba-es-t".into(),
    };
    let channel = |number: i32, sampling_rate: f64| Channel {
        make: "Kinemetrics".into(),
        model: "Basalt".into(),
        number,
        sampling_rate,
        response: "basalt".into(),
    };
    let calibration = |model: &str, serial: &str, number: i32, from: i32, factor: f64| Calibration {
        make: "Kinemetrics".into(),
        model: model.into(),
        serial: serial.into(),
        number,
        span: open_span(from),
        factor,
        frequency: 1.0,
        ..Default::default()
    };

    Snapshot {
        installed_recorders: vec![etna("2001", 2012, Some(2018)), etna("2002", 2018, None)],
        streams: vec![Stream {
            station: SERVICED_STATION.into(),
            location: SERVICED_LOCATION.into(),
            band: "H".into(),
            source: "N".into(),
            axial: "false".into(),
            sampling_rate: 200.0,
            span: open_span(2010),
            ..Default::default()
        }],
        components: vec![
            component(1, "Z", -90.0, 0.0),
            component(2, "N", 0.0, 0.0),
            component(3, "E", 0.0, 90.0),
        ],
        channels: vec![
            channel(1, 200.0),
            channel(2, 200.0),
            channel(3, 200.0),
            channel(1, 50.0),
        ],
        gains: vec![
            Gain {
                station: SERVICED_STATION.into(),
                location: SERVICED_LOCATION.into(),
                subsource: "Z".into(),
                span: open_span(2015),
                factor: 2.0,
                ..Default::default()
            },
            Gain {
                station: SERVICED_STATION.into(),
                location: SERVICED_LOCATION.into(),
                subsource: "Z".into(),
                span: span(2010, 2015),
                factor: 1.0,
                ..Default::default()
            },
        ],
        calibrations: vec![
            calibration("FBA-ES-T", "2001", 1, 2012, 1.25),
            calibration("FBA-ES-T", "2002", 1, 2018, 1.26),
            calibration("Basalt", "2001", 1, 2012, 4.0e5),
            calibration("Basalt", "2002", 1, 2018, 4.1e5),
        ],
        ..Default::default()
    }
}
