//! Sites where sensors are cabled to separately deployed dataloggers.

use collate_core::{
    Calibration, Channel, Component, Connection, DeployedDatalogger, Equipment, Gain, Install,
    InstalledSensor, Snapshot, Span, Stream,
};

use super::{open_span, span};

/// Station of the broadband connection deployment.
pub const STATION: &str = "DEF";
/// Location of the broadband connection deployment.
pub const LOCATION: &str = "10";

/// Station where the sensor was swapped on an unchanged connection.
pub const SWAPPED_STATION: &str = "GHI";
/// Location of the swapped sensor deployment.
pub const SWAPPED_LOCATION: &str = "20";

fn sensor(
    equipment: Equipment,
    span: Span,
    station: &str,
    location: &str,
    azimuth: f64,
) -> InstalledSensor {
    InstalledSensor {
        install: Install { equipment, span },
        station: station.into(),
        location: location.into(),
        azimuth,
        factor: 1.0,
        ..Default::default()
    }
}

fn stream(station: &str, location: &str, band: &str, sampling_rate: f64, span: Span) -> Stream {
    Stream {
        station: station.into(),
        location: location.into(),
        band: band.into(),
        source: "H".into(),
        axial: "false".into(),
        sampling_rate,
        span,
        ..Default::default()
    }
}

fn channels(make: &str, model: &str, numbers: &[i32], sampling_rate: f64) -> Vec<Channel> {
    numbers
        .iter()
        .map(|&number| Channel {
            make: make.into(),
            model: model.into(),
            number,
            sampling_rate,
            ..Default::default()
        })
        .collect()
}

/// A three component broadband sensor on a six channel datalogger.
///
/// The sensor is installed 2005 to 2015, inside both the datalogger
/// deployment (2004 to 2020) and the open connection (from 2005). A 100 Hz
/// `HH` stream runs from 2000 and a 1 Hz `LH` stream from 2010.
#[must_use]
pub fn connection_routed() -> Snapshot {
    let component = |number: i32, subsource: &str, dip: f64, azimuth: f64| Component {
        make: "Guralp".into(),
        model: "CMG-3ESPC".into(),
        number,
        source: "H".into(),
        subsource: subsource.into(),
        dip,
        azimuth,
        response: "cmg-3espc".into(),
    };

    let mut all_channels = channels("Quanterra", "Q330HR", &[0, 1, 2], 100.0);
    all_channels.extend(channels("Quanterra", "Q330HR", &[0, 1, 2], 1.0));

    Snapshot {
        installed_sensors: vec![sensor(
            Equipment::new("Guralp", "CMG-3ESPC", "T3A21"),
            span(2005, 2015),
            STATION,
            LOCATION,
            0.0,
        )],
        deployed_dataloggers: vec![DeployedDatalogger {
            install: Install {
                equipment: Equipment::new("Quanterra", "Q330HR", "4201"),
                span: span(2004, 2020),
            },
            place: "Defiance".into(),
            role: String::new(),
        }],
        connections: vec![Connection {
            station: STATION.into(),
            location: LOCATION.into(),
            place: "Defiance".into(),
            role: String::new(),
            number: 0,
            span: open_span(2005),
        }],
        streams: vec![
            stream(STATION, LOCATION, "H", 100.0, open_span(2000)),
            stream(STATION, LOCATION, "L", 1.0, open_span(2010)),
        ],
        components: vec![
            component(0, "Z", -90.0, 0.0),
            component(1, "N", 0.0, 0.0),
            component(2, "E", 0.0, 90.0),
        ],
        channels: all_channels,
        gains: vec![Gain {
            station: STATION.into(),
            location: LOCATION.into(),
            subsource: "N".into(),
            span: span(2000, 2008),
            factor: 0.5,
            ..Default::default()
        }],
        calibrations: vec![
            Calibration {
                make: "Guralp".into(),
                model: "CMG-3ESPC".into(),
                serial: "T3A21".into(),
                number: 0,
                span: open_span(2005),
                factor: 2000.0,
                frequency: 1.0,
                ..Default::default()
            },
            Calibration {
                make: "Quanterra".into(),
                model: "Q330HR".into(),
                serial: "4201".into(),
                number: 0,
                span: open_span(2004),
                factor: 1.67e6,
                frequency: 1.0,
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

/// A vertical sensor replaced in 2012 on an unchanged connection.
///
/// The connection offset of 2 routes component 0 to channel 2; channel 3 is
/// never reachable. Joins to two collections split at the swap.
#[must_use]
pub fn sensor_swap() -> Snapshot {
    let sts2 = |serial: &str| Equipment::new("Streckeisen", "STS-2", serial);

    Snapshot {
        installed_sensors: vec![
            sensor(sts2("29221"), span(2008, 2012), SWAPPED_STATION, SWAPPED_LOCATION, 0.0),
            sensor(sts2("29307"), open_span(2012), SWAPPED_STATION, SWAPPED_LOCATION, 0.0),
        ],
        deployed_dataloggers: vec![DeployedDatalogger {
            install: Install {
                equipment: Equipment::new("Nanometrics", "Centaur", "1150"),
                span: open_span(2008),
            },
            place: "Ghost Hill".into(),
            role: "seismometer".into(),
        }],
        connections: vec![Connection {
            station: SWAPPED_STATION.into(),
            location: SWAPPED_LOCATION.into(),
            place: "Ghost Hill".into(),
            role: "seismometer".into(),
            number: 2,
            span: open_span(2008),
        }],
        streams: vec![stream(
            SWAPPED_STATION,
            SWAPPED_LOCATION,
            "H",
            100.0,
            open_span(2008),
        )],
        components: vec![Component {
            make: "Streckeisen".into(),
            model: "STS-2".into(),
            number: 0,
            source: "H".into(),
            subsource: "Z".into(),
            dip: -90.0,
            azimuth: 0.0,
            response: "sts-2".into(),
        }],
        channels: channels("Nanometrics", "Centaur", &[2, 3], 100.0),
        gains: vec![Gain {
            station: SWAPPED_STATION.into(),
            location: SWAPPED_LOCATION.into(),
            subsource: "Z".into(),
            span: open_span(2008),
            factor: 1.0,
            ..Default::default()
        }],
        calibrations: vec![
            Calibration {
                make: "Streckeisen".into(),
                model: "STS-2".into(),
                serial: "29221".into(),
                number: 0,
                span: open_span(2008),
                factor: 1500.0,
                frequency: 1.0,
                ..Default::default()
            },
            Calibration {
                make: "Streckeisen".into(),
                model: "STS-2".into(),
                serial: "29307".into(),
                number: 0,
                span: open_span(2012),
                factor: 1498.0,
                frequency: 1.0,
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
