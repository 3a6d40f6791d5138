//! Registry records joined by the collection builder.
//!
//! Each record is an owned value copied out of a registry; records never hold
//! references back into the registry they came from.

use serde::{Deserialize, Serialize};

use crate::span::{Span, Spanned};

/// Identity of a physical instrument unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equipment {
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Unit serial number.
    pub serial: String,
}

impl Equipment {
    /// Convenience constructor.
    pub fn new(make: impl Into<String>, model: impl Into<String>, serial: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            serial: serial.into(),
        }
    }
}

/// A piece of equipment installed for a span of time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Install {
    /// Installed unit.
    pub equipment: Equipment,
    /// Installation period.
    pub span: Span,
}

/// A sensor physically present at a station and location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstalledSensor {
    /// Installed sensor unit and its installation period.
    pub install: Install,
    /// Station code.
    pub station: String,
    /// Location code.
    pub location: String,
    /// Horizontal orientation of the sensor body, degrees from north.
    pub azimuth: f64,
    /// Vertical orientation of the sensor body, degrees from horizontal.
    pub dip: f64,
    /// Vertical offset in meters, positive upwards.
    pub vertical: f64,
    /// Northern offset in meters.
    pub north: f64,
    /// Eastern offset in meters.
    pub east: f64,
    /// Installation scale factor.
    pub factor: f64,
    /// Installation scale bias.
    pub bias: f64,
}

impl InstalledSensor {
    /// Installed sensor equipment.
    #[must_use]
    pub const fn equipment(&self) -> &Equipment {
        &self.install.equipment
    }
}

impl Spanned for InstalledSensor {
    fn span(&self) -> &Span {
        &self.install.span
    }
}

/// A sensor and datalogger bundled into a single deployed unit.
///
/// The datalogger shares the sensor's make and serial; only its model differs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstalledRecorder {
    /// The sensor half of the recorder, carrying site and installation details.
    pub sensor: InstalledSensor,
    /// Model name of the bundled datalogger.
    pub datalogger_model: String,
}

impl Spanned for InstalledRecorder {
    fn span(&self) -> &Span {
        self.sensor.span()
    }
}

/// A datalogger deployed at a named place and role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeployedDatalogger {
    /// Deployed datalogger unit and its deployment period.
    pub install: Install,
    /// Deployment place name.
    pub place: String,
    /// Role of the datalogger at the place.
    pub role: String,
}

impl DeployedDatalogger {
    /// Deployed datalogger equipment.
    #[must_use]
    pub const fn equipment(&self) -> &Equipment {
        &self.install.equipment
    }
}

impl Spanned for DeployedDatalogger {
    fn span(&self) -> &Span {
        &self.install.span
    }
}

/// Physical routing between a station/location and a datalogger place/role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Station code.
    pub station: String,
    /// Location code.
    pub location: String,
    /// Datalogger place name.
    pub place: String,
    /// Datalogger role.
    pub role: String,
    /// Channel numbering offset applied when matching components to channels.
    pub number: i32,
    /// Connection period.
    pub span: Span,
}

impl Spanned for Connection {
    fn span(&self) -> &Span {
        &self.span
    }
}

/// A logical recording stream at a station and location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    /// Station code.
    pub station: String,
    /// Location code.
    pub location: String,
    /// Band code (first character of a channel code).
    pub band: String,
    /// Source code (second character of a channel code).
    pub source: String,
    /// Whether horizontal subsources are labelled `1`/`2` instead of `N`/`E`
    /// (`"true"`/`"yes"`, case-insensitive).
    pub axial: String,
    /// Samples per second.
    pub sampling_rate: f64,
    /// Whether the stream is event triggered rather than continuous.
    pub triggered: bool,
    /// Stream period.
    pub span: Span,
}

impl Spanned for Stream {
    fn span(&self) -> &Span {
        &self.span
    }
}

/// One measurement axis of a sensor model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Sensor manufacturer.
    pub make: String,
    /// Sensor model.
    pub model: String,
    /// Component number within the sensor.
    pub number: i32,
    /// Source code hint for the component.
    pub source: String,
    /// Subsource code (e.g. `Z`, `N`, `E`).
    pub subsource: String,
    /// Dip in degrees from horizontal, positive downwards.
    pub dip: f64,
    /// Azimuth in degrees relative to the sensor body.
    pub azimuth: f64,
    /// Response identifier.
    pub response: String,
}

/// One recording channel of a datalogger model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Datalogger manufacturer.
    pub make: String,
    /// Datalogger model.
    pub model: String,
    /// Channel number within the datalogger.
    pub number: i32,
    /// Samples per second.
    pub sampling_rate: f64,
    /// Response identifier.
    pub response: String,
}

/// Amplification applied to a subsource at a site over a span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gain {
    /// Station code.
    pub station: String,
    /// Location code.
    pub location: String,
    /// Subsource code the gain applies to.
    pub subsource: String,
    /// Gain period.
    pub span: Span,
    /// Scale factor.
    pub factor: f64,
    /// Scale bias.
    pub bias: f64,
}

impl Spanned for Gain {
    fn span(&self) -> &Span {
        &self.span
    }
}

/// Calibration of one component or channel of a specific equipment unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Equipment manufacturer.
    pub make: String,
    /// Equipment model.
    pub model: String,
    /// Equipment serial number.
    pub serial: String,
    /// Component or channel number.
    pub number: i32,
    /// Calibration period.
    pub span: Span,
    /// Sensitivity scale factor.
    pub factor: f64,
    /// Scale bias.
    pub bias: f64,
    /// Absolute offset.
    pub absolute: f64,
    /// Frequency at which the sensitivity applies, in hertz.
    pub frequency: f64,
}

impl Calibration {
    /// True if this calibration belongs to `equipment` at `number`.
    #[must_use]
    pub fn applies_to(&self, equipment: &Equipment, number: i32) -> bool {
        self.make == equipment.make
            && self.model == equipment.model
            && self.serial == equipment.serial
            && self.number == number
    }
}

impl Spanned for Calibration {
    fn span(&self) -> &Span {
        &self.span
    }
}
