//! Joined instrument configurations and the orientations derived from them.

use serde::{Deserialize, Serialize};

use crate::records::{
    Calibration, Channel, Component, DeployedDatalogger, Gain, InstalledSensor, Stream,
};
use crate::site::Polarity;
use crate::span::{Span, Spanned};

/// One valid sensor, datalogger, stream, and channel combination, bounded by
/// the period during which every contributing record was valid.
///
/// Collections are built fresh by each join and hold copies of the matched
/// records. They are not updated in place; re-run the join for fresh results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Intersection of every contributing record's span.
    pub span: Span,

    /// Matched recording stream.
    pub stream: Stream,
    /// Matched datalogger channel.
    pub channel: Channel,
    /// Matched sensor component.
    pub component: Component,

    /// Installed sensor providing the component.
    pub installed_sensor: InstalledSensor,
    /// Datalogger recording the channel; synthesized for bundled recorders.
    pub deployed_datalogger: DeployedDatalogger,

    /// Gains overlapping the span, ordered by start.
    pub gains: Vec<Gain>,

    /// Sensor calibrations overlapping the span, ordered by start.
    pub sensor_calibrations: Vec<Calibration>,
    /// Datalogger calibrations overlapping the span, ordered by start.
    pub datalogger_calibrations: Vec<Calibration>,
}

impl Spanned for Collection {
    fn span(&self) -> &Span {
        &self.span
    }
}

impl Collection {
    /// Subsource code, with `N`/`E` relabelled `1`/`2` on axial streams.
    #[must_use]
    pub fn subsource(&self) -> &str {
        let axial = self.stream.axial.as_str();
        if !(axial.eq_ignore_ascii_case("true") || axial.eq_ignore_ascii_case("yes")) {
            return &self.component.subsource;
        }
        match self.component.subsource.as_str() {
            "N" | "n" => "1",
            "E" | "e" => "2",
            other => other,
        }
    }

    /// Channel code: band, source, and subsource concatenated.
    #[must_use]
    pub fn code(&self) -> String {
        format!(
            "{}{}{}",
            self.stream.band,
            self.stream.source,
            self.subsource()
        )
    }

    /// Dip of the recorded stream in degrees from horizontal, positive downwards.
    ///
    /// Horizontal components report `0.0`. A reversed primary polarity flips
    /// the sign.
    #[must_use]
    pub fn dip(&self, polarity: Option<&Polarity>) -> f64 {
        if self.component.dip == 0.0 {
            return 0.0;
        }
        if polarity.is_some_and(Polarity::is_reversing) {
            -self.component.dip
        } else {
            self.component.dip
        }
    }

    /// Azimuth of the recorded stream in degrees from north, within `[0, 360)`.
    ///
    /// Only horizontal components have an azimuth; dipping components report
    /// `0.0`. A reversed primary polarity turns the azimuth by 180 degrees.
    #[must_use]
    pub fn azimuth(&self, polarity: Option<&Polarity>) -> f64 {
        if self.component.dip != 0.0 {
            return 0.0;
        }

        let mut azimuth = self.installed_sensor.azimuth + self.component.azimuth;
        if polarity.is_some_and(Polarity::is_reversing) {
            azimuth += 180.0;
        }
        if !azimuth.is_finite() {
            return 0.0;
        }

        // rem_euclid is the closed form of adding 360 until non-negative
        if azimuth < 0.0 {
            azimuth = azimuth.rem_euclid(360.0);
        }
        azimuth % 360.0
    }
}
