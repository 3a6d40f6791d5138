//! In-memory snapshot of every registry table.

use serde::{Deserialize, Serialize};

use crate::records::{
    Calibration, Channel, Component, Connection, DeployedDatalogger, Gain, InstalledRecorder,
    InstalledSensor, Stream,
};

/// Immutable copy of the full deployment history, across all sites.
///
/// Table order carries no meaning; the join engine filters and sorts
/// everything it reads. Taking a snapshot before joining is how callers keep
/// live-updated registries from changing underneath a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Bundled sensor+datalogger units.
    pub installed_recorders: Vec<InstalledRecorder>,
    /// Sensors installed at stations.
    pub installed_sensors: Vec<InstalledSensor>,
    /// Dataloggers deployed at places.
    pub deployed_dataloggers: Vec<DeployedDatalogger>,
    /// Sensor to datalogger routings.
    pub connections: Vec<Connection>,
    /// Recording streams.
    pub streams: Vec<Stream>,
    /// Sensor model components.
    pub components: Vec<Component>,
    /// Datalogger model channels.
    pub channels: Vec<Channel>,
    /// Site subsource gains.
    pub gains: Vec<Gain>,
    /// Equipment calibrations.
    pub calibrations: Vec<Calibration>,
}

impl Snapshot {
    /// Total number of records across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.installed_recorders.len()
            + self.installed_sensors.len()
            + self.deployed_dataloggers.len()
            + self.connections.len()
            + self.streams.len()
            + self.components.len()
            + self.channels.len()
            + self.gains.len()
            + self.calibrations.len()
    }

    /// True if every table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append every table of `other` onto this snapshot.
    pub fn extend(&mut self, other: Self) {
        self.installed_recorders.extend(other.installed_recorders);
        self.installed_sensors.extend(other.installed_sensors);
        self.deployed_dataloggers.extend(other.deployed_dataloggers);
        self.connections.extend(other.connections);
        self.streams.extend(other.streams);
        self.components.extend(other.components);
        self.channels.extend(other.channels);
        self.gains.extend(other.gains);
        self.calibrations.extend(other.calibrations);
    }
}
