use std::sync::Arc;

use crate::types::{
    Calibration, Channel, Component, Connection, DeployedDatalogger, Gain, InstalledRecorder,
    InstalledSensor, Snapshot, Stream,
};

/// Read-only access to every metadata table of a deployment history.
///
/// Accessors cover all sites, not just the one being joined, and make no
/// ordering promise; the join engine filters and sorts everything itself.
/// Implementations must not change the returned tables while a join is
/// running; snapshot live registries before querying them.
pub trait Registry: Send + Sync {
    /// Bundled sensor+datalogger units.
    fn installed_recorders(&self) -> &[InstalledRecorder];

    /// Sensors installed at stations.
    fn installed_sensors(&self) -> &[InstalledSensor];

    /// Dataloggers deployed at places.
    fn deployed_dataloggers(&self) -> &[DeployedDatalogger];

    /// Sensor to datalogger routings.
    fn connections(&self) -> &[Connection];

    /// Recording streams.
    fn streams(&self) -> &[Stream];

    /// Sensor model components.
    fn components(&self) -> &[Component];

    /// Datalogger model channels.
    fn channels(&self) -> &[Channel];

    /// Site subsource gains.
    fn gains(&self) -> &[Gain];

    /// Equipment calibrations.
    fn calibrations(&self) -> &[Calibration];
}

impl Registry for Snapshot {
    fn installed_recorders(&self) -> &[InstalledRecorder] {
        &self.installed_recorders
    }
    fn installed_sensors(&self) -> &[InstalledSensor] {
        &self.installed_sensors
    }
    fn deployed_dataloggers(&self) -> &[DeployedDatalogger] {
        &self.deployed_dataloggers
    }
    fn connections(&self) -> &[Connection] {
        &self.connections
    }
    fn streams(&self) -> &[Stream] {
        &self.streams
    }
    fn components(&self) -> &[Component] {
        &self.components
    }
    fn channels(&self) -> &[Channel] {
        &self.channels
    }
    fn gains(&self) -> &[Gain] {
        &self.gains
    }
    fn calibrations(&self) -> &[Calibration] {
        &self.calibrations
    }
}

macro_rules! forward_registry {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<R: Registry + ?Sized> Registry for $wrapper {
                fn installed_recorders(&self) -> &[InstalledRecorder] {
                    (**self).installed_recorders()
                }
                fn installed_sensors(&self) -> &[InstalledSensor] {
                    (**self).installed_sensors()
                }
                fn deployed_dataloggers(&self) -> &[DeployedDatalogger] {
                    (**self).deployed_dataloggers()
                }
                fn connections(&self) -> &[Connection] {
                    (**self).connections()
                }
                fn streams(&self) -> &[Stream] {
                    (**self).streams()
                }
                fn components(&self) -> &[Component] {
                    (**self).components()
                }
                fn channels(&self) -> &[Channel] {
                    (**self).channels()
                }
                fn gains(&self) -> &[Gain] {
                    (**self).gains()
                }
                fn calibrations(&self) -> &[Calibration] {
                    (**self).calibrations()
                }
            }
        )*
    };
}

forward_registry!(&R, Box<R>, Arc<R>);
