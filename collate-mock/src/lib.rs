use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use collate_core::{
    Calibration, Channel, Component, Connection, DeployedDatalogger, Gain, InstalledRecorder,
    InstalledSensor, Registry, Snapshot, Stream,
};

pub mod fixtures;

/// Mock registry for tests. Serves a fixed snapshot, counts table reads, and
/// can simulate a slow backing store.
#[derive(Debug, Default)]
pub struct MockRegistry {
    snapshot: Snapshot,
    delay: Option<Duration>,
    reads: AtomicUsize,
}

impl MockRegistry {
    /// Serve `snapshot` with no delay.
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            delay: None,
            reads: AtomicUsize::new(0),
        }
    }

    /// Serve every fixture deployment.
    #[must_use]
    pub fn network() -> Self {
        Self::new(fixtures::network())
    }

    /// Block each table read for `delay`, simulating an I/O bound store.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of table reads served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// The snapshot being served.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn read(&self) -> &Snapshot {
        self.reads.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.delay {
            // Simulate a slow store; keep delays short in tests
            std::thread::sleep(delay);
        }
        &self.snapshot
    }
}

impl Registry for MockRegistry {
    fn installed_recorders(&self) -> &[InstalledRecorder] {
        &self.read().installed_recorders
    }
    fn installed_sensors(&self) -> &[InstalledSensor] {
        &self.read().installed_sensors
    }
    fn deployed_dataloggers(&self) -> &[DeployedDatalogger] {
        &self.read().deployed_dataloggers
    }
    fn connections(&self) -> &[Connection] {
        &self.read().connections
    }
    fn streams(&self) -> &[Stream] {
        &self.read().streams
    }
    fn components(&self) -> &[Component] {
        &self.read().components
    }
    fn channels(&self) -> &[Channel] {
        &self.read().channels
    }
    fn gains(&self) -> &[Gain] {
        &self.read().gains
    }
    fn calibrations(&self) -> &[Calibration] {
        &self.read().calibrations
    }
}
