//! Re-export of the shared data model from `collate-types`.
// Consolidated re-exports so downstream crates can depend on `collate-core` only

pub use collate_types::{CollateConfig, CollateError, JoinStrategy};

pub use collate_types::{
    Calibration, Channel, Component, Connection, DeployedDatalogger, Equipment, Gain, Install,
    InstalledRecorder, InstalledSensor, Stream,
};

pub use collate_types::{Collection, Polarity, Site, Snapshot, Span, Spanned};

pub use collate_types::{SurveyEntry, SurveyReport};
