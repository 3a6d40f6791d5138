//! Metadata records, spans, and collection types shared across the collate workspace.
#![warn(missing_docs)]

mod collection;
mod config;
/// Error type shared by all collate crates.
pub mod error;
mod records;
mod reports;
mod site;
mod snapshot;
mod span;

pub use collection::Collection;
pub use config::{CollateConfig, JoinStrategy};
pub use error::CollateError;
pub use records::{
    Calibration, Channel, Component, Connection, DeployedDatalogger, Equipment, Gain, Install,
    InstalledRecorder, InstalledSensor, Stream,
};
pub use reports::{SurveyEntry, SurveyReport};
pub use site::{Polarity, Site};
pub use snapshot::Snapshot;
pub use span::{Span, Spanned};
