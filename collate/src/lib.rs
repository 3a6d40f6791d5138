//! Collate reconstructs the instrument configurations recorded at a seismic site.
//!
//! Overview
//! - Reads sensor installations, datalogger deployments, connections, streams,
//!   and response tables from any type implementing `collate_core::Registry`.
//! - Joins them into time-bounded `Collection`s, one per recorded channel and
//!   configuration period, with the gains and calibrations active during it.
//! - Surveys many sites concurrently with an optional overall deadline.
//!
//! Key behaviors and trade-offs
//! - Join strategy:
//!   - `Indexed`: buckets candidates by match key once per join; best for large
//!     registries.
//!   - `Scan`: walks the full tables on every lookup; no setup cost, quadratic
//!     on large deployments.
//!   - Both produce identical collections in identical order.
//! - Survey: one blocking task per site. A deadline fails the whole survey,
//!   while a failed site only adds a warning to the report.
//!
//! Examples
//! Building the facade and joining one site:
//! ```rust,ignore
//! use std::sync::Arc;
//! use collate::{Collate, JoinStrategy, Site};
//!
//! let collate = Collate::builder()
//!     .with_registry(Arc::new(snapshot))
//!     .join_strategy(JoinStrategy::Indexed)
//!     .build()?;
//!
//! for c in collate.collections(&Site::new("WEL", "10")) {
//!     println!("{} {} {:?}", c.code(), c.azimuth(None), c.span);
//! }
//! ```
//!
//! Surveying several sites:
//! ```rust,ignore
//! let report = collate
//!     .survey()
//!     .sites(&[Site::new("WEL", "10"), Site::new("SNZO", "10")])?
//!     .run()
//!     .await?;
//! for entry in &report.entries {
//!     println!("{}: {} collections", entry.site, entry.collections.len());
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod survey;

pub use core::{Collate, CollateBuilder};
pub use survey::SurveyBuilder;

pub use collate_core::{Registry, build_collections, build_collections_with};

// Re-export core types for convenience
pub use collate_core::{
    Calibration, Channel, CollateConfig, CollateError, Collection, Component, Connection,
    DeployedDatalogger, Equipment, Gain, Install, InstalledRecorder, InstalledSensor,
    JoinStrategy, Polarity, Site, Snapshot, Span, Spanned, Stream, SurveyEntry, SurveyReport,
};
