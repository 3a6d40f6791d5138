//! Configuration types shared by the join engine and the facade.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Strategy for finding join candidates in the registry.
///
/// Both strategies yield identical collections in identical order; they only
/// differ in how much work is repeated per lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinStrategy {
    /// Walk the full registry table on every lookup.
    /// No setup cost; quadratic in registry size for large deployments.
    Scan,
    /// Bucket components, channels, gains, and calibrations by match key once
    /// per join, keeping registry order inside each bucket.
    #[default]
    Indexed,
}

/// Global configuration for the `Collate` facade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateConfig {
    /// How join candidates are located in the registry.
    pub join_strategy: JoinStrategy,
    /// Optional deadline for multi-site surveys.
    /// If set, a survey that does not finish in time fails with `RequestTimeout`.
    pub request_timeout: Option<Duration>,
}
