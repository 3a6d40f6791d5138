use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the collate workspace.
///
/// The temporal join itself never fails: non-matching or non-overlapping
/// records are filtered out. These errors come from the layers around it,
/// such as argument parsing, builder validation, and multi-site fan-out.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollateError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Label of the operation that timed out (e.g. "survey").
        capability: String,
    },

    /// A per-site join task did not complete.
    #[error("collection task for {site} failed: {msg}")]
    Task {
        /// Site the task was building collections for.
        site: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl CollateError {
    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Helper: build a `Task` error for a site.
    pub fn task(site: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Task {
            site: site.into(),
            msg: msg.into(),
        }
    }
}
