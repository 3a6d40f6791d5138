//! Report envelopes produced by the facade.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::CollateError;
use crate::site::Site;

/// Collections built for one site of a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyEntry {
    /// Surveyed site.
    pub site: Site,
    /// Ordered collections for the site; empty if nothing matched.
    pub collections: Vec<Collection>,
}

/// Summary of a multi-site survey.
///
/// Entries follow the order in which sites were requested. Sites whose join
/// task did not complete are reported in `warnings` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SurveyReport {
    /// Per-site results.
    pub entries: Vec<SurveyEntry>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<CollateError>,
}

impl SurveyReport {
    /// Collections for `site`, if it was surveyed successfully.
    #[must_use]
    pub fn collections(&self, site: &Site) -> Option<&[Collection]> {
        self.entries
            .iter()
            .find(|e| &e.site == site)
            .map(|e| e.collections.as_slice())
    }
}
