use std::collections::HashSet;
use std::sync::Arc;

use collate_core::{
    CollateError, Collection, Registry, Site, SurveyEntry, SurveyReport, build_collections_with,
};
use tokio::task::JoinError;

use crate::Collate;

/// Builder to join many sites of one registry concurrently.
pub struct SurveyBuilder<'a> {
    pub(crate) collate: &'a Collate,
    pub(crate) sites: Vec<Site>,
}

impl<'a> SurveyBuilder<'a> {
    /// Create a new builder bound to a `Collate` instance.
    ///
    /// Starts with an empty site list.
    #[must_use]
    pub const fn new(collate: &'a Collate) -> Self {
        Self {
            collate,
            sites: Vec::new(),
        }
    }

    /// Replace the site list.
    ///
    /// Replaces any previously added sites; use `add_site` to append.
    ///
    /// # Errors
    /// Returns an error if the same site appears twice in `sites`.
    pub fn sites(mut self, sites: &[Site]) -> Result<Self, CollateError> {
        let mut seen = HashSet::new();
        for site in sites {
            if !seen.insert(site) {
                return Err(CollateError::InvalidArg(format!(
                    "duplicate site '{site}' in sites list"
                )));
            }
        }

        self.sites = sites.to_vec();
        Ok(self)
    }

    /// Add a single site to the list.
    ///
    /// # Errors
    /// Returns an error if the site is already in the list.
    pub fn add_site(mut self, site: Site) -> Result<Self, CollateError> {
        if self.sites.contains(&site) {
            return Err(CollateError::InvalidArg(format!(
                "duplicate site '{site}' already exists in sites list"
            )));
        }

        self.sites.push(site);
        Ok(self)
    }

    /// Join every site and collect the results into a report.
    ///
    /// Behavior:
    /// - Each site is joined on the blocking thread pool, all sites at once.
    /// - Entries follow the order in which sites were added.
    /// - A site whose join task fails is reported in `warnings` and omitted
    ///   from `entries`; the other sites are unaffected.
    /// - Joins already running when the deadline passes are not cancelled,
    ///   their results are discarded.
    ///
    /// # Errors
    /// Returns an error if no sites were specified or if the configured
    /// request timeout elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "collate::survey::run",
            skip_all,
            fields(sites = self.sites.len(), strategy = ?self.collate.cfg.join_strategy),
        )
    )]
    pub async fn run(self) -> Result<SurveyReport, CollateError> {
        if self.sites.is_empty() {
            return Err(CollateError::InvalidArg(
                "no sites specified for survey".into(),
            ));
        }

        let strategy = self.collate.cfg.join_strategy;
        let tasks = self.sites.into_iter().map(|site| {
            let registry: Arc<dyn Registry> = Arc::clone(&self.collate.registry);
            async move {
                let key = site.clone();
                let joined = tokio::task::spawn_blocking(move || {
                    build_collections_with(registry.as_ref(), &key, strategy)
                })
                .await;
                (site, joined)
            }
        });

        let joined: Vec<(Site, Result<Vec<Collection>, JoinError>)> =
            if let Some(deadline) = self.collate.cfg.request_timeout {
                match tokio::time::timeout(deadline, futures::future::join_all(tasks)).await {
                    Ok(v) => v,
                    Err(_) => return Err(CollateError::request_timeout("survey")),
                }
            } else {
                futures::future::join_all(tasks).await
            };

        let mut report = SurveyReport::default();
        for (site, result) in joined {
            match result {
                Ok(collections) => report.entries.push(SurveyEntry { site, collections }),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(site = %site, error = %e, "collection task failed");
                    report
                        .warnings
                        .push(CollateError::task(site.to_string(), e.to_string()));
                }
            }
        }

        Ok(report)
    }
}
