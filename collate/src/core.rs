use std::sync::Arc;
use std::time::Duration;

use collate_core::{
    CollateConfig, CollateError, Collection, JoinStrategy, Registry, Site, build_collections_with,
};

use crate::survey::SurveyBuilder;

/// Facade that answers collection queries against one metadata registry.
pub struct Collate {
    pub(crate) registry: Arc<dyn Registry>,
    pub(crate) cfg: CollateConfig,
}

/// Builder for constructing a `Collate` facade with custom configuration.
pub struct CollateBuilder {
    registry: Option<Arc<dyn Registry>>,
    cfg: CollateConfig,
}

impl Default for CollateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CollateBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Behavior:
    /// - Starts without a registry; you must provide one via [`with_registry`].
    /// - Defaults to the indexed join strategy and no survey deadline.
    ///
    /// [`with_registry`]: Self::with_registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: None,
            cfg: CollateConfig::default(),
        }
    }

    /// Set the registry that all joins read from.
    ///
    /// Replaces any registry set earlier. The registry must not be mutated
    /// while joins are running.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<dyn Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Select how join candidates are located.
    #[must_use]
    pub const fn join_strategy(mut self, strategy: JoinStrategy) -> Self {
        self.cfg.join_strategy = strategy;
        self
    }

    /// Bound multi-site surveys by an overall deadline.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn config(mut self, cfg: CollateConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Collate` facade.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no registry was set, or if the configured
    /// request timeout is zero.
    pub fn build(self) -> Result<Collate, CollateError> {
        let Some(registry) = self.registry else {
            return Err(CollateError::InvalidArg(
                "no registry set; provide one via with_registry(...)".to_string(),
            ));
        };
        if self.cfg.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(CollateError::InvalidArg(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Collate {
            registry,
            cfg: self.cfg,
        })
    }
}

impl Collate {
    /// Start building a new `Collate` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use collate::{Collate, JoinStrategy, Site};
    ///
    /// let collate = Collate::builder()
    ///     .with_registry(Arc::new(snapshot))
    ///     .join_strategy(JoinStrategy::Indexed)
    ///     .build()?;
    /// let collections = collate.collections(&Site::new("WEL", "10"));
    /// ```
    #[must_use]
    pub fn builder() -> CollateBuilder {
        CollateBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CollateConfig {
        &self.cfg
    }

    /// The registry this facade reads from.
    #[must_use]
    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }

    /// Build the ordered collections for `site`.
    ///
    /// Runs the join on the calling thread. Use [`survey`](Self::survey) to
    /// join several sites concurrently.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "collate::collections", skip_all, fields(site = %site))
    )]
    #[must_use]
    pub fn collections(&self, site: &Site) -> Vec<Collection> {
        build_collections_with(self.registry.as_ref(), site, self.cfg.join_strategy)
    }

    /// Build the ordered collections for a `"STATION.LOCATION"` code.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `code` is not a valid site code.
    pub fn collections_at(&self, code: &str) -> Result<Vec<Collection>, CollateError> {
        let site: Site = code.parse()?;
        Ok(self.collections(&site))
    }

    /// Start a multi-site survey.
    #[must_use]
    pub const fn survey(&self) -> SurveyBuilder<'_> {
        SurveyBuilder::new(self)
    }
}
