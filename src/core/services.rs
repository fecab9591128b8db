//! Unified service container for the heroes API
//!
//! Provides shared access to the catalogue and the query service.

use crate::core::catalogue::Catalogue;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::query::QueryService;
use std::sync::Arc;

/// Unified services container
///
/// Built once at startup and handed to every request handler.
#[derive(Clone)]
pub struct Services {
    /// Immutable hero catalogue
    pub catalogue: Arc<Catalogue>,

    /// Listing and search over the catalogue
    pub query: Arc<QueryService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services around an already loaded catalogue
    pub fn new(config: Config, catalogue: Catalogue) -> Self {
        let catalogue = Arc::new(catalogue);
        let query = Arc::new(QueryService::new(Arc::clone(&catalogue)));

        Self {
            catalogue,
            query,
            config: Arc::new(config),
        }
    }

    /// Create services, loading the catalogue named by the configuration
    ///
    /// Falls back to the built-in dataset when no data file is set.
    pub fn from_config(config: Config) -> Result<Self> {
        let catalogue = match &config.catalogue.data_file {
            Some(path) => Catalogue::from_file(path)?,
            None => Catalogue::builtin()?,
        };

        tracing::info!(
            heroes = catalogue.len(),
            pages = catalogue.last_page(),
            "Catalogue loaded"
        );

        Ok(Self::new(config, catalogue))
    }
}
