pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

use std::path::Path;

use vibesip_catalog::Catalog;
use vibesip_discovery::{CatalogFilter, ComplexityWeights, DifficultyTable};

use crate::config::{Config, DiscoveryConfig};

/// Loaded catalog plus the discovery settings every command shares
#[derive(Debug, Clone)]
pub struct Context {
    pub catalog: Catalog,
    pub table: DifficultyTable,
    pub weights: ComplexityWeights,
    pub default_difficulty: String,
}

impl Context {
    /// Load the configured catalog file, or the built-in seed
    pub fn from_config(config: &Config) -> error::Result<Self> {
        let path = config.catalog.path.as_deref().map(Path::new);
        let catalog = Catalog::load_or_seed(path)?;

        Ok(Self::with_catalog(catalog, &config.discovery))
    }

    pub fn with_catalog(catalog: Catalog, discovery: &DiscoveryConfig) -> Self {
        Self {
            catalog,
            table: discovery.difficulty_table(),
            weights: discovery.weights,
            default_difficulty: discovery.default_difficulty.clone(),
        }
    }

    pub fn filter(&self) -> CatalogFilter<'_> {
        CatalogFilter::new(&self.table).with_weights(self.weights)
    }
}
