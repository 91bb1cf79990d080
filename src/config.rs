use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use vibesip_discovery::{
    ComplexityWeights, DEFAULT_DIFFICULTY_ID, DifficultyTable, DifficultyTier,
};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in seed is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiscoveryConfig {
    /// Tier applied when a query string carries no difficulty
    #[serde(default = "default_difficulty")]
    pub default_difficulty: String,
    #[serde(default)]
    pub weights: ComplexityWeights,
    /// Ordered tier table. The standard Lazy/Balanced/Impress table when unset.
    #[serde(default)]
    pub difficulty_levels: Option<Vec<DifficultyTier>>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            default_difficulty: default_difficulty(),
            weights: ComplexityWeights::default(),
            difficulty_levels: None,
        }
    }
}

impl DiscoveryConfig {
    pub fn difficulty_table(&self) -> DifficultyTable {
        match &self.difficulty_levels {
            Some(levels) => DifficultyTable::new(levels.clone()),
            None => DifficultyTable::standard(),
        }
    }
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY_ID.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON logs instead of pretty console output
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VIBESIP__CATALOG__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("discovery.default_difficulty", DEFAULT_DIFFICULTY_ID)?
            .set_default("discovery.weights.ingredient_count", 1)?
            .set_default("discovery.weights.step_count", 1)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file just means defaults + environment
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VIBESIP")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let table = self.discovery.difficulty_table();

        if table.is_empty() {
            return Err("At least one difficulty level must be configured".to_string());
        }

        let mut seen = HashSet::new();
        for tier in table.tiers() {
            if tier.id.is_empty() {
                return Err("Difficulty level id must not be empty".to_string());
            }
            if !seen.insert(tier.id.as_str()) {
                return Err(format!("Duplicate difficulty level id: {}", tier.id));
            }
            if tier.range.is_empty() {
                return Err(format!(
                    "Difficulty level {} has min greater than max",
                    tier.id
                ));
            }
        }

        if let Some((left, right)) = table.overlaps().first() {
            return Err(format!(
                "Difficulty levels {} and {} have overlapping ranges",
                left, right
            ));
        }

        let default_difficulty = &self.discovery.default_difficulty;
        if !default_difficulty.is_empty() && table.lookup(default_difficulty).is_none() {
            return Err(format!(
                "Default difficulty {} is not a configured difficulty level",
                default_difficulty
            ));
        }

        Ok(())
    }
}
