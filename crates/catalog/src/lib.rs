//! Immutable cocktail catalog
//!
//! Loads the reference tables and cocktails once, checks them, and hands
//! slices to the discovery engine. Nothing here mutates after loading.

mod error;
pub mod integrity;
pub mod options;

pub use error::CatalogError;
pub use integrity::{duplicate_id_errors, integrity_errors};
pub use options::{ALL_OCCASIONS_ID, OccasionOption, occasion_options};

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;
use vibesip_discovery::{AlcoholLevel, Cocktail, DifficultyLevel, Occasion, Vibe};

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    #[validate(nested)]
    pub vibes: Vec<Vibe>,
    #[serde(default)]
    #[validate(nested)]
    pub occasions: Vec<Occasion>,
    #[serde(default)]
    #[validate(nested)]
    pub difficulties: Vec<DifficultyLevel>,
    #[serde(default)]
    #[validate(nested)]
    pub alcohol_levels: Vec<AlcoholLevel>,
    #[serde(default)]
    #[validate(nested)]
    pub cocktails: Vec<Cocktail>,
}

impl Catalog {
    /// Built-in launch menu
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json_str(SEED_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            cocktails = catalog.cocktails.len(),
            vibes = catalog.vibes.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Seed when `path` is absent, the file at `path` otherwise
    pub fn load_or_seed(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::seed(),
        }
    }

    /// Field-level problems: blank ids, names, ingredient parts, or steps
    pub fn shape_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .to_string()
                .lines()
                .map(str::to_string)
                .filter(|line| !line.trim().is_empty())
                .collect(),
        }
    }

    /// Shape, duplicate-id and referential problems, in that order
    pub fn problems(&self) -> Vec<String> {
        let mut problems = self.shape_errors();
        problems.extend(duplicate_id_errors(self));
        problems.extend(integrity_errors(self));
        problems
    }

    pub fn check(&self) -> Result<(), CatalogError> {
        let problems = self.problems();
        if problems.is_empty() {
            return Ok(());
        }

        for problem in &problems {
            tracing::warn!(problem = %problem, "Catalog check failed");
        }
        Err(CatalogError::Invalid(problems.join("; ")))
    }

    pub fn cocktail(&self, id: &str) -> Option<&Cocktail> {
        self.cocktails.iter().find(|cocktail| cocktail.id == id)
    }

    /// Difficulty reference rows, lowest rank first
    pub fn difficulties_by_rank(&self) -> Vec<&DifficultyLevel> {
        let mut levels: Vec<&DifficultyLevel> = self.difficulties.iter().collect();
        levels.sort_by_key(|level| level.rank);
        levels
    }

    /// Alcohol reference rows, lightest first
    pub fn alcohol_levels_by_rank(&self) -> Vec<&AlcoholLevel> {
        let mut levels: Vec<&AlcoholLevel> = self.alcohol_levels.iter().collect();
        levels.sort_by_key(|level| level.rank);
        levels
    }
}
