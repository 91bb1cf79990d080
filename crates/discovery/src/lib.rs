//! Discovery filtering and ranking engine.
//!
//! Stateless building blocks used to recommend cocktails:
//! - [`complexity`]: scores a recipe from its ingredient and step counts
//! - [`difficulty`]: maps complexity scores onto named difficulty tiers
//! - [`filter`]: narrows a catalog with multi-field criteria
//! - [`ranking`]: reorders vibes by how often they occur with an occasion
//!
//! Every operation takes its inputs explicitly and never mutates them.

pub mod complexity;
pub mod difficulty;
pub mod filter;
pub mod model;
pub mod query;
pub mod ranking;

pub use complexity::{ComplexityScore, ComplexityWeights, complexity_score, complexity_score_with};
pub use difficulty::{
    DEFAULT_DIFFICULTY_ID, DIFFICULTY_HELPER_TEXT, DIFFICULTY_QUERY_PARAM, DifficultyMatch,
    DifficultyRange, DifficultyTable, DifficultyTier,
};
pub use filter::{CatalogFilter, FilterCriteria, filter_cocktails};
pub use model::{AlcoholLevel, Cocktail, DifficultyLevel, HasId, Ingredient, Occasion, Vibe};
pub use query::{DiscoveryQuery, vibes_path};
pub use ranking::{occasion_vibe_counts, rank_vibes_by_occasion};
