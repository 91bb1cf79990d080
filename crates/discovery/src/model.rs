use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Anything the ranker can reorder: it only needs a stable identifier.
pub trait HasId {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Ingredient {
    #[validate(length(min = 1, message = "Ingredient name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Ingredient amount is required"))]
    pub amount: String,
    #[validate(length(min = 1, message = "Ingredient unit is required"))]
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

/// Catalog entry
///
/// `difficulty_id` is the tier the recipe was authored under. Filtering by
/// difficulty never reads it: the tier is derived from the recipe's
/// complexity score instead (see [`crate::filter`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    #[validate(length(min = 1, message = "Cocktail id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Cocktail name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Cocktail description is required"))]
    pub description: String,
    #[validate(nested)]
    pub ingredients: Vec<Ingredient>,
    #[validate(custom(function = "validate_non_empty_entries"))]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: Option<String>,
    #[validate(length(min = 1, message = "Difficulty id is required"))]
    pub difficulty_id: String,
    #[validate(length(min = 1, message = "Alcohol level id is required"))]
    pub alcohol_level_id: String,
    #[serde(default)]
    #[validate(custom(function = "validate_non_empty_entries"))]
    pub vibe_ids: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_non_empty_entries"))]
    pub occasion_ids: Vec<String>,
}

/// Every entry of a string list must be non-empty
fn validate_non_empty_entries(entries: &[String]) -> Result<(), ValidationError> {
    if entries.iter().any(|entry| entry.is_empty()) {
        return Err(
            ValidationError::new("empty_entry").with_message("Entries must not be empty".into())
        );
    }
    Ok(())
}

impl Cocktail {
    pub fn has_vibe(&self, vibe_id: &str) -> bool {
        self.vibe_ids.iter().any(|id| id == vibe_id)
    }

    pub fn has_occasion(&self, occasion_id: &str) -> bool {
        self.occasion_ids.iter().any(|id| id == occasion_id)
    }

    /// At-least-one-of membership. An empty selection matches nothing here;
    /// callers decide whether an empty selection means "unconstrained".
    pub fn has_any_vibe<S: AsRef<str>>(&self, vibe_ids: &[S]) -> bool {
        vibe_ids.iter().any(|id| self.has_vibe(id.as_ref()))
    }

    pub fn has_any_occasion<S: AsRef<str>>(&self, occasion_ids: &[S]) -> bool {
        occasion_ids.iter().any(|id| self.has_occasion(id.as_ref()))
    }
}

impl HasId for Cocktail {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Mood tag ("vibe"), the primary selection axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vibe {
    #[validate(length(min = 1, message = "Vibe id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Vibe name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Vibe description is required"))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Image URL must not be empty"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl HasId for Vibe {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Social context (solo, couple, group)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Occasion {
    #[validate(length(min = 1, message = "Occasion id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Occasion name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Occasion description is required"))]
    pub description: String,
}

impl HasId for Occasion {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Reference row for the difficulty picker. `rank` orders tiers, lowest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DifficultyLevel {
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,
    pub rank: u32,
}

/// Reference row for the alcohol strength picker. `rank` orders levels, lightest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AlcoholLevel {
    #[validate(length(min = 1, message = "Id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,
    pub rank: u32,
}
