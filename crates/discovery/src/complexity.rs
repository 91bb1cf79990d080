//! Recipe complexity scoring
//!
//! Score = (ingredients * ingredient_count weight) + (steps * step_count weight)
//!
//! Weights are unsigned, so a score is never negative. Empty ingredient or
//! step lists simply contribute zero.

use serde::{Deserialize, Serialize};

use crate::model::Cocktail;

/// Per-dimension weights applied to ingredient and step counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityWeights {
    pub ingredient_count: u32,
    pub step_count: u32,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            ingredient_count: 1,
            step_count: 1,
        }
    }
}

/// Complexity score split into its weighted parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityScore {
    pub ingredient_score: u32,
    pub step_score: u32,
}

impl ComplexityScore {
    pub fn breakdown(cocktail: &Cocktail, weights: ComplexityWeights) -> Self {
        Self {
            ingredient_score: weighted(cocktail.ingredients.len(), weights.ingredient_count),
            step_score: weighted(cocktail.steps.len(), weights.step_count),
        }
    }

    pub fn total(&self) -> u32 {
        self.ingredient_score.saturating_add(self.step_score)
    }
}

fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(weight)
}

/// Complexity score under the default unit weights
pub fn complexity_score(cocktail: &Cocktail) -> u32 {
    complexity_score_with(cocktail, ComplexityWeights::default())
}

pub fn complexity_score_with(cocktail: &Cocktail, weights: ComplexityWeights) -> u32 {
    ComplexityScore::breakdown(cocktail, weights).total()
}
