//! Catalog filtering
//!
//! # Rules
//! - **AND across dimensions**: a cocktail must satisfy every active constraint
//! - **OR within a dimension**: vibe and occasion selections match on any overlap
//! - **Unconstrained fast path**: criteria with no active field returns the whole
//!   catalog, so an empty multi-select never turns into "match nothing"
//! - **Unknown difficulty**: a tier id missing from the table matches no cocktail
//!
//! Catalog order is preserved and the catalog is never mutated.

use serde::{Deserialize, Serialize};

use crate::complexity::{ComplexityWeights, complexity_score_with};
use crate::difficulty::DifficultyTable;
use crate::model::Cocktail;

/// Caller-supplied constraints
///
/// Single-occasion selection is a one-element `occasion_ids`. Empty strings in
/// the single-value fields count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawFilterCriteria")]
pub struct FilterCriteria {
    pub vibe_ids: Vec<String>,
    pub occasion_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_level_id: Option<String>,
}

/// Wire shape accepted from older call sites, which may send `occasionId`,
/// `occasionIds`, or both. The set form wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFilterCriteria {
    #[serde(default)]
    vibe_ids: Vec<String>,
    #[serde(default)]
    occasion_id: Option<String>,
    #[serde(default)]
    occasion_ids: Vec<String>,
    #[serde(default)]
    difficulty_id: Option<String>,
    #[serde(default)]
    alcohol_level_id: Option<String>,
}

impl From<RawFilterCriteria> for FilterCriteria {
    fn from(raw: RawFilterCriteria) -> Self {
        let occasion_ids = if raw.occasion_ids.is_empty() {
            raw.occasion_id
                .filter(|id| !id.is_empty())
                .into_iter()
                .collect()
        } else {
            raw.occasion_ids
        };

        Self {
            vibe_ids: raw.vibe_ids,
            occasion_ids,
            difficulty_id: non_empty(raw.difficulty_id),
            alcohol_level_id: non_empty(raw.alcohol_level_id),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vibe(mut self, vibe_id: impl Into<String>) -> Self {
        self.vibe_ids.push(vibe_id.into());
        self
    }

    pub fn with_occasion(mut self, occasion_id: impl Into<String>) -> Self {
        self.occasion_ids.push(occasion_id.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty_id: impl Into<String>) -> Self {
        self.difficulty_id = Some(difficulty_id.into());
        self
    }

    pub fn with_alcohol_level(mut self, alcohol_level_id: impl Into<String>) -> Self {
        self.alcohol_level_id = Some(alcohol_level_id.into());
        self
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn alcohol_level(&self) -> Option<&str> {
        self.alcohol_level_id.as_deref().filter(|id| !id.is_empty())
    }

    /// True when no dimension carries a constraint
    pub fn is_unconstrained(&self) -> bool {
        self.vibe_ids.is_empty()
            && self.occasion_ids.is_empty()
            && self.difficulty().is_none()
            && self.alcohol_level().is_none()
    }
}

/// Applies [`FilterCriteria`] to a catalog using a difficulty table and weights
#[derive(Debug, Clone, Copy)]
pub struct CatalogFilter<'a> {
    table: &'a DifficultyTable,
    weights: ComplexityWeights,
}

impl<'a> CatalogFilter<'a> {
    pub fn new(table: &'a DifficultyTable) -> Self {
        Self {
            table,
            weights: ComplexityWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ComplexityWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn filter<'c>(
        &self,
        catalog: &'c [Cocktail],
        criteria: &FilterCriteria,
    ) -> Vec<&'c Cocktail> {
        if catalog.is_empty() {
            return Vec::new();
        }

        if criteria.is_unconstrained() {
            return catalog.iter().collect();
        }

        let matched: Vec<&Cocktail> = catalog
            .iter()
            .filter(|cocktail| self.matches(cocktail, criteria))
            .collect();

        tracing::debug!(
            catalog = catalog.len(),
            matched = matched.len(),
            difficulty = criteria.difficulty(),
            alcohol = criteria.alcohol_level(),
            vibes = criteria.vibe_ids.len(),
            occasions = criteria.occasion_ids.len(),
            "Filtered catalog"
        );

        matched
    }

    /// Predicate chain, short-circuiting on the first failing constraint
    pub fn matches(&self, cocktail: &Cocktail, criteria: &FilterCriteria) -> bool {
        if let Some(difficulty_id) = criteria.difficulty() {
            let score = complexity_score_with(cocktail, self.weights);
            if !self.table.matches(score, difficulty_id).is_match() {
                return false;
            }
        }

        if criteria
            .alcohol_level()
            .is_some_and(|alcohol_level_id| cocktail.alcohol_level_id != alcohol_level_id)
        {
            return false;
        }

        if !criteria.vibe_ids.is_empty() && !cocktail.has_any_vibe(&criteria.vibe_ids) {
            return false;
        }

        if !criteria.occasion_ids.is_empty()
            && !cocktail.has_any_occasion(&criteria.occasion_ids)
        {
            return false;
        }

        true
    }
}

/// Filter with default complexity weights
pub fn filter_cocktails<'c>(
    catalog: &'c [Cocktail],
    criteria: &FilterCriteria,
    table: &DifficultyTable,
) -> Vec<&'c Cocktail> {
    CatalogFilter::new(table).filter(catalog, criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::{DifficultyRange, DifficultyTier};
    use crate::model::Ingredient;

    fn create_test_cocktail(
        id: &str,
        ingredients: usize,
        steps: usize,
        alcohol: &str,
    ) -> Cocktail {
        Cocktail {
            id: id.to_string(),
            name: format!("Cocktail {}", id),
            description: "Test drink".to_string(),
            ingredients: (0..ingredients)
                .map(|i| Ingredient::new(format!("ingredient {}", i), "1", "oz"))
                .collect(),
            steps: (0..steps).map(|i| format!("Step {}", i)).collect(),
            image_url: None,
            difficulty_id: "difficulty-balanced".to_string(),
            alcohol_level_id: alcohol.to_string(),
            vibe_ids: vec![],
            occasion_ids: vec![],
        }
    }

    #[test]
    fn test_unconstrained_criteria_returns_catalog() {
        let catalog = vec![
            create_test_cocktail("1", 1, 1, "alcohol-light"),
            create_test_cocktail("2", 9, 9, "alcohol-strong"),
        ];
        let table = DifficultyTable::standard();

        let filtered = filter_cocktails(&catalog, &FilterCriteria::new(), &table);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "2");
    }

    #[test]
    fn test_empty_strings_count_as_unconstrained() {
        let criteria = FilterCriteria {
            difficulty_id: Some(String::new()),
            alcohol_level_id: Some(String::new()),
            ..FilterCriteria::default()
        };

        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_difficulty_uses_complexity_not_authored_tier() {
        // Authored as balanced, but 2 + 1 = 3 puts it in the lazy range
        let catalog = vec![create_test_cocktail("easy", 2, 1, "alcohol-light")];
        let table = DifficultyTable::standard();

        let lazy = filter_cocktails(
            &catalog,
            &FilterCriteria::new().with_difficulty("difficulty-lazy"),
            &table,
        );
        let balanced = filter_cocktails(
            &catalog,
            &FilterCriteria::new().with_difficulty("difficulty-balanced"),
            &table,
        );

        assert_eq!(lazy.len(), 1);
        assert!(balanced.is_empty());
    }

    #[test]
    fn test_unknown_difficulty_excludes_everything() {
        let catalog = vec![create_test_cocktail("1", 4, 3, "alcohol-strong")];
        let table = DifficultyTable::standard();
        let criteria = FilterCriteria::new()
            .with_difficulty("difficulty-moderate")
            .with_alcohol_level("alcohol-strong");

        assert!(filter_cocktails(&catalog, &criteria, &table).is_empty());
    }

    #[test]
    fn test_custom_weights_shift_classification() {
        let catalog = vec![create_test_cocktail("1", 4, 3, "alcohol-strong")];
        let table = DifficultyTable::standard();
        let criteria = FilterCriteria::new().with_difficulty("difficulty-impress");
        let heavy = ComplexityWeights {
            ingredient_count: 2,
            step_count: 2,
        };

        assert!(CatalogFilter::new(&table).filter(&catalog, &criteria).is_empty());
        assert_eq!(
            CatalogFilter::new(&table)
                .with_weights(heavy)
                .filter(&catalog, &criteria)
                .len(),
            1
        );
    }

    #[test]
    fn test_swapped_table_changes_result_without_touching_filter() {
        let catalog = vec![create_test_cocktail("1", 4, 3, "alcohol-strong")];
        let table = DifficultyTable::new(vec![DifficultyTier::new(
            "difficulty-any",
            "Any",
            DifficultyRange::default(),
        )]);

        let criteria = FilterCriteria::new().with_difficulty("difficulty-any");

        let filtered = filter_cocktails(&catalog, &criteria, &table);

        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_legacy_single_occasion_is_sugar_for_set() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"occasionId": "occasion-solo"}"#).unwrap();

        assert_eq!(criteria.occasion_ids, vec!["occasion-solo".to_string()]);
    }

    #[test]
    fn test_occasion_set_wins_over_single_form() {
        let criteria: FilterCriteria = serde_json::from_str(
            r#"{"occasionId": "occasion-solo", "occasionIds": ["occasion-couple"]}"#,
        )
        .unwrap();

        assert_eq!(criteria.occasion_ids, vec!["occasion-couple".to_string()]);
    }

    #[test]
    fn test_empty_single_occasion_is_ignored() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"occasionId": "", "difficultyId": ""}"#).unwrap();

        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.difficulty_id, None);
    }
}
