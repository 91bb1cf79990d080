//! Difficulty tiers over the complexity score
//!
//! A tier owns an inclusive `[min, max]` range. An absent bound is unbounded
//! on that side. Tiers are expected not to overlap, but nothing at filter time
//! enforces it; [`DifficultyTable::overlaps`] is there for config checks.

use serde::{Deserialize, Serialize};

pub const DIFFICULTY_QUERY_PARAM: &str = "difficulty";

/// Middle tier, used when a query carries no difficulty
pub const DEFAULT_DIFFICULTY_ID: &str = "difficulty-balanced";

pub const DIFFICULTY_HELPER_TEXT: &str = "Difficulty affects ingredient count and steps.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl DifficultyRange {
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn at_most(max: u32) -> Self {
        Self::new(None, Some(max))
    }

    pub fn at_least(min: u32) -> Self {
        Self::new(Some(min), None)
    }

    pub fn between(min: u32, max: u32) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Inclusive on both ends
    pub fn contains(&self, score: u32) -> bool {
        self.min.is_none_or(|min| score >= min) && self.max.is_none_or(|max| score <= max)
    }

    /// `min > max` can never contain any score
    pub fn is_empty(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    pub fn overlaps(&self, other: &DifficultyRange) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let low = self.min.unwrap_or(0).max(other.min.unwrap_or(0));
        let high = self.max.unwrap_or(u32::MAX).min(other.max.unwrap_or(u32::MAX));
        low <= high
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub range: DifficultyRange,
}

impl DifficultyTier {
    pub fn new(id: impl Into<String>, label: impl Into<String>, range: DifficultyRange) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            range,
        }
    }
}

/// Outcome of testing a score against a tier id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyMatch {
    Within,
    Outside,
    /// No tier with that id is configured. Nothing satisfies it.
    UnknownTier,
}

impl DifficultyMatch {
    pub fn is_match(self) -> bool {
        matches!(self, DifficultyMatch::Within)
    }
}

/// Ordered tier-to-range table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifficultyTable {
    tiers: Vec<DifficultyTier>,
}

impl DifficultyTable {
    pub fn new(tiers: Vec<DifficultyTier>) -> Self {
        Self { tiers }
    }

    /// Lazy (≤5), Balanced (6..=11), Impress (≥12)
    pub fn standard() -> Self {
        Self::new(vec![
            DifficultyTier::new("difficulty-lazy", "Lazy", DifficultyRange::at_most(5)),
            DifficultyTier::new(
                DEFAULT_DIFFICULTY_ID,
                "Balanced",
                DifficultyRange::between(6, 11),
            ),
            DifficultyTier::new("difficulty-impress", "Impress", DifficultyRange::at_least(12)),
        ])
    }

    pub fn tiers(&self) -> &[DifficultyTier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn lookup(&self, id: &str) -> Option<&DifficultyTier> {
        self.tiers.iter().find(|tier| tier.id == id)
    }

    /// First tier, in table order, whose range contains the score
    pub fn classify(&self, score: u32) -> Option<&DifficultyTier> {
        self.tiers.iter().find(|tier| tier.range.contains(score))
    }

    pub fn matches(&self, score: u32, id: &str) -> DifficultyMatch {
        match self.lookup(id) {
            None => DifficultyMatch::UnknownTier,
            Some(tier) if tier.range.contains(score) => DifficultyMatch::Within,
            Some(_) => DifficultyMatch::Outside,
        }
    }

    /// Pairs of tier ids whose ranges share at least one score
    pub fn overlaps(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, left) in self.tiers.iter().enumerate() {
            for right in &self.tiers[i + 1..] {
                if left.range.overlaps(&right.range) {
                    pairs.push((left.id.as_str(), right.id.as_str()));
                }
            }
        }
        pairs
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<DifficultyTier>> for DifficultyTable {
    fn from(tiers: Vec<DifficultyTier>) -> Self {
        Self::new(tiers)
    }
}
