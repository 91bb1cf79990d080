//! Query-string vocabulary shared with the catalog endpoints
//!
//! `vibe`, `occasion`, `difficulty` and `alcohol` carry the same ids as
//! [`FilterCriteria`], so a URL-mirrored selection filters the same way on
//! either side.

use serde::{Deserialize, Serialize};

use crate::filter::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol: Option<String>,
}

impl DiscoveryQuery {
    /// Parse `vibe=...&occasion=...` (a leading `?` is accepted)
    pub fn parse(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(query.trim_start_matches('?'))
    }

    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }

    /// Criteria for this query. A missing difficulty falls back to
    /// `default_difficulty`; empty values count as missing.
    pub fn into_criteria(self, default_difficulty: &str) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();

        if let Some(vibe) = present(self.vibe) {
            criteria = criteria.with_vibe(vibe);
        }
        if let Some(occasion) = present(self.occasion) {
            criteria = criteria.with_occasion(occasion);
        }
        if let Some(alcohol) = present(self.alcohol) {
            criteria = criteria.with_alcohol_level(alcohol);
        }

        match present(self.difficulty) {
            Some(difficulty) => criteria.with_difficulty(difficulty),
            None if default_difficulty.is_empty() => criteria,
            None => criteria.with_difficulty(default_difficulty),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Path for the vibe listing, scoped to an occasion when one is selected
pub fn vibes_path(occasion_id: &str) -> String {
    if occasion_id.is_empty() {
        return "/vibes".to_string();
    }

    let query = serde_urlencoded::to_string(&[("occasion", occasion_id)])
        .unwrap_or_else(|_| format!("occasion={}", occasion_id));
    format!("/vibes?{}", query)
}
