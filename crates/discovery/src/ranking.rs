//! Occasion-aware vibe ranking
//!
//! Vibes that co-occur with the chosen occasion move to the front, most
//! frequent first. Everything else keeps its original order at the back.

use std::collections::HashMap;

use crate::model::{Cocktail, HasId};

/// How many cocktails tagged with `occasion_id` carry each vibe
pub fn occasion_vibe_counts<'c>(
    catalog: &'c [Cocktail],
    occasion_id: &str,
) -> HashMap<&'c str, usize> {
    let mut counts = HashMap::new();
    if occasion_id.is_empty() {
        return counts;
    }

    for vibe_id in catalog
        .iter()
        .filter(|cocktail| cocktail.has_occasion(occasion_id))
        .flat_map(|cocktail| cocktail.vibe_ids.iter())
    {
        *counts.entry(vibe_id.as_str()).or_insert(0) += 1;
    }

    counts
}

/// Reorder `vibes` by relevance to `occasion_id`
///
/// An empty occasion id returns the input order untouched. Otherwise vibes with
/// a non-zero count are sorted by count descending, ties kept in input order,
/// followed by the zero-count vibes in input order.
pub fn rank_vibes_by_occasion<'v, T: HasId>(
    vibes: &'v [T],
    catalog: &[Cocktail],
    occasion_id: &str,
) -> Vec<&'v T> {
    if occasion_id.is_empty() {
        return vibes.iter().collect();
    }

    let counts = occasion_vibe_counts(catalog, occasion_id);
    let (mut matching, non_matching): (Vec<_>, Vec<_>) = vibes
        .iter()
        .map(|vibe| (counts.get(vibe.id()).copied().unwrap_or(0), vibe))
        .partition(|(count, _)| *count > 0);

    // sort_by is stable, so equal counts keep their input order
    matching.sort_by(|(left, _), (right, _)| right.cmp(left));

    tracing::debug!(
        occasion = occasion_id,
        matching = matching.len(),
        non_matching = non_matching.len(),
        "Ranked vibes by occasion"
    );

    matching
        .into_iter()
        .chain(non_matching)
        .map(|(_, vibe)| vibe)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestVibe(&'static str);

    impl HasId for TestVibe {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn create_test_cocktail(vibes: &[&str], occasions: &[&str]) -> Cocktail {
        Cocktail {
            id: format!("cocktail-{}", vibes.join("-")),
            name: "Test".to_string(),
            description: "Test drink".to_string(),
            ingredients: vec![],
            steps: vec![],
            image_url: None,
            difficulty_id: "difficulty-lazy".to_string(),
            alcohol_level_id: "alcohol-light".to_string(),
            vibe_ids: vibes.iter().map(|s| s.to_string()).collect(),
            occasion_ids: occasions.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ids<T: HasId>(ranked: &[&T]) -> Vec<String> {
        ranked.iter().map(|v| v.id().to_string()).collect()
    }

    #[test]
    fn test_counts_only_cocktails_for_occasion() {
        let catalog = vec![
            create_test_cocktail(&["vibe-date", "vibe-chill"], &["occasion-couple"]),
            create_test_cocktail(&["vibe-date"], &["occasion-couple", "occasion-solo"]),
            create_test_cocktail(&["vibe-party"], &["occasion-hosting-friends"]),
        ];

        let counts = occasion_vibe_counts(&catalog, "occasion-couple");

        assert_eq!(counts.get("vibe-date"), Some(&2));
        assert_eq!(counts.get("vibe-chill"), Some(&1));
        assert_eq!(counts.get("vibe-party"), None);
    }

    #[test]
    fn test_empty_occasion_has_no_counts() {
        let catalog = vec![create_test_cocktail(&["vibe-date"], &[""])];

        assert!(occasion_vibe_counts(&catalog, "").is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let vibes = [TestVibe("a"), TestVibe("b"), TestVibe("c"), TestVibe("d")];
        let catalog = vec![
            create_test_cocktail(&["c", "b"], &["occasion-solo"]),
            create_test_cocktail(&["d"], &["occasion-solo"]),
        ];

        let ranked = rank_vibes_by_occasion(&vibes, &catalog, "occasion-solo");

        assert_eq!(ids(&ranked), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_non_matching_never_interleave() {
        let vibes = [TestVibe("z"), TestVibe("y"), TestVibe("x")];
        let catalog = vec![
            create_test_cocktail(&["x"], &["occasion-solo"]),
            create_test_cocktail(&["x"], &["occasion-solo"]),
        ];

        let ranked = rank_vibes_by_occasion(&vibes, &catalog, "occasion-solo");

        assert_eq!(ids(&ranked), vec!["x", "z", "y"]);
    }
}
