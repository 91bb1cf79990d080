//! Referential integrity between cocktails and the reference tables
//!
//! The discovery engine tolerates dangling ids (they simply never match), so
//! these checks run when a catalog is authored or loaded, not at filter time.

use std::collections::HashSet;

use crate::Catalog;

/// One message per dangling reference, in catalog order
pub fn integrity_errors(catalog: &Catalog) -> Vec<String> {
    let vibe_ids = id_set(catalog.vibes.iter().map(|v| v.id.as_str()));
    let occasion_ids = id_set(catalog.occasions.iter().map(|o| o.id.as_str()));
    let difficulty_ids = id_set(catalog.difficulties.iter().map(|d| d.id.as_str()));
    let alcohol_ids = id_set(catalog.alcohol_levels.iter().map(|a| a.id.as_str()));

    catalog
        .cocktails
        .iter()
        .flat_map(|cocktail| {
            let missing_vibes = missing(&cocktail.vibe_ids, &vibe_ids)
                .map(|id| format_missing("vibe", &cocktail.id, id));
            let missing_occasions = missing(&cocktail.occasion_ids, &occasion_ids)
                .map(|id| format_missing("occasion", &cocktail.id, id));
            let missing_difficulty =
                missing(std::slice::from_ref(&cocktail.difficulty_id), &difficulty_ids)
                    .map(|id| format_missing("difficulty", &cocktail.id, id));
            let missing_alcohol =
                missing(std::slice::from_ref(&cocktail.alcohol_level_id), &alcohol_ids)
                    .map(|id| format_missing("alcohol level", &cocktail.id, id));

            missing_vibes
                .chain(missing_occasions)
                .chain(missing_difficulty)
                .chain(missing_alcohol)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Ids that appear more than once within the same table
pub fn duplicate_id_errors(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();
    errors.extend(duplicates("vibe", catalog.vibes.iter().map(|v| v.id.as_str())));
    errors.extend(duplicates(
        "occasion",
        catalog.occasions.iter().map(|o| o.id.as_str()),
    ));
    errors.extend(duplicates(
        "difficulty",
        catalog.difficulties.iter().map(|d| d.id.as_str()),
    ));
    errors.extend(duplicates(
        "alcohol level",
        catalog.alcohol_levels.iter().map(|a| a.id.as_str()),
    ));
    errors.extend(duplicates(
        "cocktail",
        catalog.cocktails.iter().map(|c| c.id.as_str()),
    ));
    errors
}

fn id_set<'a>(ids: impl Iterator<Item = &'a str>) -> HashSet<&'a str> {
    ids.collect()
}

fn missing<'a>(
    ids: &'a [String],
    allowed: &'a HashSet<&str>,
) -> impl Iterator<Item = &'a str> + 'a {
    ids.iter()
        .map(String::as_str)
        .filter(move |id| !allowed.contains(id))
}

fn format_missing(label: &str, cocktail_id: &str, id: &str) -> String {
    format!("Cocktail {} missing {} {}", cocktail_id, label, id)
}

fn duplicates<'a>(label: &str, ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.filter(|id| !seen.insert(*id) && reported.insert(*id))
        .map(|id| format!("Duplicate {} id {}", label, id))
        .collect()
}
