use serde::Serialize;

use crate::Catalog;

/// Id of the picker entry that clears the occasion selection
pub const ALL_OCCASIONS_ID: &str = "";

/// Entry in the occasion picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccasionOption {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// "All" first, then every catalog occasion in catalog order
pub fn occasion_options(catalog: &Catalog) -> Vec<OccasionOption> {
    let all = OccasionOption {
        id: ALL_OCCASIONS_ID.to_string(),
        label: "All".to_string(),
        description: "Show every occasion without filtering.".to_string(),
    };

    std::iter::once(all)
        .chain(catalog.occasions.iter().map(|occasion| OccasionOption {
            id: occasion.id.clone(),
            label: occasion.name.clone(),
            description: occasion.description.clone(),
        }))
        .collect()
}
