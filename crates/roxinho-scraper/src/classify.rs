//! Keyword classification of product names into storefront categories.

use roxinho_core::{Category, CATEGORY_KEYWORDS, DEFAULT_CATEGORY};

/// Buckets `name` into the first category whose keyword list has a
/// substring hit on the lower-cased name, or [`DEFAULT_CATEGORY`].
#[must_use]
pub fn classify(name: &str) -> Category {
    let lower = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(DEFAULT_CATEGORY, |(category, _)| *category)
}
