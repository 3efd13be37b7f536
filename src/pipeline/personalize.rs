//! Preference tagging and recommendation aggregation.
//!
//! Matching is a literal, case-sensitive substring test on the caption text.
//! The filter is not idempotent: each run appends its matches again, so two
//! runs leave every list equal to one run's list repeated twice.

use crate::content::ContentItem;
use crate::error::{PreconditionError, Stage};
use std::collections::BTreeSet;

/// Append matching preferences to each item. Returns the number of matches
/// appended. Fails without touching any item if one lacks a caption.
pub fn personalize_content(
    items: &mut [ContentItem],
    preferences: &[String],
) -> Result<usize, PreconditionError> {
    if let Some(item_index) = items.iter().position(|i| i.caption.is_none()) {
        return Err(PreconditionError {
            stage: Stage::Personalize,
            item_index,
        });
    }

    let mut matched = 0;
    for item in items.iter_mut() {
        let Some(caption) = &item.caption else { continue };
        let hits: Vec<&String> = preferences
            .iter()
            .filter(|p| caption.text.contains(p.as_str()))
            .collect();
        for preference in hits {
            item.add_personalization(preference);
            matched += 1;
        }
    }
    Ok(matched)
}

/// Union of every item's matched preferences.
pub fn generate_recommendations(items: &[ContentItem]) -> BTreeSet<String> {
    items
        .iter()
        .flat_map(|item| item.personalization.iter().cloned())
        .collect()
}
