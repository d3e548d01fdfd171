//! Raw catalog records and their normalization into [`Item`] values.

use std::collections::HashMap;

use crate::state::Item;
use crate::util::extract_tier;

/// Dataset locale tag for English fields.
const EN_TAG: &str = "EN-US";
/// Dataset locale tag for Spanish fields.
const ES_TAG: &str = "ES-ES";

/// Identifiers starting with this prefix are dataset placeholders, not items.
pub const SENTINEL_PREFIX: &str = "@";

/// One raw record from the upstream item dump.
///
/// Only the fields the viewer consumes are modeled; everything else in the
/// dump is ignored by serde.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RawItem {
    /// Unique catalog identifier.
    #[serde(rename = "UniqueName", default)]
    pub unique_name: String,
    /// Category-hint variable, e.g. `@items_ore_desc`.
    #[serde(rename = "LocalizationDescriptionVariable", default)]
    pub description_variable: Option<String>,
    /// Locale tag -> display name.
    #[serde(rename = "LocalizedNames", default)]
    pub localized_names: Option<HashMap<String, String>>,
    /// Locale tag -> long description.
    #[serde(rename = "LocalizedDescriptions", default)]
    pub localized_descriptions: Option<HashMap<String, String>>,
}

/// What: Normalize one raw record into a compact [`Item`].
///
/// Inputs:
/// - `raw`: Raw record as deserialized from a catalog source.
///
/// Output:
/// - `Some(Item)` when the record carries a non-empty identifier and
///   localized name data and is not a sentinel entry; `None` otherwise.
///
/// Details:
/// - Missing per-locale strings become empty (the display layer falls back
///   across languages).
/// - The tier is derived from the identifier's fixed leading `T<d>_` position.
#[must_use]
pub fn normalize(raw: &RawItem) -> Option<Item> {
    if raw.unique_name.is_empty() || raw.unique_name.starts_with(SENTINEL_PREFIX) {
        return None;
    }
    let names = raw.localized_names.as_ref()?;
    let descriptions = raw.localized_descriptions.as_ref();
    let pick = |map: Option<&HashMap<String, String>>, tag: &str| -> String {
        map.and_then(|m| m.get(tag)).cloned().unwrap_or_default()
    };
    Some(Item {
        id: raw.unique_name.clone(),
        title_en: pick(Some(names), EN_TAG),
        title_es: pick(Some(names), ES_TAG),
        description_en: pick(descriptions, EN_TAG),
        description_es: pick(descriptions, ES_TAG),
        description_variable: raw
            .description_variable
            .as_ref()
            .filter(|v| !v.is_empty())
            .cloned(),
        tier: extract_tier(&raw.unique_name),
    })
}

/// What: Normalize a whole raw batch, dropping invalid records.
///
/// Inputs:
/// - `raw`: Raw records as received from a source.
///
/// Output:
/// - Normalized items in source order; the dropped count is logged.
#[must_use]
pub fn normalize_all(raw: &[RawItem]) -> Vec<Item> {
    let items: Vec<Item> = raw.iter().filter_map(normalize).collect();
    let dropped = raw.len() - items.len();
    if dropped > 0 {
        tracing::debug!(kept = items.len(), dropped, "normalized catalog batch");
    }
    items
}
