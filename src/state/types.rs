//! Core value types used by Mercado state.

/// Display language for catalog titles, descriptions, and UI strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    /// English (`EN-US` dataset locale).
    En,
    /// Spanish (`ES-ES` dataset locale).
    Es,
}

impl Lang {
    /// Return the settings-file tag for this language.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parse a language from its settings tag or the dataset locale tags.
    ///
    /// Inputs: `s` tag string (case-insensitive).
    ///
    /// Output: `Some(Lang)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" => Some(Self::En),
            "es" | "es-es" => Some(Self::Es),
            _ => None,
        }
    }

    /// The other supported language (used by the toggle key).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }
}

/// One normalized tradeable item from the catalog.
///
/// Compact enough to render in lists; the detail view reuses the same value.
/// Immutable after normalization and replaced wholesale on every fetch cycle.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// Unique, stable catalog identifier (e.g. `T4_2H_BOW`).
    pub id: String,
    /// English display title.
    pub title_en: String,
    /// Spanish display title.
    pub title_es: String,
    /// English long description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description_en: String,
    /// Spanish long description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description_es: String,
    /// Raw localization description variable, used as a category hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_variable: Option<String>,
    /// Tier tag `T1`..`T8` when the identifier carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

impl Item {
    /// Title in the active language, falling back to the other language and
    /// finally to the identifier (mirrors the card rendering rules).
    #[must_use]
    pub fn title(&self, lang: Lang) -> &str {
        let (primary, secondary) = match lang {
            Lang::En => (&self.title_en, &self.title_es),
            Lang::Es => (&self.title_es, &self.title_en),
        };
        if !primary.is_empty() {
            primary
        } else if !secondary.is_empty() {
            secondary
        } else {
            &self.id
        }
    }

    /// Description in the active language with cross-language fallback.
    #[must_use]
    pub fn description(&self, lang: Lang) -> &str {
        let (primary, secondary) = match lang {
            Lang::En => (&self.description_en, &self.description_es),
            Lang::Es => (&self.description_es, &self.description_en),
        };
        if primary.is_empty() { secondary } else { primary }
    }
}

/// Catalog category selectable from the header menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Melee and ranged weapons plus shields.
    Weapons,
    /// Head/body/feet equipment and capes.
    Armor,
    /// Gatherables and refined materials.
    Resources,
    /// Consumables, meals, and fish.
    Food,
}

impl Category {
    /// All categories in header-menu order.
    pub const ALL: [Self; 4] = [Self::Weapons, Self::Armor, Self::Resources, Self::Food];

    /// i18n key fragment for this category (`header.*` / `categories.*_title`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weapons => "weapons",
            Self::Armor => "armor",
            Self::Resources => "resources",
            Self::Food => "food",
        }
    }
}

/// Active catalog filter.
///
/// Search and category selection are mutually exclusive by construction:
/// setting one variant replaces the other, so the UI-level convention from
/// the filter panel is a type-level invariant here.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// No text or category filter; tiers may still narrow the list.
    #[default]
    None,
    /// Case-insensitive substring search over active-language title and id.
    Search(String),
    /// Keyword-table category filter.
    Category(Category),
}

/// Time range selectable in the detail view's price chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRange {
    /// Last 24 hours, one bucket per hour.
    Day,
    /// Last week, 168 hourly buckets.
    Week,
}

impl TimeRange {
    /// The `time-scale` query value (hours) for the market API.
    #[must_use]
    pub const fn hours(self) -> u32 {
        match self {
            Self::Day => 24,
            Self::Week => 168,
        }
    }

    /// i18n key for the selector label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Day => "detail.range_24h",
            Self::Week => "detail.range_week",
        }
    }

    /// The other range (used by the toggle key).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Week,
            Self::Week => Self::Day,
        }
    }
}

/// Consolidated market price series for one (item, location, range) query.
///
/// Parallel arrays indexed by time bucket; replaced wholesale per query,
/// never merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSeries {
    /// Bucket timestamps formatted `DD/MM/YYYY HH:MM`.
    pub timestamps: Vec<String>,
    /// Average sell price per bucket.
    pub prices_avg: Vec<f64>,
    /// Traded item count per bucket.
    pub item_counts: Vec<u64>,
}

impl PriceSeries {
    /// `true` when the series holds no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices_avg.is_empty()
    }
}

/// Which catalog-view pane currently has keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// Top search input.
    Search,
    /// Center results list.
    Results,
    /// Left tier filter panel.
    Tiers,
}

/// Top-level view the UI is rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Paginated catalog listing (default).
    Catalog,
    /// Per-item detail view with the price chart.
    Detail,
}

/// Message sent by the catalog worker once loading finishes.
#[derive(Clone, Debug)]
pub struct CatalogUpdate {
    /// Normalized items (empty on terminal failure).
    pub items: Vec<Item>,
    /// `true` when the items came from the cache envelope.
    pub from_cache: bool,
    /// Terminal error description when every source was exhausted.
    pub error: Option<String>,
}

/// Price-history query sent to the market worker.
#[derive(Clone, Debug)]
pub struct PriceRequest {
    /// Monotonic identifier used to drop stale responses.
    pub seq: u64,
    /// Catalog id of the item being charted.
    pub item_id: String,
    /// Selected chart range.
    pub range: TimeRange,
    /// Optional trading location; `None` queries every market.
    pub location: Option<String>,
}

/// Response corresponding to a prior [`PriceRequest`].
#[derive(Clone, Debug)]
pub struct PriceResponse {
    /// Echoed identifier from the originating request.
    pub seq: u64,
    /// Consolidated series on success (may be empty).
    pub series: Option<PriceSeries>,
    /// Human-readable error on fetch failure.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Lang tag mapping roundtrip and dataset-locale aliases
    ///
    /// - Input: Known tags, dataset locales, unknown tag
    /// - Output: Correct variants; None for unknown
    #[test]
    fn state_lang_tag_roundtrip_and_aliases() {
        assert_eq!(Lang::En.as_tag(), "en");
        assert_eq!(Lang::from_tag("en"), Some(Lang::En));
        assert_eq!(Lang::from_tag("ES-ES"), Some(Lang::Es));
        assert_eq!(Lang::from_tag("EN-US"), Some(Lang::En));
        assert_eq!(Lang::from_tag("fr"), None);
        assert_eq!(Lang::Es.toggled(), Lang::En);
    }

    /// What: Active-language title falls back across languages then to id
    ///
    /// - Input: Item with only ES title; item with neither
    /// - Output: ES title served for En; id served when both empty
    #[test]
    fn state_item_title_fallback_chain() {
        let mut it = Item {
            id: "T4_2H_BOW".into(),
            title_en: String::new(),
            title_es: "Arco".into(),
            description_en: String::new(),
            description_es: String::new(),
            description_variable: None,
            tier: Some("T4".into()),
        };
        assert_eq!(it.title(Lang::En), "Arco");
        it.title_es.clear();
        assert_eq!(it.title(Lang::Es), "T4_2H_BOW");
    }

    /// What: TimeRange exposes the market API bucket counts
    ///
    /// - Input: Both ranges
    /// - Output: 24 and 168 hours; toggle flips between them
    #[test]
    fn state_time_range_hours_and_toggle() {
        assert_eq!(TimeRange::Day.hours(), 24);
        assert_eq!(TimeRange::Week.hours(), 168);
        assert_eq!(TimeRange::Day.toggled(), TimeRange::Week);
    }
}
