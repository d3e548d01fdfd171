//! Filter pipeline: search, declarative category rules, tier narrowing,
//! ordering, and the result cap.

use crate::state::{Category, FilterMode, Item, Lang};
use crate::util::fold_title;

/// Maximum number of results surfaced by the pipeline, regardless of input size.
pub const RESULT_CAP: usize = 200;

/// English weapon keywords, matched against id and title.
const WEAPONS_EN: &[&str] = &[
    "sword", "bow", "axe", "hammer", "dagger", "spear", "staff", "crossbow", "mace", "torch",
    "shield",
];
/// Spanish weapon keywords, matched against the title only.
const WEAPONS_ES: &[&str] = &[
    "espada", "arco", "hacha", "martillo", "daga", "lanza", "bastón", "ballesta", "maza",
    "antorcha", "escudo",
];
/// English armor keywords.
const ARMOR_EN: &[&str] = &[
    "helmet", "armor", "boots", "cape", "robe", "cowl", "sandals", "hood", "jacket", "shoes",
];
/// Spanish armor keywords.
const ARMOR_ES: &[&str] = &[
    "casco", "armadura", "botas", "capa", "túnica", "hábito", "sandalias", "capucha", "chaqueta",
    "zapatos",
];
/// Description-variable needles marking gatherables and refined materials.
const RESOURCE_VARS: &[&str] = &[
    "@items_ore_desc",
    "@items_wood_desc",
    "@items_stone_desc",
    "@items_fiber_desc",
    "@items_hide_desc",
    "@items_leather_desc",
    "@items_cloth_desc",
    "@items_metalbar_desc",
    "@items_planks_desc",
    "@items_stoneblock_desc",
    "@items_essence_desc",
];
/// Description-variable needles marking consumables, meals, and fish.
const FOOD_VARS: &[&str] = &[
    "@items_consumable_desc",
    "@items_meal_desc",
    "@items_fish_desc",
    "meal_",
    "fish_",
];

/// Item field a rule matches against.
#[derive(Clone, Copy, Debug)]
enum MatchField {
    /// Catalog identifier (lowercased).
    Id,
    /// Active-language display title (lowercased).
    Title,
    /// `description_variable` hint (lowercased; absent hint never matches).
    DescriptionVariable,
}

/// How needles are applied to the field text.
#[derive(Clone, Copy, Debug)]
enum MatchKind {
    /// Plain substring containment.
    Substring,
    /// Word-ish boundary: leading, trailing, or space-prefixed occurrence.
    Word,
}

/// One row of the category rule table.
struct CategoryRule {
    /// Field the needles probe.
    field: MatchField,
    /// Containment flavor.
    kind: MatchKind,
    /// Lowercased needle list.
    needles: &'static [&'static str],
}

/// Weapon rules: id/title keyword probes in both languages.
const WEAPON_RULES: [CategoryRule; 3] = [
    CategoryRule {
        field: MatchField::Id,
        kind: MatchKind::Substring,
        needles: WEAPONS_EN,
    },
    CategoryRule {
        field: MatchField::Title,
        kind: MatchKind::Word,
        needles: WEAPONS_EN,
    },
    CategoryRule {
        field: MatchField::Title,
        kind: MatchKind::Substring,
        needles: WEAPONS_ES,
    },
];
/// Armor rules, same shape as weapons.
const ARMOR_RULES: [CategoryRule; 3] = [
    CategoryRule {
        field: MatchField::Id,
        kind: MatchKind::Substring,
        needles: ARMOR_EN,
    },
    CategoryRule {
        field: MatchField::Title,
        kind: MatchKind::Word,
        needles: ARMOR_EN,
    },
    CategoryRule {
        field: MatchField::Title,
        kind: MatchKind::Substring,
        needles: ARMOR_ES,
    },
];
/// Resource rules: description-variable probe only.
const RESOURCE_RULES: [CategoryRule; 1] = [CategoryRule {
    field: MatchField::DescriptionVariable,
    kind: MatchKind::Substring,
    needles: RESOURCE_VARS,
}];
/// Food rules: description-variable probe only.
const FOOD_RULES: [CategoryRule; 1] = [CategoryRule {
    field: MatchField::DescriptionVariable,
    kind: MatchKind::Substring,
    needles: FOOD_VARS,
}];

/// Declarative rule table: a category matches when ANY of its rules matches.
const fn rules(category: Category) -> &'static [CategoryRule] {
    match category {
        Category::Weapons => &WEAPON_RULES,
        Category::Armor => &ARMOR_RULES,
        Category::Resources => &RESOURCE_RULES,
        Category::Food => &FOOD_RULES,
    }
}

/// What: Evaluate the rule table for one item.
///
/// Inputs:
/// - `item`: Candidate item.
/// - `lang`: Active language (selects which title the Title field reads).
/// - `category`: Category whose rules are evaluated.
///
/// Output:
/// - `true` when any rule's needle matches its field under its kind.
#[must_use]
pub fn category_matches(item: &Item, lang: Lang, category: Category) -> bool {
    let id = item.id.to_lowercase();
    let title = item.title(lang).to_lowercase();
    let desc_var = item
        .description_variable
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    rules(category).iter().any(|rule| {
        let text: &str = match rule.field {
            MatchField::Id => &id,
            MatchField::Title => &title,
            MatchField::DescriptionVariable => &desc_var,
        };
        if text.is_empty() {
            return false;
        }
        rule.needles.iter().any(|needle| match rule.kind {
            MatchKind::Substring => text.contains(needle),
            MatchKind::Word => {
                text.starts_with(needle)
                    || text.ends_with(needle)
                    || text.contains(&format!(" {needle}"))
            }
        })
    })
}

/// What: Run the full filter pipeline.
///
/// Inputs:
/// - `items`: Full normalized catalog.
/// - `lang`: Active language (search haystack and ordering key).
/// - `mode`: Search xor category xor none.
/// - `tiers`: Selected tier tags; empty means no tier narrowing.
///
/// Output:
/// - Matching items sorted ascending by locale-folded active title (id as a
///   deterministic tiebreak), capped at [`RESULT_CAP`].
#[must_use]
pub fn apply_filters(
    items: &[Item],
    lang: Lang,
    mode: &FilterMode,
    tiers: &[String],
) -> Vec<Item> {
    let query = match mode {
        FilterMode::Search(q) => q.trim().to_lowercase(),
        _ => String::new(),
    };
    let mut matched: Vec<&Item> = items
        .iter()
        .filter(|item| match mode {
            FilterMode::None => true,
            FilterMode::Search(_) => {
                query.is_empty()
                    || item.title(lang).to_lowercase().contains(&query)
                    || item.id.to_lowercase().contains(&query)
            }
            FilterMode::Category(category) => category_matches(item, lang, *category),
        })
        .filter(|item| {
            tiers.is_empty()
                || item
                    .tier
                    .as_ref()
                    .is_some_and(|t| tiers.iter().any(|sel| sel == t))
        })
        .collect();

    matched.sort_by_cached_key(|item| (fold_title(item.title(lang)), item.id.clone()));
    matched.into_iter().take(RESULT_CAP).cloned().collect()
}

/// What: Distinct tiers present in the catalog, ascending.
///
/// Inputs:
/// - `items`: Full normalized catalog.
///
/// Output:
/// - Sorted, deduplicated tier tags (single-digit tiers sort naturally).
#[must_use]
pub fn available_tiers(items: &[Item]) -> Vec<String> {
    let mut tiers: Vec<String> = items.iter().filter_map(|i| i.tier.clone()).collect();
    tiers.sort();
    tiers.dedup();
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title_en: &str, desc_var: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            title_en: title_en.to_string(),
            title_es: title_en.to_string(),
            description_en: String::new(),
            description_es: String::new(),
            description_variable: desc_var.map(str::to_string),
            tier: crate::util::extract_tier(id),
        }
    }

    /// What: Search is case-insensitive substring over title and id
    ///
    /// - Input: "sword" against Broadsword and Bow; id-only match
    /// - Output: Broadsword kept, Bow dropped; id hit kept
    #[test]
    fn filter_search_case_insensitive_substring() {
        let items = vec![
            item("T4_SWORD", "Broadsword", None),
            item("T4_2H_BOW", "Bow", None),
            item("T5_MAIN_RAPIER", "Glaive", None),
        ];
        let got = apply_filters(&items, Lang::En, &FilterMode::Search("sword".into()), &[]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].title_en, "Broadsword");

        let got = apply_filters(&items, Lang::En, &FilterMode::Search("RAPIER".into()), &[]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, "T5_MAIN_RAPIER");
    }

    /// What: Resources rule matches ore hint and excludes meal hint
    ///
    /// - Input: Items carrying @items_ore_desc and @items_meal_desc
    /// - Output: Ore kept under resources, meal kept under food only
    #[test]
    fn filter_category_description_variable_rules() {
        let ore = item("T4_ORE", "Ore", Some("@items_ore_desc"));
        let meal = item("T4_MEAL_SOUP", "Soup", Some("@items_meal_desc"));
        assert!(category_matches(&ore, Lang::En, Category::Resources));
        assert!(!category_matches(&meal, Lang::En, Category::Resources));
        assert!(category_matches(&meal, Lang::En, Category::Food));
        assert!(!category_matches(&ore, Lang::En, Category::Food));
    }

    /// What: Weapon rules hit via id substring, EN title word, and ES title
    ///
    /// - Input: Sword id with bland title; "War Hammer" title; "Espada" title
    /// - Output: All three classified as weapons; plain robe is not
    #[test]
    fn filter_category_weapon_rule_shapes() {
        let by_id = item("T4_SWORD", "Keeper Blade", None);
        let by_word = item("T4_X", "War Hammer", None);
        let by_es = item("T4_Y", "Espada ancha", None);
        let robe = item("T4_ROBE", "Scholar Robe", None);
        assert!(category_matches(&by_id, Lang::En, Category::Weapons));
        assert!(category_matches(&by_word, Lang::En, Category::Weapons));
        assert!(category_matches(&by_es, Lang::En, Category::Weapons));
        assert!(!category_matches(&robe, Lang::En, Category::Weapons));
        assert!(category_matches(&robe, Lang::En, Category::Armor));
    }

    /// What: Tier narrowing keeps only selected tiers
    ///
    /// - Input: T4 and T5 items with T4 selected
    /// - Output: Only T4 survives; tierless items are dropped too
    #[test]
    fn filter_tier_selection_narrows() {
        let items = vec![
            item("T4_SWORD", "Broadsword", None),
            item("T5_SWORD", "Claymore", None),
            item("UNIQUE_SWORD", "Relic Blade", None),
        ];
        let got = apply_filters(&items, Lang::En, &FilterMode::None, &["T4".to_string()]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, "T4_SWORD");
    }

    /// What: Ordering is locale-folded ascending and capped at 200
    ///
    /// - Input: 250 items with reverse-sorted accented titles
    /// - Output: 200 results, first title folds before the second
    #[test]
    fn filter_sort_folded_and_capped() {
        let mut items: Vec<Item> = (0..250)
            .map(|i| item(&format!("T4_ITEM_{i:03}"), &format!("Item {:03}", 249 - i), None))
            .collect();
        items.push(item("T4_ACC", "Árbol", None));
        items.push(item("T4_PLAIN", "Espada", None));
        let got = apply_filters(&items, Lang::En, &FilterMode::None, &[]);
        assert_eq!(got.len(), RESULT_CAP);
        let arbol = got.iter().position(|i| i.title_en == "Árbol");
        let espada = got.iter().position(|i| i.title_en == "Espada");
        assert!(arbol.expect("Árbol within cap") < espada.expect("Espada within cap"));
    }

    /// What: Distinct tier derivation is sorted and deduplicated
    ///
    /// - Input: Catalog with repeated and missing tiers
    /// - Output: Unique ascending tags
    #[test]
    fn filter_available_tiers_distinct_sorted() {
        let items = vec![
            item("T5_A", "a", None),
            item("T4_B", "b", None),
            item("T4_C", "c", None),
            item("UNIQUE_D", "d", None),
        ];
        assert_eq!(available_tiers(&items), vec!["T4".to_string(), "T5".to_string()]);
    }
}
