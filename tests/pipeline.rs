//! End-to-end pipeline tests: raw records through normalization, filtering,
//! sorting, and pagination via the public library API.

use mercado::catalog::{RawItem, normalize_all};
use mercado::logic::{PAGE_SIZE, RESULT_CAP, apply_filters, page_count, page_slice};
use mercado::state::{FilterMode, Lang};

/// Build the raw JSON for one record; `valid` controls whether it keeps its
/// localized names.
fn raw_record(id: &str, title_en: &str, valid: bool) -> String {
    if valid {
        format!(
            r#"{{"UniqueName":"{id}","LocalizedNames":{{"EN-US":"{title_en}","ES-ES":"{title_en}"}},"LocalizedDescriptions":{{"EN-US":"d","ES-ES":"d"}}}}"#
        )
    } else {
        format!(r#"{{"UniqueName":"{id}"}}"#)
    }
}

/// What: 1000 raw records with 900 valid normalize to exactly 900 items
///
/// - Input: JSON array mixing valid records with name-less ones
/// - Output: Normalizer keeps the valid subset only
#[test]
fn pipeline_normalizes_valid_subset_of_raw_batch() {
    let mut records: Vec<String> = (0..900)
        .map(|i| raw_record(&format!("T5_VALID_{i:03}"), &format!("Valid {i:03}"), true))
        .collect();
    records.extend((0..100).map(|i| raw_record(&format!("T5_BROKEN_{i:03}"), "", false)));
    let body = format!("[{}]", records.join(","));

    let raw: Vec<RawItem> = serde_json::from_str(&body).expect("raw batch parses");
    assert_eq!(raw.len(), 1000);
    let items = normalize_all(&raw);
    assert_eq!(items.len(), 900);
    assert!(items.iter().all(|i| i.tier.as_deref() == Some("T5")));
}

/// What: Searching "T4" with 12 matches fills page one, sorted by title
///
/// - Input: Catalog of 912 items, 12 of them tier T4
/// - Output: 12 results on page 1, ascending by active-language title
#[test]
fn pipeline_search_t4_first_page_sorted() {
    let mut records: Vec<String> = (0..900)
        .map(|i| raw_record(&format!("T5_FILLER_{i:03}"), &format!("Filler {i:03}"), true))
        .collect();
    // Reverse-alphabetical titles so the sort has to do real work.
    for i in 0..12 {
        records.push(raw_record(
            &format!("T4_MATCH_{i:02}"),
            &format!("Weapon {:02}", 11 - i),
            true,
        ));
    }
    let body = format!("[{}]", records.join(","));
    let raw: Vec<RawItem> = serde_json::from_str(&body).expect("raw batch parses");
    let items = normalize_all(&raw);
    assert_eq!(items.len(), 912);

    let results = apply_filters(&items, Lang::En, &FilterMode::Search("T4".into()), &[]);
    assert_eq!(results.len(), 12);

    let first_page = page_slice(&results, 0);
    assert_eq!(first_page.len(), 12);
    assert_eq!(page_count(results.len()), 1);
    let titles: Vec<&str> = first_page.iter().map(|i| i.title_en.as_str()).collect();
    let mut sorted = titles.clone();
    sorted.sort_unstable();
    assert_eq!(titles, sorted);
}

/// What: The cap and page size partition large result sets predictably
///
/// - Input: 500 matching items
/// - Output: 200 capped results in 7 pages of 30/…/20, no gaps or overlaps
#[test]
fn pipeline_cap_and_page_partition() {
    let records: Vec<String> = (0..500)
        .map(|i| raw_record(&format!("T6_BULK_{i:03}"), &format!("Bulk {i:03}"), true))
        .collect();
    let body = format!("[{}]", records.join(","));
    let raw: Vec<RawItem> = serde_json::from_str(&body).expect("raw batch parses");
    let items = normalize_all(&raw);

    let results = apply_filters(&items, Lang::En, &FilterMode::None, &[]);
    assert_eq!(results.len(), RESULT_CAP);

    let pages = page_count(results.len());
    assert_eq!(pages, RESULT_CAP.div_ceil(PAGE_SIZE));
    let mut seen = Vec::new();
    for p in 0..pages {
        seen.extend(page_slice(&results, p).iter().map(|i| i.id.clone()));
    }
    let ids: Vec<String> = results.iter().map(|i| i.id.clone()).collect();
    assert_eq!(seen, ids);
}
