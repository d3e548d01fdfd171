//! Market data: per-item price history from the Albion Online Data project.
//!
//! One request per (item, range, location) query, no caching and no retry; a
//! failed or empty cycle is surfaced as a notice and requires a fresh user
//! action. The event loop pairs each request with a monotonically increasing
//! sequence number so a slow response can never overwrite a newer query.

use crate::net;
use crate::state::{PriceSeries, TimeRange};
use crate::util::percent_encode;

/// Market-data API host (west server).
pub const MARKET_HOST: &str = "https://west.albion-online-data.com";

/// Trading locations offered by the detail view, in ring order.
pub const LOCATIONS: [&str; 8] = [
    "Bridgewatch",
    "Martlock",
    "Thetford",
    "Fort Sterling",
    "Lymhurst",
    "Caerleon",
    "Black Market",
    "Brecilien",
];

/// One per-location entry of the history response.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct HistoryEntry {
    /// Market location name.
    #[serde(default)]
    pub location: String,
    /// Echoed item id.
    #[serde(default)]
    pub item_id: String,
    /// Item quality bucket.
    #[serde(default)]
    pub quality: u8,
    /// Parallel-array payload for this location.
    pub data: HistoryData,
}

/// Parallel arrays indexed by time bucket.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct HistoryData {
    /// Bucket timestamps as reported by the API (ISO-8601, no zone).
    #[serde(default)]
    pub timestamps: Vec<String>,
    /// Average sell price per bucket.
    #[serde(default)]
    pub prices_avg: Vec<f64>,
    /// Traded item count per bucket.
    #[serde(default)]
    pub item_count: Vec<u64>,
}

/// What: Build the history endpoint URL for one query.
///
/// Inputs:
/// - `item_id`: Catalog item identifier.
/// - `range`: Chart range (maps to the `time-scale` hour count).
/// - `location`: Optional market restriction.
///
/// Output:
/// - Absolute URL with `time-scale` and optional percent-encoded `locations`
///   query parameters.
#[must_use]
pub fn history_url(item_id: &str, range: TimeRange, location: Option<&str>) -> String {
    let mut url = format!(
        "{MARKET_HOST}/api/v2/stats/history/{item_id}?time-scale={}",
        range.hours()
    );
    if let Some(loc) = location {
        url.push_str("&locations=");
        url.push_str(&percent_encode(loc));
    }
    url
}

/// What: Consolidate per-location entries into one display series.
///
/// Inputs:
/// - `entries`: Response entries in API order.
///
/// Output:
/// - Flat-mapped [`PriceSeries`] with timestamps reformatted for display.
#[must_use]
pub fn consolidate(entries: &[HistoryEntry]) -> PriceSeries {
    let mut series = PriceSeries::default();
    for entry in entries {
        series
            .timestamps
            .extend(entry.data.timestamps.iter().map(|t| format_timestamp(t)));
        series.prices_avg.extend(entry.data.prices_avg.iter().copied());
        series.item_counts.extend(entry.data.item_count.iter().copied());
    }
    series
}

/// What: Reformat an API bucket timestamp for display.
///
/// Inputs:
/// - `raw`: ISO-8601 timestamp without zone, e.g. `2024-05-01T12:00:00`.
///
/// Output:
/// - `DD/MM/YYYY HH:MM`; unparseable input passes through unchanged.
fn format_timestamp(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_or_else(|_| raw.to_string(), |dt| dt.format("%d/%m/%Y %H:%M").to_string())
}

/// What: Fetch the consolidated price history for one query.
///
/// Inputs:
/// - `item_id`: Catalog item identifier.
/// - `range`: Chart range.
/// - `location`: Optional market restriction (`None` queries every market).
///
/// Output:
/// - `Ok(PriceSeries)` (possibly empty — the caller decides whether to raise
///   the empty-result notice); `Err` on network or parse failure.
///
/// # Errors
/// - Transport failures, non-success statuses, or malformed JSON bodies.
pub async fn fetch_history(
    item_id: &str,
    range: TimeRange,
    location: Option<&str>,
) -> net::Result<PriceSeries> {
    let url = history_url(item_id, range, location);
    let entries = net::get_json::<Vec<HistoryEntry>>(&url).await?;
    tracing::info!(
        item_id,
        hours = range.hours(),
        location = location.unwrap_or("all"),
        entries = entries.len(),
        "price history fetched"
    );
    Ok(consolidate(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: URL composition covers range hours and optional location
    ///
    /// - Input: 24h without location; 1week with a spaced city name
    /// - Output: time-scale 24/168; location percent-encoded
    #[test]
    fn market_history_url_composition() {
        assert_eq!(
            history_url("T4_2H_BOW", TimeRange::Day, None),
            "https://west.albion-online-data.com/api/v2/stats/history/T4_2H_BOW?time-scale=24"
        );
        assert_eq!(
            history_url("T4_2H_BOW", TimeRange::Week, Some("Fort Sterling")),
            "https://west.albion-online-data.com/api/v2/stats/history/T4_2H_BOW?time-scale=168&locations=Fort%20Sterling"
        );
    }

    /// What: Consolidation flat-maps locations and reformats timestamps
    ///
    /// - Input: Two entries with one bucket each
    /// - Output: Parallel arrays of length two in entry order, DD/MM/YYYY HH:MM
    #[test]
    fn market_consolidate_flat_maps_entries() {
        let body = r#"[
            {"location":"Martlock","item_id":"T4_2H_BOW","quality":1,
             "data":{"timestamps":["2024-05-01T12:00:00"],"prices_avg":[1200.5],"item_count":[17]}},
            {"location":"Lymhurst","item_id":"T4_2H_BOW","quality":1,
             "data":{"timestamps":["2024-05-01T13:00:00"],"prices_avg":[1180.0],"item_count":[9]}}
        ]"#;
        let entries: Vec<HistoryEntry> = serde_json::from_str(body).expect("fixture parses");
        let series = consolidate(&entries);
        assert_eq!(series.timestamps, vec!["01/05/2024 12:00", "01/05/2024 13:00"]);
        assert_eq!(series.prices_avg, vec![1200.5, 1180.0]);
        assert_eq!(series.item_counts, vec![17, 9]);
        assert!(!series.is_empty());
    }

    /// What: Empty response consolidates to an empty series
    ///
    /// - Input: Empty entry list
    /// - Output: is_empty() true (drives the no-data notice path)
    #[test]
    fn market_consolidate_empty_response() {
        assert!(consolidate(&[]).is_empty());
    }

    /// What: Unparseable timestamps pass through unchanged
    ///
    /// - Input: Garbage timestamp string
    /// - Output: Same string in the series
    #[test]
    fn market_format_timestamp_passthrough() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(format_timestamp("2024-12-31T23:00:00"), "31/12/2024 23:00");
    }
}
