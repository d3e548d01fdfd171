//! Small utility helpers for encoding, identifier parsing, and display
//! truncation.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free to keep hot paths fast. They are used by networking,
//! catalog, and UI code.

use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Extract the tier tag (`T1`..`T8`) from a catalog identifier.
///
/// Inputs:
/// - `id`: Item identifier, e.g. `T4_2H_BOW`.
///
/// Output:
/// - `Some("T<d>")` when the identifier starts with `T<d>_` where `d` is 1..=8;
///   `None` otherwise.
///
/// Details:
/// - The tier is anchored at the start of the identifier; a `T<d>` occurring
///   later in the id (e.g. enchantment suffixes) is not a tier.
#[must_use]
pub fn extract_tier(id: &str) -> Option<String> {
    let bytes = id.as_bytes();
    if bytes.len() >= 3
        && bytes[0] == b'T'
        && (b'1'..=b'8').contains(&bytes[1])
        && bytes[2] == b'_'
    {
        return Some(id[..2].to_string());
    }
    None
}

/// What: Produce a case- and accent-folded key for title ordering.
///
/// Inputs:
/// - `title`: Display title in any supported language.
///
/// Output:
/// - Lowercased string with common Spanish diacritics mapped to their base
///   letters, suitable for byte-wise ascending comparison.
///
/// Details:
/// - Covers the accented vowels and `ñ`/`ü` that occur in the ES-ES dataset;
///   anything else passes through `char::to_lowercase` unchanged.
#[must_use]
pub fn fold_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        match c {
            'á' | 'à' | 'ä' | 'â' => out.push('a'),
            'é' | 'è' | 'ë' | 'ê' => out.push('e'),
            'í' | 'ì' | 'ï' | 'î' => out.push('i'),
            'ó' | 'ò' | 'ö' | 'ô' => out.push('o'),
            'ú' | 'ù' | 'ü' | 'û' => out.push('u'),
            'ñ' => out.push('n'),
            _ => out.push(c),
        }
    }
    out
}

/// What: Truncate a string to a maximum display width, appending `…` when cut.
///
/// Inputs:
/// - `text`: Source string.
/// - `max_width`: Maximum terminal cell width of the result.
///
/// Output:
/// - The original string when it fits; otherwise a prefix plus ellipsis whose
///   total width does not exceed `max_width`.
#[must_use]
pub fn ellipsize(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Serializes tests that mutate process-global state such as environment
/// variables; unit tests run in parallel within one binary.
#[cfg(test)]
static TEST_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Acquire the process-global test lock (poisoning is ignored).
#[cfg(test)]
pub(crate) fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    TEST_ENV_MUTEX.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: RFC 3986 unreserved characters survive; others are escaped
    ///
    /// - Input: Mixed unreserved/reserved characters
    /// - Output: Unreserved verbatim, space as %20, reserved as %XX
    #[test]
    fn util_percent_encode_escapes_reserved() {
        assert_eq!(percent_encode("Fort Sterling"), "Fort%20Sterling");
        assert_eq!(percent_encode("a-z_0.9~"), "a-z_0.9~");
        assert_eq!(percent_encode("a&b"), "a%26b");
    }

    /// What: Tier extraction is anchored and bounded to T1..T8
    ///
    /// - Input: Leading-tier ids, tierless ids, out-of-range digit
    /// - Output: Exactly T<d> for the leading pattern; None otherwise
    #[test]
    fn util_extract_tier_anchored_range() {
        assert_eq!(extract_tier("T4_2H_BOW"), Some("T4".to_string()));
        assert_eq!(extract_tier("T8_ORE"), Some("T8".to_string()));
        assert_eq!(extract_tier("UNIQUE_HIDEOUT"), None);
        assert_eq!(extract_tier("T9_FAKE"), None);
        assert_eq!(extract_tier("XT4_THING"), None);
        assert_eq!(extract_tier("T4"), None);
    }

    /// What: Title folding lowercases and strips Spanish diacritics
    ///
    /// - Input: Accented ES title and mixed-case EN title
    /// - Output: Folded keys compare in expected order
    #[test]
    fn util_fold_title_orders_accented_titles() {
        assert_eq!(fold_title("Bastón"), "baston");
        assert_eq!(fold_title("Espada Ancha"), "espada ancha");
        assert!(fold_title("Árbol") < fold_title("Espada"));
    }

    /// What: Ellipsize respects the display-width limit
    ///
    /// - Input: String wider than the limit
    /// - Output: Result ends with … and stays within the limit
    #[test]
    fn util_ellipsize_caps_width() {
        let cut = ellipsize("Adept's Broadsword", 10);
        assert!(cut.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(cut.as_str()) <= 10);
        assert_eq!(ellipsize("Bow", 10), "Bow");
    }
}
