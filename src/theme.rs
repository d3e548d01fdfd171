//! Fixed color palette for the TUI.
//!
//! A single built-in palette keeps rendering deterministic across terminals;
//! the field names follow the usual dark-pastel scheme so widgets read as
//! `th.text`, `th.accent`, etc.

use std::sync::LazyLock;

use ratatui::style::Color;

/// Color roles used by the UI layer.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Default background.
    pub base: Color,
    /// Slightly raised surface (panels, headers).
    pub surface: Color,
    /// Primary foreground text.
    pub text: Color,
    /// De-emphasized text (hints, ids, footers).
    pub subtext: Color,
    /// Brand accent (titles, selection).
    pub accent: Color,
    /// Positive/affirmative marker.
    pub green: Color,
    /// Warning marker.
    pub yellow: Color,
    /// Error marker.
    pub red: Color,
    /// Informational marker (links, chart axes).
    pub sapphire: Color,
}

static THEME: LazyLock<Theme> = LazyLock::new(|| Theme {
    base: Color::Rgb(24, 24, 37),
    surface: Color::Rgb(30, 30, 46),
    text: Color::Rgb(205, 214, 244),
    subtext: Color::Rgb(147, 153, 178),
    accent: Color::Rgb(210, 105, 30),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    sapphire: Color::Rgb(116, 199, 236),
});

/// Process-wide palette accessor.
#[must_use]
pub fn theme() -> &'static Theme {
    &THEME
}

/// What: Accent color for a trading location's chart series and legend.
///
/// Inputs:
/// - `location`: Market city name, or `None` for the all-markets query.
///
/// Output:
/// - Fixed per-city color; the neutral text color when no city is selected
///   or the name is unknown.
#[must_use]
pub fn location_color(location: Option<&str>) -> Color {
    match location {
        Some("Bridgewatch") => Color::Rgb(255, 215, 0),
        Some("Martlock") => Color::Rgb(135, 206, 235),
        Some("Thetford") => Color::Rgb(138, 43, 226),
        Some("Fort Sterling") => Color::Rgb(169, 169, 169),
        Some("Lymhurst") => Color::Rgb(50, 205, 50),
        Some("Caerleon") => Color::Rgb(255, 0, 0),
        Some("Black Market") => Color::Rgb(105, 105, 105),
        Some("Brecilien") => Color::Rgb(255, 105, 180),
        _ => theme().text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Every offered location has a dedicated chart color
    ///
    /// - Input: The fixed location ring
    /// - Output: No location falls back to the neutral text color
    #[test]
    fn theme_every_location_has_a_color() {
        for loc in crate::market::LOCATIONS {
            assert_ne!(location_color(Some(loc)), theme().text, "missing color for {loc}");
        }
        assert_eq!(location_color(None), theme().text);
        assert_eq!(location_color(Some("Atlantis")), theme().text);
    }
}
