//! Static translation tables and lookup utilities.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::state::Lang;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<&'static str, &'static str>;

/// English table (also the fallback for every other language).
const EN: &[(&str, &str)] = &[
    ("home.search_results", "Search results"),
    ("home.clear_filters", "Clear filters"),
    ("home.albion_items", "Albion Online Items"),
    ("home.showing_items", "Showing {} items"),
    ("home.filtered_from", "(filtered from {} total)"),
    ("home.of_total", "of {} total"),
    ("home.sorted_capped", "Sorted alphabetically · maximum 200 results"),
    ("home.loading", "Loading items..."),
    ("home.page", "Page {} / {}"),
    ("categories.weapons_title", "Weapons"),
    ("categories.armor_title", "Armor"),
    ("categories.resources_title", "Resources"),
    ("categories.food_title", "Food"),
    ("header.weapons", "Weapons"),
    ("header.armor", "Armor"),
    ("header.resources", "Resources"),
    ("header.food", "Food"),
    ("header.search_placeholder", "Search items..."),
    ("header.language", "Language"),
    ("filter.filters", "Filters"),
    ("filter.results", "Results"),
    ("filter.of", "of"),
    ("filter.select_all", "Select All"),
    ("filter.clear_all", "Clear All"),
    ("filter.tiers", "Tiers"),
    ("card.description", "Description"),
    ("empty.no_items_found", "No items found"),
    ("empty.no_items_available", "No items available"),
    ("empty.try_other_terms", "Try other search terms or use the menu categories"),
    ("empty.try_other_category", "Try another category or perform a specific search"),
    ("empty.items_loading", "Items are loading... Please wait a moment"),
    ("detail.tier", "Tier"),
    ("detail.id", "ID"),
    ("detail.image", "Image"),
    ("detail.range", "Range"),
    ("detail.location", "Location"),
    ("detail.all_locations", "All markets"),
    ("detail.price_trends", "Price Trends"),
    ("detail.avg_price", "Average price"),
    ("detail.no_data", "No price data for this selection"),
    ("detail.loading", "Fetching market data..."),
    ("detail.range_24h", "Last 24 hours"),
    ("detail.range_week", "Last week"),
    ("toast.no_price_data", "No data found for this query; the market service may be unavailable."),
    ("toast.catalog_from_cache", "Catalog served from local cache"),
    ("toast.language_changed", "Language switched to {}"),
    ("error.catalog_unavailable", "Item catalog unavailable: {}"),
    ("hints.catalog", "Tab focus · 1-4 category · / search · Enter open · ←/→ page · l language · q quit"),
    ("hints.tiers", "Space toggle · a select all · c clear all"),
    ("hints.detail", "r range · ←/→ location · Esc back"),
];

/// Spanish table.
const ES: &[(&str, &str)] = &[
    ("home.search_results", "Resultados de búsqueda"),
    ("home.clear_filters", "Limpiar filtros"),
    ("home.albion_items", "Items de Albion Online"),
    ("home.showing_items", "Mostrando {} items"),
    ("home.filtered_from", "(filtrados de {} totales)"),
    ("home.of_total", "de {} totales"),
    ("home.sorted_capped", "Ordenados alfabéticamente · máximo 200 resultados"),
    ("home.loading", "Cargando items..."),
    ("home.page", "Página {} / {}"),
    ("categories.weapons_title", "Armas"),
    ("categories.armor_title", "Armaduras"),
    ("categories.resources_title", "Recursos"),
    ("categories.food_title", "Comida"),
    ("header.weapons", "Armas"),
    ("header.armor", "Armaduras"),
    ("header.resources", "Recursos"),
    ("header.food", "Comida"),
    ("header.search_placeholder", "Buscar items..."),
    ("header.language", "Idioma"),
    ("filter.filters", "Filtros"),
    ("filter.results", "Resultados"),
    ("filter.of", "de"),
    ("filter.select_all", "Seleccionar Todo"),
    ("filter.clear_all", "Limpiar Todo"),
    ("filter.tiers", "Niveles"),
    ("card.description", "Descripción"),
    ("empty.no_items_found", "No se encontraron items"),
    ("empty.no_items_available", "No hay items disponibles"),
    ("empty.try_other_terms", "Intenta con otros términos de búsqueda o utiliza las categorías del menú"),
    ("empty.try_other_category", "Intenta con otra categoría o realiza una búsqueda específica"),
    ("empty.items_loading", "Los items se están cargando... Por favor espera un momento"),
    ("detail.tier", "Nivel"),
    ("detail.id", "ID"),
    ("detail.image", "Imagen"),
    ("detail.range", "Rango"),
    ("detail.location", "Localización"),
    ("detail.all_locations", "Todos los mercados"),
    ("detail.price_trends", "Tendencias de Precios"),
    ("detail.avg_price", "Precio promedio"),
    ("detail.no_data", "Sin datos de precios para esta selección"),
    ("detail.loading", "Consultando datos del mercado..."),
    ("detail.range_24h", "Últimas 24 horas"),
    ("detail.range_week", "Última semana"),
    ("toast.no_price_data", "No se encontraron datos para la búsqueda; el servicio de mercado puede no estar disponible."),
    ("toast.catalog_from_cache", "Catálogo servido desde la caché local"),
    ("toast.language_changed", "Idioma cambiado a {}"),
    ("error.catalog_unavailable", "Catálogo de items no disponible: {}"),
    ("hints.catalog", "Tab foco · 1-4 categoría · / buscar · Enter abrir · ←/→ página · l idioma · q salir"),
    ("hints.tiers", "Espacio alternar · a seleccionar todo · c limpiar todo"),
    ("hints.detail", "r rango · ←/→ localización · Esc volver"),
];

static EN_MAP: LazyLock<TranslationMap> = LazyLock::new(|| EN.iter().copied().collect());
static ES_MAP: LazyLock<TranslationMap> = LazyLock::new(|| ES.iter().copied().collect());

/// Table for the given language.
#[must_use]
pub fn table(lang: Lang) -> &'static TranslationMap {
    match lang {
        Lang::En => &EN_MAP,
        Lang::Es => &ES_MAP,
    }
}

/// What: Look up a translation in one translation map.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<&str>` containing the translation or None if not found
#[must_use]
pub fn translate(key: &str, translations: &'static TranslationMap) -> Option<&'static str> {
    translations.get(key).copied()
}

/// What: Look up a translation with fallback to English.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Primary translation map
/// - `fallback_translations`: Fallback translation map (English)
///
/// Output:
/// - Translated string (from primary or fallback, or the key itself if both
///   miss)
///
/// Details:
/// - Missing keys log at debug level only, to keep the log readable.
#[must_use]
pub fn translate_with_fallback(
    key: &str,
    translations: &'static TranslationMap,
    fallback_translations: &'static TranslationMap,
) -> String {
    if let Some(translation) = translations.get(key) {
        return (*translation).to_string();
    }
    if let Some(translation) = fallback_translations.get(key) {
        tracing::debug!(key, "translation missing in primary locale, using fallback");
        return (*translation).to_string();
    }
    tracing::debug!(key, "missing translation key, returning key as-is");
    key.to_string()
}
