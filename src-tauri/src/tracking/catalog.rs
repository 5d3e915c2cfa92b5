//! Searchable list of built-in meal suggestions.

use std::sync::OnceLock;

use serde::Deserialize;

use super::types::MealSuggestion;

const DEFAULT_CATALOG: &str = include_str!("../../config/meal_catalog.toml");

static CATALOG: OnceLock<MealCatalog> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealCatalog {
    #[serde(rename = "meal", default)]
    pub meals: Vec<MealSuggestion>,
}

impl MealCatalog {
    /// Case-insensitive substring search on meal names. A blank query matches
    /// nothing.
    pub fn search(&self, query: &str) -> Vec<MealSuggestion> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.meals
            .iter()
            .filter(|meal| meal.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

/// The catalog compiled into the binary, parsed on first use.
pub fn default_catalog() -> &'static MealCatalog {
    CATALOG.get_or_init(|| {
        toml::from_str(DEFAULT_CATALOG).unwrap_or_else(|e| {
            tracing::error!("Embedded meal catalog is invalid: {}", e);
            MealCatalog::default()
        })
    })
}

pub fn search_suggestions(query: &str) -> Vec<MealSuggestion> {
    default_catalog().search(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_parses() {
        let catalog = default_catalog();
        assert!(!catalog.meals.is_empty());
        assert!(catalog.meals.iter().all(|m| m.calories > 0.0));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search_suggestions("CHICKEN");
        assert!(results.len() >= 2);
        assert!(results.iter().all(|m| m.name.to_lowercase().contains("chicken")));
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        assert!(search_suggestions("").is_empty());
        assert!(search_suggestions("   ").is_empty());
    }

    #[test]
    fn test_catalog_parsed_once() {
        assert!(std::ptr::eq(default_catalog(), default_catalog()));
    }

    #[test]
    fn test_no_match() {
        assert!(search_suggestions("zzz-not-a-meal").is_empty());
    }
}
