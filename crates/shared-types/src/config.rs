use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Category, CategoryOption, ConfigError};

fn default_placeholder() -> String {
    "Search...".to_string()
}

/// Presentation settings for the search/category filter.
///
/// Every field has a default, so a missing or partial `[filter]` table
/// reproduces the stock control: `Search...` placeholder, `All` selected,
/// and the four built-in categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub default_category: Category,
    #[serde(default = "CategoryOption::defaults")]
    pub categories: Vec<CategoryOption>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            default_category: Category::default(),
            categories: CategoryOption::defaults(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub filter: FilterConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_stock_filter() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.filter.placeholder, "Search...");
        assert_eq!(config.filter.default_category, Category::All);
        assert_eq!(config.filter.categories, CategoryOption::defaults());
    }

    #[test]
    fn partial_filter_table_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [filter]
            default_category = "Dairy"
            "#,
        )
        .unwrap();
        assert_eq!(config.filter.default_category, Category::Dairy);
        assert_eq!(config.filter.placeholder, "Search...");
        assert_eq!(config.filter.categories.len(), 4);
    }

    #[test]
    fn custom_categories() {
        let config = AppConfig::from_toml_str(
            r#"
            [filter]
            placeholder = "Find groceries"

            [[filter.categories]]
            value = "All"
            label = "Everything"

            [[filter.categories]]
            value = "Bakery"
            label = "Bakery"
            "#,
        )
        .unwrap();
        assert_eq!(config.filter.placeholder, "Find groceries");
        assert_eq!(
            config.filter.categories,
            vec![
                CategoryOption::new("All", "Everything"),
                CategoryOption::new("Bakery", "Bakery"),
            ]
        );
    }

    #[test]
    fn unknown_default_category_is_parse_error() {
        let err = AppConfig::from_toml_str(
            r#"
            [filter]
            default_category = "Meat"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::from_file("definitely/not/here/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
