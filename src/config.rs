/// Popup configuration: compiled defaults plus optional overrides from the
/// page that boots the popup
use crate::storage::{Category, SELECTED_CATEGORIES_KEY};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Question endpoint, overridable at build time with `QUIZ_ENDPOINT`
pub const DEFAULT_ENDPOINT: &str = match option_env!("QUIZ_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "https://script.google.com/macros/s/DEPLOYMENT_ID/exec",
};

pub const DEFAULT_CATEGORY: &str = "Cypress";

/// Categories offered as checkboxes
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Cypress", "Playwright", "Selenium", "JavaScript", "API Testing"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid endpoint {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("endpoint must use http or https, got {0:?}")]
    UnsupportedScheme(String),
    #[error("at least one category must be configured")]
    NoCategories,
    #[error("default category {0:?} is not one of the configured categories")]
    UnknownDefaultCategory(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub endpoint: Url,
    pub storage_key: String,
    pub default_category: Category,
    pub categories: Vec<Category>,
}

/// Partial configuration passed to `start_popup_with_config`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub storage_key: Option<String>,
    pub default_category: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl QuizConfig {
    pub fn from_overrides(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let raw_endpoint = overrides
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&raw_endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            url: raw_endpoint.clone(),
            source,
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(endpoint.scheme().to_string()));
        }

        let categories = overrides
            .categories
            .unwrap_or_else(|| DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect());
        if categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let default_category = overrides
            .default_category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        if !categories.contains(&default_category) {
            return Err(ConfigError::UnknownDefaultCategory(default_category));
        }

        Ok(QuizConfig {
            endpoint,
            storage_key: overrides
                .storage_key
                .unwrap_or_else(|| SELECTED_CATEGORIES_KEY.to_string()),
            default_category,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_defaults() {
        let config = QuizConfig::from_overrides(ConfigOverrides::default()).unwrap();

        assert_eq!(config.storage_key, "selectedCategories");
        assert_eq!(config.default_category, "Cypress");
        assert!(config.categories.contains(&"Cypress".to_string()));
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let overrides: ConfigOverrides = serde_json::from_str(
            r#"{"endpoint":"https://example.com/quiz","categories":["Rust","Go"],"defaultCategory":"Rust"}"#,
        )
        .unwrap();

        let config = QuizConfig::from_overrides(overrides).unwrap();

        assert_eq!(config.endpoint.as_str(), "https://example.com/quiz");
        assert_eq!(config.categories, vec!["Rust", "Go"]);
        assert_eq!(config.default_category, "Rust");
        assert_eq!(config.storage_key, "selectedCategories");
    }

    #[test]
    fn test_invalid_endpoint() {
        let overrides = ConfigOverrides {
            endpoint: Some("not a url".to_string()),
            ..ConfigOverrides::default()
        };

        assert!(matches!(
            QuizConfig::from_overrides(overrides),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let overrides = ConfigOverrides {
            endpoint: Some("file:///tmp/questions.json".to_string()),
            ..ConfigOverrides::default()
        };

        assert_eq!(
            QuizConfig::from_overrides(overrides),
            Err(ConfigError::UnsupportedScheme("file".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_category_list() {
        let overrides = ConfigOverrides {
            categories: Some(Vec::new()),
            ..ConfigOverrides::default()
        };

        assert_eq!(QuizConfig::from_overrides(overrides), Err(ConfigError::NoCategories));
    }

    #[test]
    fn test_rejects_default_category_without_checkbox() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"categories":["Rust"],"defaultCategory":"Cypress"}"#).unwrap();

        assert_eq!(
            QuizConfig::from_overrides(overrides),
            Err(ConfigError::UnknownDefaultCategory("Cypress".to_string()))
        );
    }

    #[test]
    fn test_custom_categories_need_matching_default() {
        let overrides: ConfigOverrides = serde_json::from_str(r#"{"categories":["Rust","Go"]}"#).unwrap();

        assert_eq!(
            QuizConfig::from_overrides(overrides),
            Err(ConfigError::UnknownDefaultCategory("Cypress".to_string()))
        );
    }
}
