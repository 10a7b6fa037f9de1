//! Configuration model loaded from external sources.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::forms::pagination::{MAX_ITEMS_PER_PAGE, PaginationLimits};

/// Localized strings of the pagination control.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationLabels {
    pub previous: String,
    pub next: String,
    pub more_pages: String,
}

impl Default for PaginationLabels {
    fn default() -> Self {
        Self {
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            more_pages: "More pages".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the renderer and the command line.
pub struct AppConfig {
    pub default_items_per_page: usize,
    pub max_items_per_page: usize,
    pub show_previous_next: bool,
    /// Glob of tera templates overriding the built-in ones.
    #[serde(default)]
    pub templates_dir: Option<String>,
    pub locale: String,
    #[serde(default)]
    pub labels: HashMap<String, PaginationLabels>,
}

impl AppConfig {
    /// Loads `<dir>/default.*`, the optional `<dir>/<app_env>.*` overrides and
    /// `APP_*` environment variables, in that order.
    pub fn load(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        let default_file = dir.join("default");
        let env_file = dir.join(app_env);

        Config::builder()
            .set_default("default_items_per_page", 15)?
            .set_default("max_items_per_page", MAX_ITEMS_PER_PAGE as u64)?
            .set_default("show_previous_next", true)?
            .set_default("locale", "en")?
            .add_source(File::with_name(&default_file.to_string_lossy()))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn limits(&self) -> PaginationLimits {
        PaginationLimits {
            default_items_per_page: self.default_items_per_page,
            max_items_per_page: self.max_items_per_page.min(MAX_ITEMS_PER_PAGE),
        }
    }

    /// Labels for the configured locale, falling back to English.
    pub fn labels(&self) -> PaginationLabels {
        self.labels
            .get(&self.locale)
            .cloned()
            .unwrap_or_else(|| {
                log::warn!("No pagination labels for locale {}", self.locale);
                PaginationLabels::default()
            })
    }
}
