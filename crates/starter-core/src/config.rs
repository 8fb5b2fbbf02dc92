//! Shell configuration

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::preferences::{Language, Theme};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Label of the single application window
    pub window_label: String,
    /// Window title, also the fallback title bar text
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub default_theme: Theme,
    pub default_language: Language,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Defaults overlaid with `STARTER_THEME`, `STARTER_LANGUAGE` and
    /// `STARTER_LOG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("STARTER_THEME") {
            match value.parse() {
                Ok(theme) => config.default_theme = theme,
                Err(e) => tracing::warn!(error = %e, "Ignoring STARTER_THEME"),
            }
        }

        if let Some(value) = lookup("STARTER_LANGUAGE") {
            match value.parse() {
                Ok(language) => config.default_language = language,
                Err(e) => tracing::warn!(error = %e, "Ignoring STARTER_LANGUAGE"),
            }
        }

        if let Some(filter) = lookup("STARTER_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_label.is_empty() {
            return Err(CoreError::Config("window label cannot be empty".to_string()));
        }
        if self.min_width <= 0.0 || self.min_height <= 0.0 {
            return Err(CoreError::Config(
                "minimum window size must be positive".to_string(),
            ));
        }
        if self.width < self.min_width || self.height < self.min_height {
            return Err(CoreError::Config(format!(
                "window size {}x{} is below the minimum {}x{}",
                self.width, self.height, self.min_width, self.min_height
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_label: "main".to_string(),
            title: "Starter Template".to_string(),
            width: 1100.0,
            height: 720.0,
            min_width: 800.0,
            min_height: 560.0,
            default_theme: Theme::System,
            default_language: Language::En,
            log_filter: if cfg!(debug_assertions) {
                "debug".to_string()
            } else {
                "info".to_string()
            },
        }
    }
}
