//! Theme and language preferences
//!
//! Held in memory for the lifetime of the app; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the OS appearance
    #[default]
    System,
}

impl Theme {
    /// Concrete theme given the OS appearance
    pub fn resolve(self, system_is_dark: bool) -> Theme {
        match self {
            Theme::System if system_is_dark => Theme::Dark,
            Theme::System => Theme::Light,
            concrete => concrete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(CoreError::UnknownTheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn toggled(self) -> Language {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region-tagged locales such as "zh-CN" or "en_US"
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            _ => Err(CoreError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Resolved themes on either side of a switch. The frontend uses it to run
/// its reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChange {
    pub from: Theme,
    pub to: Theme,
}

impl ThemeChange {
    pub fn is_visible(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    /// Last OS appearance reported by the window
    pub system_is_dark: bool,
}

impl Preferences {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            system_is_dark: false,
        }
    }

    pub fn resolved_theme(&self) -> Theme {
        self.theme.resolve(self.system_is_dark)
    }

    /// Flip the resolved theme: dark goes light, anything else goes dark.
    /// An explicit choice replaces `System`.
    pub fn toggle_theme(&mut self) -> ThemeChange {
        let next = match self.resolved_theme() {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        };
        self.set_theme(next)
    }

    pub fn set_theme(&mut self, theme: Theme) -> ThemeChange {
        let from = self.resolved_theme();
        self.theme = theme;
        let change = ThemeChange {
            from,
            to: self.resolved_theme(),
        };
        tracing::debug!(theme = %theme, from = %change.from, to = %change.to, "Theme changed");
        change
    }

    pub fn set_system_is_dark(&mut self, dark: bool) -> ThemeChange {
        let from = self.resolved_theme();
        self.system_is_dark = dark;
        ThemeChange {
            from,
            to: self.resolved_theme(),
        }
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggled())
    }

    pub fn set_language(&mut self, language: Language) -> Language {
        self.language = language;
        tracing::debug!(language = %language, "Language changed");
        language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_system_theme() {
        assert_eq!(Theme::System.resolve(true), Theme::Dark);
        assert_eq!(Theme::System.resolve(false), Theme::Light);
        assert_eq!(Theme::Light.resolve(true), Theme::Light);
    }

    #[test]
    fn test_toggle_theme_flips_resolved() {
        let mut prefs = Preferences::new(Theme::System, Language::En);
        prefs.set_system_is_dark(true);

        let change = prefs.toggle_theme();
        assert_eq!(change, ThemeChange { from: Theme::Dark, to: Theme::Light });
        assert_eq!(prefs.theme, Theme::Light);

        let change = prefs.toggle_theme();
        assert_eq!(change.to, Theme::Dark);
        assert!(change.is_visible());
    }

    #[test]
    fn test_system_appearance_change() {
        let mut prefs = Preferences::default();
        let change = prefs.set_system_is_dark(true);
        assert!(change.is_visible());

        prefs.set_theme(Theme::Light);
        assert!(!prefs.set_system_is_dark(false).is_visible());
    }

    #[test]
    fn test_toggle_language() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.toggle_language(), Language::Zh);
        assert_eq!(prefs.toggle_language(), Language::En);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!("zh-CN".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!("en_US".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }
}
