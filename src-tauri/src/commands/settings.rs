//! Theme and language commands

use serde::{Deserialize, Serialize};
use starter_core::{Language, Preferences, Theme, ThemeChange};
use tauri::{AppHandle, Emitter, State, WebviewWindow};

use super::{events, CommandResult};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesInfo {
    pub theme: Theme,
    pub resolved_theme: Theme,
    pub language: Language,
}

impl From<Preferences> for PreferencesInfo {
    fn from(prefs: Preferences) -> Self {
        Self {
            theme: prefs.theme,
            resolved_theme: prefs.resolved_theme(),
            language: prefs.language,
        }
    }
}

/// Native window theme for a preference; `None` follows the OS
pub fn platform_theme_for(theme: Theme) -> Option<tauri::Theme> {
    match theme {
        Theme::Light => Some(tauri::Theme::Light),
        Theme::Dark => Some(tauri::Theme::Dark),
        Theme::System => None,
    }
}

fn apply_theme(app: &AppHandle, window: &WebviewWindow, theme: Theme, change: ThemeChange) {
    if let Err(e) = window.set_theme(platform_theme_for(theme)) {
        tracing::warn!(window = %window.label(), error = %e, "Failed to apply window theme");
    }
    if change.is_visible() {
        if let Err(e) = app.emit(events::THEME_TRANSITION, change) {
            tracing::warn!(error = %e, "Failed to emit theme transition");
        }
    }
}

#[tauri::command]
pub fn get_preferences(state: State<AppState>) -> PreferencesInfo {
    state.preferences().into()
}

/// Called by the frontend whenever the OS appearance it observes changes
#[tauri::command]
pub fn set_system_appearance(
    app: AppHandle,
    state: State<AppState>,
    dark: bool,
) -> CommandResult<PreferencesInfo> {
    let change = state.with_preferences(|prefs| prefs.set_system_is_dark(dark));
    if change.is_visible() {
        if let Err(e) = app.emit(events::THEME_TRANSITION, change) {
            tracing::warn!(error = %e, "Failed to emit theme transition");
        }
    }
    CommandResult::ok(state.preferences().into())
}

#[tauri::command]
pub fn toggle_theme(
    app: AppHandle,
    window: WebviewWindow,
    state: State<AppState>,
) -> CommandResult<PreferencesInfo> {
    let (theme, change) = state.with_preferences(|prefs| {
        let change = prefs.toggle_theme();
        (prefs.theme, change)
    });
    apply_theme(&app, &window, theme, change);
    CommandResult::ok(state.preferences().into())
}

#[tauri::command]
pub fn set_theme(
    app: AppHandle,
    window: WebviewWindow,
    state: State<AppState>,
    theme: String,
) -> CommandResult<PreferencesInfo> {
    let theme: Theme = match theme.parse() {
        Ok(t) => t,
        Err(e) => return CommandResult::err(format!("{e}")),
    };

    let change = state.with_preferences(|prefs| prefs.set_theme(theme));
    apply_theme(&app, &window, theme, change);
    CommandResult::ok(state.preferences().into())
}

#[tauri::command]
pub fn toggle_language(app: AppHandle, state: State<AppState>) -> CommandResult<PreferencesInfo> {
    let language = state.with_preferences(|prefs| prefs.toggle_language());
    emit_language(&app, language);
    CommandResult::ok(state.preferences().into())
}

#[tauri::command]
pub fn set_language(
    app: AppHandle,
    state: State<AppState>,
    language: String,
) -> CommandResult<PreferencesInfo> {
    let language: Language = match language.parse() {
        Ok(l) => l,
        Err(e) => return CommandResult::err(format!("{e}")),
    };

    state.with_preferences(|prefs| prefs.set_language(language));
    emit_language(&app, language);
    CommandResult::ok(state.preferences().into())
}

fn emit_language(app: &AppHandle, language: Language) {
    if let Err(e) = app.emit(events::LANGUAGE_CHANGED, language) {
        tracing::warn!(error = %e, "Failed to emit language change");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_theme() {
        assert_eq!(platform_theme_for(Theme::Dark), Some(tauri::Theme::Dark));
        assert_eq!(platform_theme_for(Theme::Light), Some(tauri::Theme::Light));
        assert_eq!(platform_theme_for(Theme::System), None);
    }

    #[test]
    fn test_preferences_info() {
        let mut prefs = Preferences::new(Theme::System, Language::Zh);
        prefs.set_system_is_dark(true);

        let json = serde_json::to_value(PreferencesInfo::from(prefs)).unwrap();
        assert_eq!(json["theme"], "system");
        assert_eq!(json["resolvedTheme"], "dark");
        assert_eq!(json["language"], "zh");
    }
}
