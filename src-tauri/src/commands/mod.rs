//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the Rust core. The webview renders;
//! window, tab and preference state lives here.

pub mod diagnostics;
pub mod greeting;
pub mod navigation;
pub mod settings;
pub mod tabs;
pub mod windows;

use serde::Serialize;

/// Events pushed to the frontend
pub mod events {
    pub const WINDOW_STATE_CHANGED: &str = "window-state-changed";
    pub const TABS_CHANGED: &str = "tabs-changed";
    pub const THEME_TRANSITION: &str = "theme-transition";
    pub const LANGUAGE_CHANGED: &str = "language-changed";
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
