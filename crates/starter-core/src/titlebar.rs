//! Title bar layout
//!
//! macOS keeps the native traffic lights, so the title is centered and the
//! custom controls are hidden. Elsewhere the bar draws its own minimize,
//! maximize and close buttons and double-clicking it toggles maximize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Platform {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleBarLayout {
    pub platform: Platform,
    pub show_window_controls: bool,
    pub centered_title: bool,
    pub double_click_maximizes: bool,
}

impl TitleBarLayout {
    pub fn for_platform(platform: Platform) -> Self {
        let mac = platform == Platform::MacOs;
        Self {
            platform,
            show_window_controls: !mac,
            centered_title: mac,
            double_click_maximizes: !mac,
        }
    }

    pub fn current() -> Self {
        Self::for_platform(Platform::current())
    }
}

/// Status dot next to the title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIndicator {
    Online,
    Standby,
}

impl StatusIndicator {
    pub fn from_running(running: bool) -> Self {
        if running {
            StatusIndicator::Online
        } else {
            StatusIndicator::Standby
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            StatusIndicator::Online => "app.status_online",
            StatusIndicator::Standby => "app.status_standby",
        }
    }
}
