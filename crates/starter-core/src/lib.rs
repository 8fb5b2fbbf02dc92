//! Starter Core
//!
//! Shell-level model shared by the Tauri app: configuration, theme and
//! language preferences, page routes, title bar layout and the `ping`
//! greeting. Re-exports the window and tab state crates.

mod config;
mod error;
mod greeting;
mod preferences;
mod route;
mod titlebar;

pub use config::Config;
pub use error::CoreError;
pub use greeting::{greet, GreetResponse};
pub use preferences::{Language, Preferences, Theme, ThemeChange};
pub use route::Route;
pub use titlebar::{Platform, StatusIndicator, TitleBarLayout};

// Re-export the state crates
pub use starter_tabs::{ChangeHandler, PanelValidator, TabController, TabMode, TabState};
pub use starter_window::{
    HostError, HostWindow, NoHost, ResizeListener, Unlisten, WindowController, WindowState,
    WindowStateSync,
};
pub use starter_window::Result as HostResult;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}
