//! Starter Shell - Tauri Application
//!
//! One undecorated window with a custom title bar drawn by the webview.
//! Rust owns window, tab and preference state; the webview renders it.

mod commands;
mod host;
mod state;

use starter_core::Config;
use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder, WindowEvent};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = Config::from_env();

    // Initialize logging
    starter_core::init_logging(&config.log_filter);

    let main_label = config.window_label.clone();

    tauri::Builder::default()
        .setup(move |app| {
            let state = AppState::new(config.clone())?;
            let initial_theme = state.preferences().theme;

            // The window stays hidden until the frontend reports ready
            let window = WebviewWindowBuilder::new(
                app,
                config.window_label.as_str(),
                WebviewUrl::App("index.html".into()),
            )
            .title(config.title.as_str())
            .inner_size(config.width, config.height)
            .min_inner_size(config.min_width, config.min_height)
            .decorations(false)
            .visible(false)
            .center()
            .build()?;

            if let Err(e) = window.set_theme(commands::settings::platform_theme_for(initial_theme)) {
                tracing::warn!(error = %e, "Failed to apply initial theme");
            }

            commands::windows::attach(app.handle(), &state, window.label());

            // Store state in Tauri
            app.manage(state);

            tracing::info!(window = %window.label(), "Starter shell started");

            Ok(())
        })
        .on_window_event(move |window, event| match event {
            WindowEvent::CloseRequested { .. } if window.label() == main_label => {
                tracing::info!("Main window closed, exiting");
                window.app_handle().exit(0);
            }
            WindowEvent::Destroyed => {
                if let Some(state) = window.try_state::<AppState>() {
                    state.detach_window(window.label());
                }
            }
            _ => {}
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Round-trip example
            commands::greeting::ping,
            // Window commands
            commands::windows::window_state,
            commands::windows::title_bar,
            commands::windows::window_minimize,
            commands::windows::window_toggle_maximize,
            commands::windows::window_close,
            // Navigation commands
            commands::navigation::nav_links,
            // Tab commands
            commands::tabs::tabs_register,
            commands::tabs::tabs_select,
            commands::tabs::tabs_set_value,
            commands::tabs::tabs_state,
            // Settings commands
            commands::settings::get_preferences,
            commands::settings::set_system_appearance,
            commands::settings::toggle_theme,
            commands::settings::set_theme,
            commands::settings::toggle_language,
            commands::settings::set_language,
        ])
        .run(tauri::generate_context!())
        .expect("error while running starter shell");
}
