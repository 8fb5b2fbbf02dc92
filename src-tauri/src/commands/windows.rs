//! Title bar window commands
use serde::{Deserialize, Serialize};
use starter_core::{StatusIndicator, TitleBarLayout, WindowState};
use std::sync::Arc;
use tauri::{AppHandle, Emitter, Runtime, State, WebviewWindow};

use super::{events, CommandResult};
use crate::host::TauriWindowController;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStateEvent {
    pub label: String,
    #[serde(flatten)]
    pub state: WindowState,
}

/// Mirror `label`'s maximize state and push every change to the frontend
pub fn attach<R: Runtime>(app: &AppHandle<R>, state: &AppState, label: &str) {
    let controller = Arc::new(TauriWindowController::new(
        app.clone(),
        label,
        state.resize_hub(),
    ));
    state.attach_window(label, controller, state_emitter(app, label));
}

/// Observer that emits `window-state-changed` for `label`
pub fn state_emitter<R: Runtime>(
    app: &AppHandle<R>,
    label: &str,
) -> impl Fn(WindowState) + Send + Sync + 'static {
    let emitter = app.clone();
    let label = label.to_string();

    move |window_state| {
        let payload = WindowStateEvent {
            label: label.clone(),
            state: window_state,
        };
        if let Err(e) = emitter.emit(events::WINDOW_STATE_CHANGED, payload) {
            tracing::warn!(window = %label, error = %e, "Failed to emit window state");
        }
    }
}

#[tauri::command]
pub fn window_state(window: WebviewWindow, state: State<AppState>) -> WindowState {
    state.window_state(window.label())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleBarInfo {
    pub title: String,
    pub layout: TitleBarLayout,
    pub status: StatusIndicator,
    pub status_key: String,
}

#[tauri::command]
pub fn title_bar(state: State<AppState>, running: bool) -> TitleBarInfo {
    let status = StatusIndicator::from_running(running);
    TitleBarInfo {
        title: state.config().title.clone(),
        layout: TitleBarLayout::current(),
        status,
        status_key: status.label_key().to_string(),
    }
}

#[tauri::command]
pub fn window_minimize(window: WebviewWindow, state: State<AppState>) -> CommandResult<()> {
    if let Some(sync) = state.window_sync(window.label()) {
        sync.minimize();
    }
    CommandResult::ok(())
}

#[tauri::command]
pub fn window_toggle_maximize(window: WebviewWindow, state: State<AppState>) -> CommandResult<()> {
    if let Some(sync) = state.window_sync(window.label()) {
        sync.toggle_maximize();
    }
    CommandResult::ok(())
}

#[tauri::command]
pub fn window_close(window: WebviewWindow, state: State<AppState>) -> CommandResult<()> {
    if let Some(sync) = state.window_sync(window.label()) {
        sync.close();
    }
    CommandResult::ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starter_core::{Config, HostResult, HostWindow, ResizeListener, Unlisten};
    use std::sync::mpsc;
    use std::time::Duration;
    use tauri::Listener;

    struct Maximized;

    impl HostWindow for Maximized {
        fn label(&self) -> &str {
            "main"
        }
        fn is_maximized(&self) -> HostResult<bool> {
            Ok(true)
        }
        fn on_resized(&self, _listener: ResizeListener) -> HostResult<Unlisten> {
            Ok(Unlisten::noop())
        }
        fn minimize(&self) -> HostResult<()> {
            Ok(())
        }
        fn toggle_maximize(&self) -> HostResult<()> {
            Ok(())
        }
        fn close(&self) -> HostResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_window_state_event_payload() {
        let event = WindowStateEvent {
            label: "main".to_string(),
            state: WindowState {
                is_maximized: true,
                hosted: true,
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["label"], "main");
        assert_eq!(json["isMaximized"], true);
        assert_eq!(json["hosted"], true);
    }

    #[test]
    fn test_maximize_change_is_emitted() {
        let app = tauri::test::mock_app();
        let (tx, rx) = mpsc::channel();
        app.handle().listen(events::WINDOW_STATE_CHANGED, move |event| {
            let _ = tx.send(event.payload().to_string());
        });

        let state = AppState::new(Config::default()).unwrap();
        let controller = Arc::new(|| -> HostResult<Arc<dyn HostWindow>> { Ok(Arc::new(Maximized)) });
        state.attach_window("main", controller, state_emitter(app.handle(), "main"));

        let payload = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let event: WindowStateEvent = serde_json::from_str(&payload).unwrap();
        assert_eq!(event.label, "main");
        assert_eq!(
            event.state,
            WindowState {
                is_maximized: true,
                hosted: true
            }
        );
        assert!(state.window_state("main").is_maximized);
    }
}
