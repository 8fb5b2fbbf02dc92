//! Tab group commands
use serde::{Deserialize, Serialize};
use starter_core::{TabController, TabState};
use tauri::{AppHandle, Emitter, Runtime, State};

use super::{events, CommandResult};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsChanged {
    pub group: String,
    pub value: String,
}

/// Controller for `group` that reports every selection to the frontend
pub fn group_controller<R: Runtime>(
    app: &AppHandle<R>,
    group: &str,
    default_value: String,
    value: Option<String>,
    panels: Vec<String>,
) -> TabController {
    let emitter = app.clone();
    let group = group.to_string();

    let controller = TabController::create(default_value, value, None).with_on_change(
        move |id: &str| {
            let payload = TabsChanged {
                group: group.clone(),
                value: id.to_string(),
            };
            if let Err(e) = emitter.emit(events::TABS_CHANGED, payload) {
                tracing::warn!(group = %group, error = %e, "Failed to emit tab change");
            }
        },
    );

    if panels.is_empty() {
        controller
    } else {
        controller.with_known_panels(panels)
    }
}

#[tauri::command]
pub fn tabs_register(
    app: AppHandle,
    state: State<AppState>,
    group: String,
    default_value: String,
    value: Option<String>,
    panels: Vec<String>,
) -> CommandResult<TabState> {
    let controller = group_controller(&app, &group, default_value, value, panels);
    CommandResult::ok(state.register_tabs(&group, controller))
}

#[tauri::command]
pub fn tabs_select(state: State<AppState>, group: String, id: String) -> CommandResult<TabState> {
    match state.select_tab(&group, &id) {
        Some(tabs) => CommandResult::ok(tabs),
        None => CommandResult::err(format!("Tab group not registered: {group}")),
    }
}

#[tauri::command]
pub fn tabs_set_value(
    state: State<AppState>,
    group: String,
    value: Option<String>,
) -> CommandResult<TabState> {
    match state.set_tab_value(&group, value) {
        Some(tabs) => CommandResult::ok(tabs),
        None => CommandResult::err(format!("Tab group not registered: {group}")),
    }
}

#[tauri::command]
pub fn tabs_state(state: State<AppState>, group: String) -> CommandResult<TabState> {
    match state.tab_state(&group) {
        Some(tabs) => CommandResult::ok(tabs),
        None => CommandResult::err(format!("Tab group not registered: {group}")),
    }
}
