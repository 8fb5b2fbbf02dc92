use tauri::WebviewWindow;

use super::CommandResult;

/// The UI has mounted; reveal the window that was built hidden
#[tauri::command]
pub fn frontend_ready(window: WebviewWindow) -> CommandResult<()> {
    tracing::info!(window = %window.label(), "Frontend ready");

    if let Err(e) = window.show() {
        return CommandResult::err(e.to_string());
    }
    if let Err(e) = window.set_focus() {
        tracing::warn!(window = %window.label(), error = %e, "Failed to focus window");
    }
    CommandResult::ok(())
}
