//! Application state management
use parking_lot::{Mutex, RwLock};
use starter_core::{
    Config, Preferences, Result, TabController, TabState, WindowController, WindowState,
    WindowStateSync,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::host::ResizeHub;

/// Thread-safe application state wrapper
pub struct AppState {
    config: Config,
    preferences: RwLock<Preferences>,
    windows: RwLock<HashMap<String, Arc<WindowStateSync>>>,
    tab_groups: Mutex<HashMap<String, TabController>>,
    resize_hub: Arc<ResizeHub>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let preferences = Preferences::new(config.default_theme, config.default_language);

        Ok(Self {
            config,
            preferences: RwLock::new(preferences),
            windows: RwLock::new(HashMap::new()),
            tab_groups: Mutex::new(HashMap::new()),
            resize_hub: Arc::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resize handlers installed on host windows, kept across re-attaches
    pub fn resize_hub(&self) -> Arc<ResizeHub> {
        Arc::clone(&self.resize_hub)
    }

    /// Start mirroring a window's maximize state. Replaces (and tears down)
    /// any sync already attached under `label`.
    pub fn attach_window<F>(&self, label: &str, controller: Arc<dyn WindowController>, observer: F)
    where
        F: Fn(WindowState) + Send + Sync + 'static,
    {
        let sync = Arc::new(WindowStateSync::with_observer(controller, observer));
        sync.initialize();

        let previous = self.windows.write().insert(label.to_string(), sync);
        if let Some(previous) = previous {
            previous.teardown();
        }

        tracing::debug!(window = %label, "Attached window state sync");
    }

    pub fn detach_window(&self, label: &str) {
        let removed = self.windows.write().remove(label);
        self.resize_hub.forget(label);
        if let Some(sync) = removed {
            sync.teardown();
            tracing::debug!(window = %label, "Detached window state sync");
        }
    }

    /// The sync for `label`, cloned out so host calls run without the map lock
    pub fn window_sync(&self, label: &str) -> Option<Arc<WindowStateSync>> {
        self.windows.read().get(label).cloned()
    }

    pub fn window_state(&self, label: &str) -> WindowState {
        self.window_sync(label)
            .map(|sync| sync.state())
            .unwrap_or_default()
    }

    pub fn preferences(&self) -> Preferences {
        *self.preferences.read()
    }

    pub fn with_preferences<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Preferences) -> T,
    {
        f(&mut *self.preferences.write())
    }

    /// Register (or re-register) a tab group
    pub fn register_tabs(&self, group: &str, controller: TabController) -> TabState {
        let state = controller.state();
        self.tab_groups.lock().insert(group.to_string(), controller);
        tracing::debug!(group = %group, active = %state.active_id, mode = %state.mode, "Registered tab group");
        state
    }

    pub fn with_tabs<F, T>(&self, group: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut TabController) -> T,
    {
        self.tab_groups.lock().get_mut(group).map(f)
    }

    pub fn select_tab(&self, group: &str, id: &str) -> Option<TabState> {
        self.with_tabs(group, |tabs| {
            tabs.select(id);
            tabs.state()
        })
    }

    pub fn set_tab_value(&self, group: &str, value: Option<String>) -> Option<TabState> {
        self.with_tabs(group, |tabs| {
            tabs.set_external(value);
            tabs.state()
        })
    }

    pub fn tab_state(&self, group: &str) -> Option<TabState> {
        self.with_tabs(group, |tabs| tabs.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starter_core::{NoHost, TabMode};

    fn state() -> AppState {
        AppState::new(Config::default()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = Config {
            window_label: String::new(),
            ..Config::default()
        };
        assert!(AppState::new(config).is_err());
    }

    #[test]
    fn test_window_without_host_defaults() {
        let state = state();
        state.attach_window("main", Arc::new(NoHost), |_| {});

        assert_eq!(state.window_state("main"), WindowState::default());
        assert_eq!(state.window_state("missing"), WindowState::default());

        let sync = state.window_sync("main").unwrap();
        state.detach_window("main");
        assert!(sync.is_torn_down());
        assert!(state.window_sync("main").is_none());

        state.detach_window("main");
    }

    #[test]
    fn test_reattach_tears_down_previous() {
        let state = state();
        state.attach_window("main", Arc::new(NoHost), |_| {});
        let first = state.window_sync("main").unwrap();

        state.attach_window("main", Arc::new(NoHost), |_| {});
        assert!(first.is_torn_down());
        assert!(!state.window_sync("main").unwrap().is_torn_down());
    }

    #[test]
    fn test_demo_tab_group() {
        let state = state();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let tabs = TabController::uncontrolled("one")
            .with_known_panels(["one", "two", "three"])
            .with_on_change(move |id| sink.lock().push(id.to_string()));

        let initial = state.register_tabs("demo", tabs);
        assert_eq!(initial.active_id, "one");

        let after = state.select_tab("demo", "three").unwrap();
        assert!(after.is_active("three"));
        state.select_tab("demo", "three").unwrap();
        assert_eq!(*seen.lock(), vec!["three", "three"]);

        assert!(state.select_tab("missing", "one").is_none());
    }

    #[test]
    fn test_controlled_tab_group() {
        let state = state();
        state.register_tabs("demo", TabController::controlled("two", |_| {}));

        let after = state.select_tab("demo", "three").unwrap();
        assert_eq!(after.active_id, "two");
        assert_eq!(after.mode, TabMode::Controlled);

        let after = state
            .set_tab_value("demo", Some("three".to_string()))
            .unwrap();
        assert_eq!(after.active_id, "three");
        assert_eq!(state.tab_state("demo").unwrap().active_id, "three");
    }

    #[test]
    fn test_preferences_roundtrip() {
        let state = state();
        let language = state.with_preferences(|prefs| prefs.toggle_language());
        assert_eq!(state.preferences().language, language);
    }
}
