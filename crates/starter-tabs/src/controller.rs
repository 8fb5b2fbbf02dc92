//! Tab controller
//!
//! Controlled when the parent supplies a value, uncontrolled otherwise.
//! `select` never validates the id and never compares it with the current
//! one, so re-selecting the active tab notifies again.

use std::collections::HashSet;

use crate::state::{TabMode, TabState};

/// Called with the requested id on every `select`.
pub type ChangeHandler = Box<dyn FnMut(&str) + Send>;

/// Diagnostic check for selected ids; returning `false` only logs.
pub type PanelValidator = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub struct TabController {
    /// Seeded from the default, only written while uncontrolled
    internal: String,
    /// Value supplied by the parent
    external: Option<String>,
    on_change: Option<ChangeHandler>,
    validator: Option<PanelValidator>,
}

impl TabController {
    pub fn create(
        default_active_id: impl Into<String>,
        external_active_id: Option<String>,
        on_change: Option<ChangeHandler>,
    ) -> Self {
        Self {
            internal: default_active_id.into(),
            external: external_active_id,
            on_change,
            validator: None,
        }
    }

    pub fn uncontrolled(default_active_id: impl Into<String>) -> Self {
        Self::create(default_active_id, None, None)
    }

    pub fn controlled<F>(value: impl Into<String>, on_change: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Self::create(String::new(), Some(value.into()), Some(Box::new(on_change)))
    }

    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn with_panel_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Warn when an id outside `panels` is selected.
    pub fn with_known_panels<I, S>(self, panels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let known: HashSet<String> = panels.into_iter().map(Into::into).collect();
        self.with_panel_validator(move |id| known.contains(id))
    }

    pub fn active_id(&self) -> &str {
        self.external.as_deref().unwrap_or(&self.internal)
    }

    pub fn mode(&self) -> TabMode {
        if self.external.is_some() {
            TabMode::Controlled
        } else {
            TabMode::Uncontrolled
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();

        if let Some(validator) = &self.validator {
            if !validator(&id) {
                tracing::warn!(tab = %id, "Selected tab has no matching panel");
            }
        }

        if self.external.is_none() {
            self.internal.clone_from(&id);
        }

        tracing::debug!(tab = %id, mode = %self.mode(), "Tab selected");

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&id);
        }
    }

    /// Parent re-render: `Some` puts the controller in controlled mode with
    /// that value, `None` hands ownership back to the internal value.
    pub fn set_external(&mut self, value: Option<String>) {
        self.external = value;
    }

    pub fn state(&self) -> TabState {
        TabState {
            active_id: self.active_id().to_string(),
            mode: self.mode(),
        }
    }
}

impl std::fmt::Debug for TabController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabController")
            .field("active_id", &self.active_id())
            .field("mode", &self.mode())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    const PANELS: [&str; 3] = ["one", "two", "three"];

    fn recorder() -> (Arc<Mutex<Vec<String>>>, ChangeHandler) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let handler: ChangeHandler = Box::new(move |id: &str| {
            sink.lock().unwrap().push(id.to_string());
        });
        (calls, handler)
    }

    #[test]
    fn test_uncontrolled_select() {
        let mut tabs = TabController::uncontrolled("one");
        assert_eq!(tabs.mode(), TabMode::Uncontrolled);
        assert!(tabs.is_active("one"));

        tabs.select("two");
        assert!(tabs.is_active("two"));
        assert!(!tabs.is_active("one"));
    }

    #[test]
    fn test_controlled_select_only_notifies() {
        let (calls, handler) = recorder();
        let mut tabs = TabController::create("one", Some("two".to_string()), Some(handler));
        assert_eq!(tabs.mode(), TabMode::Controlled);

        tabs.select("three");
        assert!(tabs.is_active("two"));
        assert!(!tabs.is_active("three"));
        assert_eq!(*calls.lock().unwrap(), vec!["three"]);

        // Parent accepts the change on its next render
        tabs.set_external(Some("three".to_string()));
        assert!(tabs.is_active("three"));
    }

    #[test]
    fn test_unknown_id_hides_every_panel() {
        let mut tabs = TabController::uncontrolled("one");
        tabs.select("nonexistent");

        assert!(PANELS.iter().all(|id| !tabs.is_active(id)));
        assert_eq!(tabs.state().visible_panel(PANELS), None);
    }

    #[test]
    fn test_reselect_fires_again() {
        let (calls, handler) = recorder();
        let mut tabs = TabController::create("one", None, Some(handler));

        tabs.select("three");
        assert!(tabs.is_active("three"));
        assert!(!tabs.is_active("one"));
        assert!(!tabs.is_active("two"));

        tabs.select("three");
        assert!(tabs.is_active("three"));
        assert_eq!(tabs.state().visible_panel(PANELS), Some("three"));
        assert_eq!(*calls.lock().unwrap(), vec!["three", "three"]);
    }

    #[test]
    fn test_empty_default_shows_nothing() {
        let tabs = TabController::create("", None, None);
        assert_eq!(tabs.active_id(), "");
        assert_eq!(tabs.state().visible_panel(PANELS), None);
    }

    #[test]
    fn test_releasing_control_falls_back_to_default() {
        let mut tabs = TabController::controlled("two", |_| {});
        tabs.select("three");
        tabs.set_external(None);

        assert_eq!(tabs.mode(), TabMode::Uncontrolled);
        assert_eq!(tabs.active_id(), "");
    }

    #[test]
    fn test_validator_does_not_block_selection() {
        let rejected = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&rejected);
        let mut tabs = TabController::uncontrolled("one").with_panel_validator(move |id| {
            let known = PANELS.contains(&id);
            if !known {
                flag.store(true, Ordering::SeqCst);
            }
            known
        });

        tabs.select("typo");
        assert!(rejected.load(Ordering::SeqCst));
        assert!(tabs.is_active("typo"));
    }

    #[test]
    fn test_known_panels() {
        let (calls, handler) = recorder();
        let mut tabs = TabController::create("one", None, Some(handler)).with_known_panels(PANELS);

        tabs.select("two");
        tabs.select("four");
        assert!(tabs.is_active("four"));
        assert_eq!(*calls.lock().unwrap(), vec!["two", "four"]);
    }
}
