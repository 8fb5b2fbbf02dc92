//! Tab selection snapshot

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabMode {
    /// The parent owns the active id; the controller only relays intents
    Controlled,
    /// The controller owns the active id, seeded from a default
    Uncontrolled,
}

impl TabMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabMode::Controlled => "controlled",
            TabMode::Uncontrolled => "uncontrolled",
        }
    }
}

impl std::fmt::Display for TabMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a tab strip renders from. Any string is a valid `active_id`,
/// including ids no panel answers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabState {
    pub active_id: String,
    pub mode: TabMode,
}

impl TabState {
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id == id
    }

    /// The panel to show out of `panels`, if any matches.
    pub fn visible_panel<'a, I>(&self, panels: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        panels.into_iter().find(|id| self.is_active(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANELS: [&str; 3] = ["one", "two", "three"];

    #[test]
    fn test_visible_panel() {
        let state = TabState {
            active_id: "two".to_string(),
            mode: TabMode::Uncontrolled,
        };
        assert_eq!(state.visible_panel(PANELS), Some("two"));

        let empty = TabState {
            active_id: "nonexistent".to_string(),
            mode: TabMode::Uncontrolled,
        };
        assert_eq!(empty.visible_panel(PANELS), None);
    }

    #[test]
    fn test_serializes_for_frontend() {
        let state = TabState {
            active_id: "one".to_string(),
            mode: TabMode::Controlled,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["activeId"], "one");
        assert_eq!(json["mode"], "controlled");
    }
}
