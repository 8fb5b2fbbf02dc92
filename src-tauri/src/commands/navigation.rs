//! Navigation bar commands
use serde::{Deserialize, Serialize};
use starter_core::Route;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub path: String,
    pub label_key: String,
    pub active: bool,
}

pub fn nav_links_for(current_path: &str) -> Vec<NavLink> {
    Route::ALL
        .iter()
        .map(|route| NavLink {
            path: route.path().to_string(),
            label_key: route.label_key().to_string(),
            active: route.is_active(current_path),
        })
        .collect()
}

#[tauri::command]
pub fn nav_links(current_path: String) -> Vec<NavLink> {
    nav_links_for(&current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_highlighted() {
        let links = nav_links_for("#/demo");
        let active: Vec<_> = links.iter().filter(|l| l.active).map(|l| l.path.as_str()).collect();
        assert_eq!(active, vec!["/demo"]);
        assert_eq!(links[0].label_key, "nav.home");
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        assert!(nav_links_for("/settings").iter().all(|l| !l.active));
    }
}
