//! Page routes
//!
//! The UI uses a hash router with two pages under a shared layout.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Feature showcase and the `ping` call
    Home,
    /// Tab widget demo
    Demo,
}

impl Route {
    /// Navigation bar order
    pub const ALL: [Route; 2] = [Route::Home, Route::Demo];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Demo => "/demo",
        }
    }

    /// Translation key for the navigation label
    pub fn label_key(&self) -> &'static str {
        match self {
            Route::Home => "nav.home",
            Route::Demo => "nav.demo",
        }
    }

    /// Accepts `/demo`, `#/demo`, `demo` and `/demo/`
    pub fn from_path(path: &str) -> Result<Route, CoreError> {
        let trimmed = path.trim().trim_start_matches('#');
        let normalized = trimmed.trim_matches('/');
        match normalized {
            "" => Ok(Route::Home),
            "demo" => Ok(Route::Demo),
            _ => Err(CoreError::UnknownRoute(path.to_string())),
        }
    }

    /// Exact-match highlighting for the navigation bar
    pub fn is_active(&self, current_path: &str) -> bool {
        Route::from_path(current_path).is_ok_and(|route| route == *self)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/").unwrap(), Route::Home);
        assert_eq!(Route::from_path("#/").unwrap(), Route::Home);
        assert_eq!(Route::from_path("/demo").unwrap(), Route::Demo);
        assert_eq!(Route::from_path("#/demo/").unwrap(), Route::Demo);
        assert!(Route::from_path("/settings").is_err());
    }

    #[test]
    fn test_nav_highlight() {
        assert!(Route::Home.is_active("/"));
        assert!(!Route::Home.is_active("/demo"));
        assert!(Route::Demo.is_active("/demo"));
        assert!(!Route::Demo.is_active("/nowhere"));
    }

    #[test]
    fn test_nav_order() {
        let labels: Vec<_> = Route::ALL.iter().map(Route::label_key).collect();
        assert_eq!(labels, vec!["nav.home", "nav.demo"]);
    }
}
