//! Starter Tabs
//!
//! Single source of truth for which tab panel is visible. Panels are not
//! registered anywhere: each one asks the controller it was handed whether
//! its own id is the active one.

mod controller;
mod state;

pub use controller::{ChangeHandler, PanelValidator, TabController};
pub use state::{TabMode, TabState};
