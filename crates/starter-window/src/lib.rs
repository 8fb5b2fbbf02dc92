//! Starter Window State
//!
//! Keeps the custom title bar in step with the native window it lives in.
//! The host window is an injected capability (`WindowController`), so the
//! same code runs against Tauri, a fake in tests, or nothing at all when the
//! UI is previewed in a plain browser.

mod error;
mod host;
mod sync;

pub use error::HostError;
pub use host::{HostWindow, NoHost, ResizeListener, Unlisten, WindowController};
pub use sync::{WindowState, WindowStateSync};

pub type Result<T> = std::result::Result<T, HostError>;
