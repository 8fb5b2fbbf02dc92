//! Host window capability
//!
//! The operations the title bar needs from the native shell: acquire the
//! current window, query its maximize flag, subscribe to resizes, and issue
//! minimize / toggle-maximize / close.

use std::fmt;
use std::sync::Arc;

use crate::error::HostError;
use crate::Result;

/// Callback invoked by the host every time the window is resized.
pub type ResizeListener = Arc<dyn Fn() + Send + Sync>;

/// Unregister handle returned by [`HostWindow::on_resized`].
pub struct Unlisten(Option<Box<dyn FnOnce() + Send>>);

impl Unlisten {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self(Some(Box::new(f)))
    }

    /// Handle for hosts that never deliver notifications
    pub fn noop() -> Self {
        Self(None)
    }

    /// Remove the listener. Returns once the host has dropped it.
    pub fn call(mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

impl fmt::Debug for Unlisten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unlisten")
            .field(&if self.0.is_some() { "armed" } else { "spent" })
            .finish()
    }
}

/// A native window the title bar controls.
pub trait HostWindow: Send + Sync {
    /// Label used in log output
    fn label(&self) -> &str;

    fn is_maximized(&self) -> Result<bool>;

    fn on_resized(&self, listener: ResizeListener) -> Result<Unlisten>;

    fn minimize(&self) -> Result<()>;

    fn toggle_maximize(&self) -> Result<()>;

    fn close(&self) -> Result<()>;
}

/// Source of the window the title bar belongs to.
pub trait WindowController: Send + Sync {
    fn current_window(&self) -> Result<Arc<dyn HostWindow>>;
}

impl<F> WindowController for F
where
    F: Fn() -> Result<Arc<dyn HostWindow>> + Send + Sync,
{
    fn current_window(&self) -> Result<Arc<dyn HostWindow>> {
        self()
    }
}

/// Controller for environments without a native window (browser preview).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHost;

impl WindowController for NoHost {
    fn current_window(&self) -> Result<Arc<dyn HostWindow>> {
        Err(HostError::Unavailable(
            "no native window in this environment".to_string(),
        ))
    }
}
