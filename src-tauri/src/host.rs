//! Tauri-backed host window
//!
//! Tauri offers no way to remove a window event handler, so every window gets
//! exactly one handler, installed the first time it is acquired. That handler
//! fans resize events out to a listener list shared by every acquisition of
//! the window; unregistering removes the entry from the list.

use parking_lot::Mutex;
use starter_core::{HostError, HostResult, HostWindow, ResizeListener, Unlisten, WindowController};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tauri::{AppHandle, Manager, Runtime, WebviewWindow, WindowEvent};

/// Resize listeners of one window
#[derive(Default)]
pub struct ResizeDispatch {
    listeners: Mutex<Vec<(u64, ResizeListener)>>,
    next_id: AtomicU64,
}

impl ResizeDispatch {
    pub fn subscribe(self: &Arc<Self>, listener: ResizeListener) -> Unlisten {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, listener));

        let dispatch = Arc::downgrade(self);
        Unlisten::new(move || {
            if let Some(dispatch) = dispatch.upgrade() {
                dispatch.listeners.lock().retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Call every listener. Runs on a snapshot, so a listener may unsubscribe.
    pub fn notify(&self) {
        let snapshot: Vec<ResizeListener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

/// One [`ResizeDispatch`] per window label
#[derive(Default)]
pub struct ResizeHub {
    windows: Mutex<HashMap<String, Arc<ResizeDispatch>>>,
}

impl ResizeHub {
    /// The dispatch for `window`, installing its event handler on first use
    pub fn dispatch_for<R: Runtime>(&self, window: &WebviewWindow<R>) -> Arc<ResizeDispatch> {
        let mut windows = self.windows.lock();
        if let Some(dispatch) = windows.get(window.label()) {
            return Arc::clone(dispatch);
        }

        let dispatch = Arc::new(ResizeDispatch::default());
        let weak = Arc::downgrade(&dispatch);
        window.on_window_event(move |event| {
            if !matches!(event, WindowEvent::Resized(_)) {
                return;
            }
            if let Some(dispatch) = weak.upgrade() {
                dispatch.notify();
            }
        });

        tracing::trace!(window = %window.label(), "Installed resize dispatch");
        windows.insert(window.label().to_string(), Arc::clone(&dispatch));
        dispatch
    }

    /// Drop the dispatch of a destroyed window; its handler goes quiet
    pub fn forget(&self, label: &str) {
        self.windows.lock().remove(label);
    }
}

/// Looks up the window by label each time the title bar asks for it
pub struct TauriWindowController<R: Runtime> {
    app: AppHandle<R>,
    label: String,
    hub: Arc<ResizeHub>,
}

impl<R: Runtime> TauriWindowController<R> {
    pub fn new(app: AppHandle<R>, label: impl Into<String>, hub: Arc<ResizeHub>) -> Self {
        Self {
            app,
            label: label.into(),
            hub,
        }
    }
}

impl<R: Runtime> WindowController for TauriWindowController<R> {
    fn current_window(&self) -> HostResult<Arc<dyn HostWindow>> {
        let window = self.app.get_webview_window(&self.label).ok_or_else(|| {
            HostError::Unavailable(format!("no window labelled '{}'", self.label))
        })?;
        let resize = self.hub.dispatch_for(&window);
        Ok(Arc::new(TauriHostWindow::new(window, resize)))
    }
}

pub struct TauriHostWindow<R: Runtime> {
    window: WebviewWindow<R>,
    label: String,
    resize: Arc<ResizeDispatch>,
}

impl<R: Runtime> TauriHostWindow<R> {
    pub fn new(window: WebviewWindow<R>, resize: Arc<ResizeDispatch>) -> Self {
        Self {
            label: window.label().to_string(),
            window,
            resize,
        }
    }
}

fn operation(e: tauri::Error) -> HostError {
    HostError::Operation(e.to_string())
}

impl<R: Runtime> HostWindow for TauriHostWindow<R> {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_maximized(&self) -> HostResult<bool> {
        self.window.is_maximized().map_err(operation)
    }

    fn on_resized(&self, listener: ResizeListener) -> HostResult<Unlisten> {
        Ok(self.resize.subscribe(listener))
    }

    fn minimize(&self) -> HostResult<()> {
        self.window.minimize().map_err(operation)
    }

    fn toggle_maximize(&self) -> HostResult<()> {
        if self.window.is_maximized().map_err(operation)? {
            self.window.unmaximize().map_err(operation)
        } else {
            self.window.maximize().map_err(operation)
        }
    }

    fn close(&self) -> HostResult<()> {
        self.window.close().map_err(operation)
    }
}
