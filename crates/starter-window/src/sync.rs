//! Window state synchronization
//!
//! `is_maximized` is only ever written from a host query: once during
//! `initialize`, then once per resize notification. Commands never touch it;
//! the host's next resize notification is authoritative.
//!
//! ```text
//! new ──initialize──▶ hosted ──teardown──▶ torn down
//!  │                                          ▲
//!  └──initialize (no host)──▶ inert ──────────┘
//! ```

use parking_lot::{Mutex, ReentrantMutex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::host::{HostWindow, ResizeListener, Unlisten, WindowController};
use crate::Result;

type Observer = Box<dyn Fn(WindowState) + Send + Sync>;

/// What the title bar renders from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    pub is_maximized: bool,
    /// A host window was acquired and window controls are live
    pub hosted: bool,
}

pub struct WindowStateSync {
    shared: Arc<Shared>,
}

struct Shared {
    controller: Arc<dyn WindowController>,
    inner: Mutex<Inner>,
    /// Held from storing a query result until the observer returns, so
    /// observer calls follow ticket order and teardown can wait them out.
    /// Reentrant so an observer may tear the sync down itself.
    emission: ReentrantMutex<()>,
    observer: Option<Observer>,
}

#[derive(Default)]
struct Inner {
    is_maximized: bool,
    host: Option<Arc<dyn HostWindow>>,
    unlisten: Option<Unlisten>,
    torn_down: bool,
    /// Last ticket handed to a query
    issued: u64,
    /// Ticket of the query whose result is currently stored
    applied: u64,
}

impl Inner {
    fn state(&self) -> WindowState {
        WindowState {
            is_maximized: self.is_maximized,
            hosted: self.host.is_some(),
        }
    }
}

impl WindowStateSync {
    pub fn new(controller: Arc<dyn WindowController>) -> Self {
        Self::build(controller, None)
    }

    /// Like [`new`](Self::new), calling `observer` whenever the mirrored
    /// state changes.
    pub fn with_observer<F>(controller: Arc<dyn WindowController>, observer: F) -> Self
    where
        F: Fn(WindowState) + Send + Sync + 'static,
    {
        Self::build(controller, Some(Box::new(observer)))
    }

    fn build(controller: Arc<dyn WindowController>, observer: Option<Observer>) -> Self {
        Self {
            shared: Arc::new(Shared {
                controller,
                inner: Mutex::new(Inner::default()),
                emission: ReentrantMutex::new(()),
                observer,
            }),
        }
    }

    /// Acquire the host window, subscribe to resizes and read the initial
    /// maximize flag. Without a host window this leaves the sync inert.
    pub fn initialize(&self) {
        {
            let inner = self.shared.inner.lock();
            if inner.torn_down || inner.host.is_some() {
                return;
            }
        }

        let host = match self.shared.controller.current_window() {
            Ok(host) => host,
            Err(e) => {
                tracing::debug!(error = %e, "No host window, window controls are inert");
                return;
            }
        };

        {
            let mut inner = self.shared.inner.lock();
            if inner.torn_down || inner.host.is_some() {
                return;
            }
            inner.host = Some(Arc::clone(&host));
        }

        let weak = Arc::downgrade(&self.shared);
        let listener: ResizeListener = Arc::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.refresh();
            }
        });

        match host.on_resized(listener) {
            Ok(unlisten) => {
                let mut inner = self.shared.inner.lock();
                if inner.torn_down {
                    drop(inner);
                    unlisten.call();
                    return;
                }
                inner.unlisten = Some(unlisten);
            }
            Err(e) => {
                tracing::warn!(
                    window = host.label(),
                    error = %e,
                    "Failed to subscribe to resize notifications"
                );
            }
        }

        self.shared.refresh();

        tracing::debug!(
            window = host.label(),
            is_maximized = self.is_maximized(),
            "Window state sync initialized"
        );
    }

    /// Re-query the host after a resize. Ignored once torn down.
    pub fn on_resize_notification(&self) {
        self.shared.refresh();
    }

    pub fn minimize(&self) {
        self.issue("minimize", |host| host.minimize());
    }

    pub fn toggle_maximize(&self) {
        self.issue("toggle_maximize", |host| host.toggle_maximize());
    }

    pub fn close(&self) {
        self.issue("close", |host| host.close());
    }

    /// Unsubscribe from the host. No state update happens after this
    /// returns, even for a notification that is already being processed.
    pub fn teardown(&self) {
        let unlisten = {
            let mut inner = self.shared.inner.lock();
            if inner.torn_down {
                return;
            }
            inner.torn_down = true;
            inner.host = None;
            inner.unlisten.take()
        };

        if let Some(unlisten) = unlisten {
            unlisten.call();
        }

        // Wait out an observer call that started before the flag was set
        drop(self.shared.emission.lock());

        tracing::debug!("Window state sync torn down");
    }

    pub fn is_maximized(&self) -> bool {
        self.shared.inner.lock().is_maximized
    }

    pub fn is_hosted(&self) -> bool {
        self.shared.inner.lock().host.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.inner.lock().torn_down
    }

    pub fn state(&self) -> WindowState {
        self.shared.inner.lock().state()
    }

    fn issue<F>(&self, command: &'static str, f: F)
    where
        F: FnOnce(&dyn HostWindow) -> Result<()>,
    {
        let host = self.shared.inner.lock().host.clone();
        let Some(host) = host else {
            tracing::trace!(command, "No host window, ignoring command");
            return;
        };

        if let Err(e) = f(host.as_ref()) {
            tracing::warn!(window = host.label(), command, error = %e, "Window command failed");
        }
    }
}

impl Drop for WindowStateSync {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for WindowStateSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.inner.lock();
        f.debug_struct("WindowStateSync")
            .field("is_maximized", &inner.is_maximized)
            .field("hosted", &inner.host.is_some())
            .field("torn_down", &inner.torn_down)
            .finish()
    }
}

impl Shared {
    fn refresh(&self) {
        let Some((host, ticket)) = self.begin_query() else {
            return;
        };

        match host.is_maximized() {
            Ok(maximized) => {
                let _emission = self.emission.lock();
                if let Some(state) = self.apply(ticket, maximized) {
                    if let Some(observer) = &self.observer {
                        observer(state);
                    }
                }
            }
            Err(e) => {
                tracing::warn!(window = host.label(), error = %e, "Failed to query maximize state");
            }
        }
    }

    fn begin_query(&self) -> Option<(Arc<dyn HostWindow>, u64)> {
        let mut inner = self.inner.lock();
        if inner.torn_down {
            return None;
        }
        let host = inner.host.clone()?;
        inner.issued += 1;
        Some((host, inner.issued))
    }

    /// Store a query result. Returns the new state if it changed. Callers
    /// hold `emission`, so a stale or post-teardown result never reaches the
    /// observer.
    fn apply(&self, ticket: u64, maximized: bool) -> Option<WindowState> {
        let mut inner = self.inner.lock();
        if inner.torn_down || ticket <= inner.applied {
            return None;
        }
        inner.applied = ticket;

        if inner.is_maximized == maximized {
            return None;
        }
        inner.is_maximized = maximized;

        tracing::trace!(is_maximized = maximized, "Window maximize state changed");
        Some(inner.state())
    }
}
