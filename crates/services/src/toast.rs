//! Process-wide toast queue with independent auto-expiry timers.
//!
//! Observers subscribe to a [`tokio::sync::watch`] channel and always receive
//! the complete current list, never a delta. Every mutation republishes the
//! full snapshot; insertion order is display order.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// How long a toast stays up when the caller does not say.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// CSS class suffix for the toast container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

/// Opaque toast identifier, unique per process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    fn generate() -> Self {
        Self(format!("toast-{}", Uuid::new_v4()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transient, auto-expiring notification message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

#[derive(Default)]
struct ToastState {
    toasts: Vec<Toast>,
    timers: HashMap<ToastId, JoinHandle<()>>,
}

/// Notification coordinator: shared, observable list of transient messages.
///
/// All mutation is synchronous within one call; the only background work is
/// the per-toast expiry timer, which is aborted on `remove`/`clear` so a
/// cancelled timer can never touch the list afterwards. This component cannot
/// fail; all inputs are client-controlled strings.
pub struct ToastService {
    state: Mutex<ToastState>,
    changes: watch::Sender<Vec<Toast>>,
}

impl ToastService {
    /// Construction returns `Arc` because expiry timers hold a weak handle
    /// back to the service.
    #[must_use]
    pub fn new() -> Arc<Self> {
        let (changes, _) = watch::channel(Vec::new());
        Arc::new(Self {
            state: Mutex::new(ToastState::default()),
            changes,
        })
    }

    /// Observe the toast list. The receiver immediately holds the current
    /// snapshot and is notified on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.changes.subscribe()
    }

    /// The current snapshot, for callers outside a subscription.
    #[must_use]
    pub fn current(&self) -> Vec<Toast> {
        self.changes.borrow().clone()
    }

    /// Append a toast and schedule its expiry.
    pub fn show(
        self: &Arc<Self>,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Option<Duration>,
    ) -> ToastId {
        let toast = Toast {
            id: ToastId::generate(),
            message: message.into(),
            kind,
            duration: duration.unwrap_or(DEFAULT_TOAST_DURATION),
        };
        let id = toast.id.clone();

        let weak = Arc::downgrade(self);
        let expire_after = toast.duration;
        let expire_id = id.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(expire_after).await;
            if let Some(service) = weak.upgrade() {
                service.remove(&expire_id);
            }
        });

        let mut state = self.lock();
        state.toasts.push(toast);
        state.timers.insert(id.clone(), timer);
        self.publish(&state);
        id
    }

    pub fn success(self: &Arc<Self>, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::Success, None)
    }

    pub fn error(self: &Arc<Self>, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::Error, None)
    }

    pub fn info(self: &Arc<Self>, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::Info, None)
    }

    pub fn warning(self: &Arc<Self>, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::Warning, None)
    }

    /// Remove a toast and cancel its timer. Idempotent: removing an unknown
    /// or already-expired id republishes the unchanged list.
    pub fn remove(&self, id: &ToastId) {
        let mut state = self.lock();
        if let Some(timer) = state.timers.remove(id) {
            timer.abort();
        }
        state.toasts.retain(|toast| &toast.id != id);
        self.publish(&state);
    }

    /// Cancel every pending timer and empty the list.
    pub fn clear(&self) {
        let mut state = self.lock();
        for (_, timer) in state.timers.drain() {
            timer.abort();
        }
        state.toasts.clear();
        self.publish(&state);
    }

    fn lock(&self) -> MutexGuard<'_, ToastState> {
        self.state.lock().expect("toast state lock poisoned")
    }

    fn publish(&self, state: &ToastState) {
        // send_replace: publishing must succeed even with zero subscribers.
        self.changes.send_replace(state.toasts.clone());
    }
}
