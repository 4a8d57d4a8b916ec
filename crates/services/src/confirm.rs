//! Single-slot confirmation dialog coordinator.
//!
//! `show` turns a user decision into an awaitable `bool`. At most one
//! confirmation is pending at a time, by design: a flow needing concurrent
//! confirmations would have to queue, which this client does not do.

use std::sync::{Mutex, MutexGuard};

use tokio::sync::{oneshot, watch};
use uuid::Uuid;

/// Default question title when the caller does not supply one.
pub const DEFAULT_CONFIRM_TITLE: &str = "Are you sure?";

/// Visual severity of the pending question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmSeverity {
    Info,
    #[default]
    Warning,
    Danger,
}

impl ConfirmSeverity {
    /// CSS class suffix for the dialog container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ConfirmSeverity::Info => "info",
            ConfirmSeverity::Warning => "warning",
            ConfirmSeverity::Danger => "danger",
        }
    }
}

/// Optional knobs for [`ConfirmService::show`].
#[derive(Debug, Clone, Default)]
pub struct ConfirmOptions {
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub severity: Option<ConfirmSeverity>,
}

/// The question currently awaiting a decision, as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub id: String,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub severity: ConfirmSeverity,
}

/// Confirmation coordinator: one observable pending question at a time.
///
/// Pure UI coordination, no I/O and no failure modes. There is no timeout: a
/// confirmation left unanswered stays pending (acceptable for a foreground,
/// user-attended modal).
pub struct ConfirmService {
    pending: Mutex<Option<oneshot::Sender<bool>>>,
    changes: watch::Sender<Option<ConfirmRequest>>,
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmService {
    #[must_use]
    pub fn new() -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            pending: Mutex::new(None),
            changes,
        }
    }

    /// Observe the pending confirmation slot (`None` when no dialog is up).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<ConfirmRequest>> {
        self.changes.subscribe()
    }

    /// The currently pending request, if any.
    #[must_use]
    pub fn current(&self) -> Option<ConfirmRequest> {
        self.changes.borrow().clone()
    }

    /// Publish a question and await the user's decision.
    ///
    /// Resolves `true` on the confirm path, `false` on cancel or dismiss. If
    /// another `show` arrives while this one is pending, this call resolves
    /// `false` immediately (the newer question supersedes it; no awaiter is
    /// ever left unsettled).
    pub async fn show(&self, message: &str, title: &str, options: ConfirmOptions) -> bool {
        let (decision_tx, decision_rx) = oneshot::channel();
        {
            let mut pending = self.lock();
            if let Some(superseded) = pending.take() {
                let _ = superseded.send(false);
            }
            *pending = Some(decision_tx);
        }

        let request = ConfirmRequest {
            id: format!("dialog-{}", Uuid::new_v4()),
            title: title.to_owned(),
            message: message.to_owned(),
            confirm_label: options.confirm_label.unwrap_or_else(|| "Confirm".into()),
            cancel_label: options.cancel_label.unwrap_or_else(|| "Cancel".into()),
            severity: options.severity.unwrap_or_default(),
        };
        self.changes.send_replace(Some(request));

        // A dropped sender (service torn down) counts as a dismissal.
        decision_rx.await.unwrap_or(false)
    }

    /// Warning-severity question with default labels.
    pub async fn confirm(&self, message: &str, title: &str) -> bool {
        self.show(message, title, ConfirmOptions::default()).await
    }

    /// Danger-severity question with default labels.
    pub async fn danger(&self, message: &str, title: &str) -> bool {
        self.show(
            message,
            title,
            ConfirmOptions {
                severity: Some(ConfirmSeverity::Danger),
                ..ConfirmOptions::default()
            },
        )
        .await
    }

    /// Info-severity question with default labels.
    pub async fn info(&self, message: &str, title: &str) -> bool {
        self.show(
            message,
            title,
            ConfirmOptions {
                severity: Some(ConfirmSeverity::Info),
                ..ConfirmOptions::default()
            },
        )
        .await
    }

    /// Settle the pending question with the user's decision.
    ///
    /// Clears the published slot first, then resolves the awaiting `show`.
    /// No-op when nothing is pending.
    pub fn resolve(&self, confirmed: bool) {
        let sender = self.lock().take();
        if sender.is_some() {
            self.close();
        }
        if let Some(sender) = sender {
            let _ = sender.send(confirmed);
        }
    }

    /// Clear the published slot without settling anything.
    pub fn close(&self) {
        self.changes.send_replace(None);
    }

    fn lock(&self) -> MutexGuard<'_, Option<oneshot::Sender<bool>>> {
        self.pending.lock().expect("confirm slot lock poisoned")
    }
}
