use tracing::info;
use uuid::Uuid;

/// A user-visible success notification.
///
/// Every record carries a fresh id so a UI binding can key, stack and
/// dismiss toasts individually.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
        }
    }
}

/// Sink for mutation notifications.
///
/// Notices are emitted synchronously with the local mutation, before and
/// independent of the remote sync outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Default sink: info-level log lines.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        info!(id = %notice.id, "{}", notice.message);
    }
}

/// Discards every notice.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: Notice) {}
}
