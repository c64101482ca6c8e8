use domain::notification::{Notification, NotificationPhase, Severity};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Presentation side of transient notifications.
pub trait NotificationSink: Send + Sync + 'static {
    /// Attach the notification, not yet visible.
    fn attach(&self, notification: &Notification);
    fn reveal(&self, id: u64);
    fn fade(&self, id: u64);
    fn remove(&self, id: u64);
}

/// Shows notifications and schedules their dismissal. Concurrent
/// notifications are independent; nothing is queued or coalesced.
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            sink,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Attach a notification now and drive its lifecycle on the current
    /// Tokio runtime. Outside a runtime it is revealed and never dismissed.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification::new(id, message, severity);
        debug!(id, ?severity, message = %notification.message, "notification");
        self.sink.attach(&notification);

        let Ok(handle) = Handle::try_current() else {
            warn!(id, "no runtime; notification will not auto-dismiss");
            self.sink.reveal(id);
            return id;
        };

        let sink = Arc::clone(&self.sink);
        handle.spawn(async move {
            let mut phase = NotificationPhase::Entering;
            while let Some(next) = phase.next() {
                sleep(next.starts_at() - phase.starts_at()).await;
                match next {
                    NotificationPhase::Entering => {}
                    NotificationPhase::Visible => sink.reveal(id),
                    NotificationPhase::Fading => sink.fade(id),
                    NotificationPhase::Removed => sink.remove(id),
                }
                phase = next;
            }
        });
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Warning)
    }
}
