use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before a new notification slides in.
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// Time from creation until the fade-out starts.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);
/// Length of the fade-out transition.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn background(self) -> &'static str {
        match self {
            Severity::Info => "#17a2b8",
            Severity::Success => "#28a745",
            Severity::Error => "#dc3545",
            Severity::Warning => "#ffc107",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Severity::Warning => "#333",
            _ => "white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Fading,
    Removed,
}

impl NotificationPhase {
    /// Offset from creation at which this phase begins.
    pub fn starts_at(self) -> Duration {
        match self {
            NotificationPhase::Entering => Duration::ZERO,
            NotificationPhase::Visible => ENTER_DELAY,
            NotificationPhase::Fading => DISPLAY_DURATION,
            NotificationPhase::Removed => DISPLAY_DURATION + FADE_DURATION,
        }
    }

    pub fn next(self) -> Option<NotificationPhase> {
        match self {
            NotificationPhase::Entering => Some(NotificationPhase::Visible),
            NotificationPhase::Visible => Some(NotificationPhase::Fading),
            NotificationPhase::Fading => Some(NotificationPhase::Removed),
            NotificationPhase::Removed => None,
        }
    }
}

/// A transient toast. Notifications are independent; there is no queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(id: u64, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
        }
    }
}
