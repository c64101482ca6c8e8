use application::chat_service::SessionObserver;
use application::notifier::NotificationSink;
use colored::{ColoredString, Colorize};
use domain::message::Message;
use domain::notification::{Notification, Severity};
use domain::session::{SessionEvent, SessionState};
use tracing::debug;

/// Prints bot messages and the thinking indicator as the session changes.
/// User lines are not echoed; the prompt already shows them.
#[derive(Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn print_message(&self, message: &Message) {
        let time = message.timestamp.format("%H:%M:%S").to_string().dimmed();
        if message.is_bot() {
            println!("{} {} {}", time, "Assistant:".cyan().bold(), message.text);
        } else {
            println!("{} {} {}", time, "You:".green().bold(), message.text);
        }
    }
}

impl SessionObserver for TerminalRenderer {
    fn on_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::MessageAppended(message) if message.is_bot() => {
                self.print_message(message)
            }
            SessionEvent::MessageAppended(_) => {}
            SessionEvent::StateChanged(SessionState::AwaitingResponse) => {
                eprintln!("{}", "AI is thinking...".dimmed());
            }
            SessionEvent::StateChanged(SessionState::Idle) => {}
            SessionEvent::Trimmed { evicted } => debug!(evicted, "history trimmed"),
            SessionEvent::Cleared => println!("{}", "Conversation cleared.".yellow()),
        }
    }
}

/// Notifications as coloured lines. A terminal has no slide-in, so the line
/// is printed on attach and the later phases are only logged.
#[derive(Default)]
pub struct TerminalNotifier;

fn paint(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Info => text.blue(),
        Severity::Success => text.green(),
        Severity::Error => text.red().bold(),
        Severity::Warning => text.yellow(),
    }
}

impl NotificationSink for TerminalNotifier {
    fn attach(&self, notification: &Notification) {
        eprintln!("{}", paint(notification.severity, &notification.message));
    }

    fn reveal(&self, _id: u64) {}

    fn fade(&self, _id: u64) {}

    fn remove(&self, id: u64) {
        debug!(id, "notification dismissed");
    }
}
