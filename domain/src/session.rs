use crate::export::ChatExport;
use crate::message::Message;
use crate::transport::ChatReply;
use chrono::{DateTime, Utc};

/// Upper bound on stored messages, pinned first entry included.
pub const MAX_STORED_MESSAGES: usize = 50;

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your AI assistant for the Artisan Marketplace. How can I help you today?";

/// Bot text for a handled failure that carried no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Bot text for any transport-level error.
pub const CONNECTIVITY_ERROR_MESSAGE: &str =
    "Sorry, I'm having trouble connecting. Please check your internet connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    Busy,
}

/// How a `submit` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Skipped(SkipReason),
    Replied,
    HandledFailure,
    TransportFailure,
}

/// State changes observed by presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MessageAppended(Message),
    StateChanged(SessionState),
    Trimmed { evicted: usize },
    Cleared,
}

/// Conversation history plus the single-flight flag.
///
/// Every mutation records the events it caused; callers drain them with
/// [`ChatSession::take_events`] and forward them to whoever renders.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<Message>,
    pending: bool,
    events: Vec<SessionEvent>,
}

impl ChatSession {
    /// Empty history, Idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// History seeded with the welcome message at the pinned slot.
    pub fn with_welcome() -> Self {
        let mut session = Self::new();
        session.append(Message::bot(WELCOME_MESSAGE));
        session.events.clear();
        session
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn state(&self) -> SessionState {
        if self.pending {
            SessionState::AwaitingResponse
        } else {
            SessionState::Idle
        }
    }

    pub fn last_bot_message(&self) -> Option<&Message> {
        self.history.iter().rev().find(|m| m.is_bot())
    }

    /// Validate and accept a submission. On success the user message is
    /// already appended, the session is AwaitingResponse, and the trimmed
    /// text to hand to the transport is returned.
    pub fn begin_submit(&mut self, text: &str) -> Result<String, SkipReason> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SkipReason::Empty);
        }
        if self.pending {
            return Err(SkipReason::Busy);
        }
        self.append(Message::user(text));
        self.set_pending(true);
        Ok(text.to_string())
    }

    /// Record the bot side of a settled transport call. Does not leave
    /// AwaitingResponse; that is [`ChatSession::finish`]'s job.
    pub fn apply_reply(&mut self, reply: &ChatReply) -> SubmitOutcome {
        if reply.success {
            self.append(Message::bot(reply.message.clone().unwrap_or_default()));
            SubmitOutcome::Replied
        } else {
            let text = reply
                .message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_ERROR_MESSAGE);
            self.append(Message::bot(text));
            SubmitOutcome::HandledFailure
        }
    }

    pub fn apply_transport_failure(&mut self) -> SubmitOutcome {
        self.append(Message::bot(CONNECTIVITY_ERROR_MESSAGE));
        SubmitOutcome::TransportFailure
    }

    /// Return to Idle. Idempotent.
    pub fn finish(&mut self) {
        self.set_pending(false);
    }

    /// Drop everything and re-seed the welcome message. The pending flag is
    /// left alone so an in-flight reply still lands after the welcome.
    pub fn reset(&mut self) {
        self.history.clear();
        self.events.push(SessionEvent::Cleared);
        self.append(Message::bot(WELCOME_MESSAGE));
    }

    pub fn export(&self, timestamp: DateTime<Utc>) -> ChatExport {
        ChatExport {
            timestamp,
            messages: self.history.clone(),
        }
    }

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn append(&mut self, message: Message) {
        self.history.push(message.clone());
        self.events.push(SessionEvent::MessageAppended(message));
        self.retention_trim();
    }

    /// Evict the oldest entries after index 0 until at most
    /// `MAX_STORED_MESSAGES` remain. Exactly `len - MAX_STORED_MESSAGES`
    /// entries go when over the bound.
    fn retention_trim(&mut self) -> usize {
        let len = self.history.len();
        if len <= MAX_STORED_MESSAGES {
            return 0;
        }
        let evicted = len - MAX_STORED_MESSAGES;
        self.history.drain(1..1 + evicted);
        self.events.push(SessionEvent::Trimmed { evicted });
        evicted
    }

    fn set_pending(&mut self, pending: bool) {
        if self.pending == pending {
            return;
        }
        self.pending = pending;
        self.events.push(SessionEvent::StateChanged(self.state()));
    }
}
