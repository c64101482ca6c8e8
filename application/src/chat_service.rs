use domain::export::ChatExport;
use domain::message::{self, Message};
use domain::session::{ChatSession, SessionEvent, SessionState, SubmitOutcome};
use domain::transport::ChatTransport;
use shared::telemetry::Telemetry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Receives every session state change, in order.
pub trait SessionObserver: Send + Sync {
    fn on_event(&self, event: &SessionEvent);
}

/// Drives one conversation over a [`ChatTransport`].
///
/// At most one transport call is outstanding per service. The session lock is
/// never held across the transport await, and observers are notified after
/// the lock is released so they may read the service back.
pub struct ChatService<T> {
    transport: T,
    session: Mutex<ChatSession>,
    observers: Mutex<Vec<Arc<dyn SessionObserver>>>,
}

impl<T> ChatService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_session(transport, ChatSession::new())
    }

    pub fn with_session(transport: T, session: ChatSession) -> Self {
        Self {
            transport,
            session: Mutex::new(session),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) {
        recover(self.observers.lock()).push(observer);
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn history(&self) -> Vec<Message> {
        self.lock().history().to_vec()
    }

    pub fn state(&self) -> SessionState {
        self.lock().state()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_pending()
    }

    pub fn last_bot_reply(&self) -> Option<String> {
        self.lock().last_bot_message().map(|m| m.text.clone())
    }

    pub fn reset(&self) {
        self.mutate(ChatSession::reset);
        info!("chat session reset");
    }

    pub fn export(&self) -> ChatExport {
        self.lock().export(message::now())
    }

    fn lock(&self) -> MutexGuard<'_, ChatSession> {
        recover(self.session.lock())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        let (result, events) = {
            let mut session = self.lock();
            let result = f(&mut session);
            (result, session.take_events())
        };
        self.dispatch(&events);
        result
    }

    fn dispatch(&self, events: &[SessionEvent]) {
        if events.is_empty() {
            return;
        }
        let observers = recover(self.observers.lock()).clone();
        for event in events {
            for observer in &observers {
                observer.on_event(event);
            }
        }
    }
}

impl<T: ChatTransport> ChatService<T> {
    /// Send `text` and record the reply.
    ///
    /// Blank input or a call while another is outstanding is skipped without
    /// touching state. Otherwise the session is back to Idle by the time the
    /// returned future completes, whatever the transport did; dropping the
    /// future early also returns it to Idle.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = match self.mutate(|s| s.begin_submit(text)) {
            Ok(text) => text,
            Err(reason) => {
                debug!(?reason, "submit skipped");
                return SubmitOutcome::Skipped(reason);
            }
        };
        let _pending = PendingGuard { service: self };

        let timer = Telemetry::start("chat.send");
        let outcome = match self.transport.send(&text).await {
            Ok(reply) => self.mutate(|s| s.apply_reply(&reply)),
            Err(err) => {
                warn!(error = %err, "chat transport failed");
                self.mutate(ChatSession::apply_transport_failure)
            }
        };
        debug!(
            op = timer.label(),
            elapsed_ms = timer.elapsed_ms() as u64,
            ?outcome,
            "chat request settled"
        );
        if outcome == SubmitOutcome::HandledFailure {
            info!("chat backend reported a failure");
        }
        outcome
    }

    pub async fn send_quick_message(&self, text: &str) -> SubmitOutcome {
        self.submit(text).await
    }
}

/// Clears the pending flag when the submit scope ends, however it ends.
struct PendingGuard<'a, T> {
    service: &'a ChatService<T>,
}

impl<T> Drop for PendingGuard<'_, T> {
    fn drop(&mut self) {
        self.service.mutate(ChatSession::finish);
    }
}

fn recover<G>(result: Result<G, PoisonError<G>>) -> G {
    result.unwrap_or_else(PoisonError::into_inner)
}
