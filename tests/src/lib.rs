//! Fakes shared by the integration tests.

use application::chat_service::SessionObserver;
use application::notifier::NotificationSink;
use domain::notification::{Notification, Severity};
use domain::session::SessionEvent;
use domain::transport::{ChatReply, ChatTransport};
use shared::types::Result;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// What a fake transport call resolves to.
#[derive(Debug, Clone)]
pub enum Scripted {
    Reply(ChatReply),
    Fail(String),
    Panic,
}

impl Scripted {
    fn resolve(self) -> Result<ChatReply> {
        match self {
            Scripted::Reply(reply) => Ok(reply),
            Scripted::Fail(reason) => Err(anyhow::anyhow!(reason)),
            Scripted::Panic => panic!("transport blew up"),
        }
    }
}

/// Resolves calls from a script, in order. An exhausted script echoes.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl ChatTransport for ScriptedTransport {
    async fn send(&self, text: &str) -> Result<ChatReply> {
        self.seen.lock().unwrap().push(text.to_string());
        let next = self.script.lock().unwrap().pop_front();
        tokio::task::yield_now().await;
        match next {
            Some(step) => step.resolve(),
            None => Ok(ChatReply::ok(format!("echo: {text}"))),
        }
    }
}

/// Holds every call open until [`GatedTransport::release`] is called.
pub struct GatedTransport {
    gate: Semaphore,
    outcome: Scripted,
    calls: AtomicUsize,
}

impl GatedTransport {
    pub fn new(outcome: Scripted) -> Self {
        Self {
            gate: Semaphore::new(0),
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChatTransport for GatedTransport {
    async fn send(&self, _text: &str) -> Result<ChatReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.acquire().await?.forget();
        self.outcome.clone().resolve()
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SessionObserver for RecordingObserver {
    fn on_event(&self, event: &SessionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

#[derive(Default)]
pub struct RecordingSink {
    shown: Mutex<Vec<(Severity, String)>>,
    removed: Mutex<Vec<u64>>,
}

impl RecordingSink {
    pub fn shown(&self) -> Vec<(Severity, String)> {
        self.shown.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<u64> {
        self.removed.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn attach(&self, notification: &Notification) {
        self.shown
            .lock()
            .unwrap()
            .push((notification.severity, notification.message.clone()));
    }

    fn reveal(&self, _id: u64) {}

    fn fade(&self, _id: u64) {}

    fn remove(&self, id: u64) {
        self.removed.lock().unwrap().push(id);
    }
}
