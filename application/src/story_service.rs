use crate::notifier::Notifier;
use domain::transport::{StoryRequest, StoryTransport};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

pub const STORY_SUCCESS: &str = "AI story generated successfully!";
pub const STORY_FAILURE_PREFIX: &str = "Error generating story: ";
/// Reason shown when the story endpoint could not be reached or parsed.
pub const STORY_NETWORK_ERROR: &str = "Network error occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryOutcome {
    /// Another generation is still running.
    Skipped,
    Generated(String),
    Rejected(String),
    Failed,
}

/// Product story generation with its own single-flight guard.
pub struct StoryService<T> {
    transport: T,
    notifier: Notifier,
    busy: AtomicBool,
}

impl<T: StoryTransport> StoryService<T> {
    pub fn new(transport: T, notifier: Notifier) -> Self {
        Self {
            transport,
            notifier,
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn generate(&self, description: &str, category: &str) -> StoryOutcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return StoryOutcome::Skipped;
        }
        let _busy = BusyGuard(&self.busy);

        let request = StoryRequest {
            description: description.to_string(),
            category: category.to_string(),
        };
        match self.transport.generate_story(&request).await {
            Ok(reply) if reply.success => {
                self.notifier.success(STORY_SUCCESS);
                StoryOutcome::Generated(reply.story.unwrap_or_default())
            }
            Ok(reply) => {
                let reason = reply.message.unwrap_or_else(|| "unknown error".to_string());
                self.notifier.error(format!("{STORY_FAILURE_PREFIX}{reason}"));
                StoryOutcome::Rejected(reason)
            }
            Err(err) => {
                warn!(error = %err, "story transport failed");
                self.notifier
                    .error(format!("{STORY_FAILURE_PREFIX}{STORY_NETWORK_ERROR}"));
                StoryOutcome::Failed
            }
        }
    }
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
