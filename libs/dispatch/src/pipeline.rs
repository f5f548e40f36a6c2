//! The composed update pipeline: cache, differ, dispatcher.

use palaver_events::EventError;
use palaver_id::{EventSeq, SessionId};
use palaver_model::{Member, MemberCache};
use tracing::{debug, instrument};

use crate::{Dispatcher, EventListener, MemberUpdateDiffer};

/// Everything needed to turn raw member updates into delivered events.
///
/// The upstream connection feeds [`ingest`](UpdatePipeline::ingest) with
/// each member object it receives, together with the notification's
/// sequence number; the pipeline updates the cache, diffs, and delivers.
pub struct UpdatePipeline {
    cache: MemberCache,
    differ: MemberUpdateDiffer,
    dispatcher: Dispatcher,
}

impl UpdatePipeline {
    /// Creates an empty pipeline for one client session.
    #[must_use]
    pub fn new(session_id: SessionId) -> Self {
        Self {
            cache: MemberCache::new(),
            differ: MemberUpdateDiffer::new(session_id),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Registers a listener.
    pub fn register(&mut self, listener: Box<dyn EventListener>) {
        self.dispatcher.register(listener);
    }

    /// The member cache the pipeline diffs against.
    #[must_use]
    pub fn cache(&self) -> &MemberCache {
        &self.cache
    }

    /// The session this pipeline serves.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.differ.session_id()
    }

    /// Processes one upstream member update.
    ///
    /// Updates the cache, emits one event per changed field, and delivers
    /// them to listeners in field order. Returns the number of listener
    /// deliveries.
    #[instrument(
        skip(self, incoming),
        fields(
            guild = %incoming.guild_id,
            user = %incoming.user_id,
            seq = seq.value(),
        )
    )]
    pub fn ingest(&self, seq: EventSeq, incoming: Member) -> Result<usize, EventError> {
        let events = self.differ.apply(&self.cache, seq, incoming)?;
        debug!(events = events.len(), "member update diffed");
        Ok(self.dispatcher.dispatch_all(&events))
    }
}

impl std::fmt::Debug for UpdatePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatePipeline")
            .field("session_id", &self.session_id())
            .field("cached_members", &self.cache.len())
            .field("listeners", &self.dispatcher.listener_count())
            .finish()
    }
}
