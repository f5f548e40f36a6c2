//! Listener registration and event delivery.

use palaver_events::MemberEvent;
use tracing::{debug, warn};

/// A consumer of member update events.
///
/// Listeners declare the field identifiers they want; the dispatcher only
/// hands them events for those fields. Callbacks run on the dispatch
/// thread and must not panic; at most one dispatch thread invokes
/// listeners for a given event at a time.
pub trait EventListener: Send + Sync {
    /// Field identifiers this listener subscribes to.
    fn fields(&self) -> &'static [&'static str];

    /// Called once per matching event.
    fn on_event(&self, event: &MemberEvent);
}

/// Routes events to registered listeners by field identifier.
///
/// Listeners are invoked in registration order, sequentially, on the
/// caller's thread.
#[derive(Default)]
pub struct Dispatcher {
    listeners: Vec<Box<dyn EventListener>>,
}

impl Dispatcher {
    /// Creates a dispatcher with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener behind all previously registered ones.
    pub fn register(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers one event to every listener subscribed to its field.
    ///
    /// Returns the number of listeners the event was delivered to.
    pub fn dispatch(&self, event: &MemberEvent) -> usize {
        let field = event.field_id();
        let mut delivered = 0;

        for listener in &self.listeners {
            if listener.fields().contains(&field) {
                listener.on_event(event);
                delivered += 1;
            }
        }

        if delivered == 0 {
            warn!(
                field = field,
                seq = event.seq().value(),
                "no listener registered for field"
            );
        } else {
            debug!(field = field, listeners = delivered, "event delivered");
        }

        delivered
    }

    /// Delivers a batch of events in order.
    ///
    /// Returns the total number of deliveries.
    pub fn dispatch_all(&self, events: &[MemberEvent]) -> usize {
        events.iter().map(|event| self.dispatch(event)).sum()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
