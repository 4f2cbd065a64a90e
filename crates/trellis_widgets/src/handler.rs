//! Event handler storage and the handler context
//!
//! # Architecture
//!
//! ```text
//! Widget
//!     ↓ tree.on(id, EventType::Click, |ctx| ...)
//! EventHandlers (stored on the widget node)
//!     ↓ WidgetTree::dispatch(&interaction)
//! Handler callback invoked with an EventContext
//!     ↓ ctx.tree (any widget, not only the target's subtree)
//! State mutations + dirty marks
//! ```
//!
//! Handlers capture the ids of exactly the widgets they mutate at
//! registration time; there is no implicit walk up parent pointers.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use trellis_core::{EventType, Interaction, WidgetId};

use crate::tree::WidgetTree;

/// Callback for handling events.
///
/// `Send + Sync` so a whole tree can move between worker threads between
/// interactions.
pub type EventCallback = Arc<dyn Fn(&mut EventContext<'_>) + Send + Sync>;

/// Context passed to event handlers
pub struct EventContext<'a> {
    /// The tree the event was dispatched in
    pub tree: &'a mut WidgetTree,
    target: WidgetId,
    interaction: &'a Interaction,
}

impl<'a> EventContext<'a> {
    pub(crate) fn new(
        tree: &'a mut WidgetTree,
        target: WidgetId,
        interaction: &'a Interaction,
    ) -> Self {
        Self {
            tree,
            target,
            interaction,
        }
    }

    /// The widget that received the event
    pub fn target(&self) -> WidgetId {
        self.target
    }

    /// The kind of event that occurred
    pub fn event_type(&self) -> EventType {
        self.interaction.event_type
    }

    /// The raw interaction record
    pub fn interaction(&self) -> &Interaction {
        self.interaction
    }

    /// Mark a widget as needing re-render
    pub fn mark_dirty(&mut self, id: WidgetId) {
        self.tree.mark_dirty(id);
    }
}

/// Storage for event handlers on a widget
#[derive(Default, Clone)]
pub struct EventHandlers {
    /// Handlers keyed by event type
    handlers: FxHashMap<EventType, Vec<EventCallback>>,
}

impl EventHandlers {
    /// Create a new empty event handlers storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any handlers registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Check if a handler is registered for a specific event type
    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&mut EventContext<'_>) + Send + Sync + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Arc::new(handler));
    }

    /// Register an already shared callback
    pub(crate) fn insert(&mut self, event_type: EventType, callback: EventCallback) {
        self.handlers.entry(event_type).or_default().push(callback);
    }

    /// Unregister a callback previously added with [`EventHandlers::insert`]
    ///
    /// Matches by identity. Returns whether it was registered.
    pub(crate) fn remove(&mut self, event_type: EventType, callback: &EventCallback) -> bool {
        let Some(list) = self.handlers.get_mut(&event_type) else {
            return false;
        };
        let Some(pos) = list.iter().position(|c| Arc::ptr_eq(c, callback)) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.handlers.remove(&event_type);
        }
        true
    }

    /// Get handlers for an event type, in registration order
    pub fn get(&self, event_type: EventType) -> Option<&[EventCallback]> {
        self.handlers.get(&event_type).map(|v| v.as_slice())
    }

    /// Number of handlers registered for an event type
    pub fn count(&self, event_type: EventType) -> usize {
        self.get(event_type).map_or(0, <[EventCallback]>::len)
    }
}

impl std::fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.handlers.keys().copied().collect();
        kinds.sort();
        f.debug_struct("EventHandlers").field("kinds", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::widget::Widget;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_event_handlers_registration() {
        let mut handlers = EventHandlers::new();
        assert!(handlers.is_empty());

        handlers.on(EventType::Click, |_| {});

        assert!(!handlers.is_empty());
        assert!(handlers.has_handler(EventType::Click));
        assert!(!handlers.has_handler(EventType::Change));
        assert_eq!(handlers.count(EventType::Click), 1);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut tree = WidgetTree::new();
        let id = Label::new(&mut tree, "x").id();
        let log = Arc::new(AtomicU32::new(0));

        let mut handlers = EventHandlers::new();
        let first = Arc::clone(&log);
        handlers.on(EventType::Click, move |_| {
            // 0 -> 1
            let _ = first.compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst);
        });
        let second = Arc::clone(&log);
        handlers.on(EventType::Click, move |_| {
            // 1 -> 2, only if the first ran already
            let _ = second.compare_exchange(1, 2, Ordering::SeqCst, Ordering::SeqCst);
        });

        let interaction = Interaction::new(id.to_raw(), EventType::Click);
        for callback in handlers.get(EventType::Click).unwrap() {
            let mut ctx = EventContext::new(&mut tree, id, &interaction);
            callback(&mut ctx);
        }
        assert_eq!(log.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut handlers = EventHandlers::new();
        handlers.on(EventType::Click, |_| {});
        let shared: EventCallback = Arc::new(|_: &mut EventContext<'_>| {});
        handlers.insert(EventType::Click, Arc::clone(&shared));
        assert_eq!(handlers.count(EventType::Click), 2);

        let other: EventCallback = Arc::new(|_: &mut EventContext<'_>| {});
        assert!(!handlers.remove(EventType::Click, &other));
        assert!(!handlers.remove(EventType::Change, &shared));

        assert!(handlers.remove(EventType::Click, &shared));
        assert_eq!(handlers.count(EventType::Click), 1);
        assert!(!handlers.remove(EventType::Click, &shared));
    }

    #[test]
    fn test_remove_last_drops_event_type() {
        let mut handlers = EventHandlers::new();
        let shared: EventCallback = Arc::new(|_: &mut EventContext<'_>| {});
        handlers.insert(EventType::Click, Arc::clone(&shared));

        assert!(handlers.remove(EventType::Click, &shared));
        assert!(!handlers.has_handler(EventType::Click));
        assert!(handlers.is_empty());
    }
}
