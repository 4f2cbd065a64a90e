//! Interaction dispatch
//!
//! One inbound interaction is processed to completion:
//!
//! 1. resolve the target component from its wire id
//! 2. fold the value payload into the target's state (preprocessing)
//! 3. run the target's handlers for the event kind, in registration order
//! 4. report the minimal set of dirty roots
//!
//! Dispatch does not clear dirty flags. The caller renders the roots and
//! then takes or clears them.

use tracing::{debug, warn};
use trellis_core::{Interaction, WidgetId};

use crate::error::DispatchError;
use crate::handler::{EventCallback, EventContext};
use crate::tree::WidgetTree;
use crate::widget::WidgetKind;
use crate::{state_button, switch_button, text_box};

/// Result of dispatching one interaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The resolved target
    pub target: WidgetId,
    /// Number of handlers that ran
    pub handlers_run: usize,
    /// Dirty components with no dirty ancestor, in marking order
    pub dirty_roots: Vec<WidgetId>,
}

impl WidgetTree {
    /// Resolve a wire id to a live widget
    pub fn resolve(&self, raw: u64) -> Option<WidgetId> {
        let id = WidgetId::from_raw(raw);
        self.contains(id).then_some(id)
    }

    /// Process one interaction against this tree
    pub fn dispatch(&mut self, interaction: &Interaction) -> Result<DispatchOutcome, DispatchError> {
        let Some(target) = self.resolve(interaction.target) else {
            warn!(raw_id = interaction.target, "interaction for unknown component");
            return Err(DispatchError::UnknownTarget(interaction.target));
        };
        let event_type = interaction.event_type;
        debug!(%target, ?event_type, has_value = interaction.has_value(), "dispatching interaction");

        self.preprocess(target, interaction);

        // Handlers may re-register or destroy widgets, so run a snapshot
        let handlers: Vec<EventCallback> = self
            .node(target)
            .and_then(|n| n.handlers.get(event_type))
            .map(<[EventCallback]>::to_vec)
            .unwrap_or_default();
        for handler in &handlers {
            let mut ctx = EventContext::new(self, target, interaction);
            handler(&mut ctx);
        }

        let dirty_roots = self.dirty_roots();
        debug!(%target, handlers = handlers.len(), dirty = dirty_roots.len(), "interaction processed");
        Ok(DispatchOutcome {
            target,
            handlers_run: handlers.len(),
            dirty_roots,
        })
    }

    /// Fold the interaction's value payload into the target's state
    fn preprocess(&mut self, target: WidgetId, interaction: &Interaction) {
        let preprocess: fn(&mut WidgetTree, WidgetId, &Interaction) =
            match self.node(target).map(|n| &n.kind) {
                Some(WidgetKind::StateButton(_)) => state_button::preprocess,
                Some(WidgetKind::Switch(_)) => switch_button::preprocess,
                Some(WidgetKind::TextBox(_)) => text_box::preprocess,
                _ => return,
            };
        preprocess(self, target, interaction);
    }
}
