//! Session - one component tree per browser session
//!
//! A session processes each interaction to completion: dispatch into the
//! tree, take the dirty roots, and render each root's full subtree as a
//! fragment for the client to swap in. Interactions against one session are
//! serialized by the caller (`process` takes `&mut self`); independent
//! sessions share nothing and may run on different threads.

use serde::Serialize;
use tracing::{debug, trace};
use trellis_core::{EventType, Interaction, WidgetId};
use trellis_widgets::{Widget, WidgetTree};

use crate::config::ProtocolConfig;
use crate::error::Result;

/// Re-rendered markup of one dirty root
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Wire id of the component to replace
    pub id: u64,
    /// Full markup of the component's subtree
    pub markup: String,
}

/// A component tree bound to one client window
#[derive(Debug)]
pub struct Session {
    tree: WidgetTree,
    root: WidgetId,
    value_param: String,
}

impl Session {
    /// Create a session rendering `root`
    pub fn new(tree: WidgetTree, root: impl Widget, protocol: &ProtocolConfig) -> Self {
        Self {
            tree,
            root: root.id(),
            value_param: protocol.value_param.clone(),
        }
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    /// The window's root component
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Render the whole window, discarding pending dirty marks
    pub fn render_full(&mut self) -> String {
        self.tree.clear_dirty();
        self.tree.render_to_string(self.root)
    }

    /// Process one interaction and render the components it made stale
    ///
    /// Dirty components outside the window (detached ones) are dropped since
    /// the client does not display them.
    pub fn process(&mut self, interaction: &Interaction) -> Result<Vec<Fragment>> {
        let outcome = self.tree.dispatch(interaction)?;
        let roots = self.tree.take_dirty_roots();

        let fragments: Vec<Fragment> = roots
            .into_iter()
            .filter(|&id| {
                let shown = id == self.root || self.tree.is_ancestor(self.root, id);
                if !shown {
                    trace!(%id, "dropping dirty component outside the window");
                }
                shown
            })
            .map(|id| Fragment {
                id: id.to_raw(),
                markup: self.tree.render_to_string(id),
            })
            .collect();

        debug!(
            widget = %outcome.target,
            handlers = outcome.handlers_run,
            fragments = fragments.len(),
            "session processed interaction"
        );
        Ok(fragments)
    }

    /// Process an interaction given as raw form pairs
    ///
    /// Only pairs keyed by the configured value parameter carry the
    /// component value.
    pub fn process_form<'a, I>(
        &mut self,
        target: u64,
        event_type: EventType,
        pairs: I,
    ) -> Result<Vec<Fragment>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let interaction = Interaction::from_form(target, event_type, pairs, &self.value_param);
        self.process(&interaction)
    }
}
