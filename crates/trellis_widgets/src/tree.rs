//! Widget tree - owns every widget of one session
//!
//! The WidgetTree provides:
//! - Widget storage keyed by [`WidgetId`] (and radio groups by [`RadioGroupId`])
//! - Ownership of children by containers, with parent back-pointers
//! - Handler registration
//! - Dirty tracking for incremental re-renders
//!
//! Widget handles (`Panel`, `CheckBox`, `TabPanel`, ...) are thin `Copy`
//! wrappers around an id; all state lives here. A tree is never shared
//! between concurrent interactions: callers serialize interactions per tree,
//! and independent trees share nothing.

use std::sync::Arc;

use slotmap::SlotMap;
use tracing::{trace, warn};
use trellis_core::{DirtyTracker, EventType, RadioGroupId, Style, WidgetId};

use crate::config::WidgetDefaults;
use crate::error::TreeError;
use crate::handler::{EventCallback, EventContext};
use crate::panel::PanelData;
use crate::radio_group::RadioGroupData;
use crate::tab_panel::TabPanel;
use crate::widget::{Node, WidgetKind};

/// The component tree of one session
#[derive(Debug, Default)]
pub struct WidgetTree {
    widgets: SlotMap<WidgetId, Node>,
    groups: SlotMap<RadioGroupId, RadioGroupData>,
    dirty: DirtyTracker,
    defaults: WidgetDefaults,
}

impl WidgetTree {
    /// Create an empty tree with default widget settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree whose widgets start from `defaults`
    pub fn with_defaults(defaults: WidgetDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Defaults applied to new widgets
    pub fn defaults(&self) -> &WidgetDefaults {
        &self.defaults
    }

    // =========================================================================
    // Storage
    // =========================================================================

    pub(crate) fn insert(&mut self, node: Node) -> WidgetId {
        let kind = node.kind.name();
        let id = self.widgets.insert(node);
        trace!(%id, kind, "widget created");
        id
    }

    pub(crate) fn node(&self, id: WidgetId) -> Option<&Node> {
        self.widgets.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Option<&mut Node> {
        self.widgets.get_mut(id)
    }

    pub(crate) fn insert_group(&mut self, group: RadioGroupData) -> RadioGroupId {
        self.groups.insert(group)
    }

    pub(crate) fn group(&self, id: RadioGroupId) -> Option<&RadioGroupData> {
        self.groups.get(id)
    }

    pub(crate) fn group_mut(&mut self, id: RadioGroupId) -> Option<&mut RadioGroupData> {
        self.groups.get_mut(id)
    }

    /// Check if a widget is alive in this tree
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of live widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    // =========================================================================
    // Common Properties
    // =========================================================================

    /// The container owning a widget
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.widgets.get(id).and_then(|n| n.parent)
    }

    /// Get an HTML attribute
    pub fn attr(&self, id: WidgetId, name: &str) -> Option<&str> {
        self.widgets.get(id)?.attrs.get(name)
    }

    /// Set an HTML attribute (empty value removes it) and mark the widget dirty
    pub fn set_attr(&mut self, id: WidgetId, name: &str, value: &str) -> bool {
        let Some(node) = self.widgets.get_mut(id) else {
            return false;
        };
        node.attrs.set(name, value);
        self.dirty.mark(id);
        true
    }

    /// Get a widget's style
    pub fn style(&self, id: WidgetId) -> Option<&Style> {
        self.widgets.get(id).map(|n| &n.style)
    }

    /// Get a widget's style for modification; marks the widget dirty
    pub fn style_mut(&mut self, id: WidgetId) -> Option<&mut Style> {
        let node = self.widgets.get_mut(id)?;
        self.dirty.mark(id);
        Some(&mut node.style)
    }

    /// Whether a widget accepts user interaction
    pub fn is_enabled(&self, id: WidgetId) -> bool {
        match self.widgets.get(id) {
            // A switch is enabled through its sub-buttons
            Some(Node {
                kind: WidgetKind::Switch(data),
                ..
            }) => self.is_enabled(data.on),
            Some(node) => node.enabled,
            None => false,
        }
    }

    /// Enable or disable a widget
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        let sub_buttons = match self.widgets.get(id) {
            Some(Node {
                kind: WidgetKind::Switch(data),
                ..
            }) => Some((data.on, data.off)),
            Some(_) => None,
            None => return,
        };

        if let Some((on, off)) = sub_buttons {
            self.set_enabled(on, enabled);
            self.set_enabled(off, enabled);
        } else if let Some(node) = self.widgets.get_mut(id) {
            node.enabled = enabled;
        }
        self.dirty.mark(id);
    }

    /// Whether a widget is rendered visible
    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|n| n.visible)
    }

    /// Show or hide a widget
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        if let Some(node) = self.widgets.get_mut(id) {
            if node.visible != visible {
                node.visible = visible;
                self.dirty.mark(id);
            }
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Have the client send the component value along with `event_type`
    pub fn add_sync_on(&mut self, id: WidgetId, event_type: EventType) {
        if let Some(node) = self.widgets.get_mut(id) {
            if !node.sync_on.contains(&event_type) {
                node.sync_on.push(event_type);
                self.dirty.mark(id);
            }
        }
    }

    /// Stop sending the component value along with `event_type`
    pub fn remove_sync_on(&mut self, id: WidgetId, event_type: EventType) {
        if let Some(node) = self.widgets.get_mut(id) {
            if let Some(pos) = node.sync_on.iter().position(|&e| e == event_type) {
                node.sync_on.remove(pos);
                self.dirty.mark(id);
            }
        }
    }

    /// Whether the component value is synchronized on `event_type`
    pub fn is_sync_on(&self, id: WidgetId, event_type: EventType) -> bool {
        self.widgets
            .get(id)
            .is_some_and(|n| n.sync_on.contains(&event_type))
    }

    /// Register an event handler for a widget
    ///
    /// Returns false if the widget does not exist.
    pub fn on<F>(&mut self, id: WidgetId, event_type: EventType, handler: F) -> bool
    where
        F: Fn(&mut EventContext<'_>) + Send + Sync + 'static,
    {
        self.insert_handler(id, event_type, Arc::new(handler))
    }

    pub(crate) fn insert_handler(
        &mut self,
        id: WidgetId,
        event_type: EventType,
        callback: EventCallback,
    ) -> bool {
        let Some(node) = self.widgets.get_mut(id) else {
            return false;
        };
        let newly_wired = !node.handlers.has_handler(event_type);
        node.handlers.insert(event_type, callback);
        // A first handler changes the rendered event attributes
        if newly_wired {
            self.dirty.mark(id);
        }
        true
    }

    /// Unregister a shared callback; returns whether it was registered
    pub(crate) fn remove_handler(
        &mut self,
        id: WidgetId,
        event_type: EventType,
        callback: &EventCallback,
    ) -> bool {
        let Some(node) = self.widgets.get_mut(id) else {
            return false;
        };
        if !node.handlers.remove(event_type, callback) {
            return false;
        }
        // The last handler going away changes the rendered event attributes.
        // Detached widgets are re-rendered by their next container.
        if !node.handlers.has_handler(event_type) && node.parent.is_some() {
            self.dirty.mark(id);
        }
        true
    }

    /// Register a click handler for a widget
    pub fn on_click<F>(&mut self, id: WidgetId, handler: F) -> bool
    where
        F: Fn(&mut EventContext<'_>) + Send + Sync + 'static,
    {
        self.on(id, EventType::Click, handler)
    }

    /// Number of handlers a widget has for an event type
    pub fn handler_count(&self, id: WidgetId, event_type: EventType) -> usize {
        self.widgets
            .get(id)
            .map_or(0, |n| n.handlers.count(event_type))
    }

    // =========================================================================
    // Structure
    // =========================================================================

    pub(crate) fn panel_data(&self, id: WidgetId) -> Option<&PanelData> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Panel(data) => Some(data),
            WidgetKind::TabPanel(data) => Some(&data.panel),
            WidgetKind::TabBar(data) => Some(&data.panel),
            _ => None,
        }
    }

    pub(crate) fn panel_data_mut(&mut self, id: WidgetId) -> Option<&mut PanelData> {
        match &mut self.widgets.get_mut(id)?.kind {
            WidgetKind::Panel(data) => Some(data),
            WidgetKind::TabPanel(data) => Some(&mut data.panel),
            WidgetKind::TabBar(data) => Some(&mut data.panel),
            _ => None,
        }
    }

    /// Ordered children of a container (content components for a tab panel)
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.panel_data(id).map_or(&[], |d| d.children.as_slice())
    }

    /// Every widget directly owned by `id`, including internal helper trees
    /// (a tab panel's tab bar, a switch's sub-buttons)
    pub(crate) fn owned(&self, id: WidgetId) -> Vec<WidgetId> {
        let Some(node) = self.widgets.get(id) else {
            return Vec::new();
        };
        match &node.kind {
            WidgetKind::Panel(data) => data.children.clone(),
            WidgetKind::TabBar(data) => data.panel.children.clone(),
            WidgetKind::TabPanel(data) => {
                let mut owned = data.panel.children.clone();
                owned.push(data.tab_bar);
                owned
            }
            WidgetKind::Switch(data) => vec![data.on, data.off],
            _ => Vec::new(),
        }
    }

    /// Number of children of a container
    pub fn child_count(&self, id: WidgetId) -> usize {
        self.children(id).len()
    }

    /// Child at a position
    pub fn child_at(&self, id: WidgetId, index: usize) -> Option<WidgetId> {
        self.children(id).get(index).copied()
    }

    /// Position of a child
    pub fn index_of(&self, id: WidgetId, child: WidgetId) -> Option<usize> {
        self.children(id).iter().position(|&c| c == child)
    }

    /// Whether `ancestor` is a strict ancestor of `id`
    pub fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Append a child to a panel
    ///
    /// Fails if the child is already owned elsewhere; it must be removed
    /// from its container first.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        match self.widgets.get(parent).map(|n| &n.kind) {
            None => return Err(TreeError::UnknownWidget(parent)),
            Some(WidgetKind::Panel(_)) => {}
            Some(WidgetKind::TabPanel(_) | WidgetKind::TabBar(_)) => {
                return Err(TreeError::RequiresPair(parent))
            }
            Some(_) => return Err(TreeError::NotAContainer(parent)),
        }
        self.check_attachable(parent, child)?;
        self.attach(parent, child);
        Ok(())
    }

    /// Detach a child from its container
    ///
    /// Returns whether the child was found. The removed widget's own state is
    /// left as is. Tab panels and tab bars remove the whole (selector,
    /// content) pair.
    pub fn remove_child(&mut self, parent: WidgetId, child: WidgetId) -> bool {
        let owner = match self.widgets.get(parent).map(|n| &n.kind) {
            Some(WidgetKind::Panel(_)) => return self.detach(parent, child).is_some(),
            Some(WidgetKind::TabPanel(_)) => parent,
            Some(WidgetKind::TabBar(data)) => {
                if !data.panel.children.contains(&child) {
                    return false;
                }
                data.owner
            }
            _ => return false,
        };
        TabPanel::from_id(owner).remove(self, child)
    }

    pub(crate) fn check_attachable(
        &self,
        parent: WidgetId,
        child: WidgetId,
    ) -> Result<(), TreeError> {
        let node = self
            .widgets
            .get(child)
            .ok_or(TreeError::UnknownWidget(child))?;
        if let Some(owner) = node.parent {
            warn!(%child, %owner, %parent, "rejected attach of an owned widget");
            return Err(TreeError::AlreadyAttached {
                child,
                parent: owner,
            });
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(TreeError::WouldCycle { child, parent });
        }
        Ok(())
    }

    /// Append `child` to the panel data of `parent`. Callers check
    /// attachability first.
    pub(crate) fn attach(&mut self, parent: WidgetId, child: WidgetId) {
        if let Some(data) = self.panel_data_mut(parent) {
            data.children.push(child);
        }
        if let Some(node) = self.widgets.get_mut(child) {
            node.parent = Some(parent);
        }
        self.dirty.mark(parent);
    }

    /// Remove `child` from the panel data of `parent`, returning its old index
    pub(crate) fn detach(&mut self, parent: WidgetId, child: WidgetId) -> Option<usize> {
        let data = self.panel_data_mut(parent)?;
        let index = data.children.iter().position(|&c| c == child)?;
        data.children.remove(index);
        data.cell_fmts.remove(&child);

        if let Some(node) = self.widgets.get_mut(child) {
            node.parent = None;
        }
        self.dirty.mark(parent);
        Some(index)
    }

    /// Widgets of the subtree rooted at `root`, depth-first, pre-order
    pub fn descendants(&self, root: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        if !self.contains(root) {
            return out;
        }
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.owned(id).into_iter().rev());
        }
        out
    }

    /// Depth-first search for a wire id in the subtree rooted at `root`,
    /// internal helper trees included
    pub fn find_by_id(&self, root: WidgetId, raw: u64) -> Option<WidgetId> {
        let target = WidgetId::from_raw(raw);
        if !self.contains(target) {
            return None;
        }
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if id == target {
                return Some(id);
            }
            stack.extend(self.owned(id).into_iter().rev());
        }
        None
    }

    /// Destroy a widget and its subtree
    ///
    /// The widget is first removed from its container. Internal parts of a
    /// composite widget (a switch's sub-buttons) cannot be destroyed on their own.
    pub fn destroy(&mut self, id: WidgetId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if let Some(parent) = self.parent(id) {
            self.remove_child(parent, id);
            if self.parent(id).is_some() {
                warn!(%id, %parent, "refusing to destroy an internal part of a composite widget");
                return false;
            }
        }

        for doomed in self.descendants(id) {
            if let Some(node) = self.widgets.remove(doomed) {
                if let WidgetKind::StateButton(data) = node.kind {
                    if let Some(group) = data.group.and_then(|g| self.groups.get_mut(g)) {
                        group.forget(doomed);
                    }
                }
            }
            self.dirty.unmark(doomed);
        }
        true
    }

    // =========================================================================
    // Dirty Tracking
    // =========================================================================

    /// Mark a widget as needing re-render; idempotent
    pub fn mark_dirty(&mut self, id: WidgetId) {
        if self.contains(id) {
            self.dirty.mark(id);
        }
    }

    /// Check if a specific widget needs re-rendering
    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty.is_dirty(id)
    }

    /// Check if any widgets need re-rendering
    pub fn has_dirty(&self) -> bool {
        self.dirty.has_dirty()
    }

    /// Dirty widgets with no dirty ancestor, in marking order
    pub fn dirty_roots(&self) -> Vec<WidgetId> {
        self.dirty.roots(|id| self.parent(id))
    }

    /// Take the dirty roots and clear all dirty flags
    pub fn take_dirty_roots(&mut self) -> Vec<WidgetId> {
        let widgets = &self.widgets;
        self.dirty
            .take_roots(|id| widgets.get(id).and_then(|n| n.parent))
    }

    /// Clear all dirty flags (call after rendering)
    pub fn clear_dirty(&mut self) {
        self.dirty.clear_all();
    }

    /// Get the dirty tracker
    pub fn dirty_tracker(&self) -> &DirtyTracker {
        &self.dirty
    }
}
