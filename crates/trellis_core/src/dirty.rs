//! Dirty tracking for incremental re-renders
//!
//! Components whose rendered output is stale are marked here. Marking is
//! idempotent and keeps first-mark order, so flushing is deterministic.
//! [`DirtyTracker::roots`] reduces the set to the minimal subtrees that need
//! re-rendering: a dirty component under a dirty ancestor is covered by the
//! ancestor's full render.

use indexmap::IndexSet;

use crate::id::WidgetId;

/// Set of components that need re-rendering
#[derive(Clone, Debug, Default)]
pub struct DirtyTracker {
    dirty: IndexSet<WidgetId>,
}

impl DirtyTracker {
    /// Create a new dirty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a component as dirty
    pub fn mark(&mut self, id: WidgetId) {
        self.dirty.insert(id);
    }

    /// Drop a component from the set (e.g. it was destroyed)
    pub fn unmark(&mut self, id: WidgetId) {
        self.dirty.shift_remove(&id);
    }

    /// Check if a component is dirty
    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty.contains(&id)
    }

    /// Check if any component is dirty
    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Dirty components in marking order
    pub fn iter(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.dirty.iter().copied()
    }

    /// Dirty components that have no dirty ancestor, in marking order.
    ///
    /// `parent_of` walks one step up the tree.
    pub fn roots<F>(&self, parent_of: F) -> Vec<WidgetId>
    where
        F: Fn(WidgetId) -> Option<WidgetId>,
    {
        self.dirty
            .iter()
            .copied()
            .filter(|&id| {
                let mut current = parent_of(id);
                while let Some(ancestor) = current {
                    if self.dirty.contains(&ancestor) {
                        return false;
                    }
                    current = parent_of(ancestor);
                }
                true
            })
            .collect()
    }

    /// Take the minimal dirty roots and clear the tracker
    pub fn take_roots<F>(&mut self, parent_of: F) -> Vec<WidgetId>
    where
        F: Fn(WidgetId) -> Option<WidgetId>,
    {
        let roots = self.roots(parent_of);
        self.clear_all();
        roots
    }

    /// Clear all dirty flags
    pub fn clear_all(&mut self) {
        self.dirty.clear();
    }
}
