//! Radio groups
//!
//! A group is a named registry enforcing that at most one member radio
//! button is selected. Buttons refer to their group by [`RadioGroupId`];
//! the group only remembers which member is selected and which one was
//! selected before that. It never owns the buttons.

use tracing::debug;
use trellis_core::{RadioGroupId, WidgetId};

use crate::state_button::RadioButton;
use crate::tree::WidgetTree;

#[derive(Debug)]
pub(crate) struct RadioGroupData {
    /// Wire-level grouping key (the rendered `name` attribute)
    pub(crate) name: String,
    pub(crate) selected: Option<WidgetId>,
    pub(crate) prev_selected: Option<WidgetId>,
}

impl RadioGroupData {
    /// Make `selected` the selection, shifting the old one into the history slot
    pub(crate) fn set_selected(&mut self, selected: Option<WidgetId>) {
        debug!(group = %self.name, ?selected, prev = ?self.selected, "radio group selection");
        self.prev_selected = self.selected;
        self.selected = selected;
    }

    /// Drop references to a destroyed member
    pub(crate) fn forget(&mut self, member: WidgetId) {
        if self.selected == Some(member) {
            self.selected = None;
        }
        if self.prev_selected == Some(member) {
            self.prev_selected = None;
        }
    }
}

/// Handle to a radio group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RadioGroup {
    id: RadioGroupId,
}

impl RadioGroup {
    /// Create a new group
    pub fn new(tree: &mut WidgetTree, name: impl Into<String>) -> Self {
        let id = tree.insert_group(RadioGroupData {
            name: name.into(),
            selected: None,
            prev_selected: None,
        });
        Self { id }
    }

    pub(crate) fn from_id(id: RadioGroupId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> RadioGroupId {
        self.id
    }

    /// The group's name
    pub fn name<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        tree.group(self.id).map_or("", |g| g.name.as_str())
    }

    /// The selected member
    pub fn selected(&self, tree: &WidgetTree) -> Option<RadioButton> {
        tree.group(self.id)?.selected.map(RadioButton::from_id)
    }

    /// The member selected before the current selection
    pub fn prev_selected(&self, tree: &WidgetTree) -> Option<RadioButton> {
        tree.group(self.id)?.prev_selected.map(RadioButton::from_id)
    }
}
