//! State buttons - check boxes and radio buttons
//!
//! A state button holds a boolean state. Radio buttons additionally belong
//! to a [`RadioGroup`], and setting one selects it in the group while the
//! previously selected member is switched off:
//!
//! | group selection | new state | effect                                         |
//! |-----------------|-----------|------------------------------------------------|
//! | none            | `true`    | button becomes the selection                   |
//! | other button    | `true`    | other button set `false`, button becomes selection |
//! | this button     | `false`   | group selection becomes none                   |
//!
//! Setting a button to the state it already has does nothing at all.
//!
//! # Example
//!
//! ```rust
//! use trellis_widgets::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let group = RadioGroup::new(&mut tree, "size");
//! let small = RadioButton::new(&mut tree, "Small", group);
//! let large = RadioButton::new(&mut tree, "Large", group);
//!
//! small.set_state(&mut tree, true);
//! large.set_state(&mut tree, true);
//!
//! assert!(!small.state(&tree));
//! assert_eq!(group.selected(&tree), Some(large));
//! assert_eq!(group.prev_selected(&tree), Some(small));
//! ```

use tracing::trace;
use trellis_core::{parse_bool, EventType, Interaction, RadioGroupId, RenderSink, WidgetId};

use crate::radio_group::RadioGroup;
use crate::render::{render_attrs_and_style, render_enabled, render_event_handlers};
use crate::tree::WidgetTree;
use crate::widget::{Node, Widget, WidgetKind};

/// Boolean state shared by check boxes, radio buttons and switch buttons
pub trait StateWidget: Widget {
    /// Current state
    fn state(&self, tree: &WidgetTree) -> bool;

    /// Set the state; a no-op if unchanged
    fn set_state(&self, tree: &mut WidgetTree, state: bool);
}

/// Underlying `<input>` type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputType {
    CheckBox,
    Radio,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            InputType::CheckBox => "checkbox",
            InputType::Radio => "radio",
        }
    }
}

#[derive(Debug)]
pub(crate) struct StateButtonData {
    pub(crate) text: String,
    pub(crate) state: bool,
    pub(crate) input_type: InputType,
    pub(crate) group: Option<RadioGroupId>,
}

fn state_button_node(text: String, input_type: InputType, group: Option<RadioGroupId>) -> Node {
    Node::new(WidgetKind::StateButton(StateButtonData {
        text,
        state: false,
        input_type,
        group,
    }))
    .with_value_provider("this.checked")
    .sync_on(EventType::Click)
}

impl WidgetTree {
    pub(crate) fn state_button(&self, id: WidgetId) -> Option<&StateButtonData> {
        match &self.node(id)?.kind {
            WidgetKind::StateButton(data) => Some(data),
            _ => None,
        }
    }

    pub(crate) fn state_button_mut(&mut self, id: WidgetId) -> Option<&mut StateButtonData> {
        match &mut self.node_mut(id)?.kind {
            WidgetKind::StateButton(data) => Some(data),
            _ => None,
        }
    }

    /// Set a state button's state, managing its radio group.
    ///
    /// `mark_self` is false when folding a value the client already shows;
    /// a deselected group peer is always marked dirty.
    pub(crate) fn set_button_state(&mut self, id: WidgetId, state: bool, mark_self: bool) {
        let Some(data) = self.state_button(id) else {
            return;
        };
        if data.state == state {
            return;
        }

        if let Some(group_id) = data.group {
            let selected = self.group(group_id).and_then(|g| g.selected);
            match selected {
                None => {
                    if state {
                        self.select_in_group(group_id, Some(id));
                    }
                }
                Some(current) if state => {
                    if current != id {
                        RadioButton::from_id(current).set_state_prop(self, false);
                        self.mark_dirty(current);
                        self.select_in_group(group_id, Some(id));
                    }
                }
                Some(current) => {
                    if current == id {
                        self.select_in_group(group_id, None);
                    }
                }
            }
        }

        if let Some(data) = self.state_button_mut(id) {
            data.state = state;
        }
        if mark_self {
            self.mark_dirty(id);
        }
    }

    /// Set the state without any group bookkeeping
    pub(crate) fn set_state_prop(&mut self, id: WidgetId, state: bool) {
        if let Some(data) = self.state_button_mut(id) {
            data.state = state;
        }
    }

    fn select_in_group(&mut self, group_id: RadioGroupId, selected: Option<WidgetId>) {
        if let Some(group) = self.group_mut(group_id) {
            group.set_selected(selected);
        }
    }

    fn state_button_text(&self, id: WidgetId) -> &str {
        self.state_button(id).map_or("", |d| d.text.as_str())
    }

    fn set_state_button_text(&mut self, id: WidgetId, text: String) {
        if let Some(data) = self.state_button_mut(id) {
            data.text = text;
            self.mark_dirty(id);
        }
    }
}

/// Handle to a check box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckBox {
    id: WidgetId,
}

impl Widget for CheckBox {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl StateWidget for CheckBox {
    fn state(&self, tree: &WidgetTree) -> bool {
        tree.state_button(self.id).is_some_and(|d| d.state)
    }

    fn set_state(&self, tree: &mut WidgetTree, state: bool) {
        tree.set_button_state(self.id, state, true);
    }
}

impl CheckBox {
    /// Create an unchecked check box
    pub fn new(tree: &mut WidgetTree, text: impl Into<String>) -> Self {
        let node = state_button_node(text.into(), InputType::CheckBox, None).with_class("trl-CheckBox");
        Self {
            id: tree.insert(node),
        }
    }

    pub fn text<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        tree.state_button_text(self.id)
    }

    pub fn set_text(&self, tree: &mut WidgetTree, text: impl Into<String>) {
        tree.set_state_button_text(self.id, text.into());
    }
}

/// Handle to a radio button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RadioButton {
    id: WidgetId,
}

impl Widget for RadioButton {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl StateWidget for RadioButton {
    fn state(&self, tree: &WidgetTree) -> bool {
        tree.state_button(self.id).is_some_and(|d| d.state)
    }

    fn set_state(&self, tree: &mut WidgetTree, state: bool) {
        tree.set_button_state(self.id, state, true);
    }
}

impl RadioButton {
    /// Create an unselected radio button in `group`
    pub fn new(tree: &mut WidgetTree, text: impl Into<String>, group: RadioGroup) -> Self {
        let node = state_button_node(text.into(), InputType::Radio, Some(group.id()))
            .with_class("trl-RadioButton");
        Self {
            id: tree.insert(node),
        }
    }

    pub(crate) fn from_id(id: WidgetId) -> Self {
        Self { id }
    }

    /// The group this button belongs to
    pub fn group(&self, tree: &WidgetTree) -> Option<RadioGroup> {
        tree.state_button(self.id)?.group.map(RadioGroup::from_id)
    }

    /// Set the state without managing the group
    pub(crate) fn set_state_prop(&self, tree: &mut WidgetTree, state: bool) {
        tree.set_state_prop(self.id, state);
    }

    pub fn text<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        tree.state_button_text(self.id)
    }

    pub fn set_text(&self, tree: &mut WidgetTree, text: impl Into<String>) {
        tree.set_state_button_text(self.id, text.into());
    }
}

/// Fold the client-reported checked flag into the button's state.
///
/// Absent, empty or malformed values leave the state unchanged.
pub(crate) fn preprocess(tree: &mut WidgetTree, id: WidgetId, interaction: &Interaction) {
    let Some(value) = interaction.comp_value().filter(|v| !v.is_empty()) else {
        return;
    };
    match parse_bool(value) {
        Some(state) => tree.set_button_state(id, state, false),
        None => trace!(%id, value, "ignoring malformed state value"),
    }
}

pub(crate) fn render(
    tree: &WidgetTree,
    id: WidgetId,
    node: &Node,
    data: &StateButtonData,
    sink: &mut dyn RenderSink,
) {
    let input_id = format!("{}-input", id.to_raw());

    // Input and label need a wrapper to carry the component id
    sink.write_str("<span");
    render_attrs_and_style(id, node, sink);
    sink.write_str(">");

    sink.write_str("<input");
    sink.write_attr("type", data.input_type.as_str());
    sink.write_attr("id", &input_id);
    if let Some(group) = data.group.and_then(|g| tree.group(g)) {
        sink.write_attr("name", &group.name);
    }
    if data.state {
        sink.write_attr("checked", "checked");
    }
    render_enabled(node, sink);
    render_event_handlers(id, node, sink);
    sink.write_str(">");

    sink.write_str("<label");
    sink.write_attr("for", &input_id);
    sink.write_str(">");
    sink.write_text(&data.text);
    sink.write_str("</label></span>");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic pseudo-random sequence for state churn tests
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 >> 33
        }
    }

    #[test]
    fn test_checkbox_state() {
        let mut tree = WidgetTree::new();
        let checkbox = CheckBox::new(&mut tree, "Agree");
        assert!(!checkbox.state(&tree));

        checkbox.set_state(&mut tree, true);
        assert!(checkbox.state(&tree));
        assert!(tree.is_dirty(checkbox.id()));
    }

    #[test]
    fn test_same_state_is_noop() {
        let mut tree = WidgetTree::new();
        let group = RadioGroup::new(&mut tree, "g");
        let a = RadioButton::new(&mut tree, "A", group);
        a.set_state(&mut tree, true);
        tree.clear_dirty();

        a.set_state(&mut tree, true);

        assert!(!tree.has_dirty());
        assert_eq!(group.selected(&tree), Some(a));
        // History untouched by the redundant call
        assert_eq!(group.prev_selected(&tree), None);
    }

    #[test]
    fn test_radio_group_scenario() {
        let mut tree = WidgetTree::new();
        let group = RadioGroup::new(&mut tree, "g");
        let a = RadioButton::new(&mut tree, "A", group);
        let b = RadioButton::new(&mut tree, "B", group);

        a.set_state(&mut tree, true);
        assert!(a.state(&tree));
        assert!(!b.state(&tree));
        assert_eq!(group.selected(&tree), Some(a));
        assert_eq!(group.prev_selected(&tree), None);

        b.set_state(&mut tree, true);
        assert!(!a.state(&tree));
        assert!(b.state(&tree));
        assert_eq!(group.selected(&tree), Some(b));
        assert_eq!(group.prev_selected(&tree), Some(a));
        // The forced-off peer needs re-rendering too
        assert!(tree.is_dirty(a.id()));
    }

    #[test]
    fn test_deselect_selected_clears_group() {
        let mut tree = WidgetTree::new();
        let group = RadioGroup::new(&mut tree, "g");
        let a = RadioButton::new(&mut tree, "A", group);

        a.set_state(&mut tree, true);
        a.set_state(&mut tree, false);

        assert!(!a.state(&tree));
        assert_eq!(group.selected(&tree), None);
        assert_eq!(group.prev_selected(&tree), Some(a));
        assert_eq!(a.group(&tree), Some(group));
    }

    #[test]
    fn test_group_exclusivity_under_churn() {
        let mut tree = WidgetTree::new();
        let group = RadioGroup::new(&mut tree, "g");
        let buttons: Vec<_> = (0..4)
            .map(|i| RadioButton::new(&mut tree, format!("r{i}"), group))
            .collect();
        let mut rng = Lcg(7);

        for _ in 0..500 {
            let button = buttons[(rng.next() % 4) as usize];
            let state = rng.next() % 3 != 0;
            let selected_before = group.selected(&tree);
            let prev_before = group.prev_selected(&tree);

            button.set_state(&mut tree, state);

            let on: Vec<_> = buttons.iter().filter(|b| b.state(&tree)).collect();
            assert!(on.len() <= 1);
            assert_eq!(on.first().copied().copied(), group.selected(&tree));

            if group.selected(&tree) != selected_before {
                assert_eq!(group.prev_selected(&tree), selected_before);
            } else {
                assert_eq!(group.prev_selected(&tree), prev_before);
            }
        }
    }

    #[test]
    fn test_groups_are_independent() {
        let mut tree = WidgetTree::new();
        let g1 = RadioGroup::new(&mut tree, "g1");
        let g2 = RadioGroup::new(&mut tree, "g2");
        let a = RadioButton::new(&mut tree, "A", g1);
        let b = RadioButton::new(&mut tree, "B", g2);

        a.set_state(&mut tree, true);
        b.set_state(&mut tree, true);

        assert!(a.state(&tree));
        assert!(b.state(&tree));
    }

    #[test]
    fn test_set_state_prop_bypasses_group() {
        let mut tree = WidgetTree::new();
        let group = RadioGroup::new(&mut tree, "g");
        let a = RadioButton::new(&mut tree, "A", group);

        a.set_state_prop(&mut tree, true);
        assert!(a.state(&tree));
        assert_eq!(group.selected(&tree), None);
    }

    #[test]
    fn test_render_radio() {
        let mut tree = WidgetTree::new();
        let group = RadioGroup::new(&mut tree, "color");
        let red = RadioButton::new(&mut tree, "Red", group);
        red.set_state(&mut tree, true);

        let html = tree.render_to_string(red.id());
        let raw = red.id().to_raw();
        assert!(html.starts_with("<span"));
        assert!(html.contains("class=\"trl-RadioButton\""));
        assert!(html.contains(&format!("<input type=\"radio\" id=\"{raw}-input\" name=\"color\" checked=\"checked\"")));
        assert!(html.contains(&format!(
            "onclick=\"sev(event,{},{raw},this.checked)\"",
            EventType::Click.code()
        )));
        assert!(html.ends_with(&format!("<label for=\"{raw}-input\">Red</label></span>")));
    }

    #[test]
    fn test_destroyed_member_leaves_group() {
        let mut tree = WidgetTree::new();
        let group = RadioGroup::new(&mut tree, "g");
        let a = RadioButton::new(&mut tree, "A", group);
        a.set_state(&mut tree, true);

        assert!(tree.destroy(a.id()));
        assert_eq!(group.selected(&tree), None);
        assert!(!a.state(&tree));
    }
}
