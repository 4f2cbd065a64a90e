//! Switch button - a two-sided ON/OFF toggle
//!
//! A switch is rendered as two sub-buttons, one per side. The sub-buttons
//! are only a visual surface: the switch's own boolean is authoritative and
//! the sub-buttons' classes are recomputed from it on every change.
//!
//! | state   | on side                          | off side                          |
//! |---------|----------------------------------|-----------------------------------|
//! | `true`  | `trl-SwitchButton-On-Active`     | `trl-SwitchButton-Off-Inactive`   |
//! | `false` | `trl-SwitchButton-On-Inactive`   | `trl-SwitchButton-Off-Active`     |
//!
//! The client reports the intended new state directly, so inbound values
//! are applied as-is rather than toggled.

use tracing::trace;
use trellis_core::{parse_bool, EventType, Interaction, RenderSink, WidgetId};

use crate::button::Button;
use crate::render::{render_attrs_and_style, render_event_handlers};
use crate::state_button::StateWidget;
use crate::tree::WidgetTree;
use crate::widget::{Node, Widget, WidgetKind};

const ON_ACTIVE: &str = "trl-SwitchButton-On-Active";
const ON_INACTIVE: &str = "trl-SwitchButton-On-Inactive";
const OFF_ACTIVE: &str = "trl-SwitchButton-Off-Active";
const OFF_INACTIVE: &str = "trl-SwitchButton-Off-Inactive";

#[derive(Debug)]
pub(crate) struct SwitchData {
    /// Sub-button of the ON side
    pub(crate) on: WidgetId,
    /// Sub-button of the OFF side
    pub(crate) off: WidgetId,
    pub(crate) state: bool,
}

/// Handle to a switch button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwitchButton {
    id: WidgetId,
}

impl Widget for SwitchButton {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl StateWidget for SwitchButton {
    fn state(&self, tree: &WidgetTree) -> bool {
        tree.switch(self.id).is_some_and(|d| d.state)
    }

    fn set_state(&self, tree: &mut WidgetTree, state: bool) {
        tree.set_switch_state(self.id, state, true);
    }
}

impl SwitchButton {
    /// Create a switch in the OFF state, with the tree's default side texts
    pub fn new(tree: &mut WidgetTree) -> Self {
        let on_text = tree.defaults().switch_on_text.clone();
        let off_text = tree.defaults().switch_off_text.clone();
        let on = tree.insert(Button::node(on_text).with_class(ON_INACTIVE));
        let off = tree.insert(Button::node(off_text).with_class(OFF_ACTIVE));

        let provider = format!(
            "getAndUpdateSwitchBtnValue(event,'{}','{}')",
            on.to_raw(),
            off.to_raw()
        );
        let node = Node::new(WidgetKind::Switch(SwitchData {
            on,
            off,
            state: false,
        }))
        .with_value_provider(provider)
        .sync_on(EventType::Click)
        .with_class("trl-SwitchButton")
        .with_attr("cellspacing", "0")
        .with_attr("cellpadding", "0");
        let id = tree.insert(node);

        for part in [on, off] {
            if let Some(node) = tree.node_mut(part) {
                node.parent = Some(id);
            }
        }
        Self { id }
    }

    /// Sub-button of the ON side
    pub fn on_button(&self, tree: &WidgetTree) -> Option<Button> {
        tree.switch(self.id).map(|d| Button::from_id(d.on))
    }

    /// Sub-button of the OFF side
    pub fn off_button(&self, tree: &WidgetTree) -> Option<Button> {
        tree.switch(self.id).map(|d| Button::from_id(d.off))
    }

    /// Text of the ON side
    pub fn on_text<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        match self.on_button(tree) {
            Some(button) => button.text(tree),
            None => "",
        }
    }

    /// Text of the OFF side
    pub fn off_text<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        match self.off_button(tree) {
            Some(button) => button.text(tree),
            None => "",
        }
    }

    /// Set the texts of both sides
    pub fn set_on_off(&self, tree: &mut WidgetTree, on: impl Into<String>, off: impl Into<String>) {
        let Some((on_button, off_button)) = self.on_button(tree).zip(self.off_button(tree)) else {
            return;
        };
        on_button.set_text(tree, on);
        off_button.set_text(tree, off);
    }
}

impl WidgetTree {
    pub(crate) fn switch(&self, id: WidgetId) -> Option<&SwitchData> {
        match &self.node(id)?.kind {
            WidgetKind::Switch(data) => Some(data),
            _ => None,
        }
    }

    /// Set a switch's state and restyle both sides. `mark_self` is false when
    /// folding a value the client already shows.
    pub(crate) fn set_switch_state(&mut self, id: WidgetId, state: bool, mark_self: bool) {
        let Some(WidgetKind::Switch(data)) = self.node_mut(id).map(|n| &mut n.kind) else {
            return;
        };
        if data.state == state {
            return;
        }
        data.state = state;
        let (on, off) = (data.on, data.off);

        let (on_class, off_class) = if state {
            (ON_ACTIVE, OFF_INACTIVE)
        } else {
            (ON_INACTIVE, OFF_ACTIVE)
        };
        if let Some(node) = self.node_mut(on) {
            node.style.set_class(on_class);
        }
        if let Some(node) = self.node_mut(off) {
            node.style.set_class(off_class);
        }

        if mark_self {
            self.mark_dirty(id);
        }
    }
}

/// Fold the client-reported switch state. Absent, empty or malformed values
/// leave the state unchanged.
pub(crate) fn preprocess(tree: &mut WidgetTree, id: WidgetId, interaction: &Interaction) {
    let Some(value) = interaction.comp_value().filter(|v| !v.is_empty()) else {
        return;
    };
    match parse_bool(value) {
        Some(state) => tree.set_switch_state(id, state, false),
        None => trace!(%id, value, "ignoring malformed switch value"),
    }
}

pub(crate) fn render(
    tree: &WidgetTree,
    id: WidgetId,
    node: &Node,
    data: &SwitchData,
    sink: &mut dyn RenderSink,
) {
    sink.write_str("<table");
    render_attrs_and_style(id, node, sink);
    render_event_handlers(id, node, sink);
    sink.write_str("><tr>");
    for part in [data.on, data.off] {
        sink.write_str("<td width=\"50%\">");
        tree.render(part, sink);
        sink.write_str("</td>");
    }
    sink.write_str("</tr></table>");
}
