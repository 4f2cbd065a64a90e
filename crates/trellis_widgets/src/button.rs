//! Button - clickable text
//!
//! Plain buttons carry no state of their own. They are the usual tab
//! selectors and the two halves of a switch button.

use trellis_core::{RenderSink, WidgetId};

use crate::render::{render_attrs_and_style, render_enabled, render_event_handlers};
use crate::tree::WidgetTree;
use crate::widget::{Node, Widget, WidgetKind};

#[derive(Debug)]
pub(crate) struct ButtonData {
    pub(crate) text: String,
}

/// Handle to a button widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Button {
    id: WidgetId,
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl Button {
    pub fn new(tree: &mut WidgetTree, text: impl Into<String>) -> Self {
        Self {
            id: tree.insert(Self::node(text.into()).with_class("trl-Button")),
        }
    }

    /// Node for a bare button, also used for composite sub-buttons
    pub(crate) fn node(text: String) -> Node {
        Node::new(WidgetKind::Button(ButtonData { text }))
    }

    pub(crate) fn from_id(id: WidgetId) -> Self {
        Self { id }
    }

    pub fn text<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        match tree.node(self.id).map(|n| &n.kind) {
            Some(WidgetKind::Button(data)) => &data.text,
            _ => "",
        }
    }

    pub fn set_text(&self, tree: &mut WidgetTree, text: impl Into<String>) {
        if let Some(WidgetKind::Button(data)) = tree.node_mut(self.id).map(|n| &mut n.kind) {
            data.text = text.into();
            tree.mark_dirty(self.id);
        }
    }
}

pub(crate) fn render(id: WidgetId, node: &Node, data: &ButtonData, sink: &mut dyn RenderSink) {
    sink.write_str("<button type=\"button\"");
    render_attrs_and_style(id, node, sink);
    render_enabled(node, sink);
    render_event_handlers(id, node, sink);
    sink.write_str(">");
    sink.write_text(&data.text);
    sink.write_str("</button>");
}
