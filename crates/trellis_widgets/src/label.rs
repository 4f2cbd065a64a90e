//! Label - static text

use trellis_core::{RenderSink, WidgetId};

use crate::render::{render_attrs_and_style, render_event_handlers};
use crate::tree::WidgetTree;
use crate::widget::{Node, Widget, WidgetKind};

#[derive(Debug)]
pub(crate) struct LabelData {
    pub(crate) text: String,
}

/// Handle to a label widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label {
    id: WidgetId,
}

impl Widget for Label {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl Label {
    pub fn new(tree: &mut WidgetTree, text: impl Into<String>) -> Self {
        let node = Node::new(WidgetKind::Label(LabelData { text: text.into() }))
            .with_class("trl-Label");
        Self {
            id: tree.insert(node),
        }
    }

    pub fn text<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        match tree.node(self.id).map(|n| &n.kind) {
            Some(WidgetKind::Label(data)) => &data.text,
            _ => "",
        }
    }

    pub fn set_text(&self, tree: &mut WidgetTree, text: impl Into<String>) {
        if let Some(WidgetKind::Label(data)) = tree.node_mut(self.id).map(|n| &mut n.kind) {
            data.text = text.into();
            tree.mark_dirty(self.id);
        }
    }
}

pub(crate) fn render(id: WidgetId, node: &Node, data: &LabelData, sink: &mut dyn RenderSink) {
    sink.write_str("<span");
    render_attrs_and_style(id, node, sink);
    render_event_handlers(id, node, sink);
    sink.write_str(">");
    sink.write_text(&data.text);
    sink.write_str("</span>");
}
