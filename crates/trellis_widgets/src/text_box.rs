//! Text box and password box
//!
//! Single-line boxes render as `<input>`; a text box with more than one row
//! renders as `<textarea>`. Password boxes are always single-line.
//!
//! The client sends the current text on `change`. An empty text is a real
//! value and replaces the stored text; only an absent value leaves it alone.

use tracing::trace;
use trellis_core::{EventType, Interaction, RenderSink, WidgetId};

use crate::render::{render_attrs_and_style, render_enabled, render_event_handlers};
use crate::tree::WidgetTree;
use crate::widget::{Node, Widget, WidgetKind};

#[derive(Debug)]
pub(crate) struct TextBoxData {
    pub(crate) text: String,
    pub(crate) password: bool,
    pub(crate) rows: u32,
    pub(crate) cols: u32,
}

/// Handle to a text box or password box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextBox {
    id: WidgetId,
}

impl Widget for TextBox {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl TextBox {
    /// Create a text box
    pub fn new(tree: &mut WidgetTree, text: impl Into<String>) -> Self {
        Self::create(tree, text.into(), false, "trl-TextBox")
    }

    /// Create a password box
    pub fn new_password(tree: &mut WidgetTree, text: impl Into<String>) -> Self {
        Self::create(tree, text.into(), true, "trl-PasswBox")
    }

    fn create(tree: &mut WidgetTree, text: String, password: bool, class: &str) -> Self {
        let data = TextBoxData {
            text,
            password,
            rows: tree.defaults().text_box_rows,
            cols: tree.defaults().text_box_cols,
        };
        let node = Node::new(WidgetKind::TextBox(data))
            .with_value_provider("encodeURIComponent(this.value)")
            .sync_on(EventType::Change)
            .with_class(class);
        Self {
            id: tree.insert(node),
        }
    }

    fn data<'t>(&self, tree: &'t WidgetTree) -> Option<&'t TextBoxData> {
        match &tree.node(self.id)?.kind {
            WidgetKind::TextBox(data) => Some(data),
            _ => None,
        }
    }

    /// Apply `f` to the data and mark the box dirty
    fn update(&self, tree: &mut WidgetTree, f: impl FnOnce(&mut TextBoxData)) {
        if let Some(WidgetKind::TextBox(data)) = tree.node_mut(self.id).map(|n| &mut n.kind) {
            f(data);
            tree.mark_dirty(self.id);
        }
    }

    pub fn text<'t>(&self, tree: &'t WidgetTree) -> &'t str {
        self.data(tree).map_or("", |d| d.text.as_str())
    }

    pub fn set_text(&self, tree: &mut WidgetTree, text: impl Into<String>) {
        let text = text.into();
        self.update(tree, |d| d.text = text);
    }

    pub fn is_password(&self, tree: &WidgetTree) -> bool {
        self.data(tree).is_some_and(|d| d.password)
    }

    pub fn rows(&self, tree: &WidgetTree) -> u32 {
        self.data(tree).map_or(0, |d| d.rows)
    }

    pub fn set_rows(&self, tree: &mut WidgetTree, rows: u32) {
        self.update(tree, |d| d.rows = rows);
    }

    pub fn cols(&self, tree: &WidgetTree) -> u32 {
        self.data(tree).map_or(0, |d| d.cols)
    }

    pub fn set_cols(&self, tree: &mut WidgetTree, cols: u32) {
        self.update(tree, |d| d.cols = cols);
    }

    pub fn is_read_only(&self, tree: &WidgetTree) -> bool {
        tree.attr(self.id, "readonly").is_some()
    }

    pub fn set_read_only(&self, tree: &mut WidgetTree, read_only: bool) {
        tree.set_attr(self.id, "readonly", if read_only { "readonly" } else { "" });
    }

    /// Maximum number of characters; `None` when unlimited
    pub fn max_length(&self, tree: &WidgetTree) -> Option<u32> {
        tree.attr(self.id, "maxlength")?.parse().ok()
    }

    pub fn set_max_length(&self, tree: &mut WidgetTree, max_length: Option<u32>) {
        let value = max_length.map(|n| n.to_string()).unwrap_or_default();
        tree.set_attr(self.id, "maxlength", &value);
    }
}

/// Fold the client-reported text. Present-but-empty clears the text.
pub(crate) fn preprocess(tree: &mut WidgetTree, id: WidgetId, interaction: &Interaction) {
    let Some(value) = interaction.comp_value() else {
        return;
    };
    if let Some(WidgetKind::TextBox(data)) = tree.node_mut(id).map(|n| &mut n.kind) {
        trace!(%id, len = value.len(), "text box value synced");
        data.text = value.to_string();
    }
}

pub(crate) fn render(id: WidgetId, node: &Node, data: &TextBoxData, sink: &mut dyn RenderSink) {
    if data.rows <= 1 || data.password {
        sink.write_str("<input");
        sink.write_attr("type", if data.password { "password" } else { "text" });
        sink.write_attr("size", &data.cols.to_string());
        render_attrs_and_style(id, node, sink);
        render_enabled(node, sink);
        render_event_handlers(id, node, sink);
        sink.write_attr("value", &data.text);
        sink.write_str("/>");
    } else {
        sink.write_str("<textarea");
        render_attrs_and_style(id, node, sink);
        render_enabled(node, sink);
        render_event_handlers(id, node, sink);
        sink.write_attr("rows", &data.rows.to_string());
        sink.write_attr("cols", &data.cols.to_string());
        sink.write_str(">\n");
        sink.write_text(&data.text);
        sink.write_str("</textarea>");
    }
}
