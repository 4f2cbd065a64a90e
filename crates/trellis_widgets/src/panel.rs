//! Panel - an ordered container of child widgets
//!
//! Render order is sequence order. A child has at most one owning container;
//! adding an owned child fails until it is removed from its owner.
//!
//! # Example
//!
//! ```rust
//! use trellis_widgets::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let panel = Panel::new(&mut tree);
//! let label = Label::new(&mut tree, "Hello");
//!
//! panel.add(&mut tree, label).unwrap();
//! assert_eq!(panel.index_of(&tree, label), Some(0));
//!
//! assert!(panel.remove(&mut tree, label));
//! assert!(panel.is_empty(&tree));
//! ```

use rustc_hash::FxHashMap;
use trellis_core::{RenderSink, WidgetId};

use crate::error::TreeError;
use crate::layout::{CellFmt, HAlign, Layout, VAlign};
use crate::render::{render_attrs_and_style, render_event_handlers};
use crate::tree::WidgetTree;
use crate::widget::{Node, Widget, WidgetKind};

/// Children and layout of a container
#[derive(Debug, Default)]
pub(crate) struct PanelData {
    pub(crate) children: Vec<WidgetId>,
    /// Cell formatting per child; absent means default formatting
    pub(crate) cell_fmts: FxHashMap<WidgetId, CellFmt>,
    pub(crate) layout: Layout,
    pub(crate) h_align: HAlign,
    pub(crate) v_align: VAlign,
}

impl PanelData {
    pub(crate) fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Open the layout cell of `child`
    pub(crate) fn render_cell_open(&self, child: WidgetId, sink: &mut dyn RenderSink) {
        match self.cell_fmts.get(&child) {
            Some(fmt) => fmt.render_open_with("td", self.h_align, self.v_align, sink),
            None => CellFmt::default().render_open_with("td", self.h_align, self.v_align, sink),
        }
    }
}

/// Handle to a panel widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Panel {
    id: WidgetId,
}

impl Widget for Panel {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl Panel {
    /// Create a vertical panel
    pub fn new(tree: &mut WidgetTree) -> Self {
        Self::with_layout(tree, Layout::Vertical)
    }

    /// Create a panel with the given layout
    pub fn with_layout(tree: &mut WidgetTree, layout: Layout) -> Self {
        let node = Node::new(WidgetKind::Panel(PanelData::with_layout(layout)))
            .with_class("trl-Panel");
        Self {
            id: tree.insert(node),
        }
    }

    /// Wrap an existing panel id
    pub fn from_id(tree: &WidgetTree, id: WidgetId) -> Option<Self> {
        matches!(tree.node(id)?.kind, WidgetKind::Panel(_)).then_some(Self { id })
    }

    /// Append a child
    pub fn add(&self, tree: &mut WidgetTree, child: impl Widget) -> Result<(), TreeError> {
        tree.add_child(self.id, child.id())
    }

    /// Detach a child; returns whether it was found
    pub fn remove(&self, tree: &mut WidgetTree, child: impl Widget) -> bool {
        tree.remove_child(self.id, child.id())
    }

    /// Detach all children
    pub fn clear(&self, tree: &mut WidgetTree) {
        for child in tree.children(self.id).to_vec() {
            tree.detach(self.id, child);
        }
    }

    pub fn len(&self, tree: &WidgetTree) -> usize {
        tree.child_count(self.id)
    }

    pub fn is_empty(&self, tree: &WidgetTree) -> bool {
        self.len(tree) == 0
    }

    pub fn child_at(&self, tree: &WidgetTree, index: usize) -> Option<WidgetId> {
        tree.child_at(self.id, index)
    }

    pub fn index_of(&self, tree: &WidgetTree, child: impl Widget) -> Option<usize> {
        tree.index_of(self.id, child.id())
    }

    pub fn layout(&self, tree: &WidgetTree) -> Layout {
        tree.panel_data(self.id).map(|d| d.layout).unwrap_or_default()
    }

    pub fn set_layout(&self, tree: &mut WidgetTree, layout: Layout) {
        if let Some(data) = tree.panel_data_mut(self.id) {
            data.layout = layout;
            tree.mark_dirty(self.id);
        }
    }

    /// Default alignment of the cells
    pub fn align(&self, tree: &WidgetTree) -> (HAlign, VAlign) {
        tree.panel_data(self.id)
            .map(|d| (d.h_align, d.v_align))
            .unwrap_or_default()
    }

    pub fn set_align(&self, tree: &mut WidgetTree, h_align: HAlign, v_align: VAlign) {
        if let Some(data) = tree.panel_data_mut(self.id) {
            data.h_align = h_align;
            data.v_align = v_align;
            tree.mark_dirty(self.id);
        }
    }

    /// Cell formatting of a child; `None` if it is not a child
    pub fn cell_fmt_mut<'t>(
        &self,
        tree: &'t mut WidgetTree,
        child: impl Widget,
    ) -> Option<&'t mut CellFmt> {
        tree.cell_fmt_mut(self.id, child.id())
    }
}

impl WidgetTree {
    /// Cell formatting of `child` inside any container; marks the container dirty
    pub(crate) fn cell_fmt_mut(&mut self, parent: WidgetId, child: WidgetId) -> Option<&mut CellFmt> {
        if !self.children(parent).contains(&child) {
            return None;
        }
        self.mark_dirty(parent);
        let data = self.panel_data_mut(parent)?;
        Some(data.cell_fmts.entry(child).or_default())
    }
}

/// Render a panel-like container (panels and tab bars)
pub(crate) fn render(
    tree: &WidgetTree,
    id: WidgetId,
    node: &Node,
    data: &PanelData,
    sink: &mut dyn RenderSink,
) {
    match data.layout {
        Layout::Natural => {
            sink.write_str("<span");
            render_attrs_and_style(id, node, sink);
            render_event_handlers(id, node, sink);
            sink.write_str(">");
            for &child in &data.children {
                tree.render(child, sink);
            }
            sink.write_str("</span>");
        }
        Layout::Horizontal => {
            sink.write_str("<table");
            render_attrs_and_style(id, node, sink);
            render_event_handlers(id, node, sink);
            sink.write_str("><tr>");
            for &child in &data.children {
                data.render_cell_open(child, sink);
                tree.render(child, sink);
                sink.write_str("</td>");
            }
            sink.write_str("</tr></table>");
        }
        Layout::Vertical => {
            sink.write_str("<table");
            render_attrs_and_style(id, node, sink);
            render_event_handlers(id, node, sink);
            sink.write_str(">");
            for &child in &data.children {
                sink.write_str("<tr>");
                data.render_cell_open(child, sink);
                tree.render(child, sink);
                sink.write_str("</td></tr>");
            }
            sink.write_str("</table>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;

    #[test]
    fn test_add_sets_ownership() {
        let mut tree = WidgetTree::new();
        let panel = Panel::new(&mut tree);
        let a = Label::new(&mut tree, "a");
        let b = Label::new(&mut tree, "b");

        panel.add(&mut tree, a).unwrap();
        panel.add(&mut tree, b).unwrap();

        assert_eq!(panel.len(&tree), 2);
        assert_eq!(panel.child_at(&tree, 1), Some(b.id()));
        assert_eq!(tree.parent(a.id()), Some(panel.id()));
    }

    #[test]
    fn test_add_owned_child_fails() {
        let mut tree = WidgetTree::new();
        let first = Panel::new(&mut tree);
        let second = Panel::new(&mut tree);
        let label = Label::new(&mut tree, "x");

        first.add(&mut tree, label).unwrap();
        let err = second.add(&mut tree, label).unwrap_err();
        assert_eq!(
            err,
            TreeError::AlreadyAttached {
                child: label.id(),
                parent: first.id()
            }
        );
        assert!(second.is_empty(&tree));

        // After removal the child can move
        assert!(first.remove(&mut tree, label));
        second.add(&mut tree, label).unwrap();
        assert_eq!(tree.parent(label.id()), Some(second.id()));
    }

    #[test]
    fn test_add_rejects_cycles() {
        let mut tree = WidgetTree::new();
        let outer = Panel::new(&mut tree);
        let inner = Panel::new(&mut tree);
        outer.add(&mut tree, inner).unwrap();

        assert!(matches!(
            inner.add(&mut tree, outer),
            Err(TreeError::WouldCycle { .. })
        ));
        // An unowned panel cannot contain itself
        assert!(matches!(
            outer.add(&mut tree, outer),
            Err(TreeError::WouldCycle { .. })
        ));
        // An owned one is rejected as already attached first
        assert!(matches!(
            inner.add(&mut tree, inner),
            Err(TreeError::AlreadyAttached { .. })
        ));
    }

    #[test]
    fn test_remove_leaves_child_state() {
        let mut tree = WidgetTree::new();
        let panel = Panel::new(&mut tree);
        let label = Label::new(&mut tree, "keep me");
        panel.add(&mut tree, label).unwrap();
        tree.style_mut(label.id()).unwrap().add_class("custom");

        assert!(panel.remove(&mut tree, label));
        assert!(!panel.remove(&mut tree, label));

        assert_eq!(tree.parent(label.id()), None);
        assert_eq!(label.text(&tree), "keep me");
        assert!(tree.style(label.id()).unwrap().has_class("custom"));
    }

    #[test]
    fn test_clear() {
        let mut tree = WidgetTree::new();
        let panel = Panel::new(&mut tree);
        let labels: Vec<_> = (0..3).map(|i| Label::new(&mut tree, i.to_string())).collect();
        for label in &labels {
            panel.add(&mut tree, *label).unwrap();
        }

        panel.clear(&mut tree);
        assert!(panel.is_empty(&tree));
        assert!(labels.iter().all(|l| tree.parent(l.id()).is_none()));
    }

    #[test]
    fn test_render_layouts() {
        let mut tree = WidgetTree::new();
        let panel = Panel::with_layout(&mut tree, Layout::Horizontal);
        let a = Label::new(&mut tree, "a");
        let b = Label::new(&mut tree, "b");
        panel.add(&mut tree, a).unwrap();
        panel.add(&mut tree, b).unwrap();
        panel
            .cell_fmt_mut(&mut tree, b)
            .unwrap()
            .set_align(HAlign::Right, VAlign::Default);

        let html = tree.render_to_string(panel.id());
        assert!(html.starts_with("<table"));
        assert!(html.contains("<tr><td><span"));
        assert!(html.contains("<td align=\"right\"><span"));
        assert!(html.ends_with("</tr></table>"));

        panel.set_layout(&mut tree, Layout::Natural);
        let html = tree.render_to_string(panel.id());
        assert!(html.starts_with("<span"));
        assert!(!html.contains("<td"));
    }

    #[test]
    fn test_cell_fmt_only_for_children() {
        let mut tree = WidgetTree::new();
        let panel = Panel::new(&mut tree);
        let stranger = Label::new(&mut tree, "x");
        assert!(panel.cell_fmt_mut(&mut tree, stranger).is_none());
    }
}
