//! Tab panel - content components with an index-aligned selector bar
//!
//! A tab panel owns a sequence of content components and an internal
//! [`TabBar`] holding one selector per content component. Position `i` in
//! the content sequence is always paired with position `i` in the tab bar;
//! pairs are only ever added and removed together.
//!
//! At most one tab is selected. Only the selected content is rendered,
//! unselected content is omitted from the markup entirely.
//!
//! # Selection after removal
//!
//! | removed index          | new selection                                    |
//! |------------------------|--------------------------------------------------|
//! | before the selection   | same tab (index shifts down by one)              |
//! | the selection          | tab now at that index, else the new last, else none |
//! | after the selection    | unchanged                                        |
//!
//! # Example
//!
//! ```rust
//! use trellis_widgets::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let tabs = TabPanel::new(&mut tree);
//! for name in ["One", "Two", "Three"] {
//!     let content = Label::new(&mut tree, format!("{name} content"));
//!     tabs.add_string(&mut tree, name, content).unwrap();
//! }
//! assert_eq!(tabs.selected(&tree), Some(0));
//!
//! tabs.set_selected(&mut tree, Some(2));
//! let second = tabs.child_at(&tree, 1).unwrap();
//! assert!(tabs.remove(&mut tree, second));
//! assert_eq!(tabs.selected(&tree), Some(1));
//! assert_eq!(tabs.len(&tree), 2);
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trellis_core::{EventType, RenderSink, WidgetId};

use crate::error::TreeError;
use crate::handler::{EventCallback, EventContext};
use crate::label::Label;
use crate::layout::{CellFmt, HAlign, Layout, VAlign};
use crate::panel::PanelData;
use crate::render::{render_attrs_and_style, render_event_handlers};
use crate::tree::WidgetTree;
use crate::widget::{Node, Widget, WidgetKind};

const SELECTED: &str = "trl-TabBar-Selected";
const NOT_SELECTED: &str = "trl-TabBar-NotSelected";

/// Where the tab bar sits relative to the content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabBarPlacement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TabBarPlacement {
    fn class(self) -> &'static str {
        match self {
            TabBarPlacement::Top => "trl-TabBar-Top",
            TabBarPlacement::Bottom => "trl-TabBar-Bottom",
            TabBarPlacement::Left => "trl-TabBar-Left",
            TabBarPlacement::Right => "trl-TabBar-Right",
        }
    }

    /// Layout and cell alignment of the tab bar
    fn bar_layout(self) -> (Layout, HAlign, VAlign) {
        match self {
            TabBarPlacement::Top => (Layout::Horizontal, HAlign::Left, VAlign::Bottom),
            TabBarPlacement::Bottom => (Layout::Horizontal, HAlign::Left, VAlign::Top),
            TabBarPlacement::Left => (Layout::Vertical, HAlign::Right, VAlign::Top),
            TabBarPlacement::Right => (Layout::Vertical, HAlign::Left, VAlign::Top),
        }
    }
}

#[derive(Debug)]
pub(crate) struct TabPanelData {
    /// Content components
    pub(crate) panel: PanelData,
    pub(crate) tab_bar: WidgetId,
    pub(crate) placement: TabBarPlacement,
    /// Formatting of the tab bar region
    pub(crate) tab_bar_fmt: CellFmt,
    pub(crate) selected: Option<usize>,
    /// Click wiring installed on each selector, keyed by selector
    pub(crate) wiring: FxHashMap<WidgetId, SelectorWiring>,
}

/// What the panel added to a selector when pairing it
pub(crate) struct SelectorWiring {
    on_click: EventCallback,
    /// Created by the panel itself, destroyed with its pair
    created: bool,
}

impl std::fmt::Debug for SelectorWiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorWiring")
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub(crate) struct TabBarData {
    /// Selectors
    pub(crate) panel: PanelData,
    /// The tab panel this bar belongs to
    pub(crate) owner: WidgetId,
}

/// Handle to a tab panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabPanel {
    id: WidgetId,
}

impl Widget for TabPanel {
    fn id(&self) -> WidgetId {
        self.id
    }
}

/// Handle to the selector bar of a tab panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabBar {
    id: WidgetId,
}

impl Widget for TabBar {
    fn id(&self) -> WidgetId {
        self.id
    }
}

impl TabPanel {
    /// Create an empty tab panel; the tab bar placement comes from the tree's defaults
    pub fn new(tree: &mut WidgetTree) -> Self {
        let bar = Node::new(WidgetKind::TabBar(TabBarData {
            panel: PanelData::default(),
            owner: WidgetId::default(),
        }))
        .with_class("trl-TabBar")
        .with_attr("cellspacing", "0")
        .with_attr("cellpadding", "0");
        let tab_bar = tree.insert(bar);

        let node = Node::new(WidgetKind::TabPanel(TabPanelData {
            panel: PanelData::default(),
            tab_bar,
            placement: TabBarPlacement::Top,
            tab_bar_fmt: CellFmt::default(),
            selected: None,
            wiring: FxHashMap::default(),
        }))
        .with_class("trl-TabPanel")
        .with_attr("cellspacing", "0")
        .with_attr("cellpadding", "0");
        let id = tree.insert(node);

        if let Some(node) = tree.node_mut(tab_bar) {
            node.parent = Some(id);
            if let WidgetKind::TabBar(data) = &mut node.kind {
                data.owner = id;
            }
        }
        if let Some(data) = tree.tab_panel_mut(id) {
            data.tab_bar_fmt.set_align(HAlign::Left, VAlign::Top);
        }

        let panel = Self { id };
        let placement = tree.defaults().tab_bar_placement;
        panel.apply_placement(tree, None, placement);
        panel
    }

    pub(crate) fn from_id(id: WidgetId) -> Self {
        Self { id }
    }

    /// Wrap an existing tab panel id
    pub fn lookup(tree: &WidgetTree, id: WidgetId) -> Option<Self> {
        tree.tab_panel(id).map(|_| Self { id })
    }

    /// The selector bar
    pub fn tab_bar(&self, tree: &WidgetTree) -> Option<TabBar> {
        tree.tab_panel(self.id).map(|d| TabBar { id: d.tab_bar })
    }

    /// Append a (selector, content) pair
    ///
    /// Clicking the selector selects the content. The first pair added to
    /// an empty panel is selected. The click handler is removed again when
    /// the pair is removed.
    pub fn add(
        &self,
        tree: &mut WidgetTree,
        selector: impl Widget,
        content: impl Widget,
    ) -> Result<(), TreeError> {
        self.add_pair(tree, selector.id(), content.id(), false)
    }

    /// Append a pair whose selector is a new label with `text`
    ///
    /// The label belongs to the panel and is destroyed when its pair is
    /// removed.
    pub fn add_string(
        &self,
        tree: &mut WidgetTree,
        text: impl Into<String>,
        content: impl Widget,
    ) -> Result<(), TreeError> {
        let selector = Label::new(tree, text).id();
        let added = self.add_pair(tree, selector, content.id(), true);
        if added.is_err() {
            tree.destroy(selector);
        }
        added
    }

    fn add_pair(
        &self,
        tree: &mut WidgetTree,
        selector: WidgetId,
        content: WidgetId,
        created: bool,
    ) -> Result<(), TreeError> {
        let tab_bar = tree
            .tab_panel(self.id)
            .map(|d| d.tab_bar)
            .ok_or(TreeError::UnknownWidget(self.id))?;
        if selector == content {
            return Err(TreeError::RequiresPair(self.id));
        }
        tree.check_attachable(tab_bar, selector)?;
        tree.check_attachable(self.id, content)?;

        tree.attach(tab_bar, selector);
        tree.attach(self.id, content);
        // A selector removed while selected comes back with stale classes
        if let Some(style) = tree.style_mut(selector) {
            style.remove_class(SELECTED).add_class(NOT_SELECTED);
        }
        if let Some(fmt) = tree.cell_fmt_mut(self.id, content) {
            fmt.style.add_class("trl-TabPanel-Content");
        }

        let panel = *self;
        let on_click: EventCallback = Arc::new(move |ctx: &mut EventContext<'_>| {
            if let Some(index) = panel.selector_index(ctx.tree, selector) {
                panel.set_selected(ctx.tree, Some(index));
            }
        });
        tree.insert_handler(selector, EventType::Click, Arc::clone(&on_click));
        if let Some(data) = tree.tab_panel_mut(self.id) {
            data.wiring.insert(selector, SelectorWiring { on_click, created });
        }

        self.debug_assert_aligned(tree);
        if self.len(tree) == 1 {
            self.set_selected(tree, Some(0));
        }
        Ok(())
    }

    /// Drop what [`TabPanel::add_pair`] installed on a detached selector
    fn unwire(&self, tree: &mut WidgetTree, selector: WidgetId) {
        let Some(wiring) = tree
            .tab_panel_mut(self.id)
            .and_then(|d| d.wiring.remove(&selector))
        else {
            return;
        };
        tree.remove_handler(selector, EventType::Click, &wiring.on_click);
        if wiring.created {
            tree.destroy(selector);
        }
    }

    /// Index of the selected tab
    pub fn selected(&self, tree: &WidgetTree) -> Option<usize> {
        tree.tab_panel(self.id).and_then(|d| d.selected)
    }

    /// Select a tab, or deselect with `None`
    ///
    /// Returns false, changing nothing, if the index is out of range.
    pub fn set_selected(&self, tree: &mut WidgetTree, index: Option<usize>) -> bool {
        let Some(data) = tree.tab_panel(self.id) else {
            return false;
        };
        if index.is_some_and(|i| i >= data.panel.children.len()) {
            return false;
        }
        let old = data.selected;

        if let Some(old_selector) = old.and_then(|i| self.selector_at(tree, i)) {
            if let Some(style) = tree.style_mut(old_selector) {
                style.remove_class(SELECTED).add_class(NOT_SELECTED);
            }
        }
        if let Some(data) = tree.tab_panel_mut(self.id) {
            data.selected = index;
        }
        if let Some(new_selector) = index.and_then(|i| self.selector_at(tree, i)) {
            if let Some(style) = tree.style_mut(new_selector) {
                style.remove_class(NOT_SELECTED).add_class(SELECTED);
            }
        }

        debug!(panel = %self.id, ?old, new = ?index, "tab selection");
        tree.mark_dirty(self.id);
        true
    }

    /// Remove a tab given either its content or its selector
    ///
    /// Both halves of the pair are detached. Returns whether the component
    /// was part of a pair.
    pub fn remove(&self, tree: &mut WidgetTree, component: impl Widget) -> bool {
        let component = component.id();
        let Some(data) = tree.tab_panel(self.id) else {
            return false;
        };
        let tab_bar = data.tab_bar;
        let selected = data.selected;

        let index = match tree.index_of(self.id, component) {
            Some(index) => index,
            None => match tree.index_of(tab_bar, component) {
                Some(index) => index,
                None => return false,
            },
        };
        let (Some(selector), Some(content)) =
            (tree.child_at(tab_bar, index), tree.child_at(self.id, index))
        else {
            return false;
        };

        tree.detach(tab_bar, selector);
        tree.detach(self.id, content);
        self.unwire(tree, selector);

        match selected {
            Some(sel) if index < sel => {
                if let Some(data) = tree.tab_panel_mut(self.id) {
                    data.selected = Some(sel - 1);
                }
            }
            Some(sel) if index == sel => {
                // The selected selector is gone; nothing to restyle
                if let Some(data) = tree.tab_panel_mut(self.id) {
                    data.selected = None;
                }
                let count = self.len(tree);
                let next = if index < count {
                    Some(index)
                } else {
                    count.checked_sub(1)
                };
                self.set_selected(tree, next);
            }
            _ => {}
        }
        self.debug_assert_aligned(tree);
        tree.mark_dirty(self.id);
        true
    }

    /// Remove every pair and deselect
    pub fn clear(&self, tree: &mut WidgetTree) {
        let Some(tab_bar) = tree.tab_panel(self.id).map(|d| d.tab_bar) else {
            return;
        };
        for selector in tree.children(tab_bar).to_vec() {
            tree.detach(tab_bar, selector);
            self.unwire(tree, selector);
        }
        for content in tree.children(self.id).to_vec() {
            tree.detach(self.id, content);
        }
        if let Some(data) = tree.tab_panel_mut(self.id) {
            data.selected = None;
        }
        self.debug_assert_aligned(tree);
        tree.mark_dirty(self.id);
    }

    /// Number of tabs
    pub fn len(&self, tree: &WidgetTree) -> usize {
        tree.child_count(self.id)
    }

    pub fn is_empty(&self, tree: &WidgetTree) -> bool {
        self.len(tree) == 0
    }

    /// Content component at a position
    pub fn child_at(&self, tree: &WidgetTree, index: usize) -> Option<WidgetId> {
        tree.child_at(self.id, index)
    }

    /// Selector at a position
    pub fn selector_at(&self, tree: &WidgetTree, index: usize) -> Option<WidgetId> {
        let tab_bar = tree.tab_panel(self.id)?.tab_bar;
        tree.child_at(tab_bar, index)
    }

    fn selector_index(&self, tree: &WidgetTree, selector: WidgetId) -> Option<usize> {
        let tab_bar = tree.tab_panel(self.id)?.tab_bar;
        tree.index_of(tab_bar, selector)
    }

    /// Position of a content component
    pub fn index_of(&self, tree: &WidgetTree, content: impl Widget) -> Option<usize> {
        tree.index_of(self.id, content.id())
    }

    pub fn tab_bar_placement(&self, tree: &WidgetTree) -> TabBarPlacement {
        tree.tab_panel(self.id)
            .map(|d| d.placement)
            .unwrap_or_default()
    }

    /// Move the tab bar, restyling and re-laying it out
    pub fn set_tab_bar_placement(&self, tree: &mut WidgetTree, placement: TabBarPlacement) {
        let Some(old) = tree.tab_panel(self.id).map(|d| d.placement) else {
            return;
        };
        self.apply_placement(tree, Some(old), placement);
    }

    fn apply_placement(&self, tree: &mut WidgetTree, old: Option<TabBarPlacement>, new: TabBarPlacement) {
        let Some(tab_bar) = tree.tab_panel(self.id).map(|d| d.tab_bar) else {
            return;
        };
        if let Some(style) = tree.style_mut(tab_bar) {
            if let Some(old) = old {
                style.remove_class(old.class());
            }
            style.add_class(new.class());
        }
        let (layout, h_align, v_align) = new.bar_layout();
        if let Some(bar) = tree.panel_data_mut(tab_bar) {
            bar.layout = layout;
            bar.h_align = h_align;
            bar.v_align = v_align;
        }
        if let Some(data) = tree.tab_panel_mut(self.id) {
            data.placement = new;
        }
        tree.mark_dirty(self.id);
    }

    /// Formatting of the tab bar region
    pub fn tab_bar_fmt<'t>(&self, tree: &'t WidgetTree) -> Option<&'t CellFmt> {
        tree.tab_panel(self.id).map(|d| &d.tab_bar_fmt)
    }

    /// Formatting of the tab bar region for modification; marks the panel dirty
    pub fn tab_bar_fmt_mut<'t>(&self, tree: &'t mut WidgetTree) -> Option<&'t mut CellFmt> {
        tree.mark_dirty(self.id);
        tree.tab_panel_mut(self.id).map(|d| &mut d.tab_bar_fmt)
    }

    /// Cell formatting of a content component
    pub fn cell_fmt_mut<'t>(
        &self,
        tree: &'t mut WidgetTree,
        content: impl Widget,
    ) -> Option<&'t mut CellFmt> {
        tree.cell_fmt_mut(self.id, content.id())
    }

    fn debug_assert_aligned(&self, tree: &WidgetTree) {
        if let Some(data) = tree.tab_panel(self.id) {
            debug_assert_eq!(
                data.panel.children.len(),
                tree.child_count(data.tab_bar),
                "tab panel content and tab bar out of alignment"
            );
            debug_assert!(data
                .selected
                .map_or(true, |i| i < data.panel.children.len()));
        }
    }
}

impl TabBar {
    /// The tab panel owning this bar
    pub fn owner(&self, tree: &WidgetTree) -> Option<TabPanel> {
        match &tree.node(self.id)?.kind {
            WidgetKind::TabBar(data) => Some(TabPanel::from_id(data.owner)),
            _ => None,
        }
    }

    /// Number of selectors
    pub fn len(&self, tree: &WidgetTree) -> usize {
        tree.child_count(self.id)
    }

    pub fn is_empty(&self, tree: &WidgetTree) -> bool {
        self.len(tree) == 0
    }

    pub fn child_at(&self, tree: &WidgetTree, index: usize) -> Option<WidgetId> {
        tree.child_at(self.id, index)
    }

    pub fn index_of(&self, tree: &WidgetTree, selector: impl Widget) -> Option<usize> {
        tree.index_of(self.id, selector.id())
    }

    /// Remove a selector together with its content
    pub fn remove(&self, tree: &mut WidgetTree, selector: impl Widget) -> bool {
        tree.remove_child(self.id, selector.id())
    }
}

impl WidgetTree {
    pub(crate) fn tab_panel(&self, id: WidgetId) -> Option<&TabPanelData> {
        match &self.node(id)?.kind {
            WidgetKind::TabPanel(data) => Some(data),
            _ => None,
        }
    }

    pub(crate) fn tab_panel_mut(&mut self, id: WidgetId) -> Option<&mut TabPanelData> {
        match &mut self.node_mut(id)?.kind {
            WidgetKind::TabPanel(data) => Some(data),
            _ => None,
        }
    }
}

pub(crate) fn render(
    tree: &WidgetTree,
    id: WidgetId,
    node: &Node,
    data: &TabPanelData,
    sink: &mut dyn RenderSink,
) {
    sink.write_str("<table");
    render_attrs_and_style(id, node, sink);
    render_event_handlers(id, node, sink);
    sink.write_str(">");

    match data.placement {
        TabBarPlacement::Top => {
            render_bar_row(tree, data, sink);
            sink.write_str("<tr>");
            render_content(tree, data, sink);
            sink.write_str("</tr>");
        }
        TabBarPlacement::Bottom => {
            sink.write_str("<tr>");
            render_content(tree, data, sink);
            sink.write_str("</tr>");
            render_bar_row(tree, data, sink);
        }
        TabBarPlacement::Left => {
            sink.write_str("<tr>");
            render_bar_cell(tree, data, sink);
            render_content(tree, data, sink);
            sink.write_str("</tr>");
        }
        TabBarPlacement::Right => {
            sink.write_str("<tr>");
            render_content(tree, data, sink);
            render_bar_cell(tree, data, sink);
            sink.write_str("</tr>");
        }
    }

    sink.write_str("</table>");
}

/// Tab bar in a row of its own (top and bottom placement)
fn render_bar_row(tree: &WidgetTree, data: &TabPanelData, sink: &mut dyn RenderSink) {
    data.tab_bar_fmt.render_open("tr", sink);
    sink.write_str("<td>");
    tree.render(data.tab_bar, sink);
    sink.write_str("</td></tr>");
}

/// Tab bar in a cell beside the content (left and right placement)
fn render_bar_cell(tree: &WidgetTree, data: &TabPanelData, sink: &mut dyn RenderSink) {
    data.tab_bar_fmt.render_open("td", sink);
    tree.render(data.tab_bar, sink);
    sink.write_str("</td>");
}

/// Cell of the selected content; empty when nothing is selected
fn render_content(tree: &WidgetTree, data: &TabPanelData, sink: &mut dyn RenderSink) {
    match data.selected.and_then(|i| data.panel.children.get(i)) {
        Some(&content) => {
            data.panel.render_cell_open(content, sink);
            tree.render(content, sink);
            sink.write_str("</td>");
        }
        None => sink.write_str("<td></td>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetDefaults;
    use crate::panel::Panel;
    use trellis_core::{EventType, Interaction};

    fn tabs_with(tree: &mut WidgetTree, n: usize) -> (TabPanel, Vec<Label>) {
        let tabs = TabPanel::new(tree);
        let contents: Vec<_> = (0..n)
            .map(|i| {
                let content = Label::new(tree, format!("content {i}"));
                tabs.add_string(tree, format!("tab {i}"), content).unwrap();
                content
            })
            .collect();
        (tabs, contents)
    }

    fn assert_aligned(tree: &WidgetTree, tabs: TabPanel) {
        let bar = tabs.tab_bar(tree).unwrap();
        assert_eq!(tabs.len(tree), bar.len(tree));
        if let Some(sel) = tabs.selected(tree) {
            assert!(sel < tabs.len(tree));
        }
        for i in 0..bar.len(tree) {
            let style = tree.style(bar.child_at(tree, i).unwrap()).unwrap();
            let selected = tabs.selected(tree) == Some(i);
            assert_eq!(style.has_class(SELECTED), selected);
            assert_eq!(style.has_class(NOT_SELECTED), !selected);
        }
    }

    #[test]
    fn test_first_add_selects() {
        let mut tree = WidgetTree::new();
        let tabs = TabPanel::new(&mut tree);
        assert_eq!(tabs.selected(&tree), None);

        let content = Label::new(&mut tree, "c");
        tabs.add_string(&mut tree, "t", content).unwrap();
        assert_eq!(tabs.selected(&tree), Some(0));

        let more = Label::new(&mut tree, "d");
        tabs.add_string(&mut tree, "u", more).unwrap();
        assert_eq!(tabs.selected(&tree), Some(0));
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_set_selected_out_of_range_is_noop() {
        let mut tree = WidgetTree::new();
        let (tabs, _) = tabs_with(&mut tree, 2);

        assert!(!tabs.set_selected(&mut tree, Some(2)));
        assert_eq!(tabs.selected(&tree), Some(0));

        assert!(tabs.set_selected(&mut tree, None));
        assert_eq!(tabs.selected(&tree), None);
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_remove_before_selection_keeps_tab() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 3);
        tabs.set_selected(&mut tree, Some(2));

        assert!(tabs.remove(&mut tree, contents[0]));
        assert_eq!(tabs.selected(&tree), Some(1));
        assert_eq!(tabs.child_at(&tree, 1), Some(contents[2].id()));
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_remove_unselected_middle() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 3);

        assert!(tabs.remove(&mut tree, contents[1]));
        assert_eq!(tabs.selected(&tree), Some(0));
        assert_eq!(tabs.len(&tree), 2);
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_remove_selected_selects_neighbour() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 3);
        tabs.set_selected(&mut tree, Some(1));

        // Not the last: the tab sliding into place is selected
        assert!(tabs.remove(&mut tree, contents[1]));
        assert_eq!(tabs.selected(&tree), Some(1));
        assert_eq!(tabs.child_at(&tree, 1), Some(contents[2].id()));
        assert_aligned(&tree, tabs);

        // The last: the new last is selected
        assert!(tabs.remove(&mut tree, contents[2]));
        assert_eq!(tabs.selected(&tree), Some(0));
        assert_aligned(&tree, tabs);

        // The only one: nothing is selected
        assert!(tabs.remove(&mut tree, contents[0]));
        assert_eq!(tabs.selected(&tree), None);
        assert!(tabs.is_empty(&tree));
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_remove_selected_last_and_only_tabs() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 1);
        assert!(tabs.remove(&mut tree, contents[0]));
        assert_eq!(tabs.selected(&tree), None);
        assert_aligned(&tree, tabs);

        let (tabs, contents) = tabs_with(&mut tree, 3);
        tabs.set_selected(&mut tree, Some(2));
        assert!(tabs.remove(&mut tree, contents[2]));
        assert_eq!(tabs.selected(&tree), Some(1));
        assert_aligned(&tree, tabs);

        // Before a selected last tab
        assert!(tabs.remove(&mut tree, contents[0]));
        assert_eq!(tabs.selected(&tree), Some(0));
        assert_eq!(tabs.child_at(&tree, 0), Some(contents[1].id()));
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_string_selectors_are_destroyed_with_their_pair() {
        let mut tree = WidgetTree::new();
        let tabs = TabPanel::new(&mut tree);
        let baseline = tree.len();

        for i in 0..100 {
            let content = Label::new(&mut tree, format!("c{i}"));
            tabs.add_string(&mut tree, format!("t{i}"), content).unwrap();
            assert!(tree.destroy(content.id()));
        }
        assert!(tabs.is_empty(&tree));
        assert_eq!(tree.len(), baseline);

        let mut contents = Vec::new();
        for i in 0..3 {
            let content = Label::new(&mut tree, format!("c{i}"));
            tabs.add_string(&mut tree, format!("t{i}"), content).unwrap();
            contents.push(content);
        }
        let selector = tabs.selector_at(&tree, 1).unwrap();
        assert!(tabs.remove(&mut tree, contents[1]));
        assert!(!tree.contains(selector));
        assert!(tree.contains(contents[1].id()));

        tabs.clear(&mut tree);
        assert_eq!(tree.len(), baseline + contents.len());

        // A rejected pair does not leave its label behind
        let panel = Panel::new(&mut tree);
        panel.add(&mut tree, contents[0]).unwrap();
        let before = tree.len();
        assert!(tabs.add_string(&mut tree, "t", contents[0]).is_err());
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn test_caller_selectors_survive_removal_unwired() {
        let mut tree = WidgetTree::new();
        let tabs = TabPanel::new(&mut tree);
        let selector = Label::new(&mut tree, "s");
        let content = Label::new(&mut tree, "c");
        tabs.add(&mut tree, selector, content).unwrap();
        assert_eq!(tree.handler_count(selector.id(), EventType::Click), 1);

        tabs.clear(&mut tree);
        assert!(tree.contains(selector.id()));
        assert_eq!(tree.handler_count(selector.id(), EventType::Click), 0);
    }

    #[test]
    fn test_readded_selector_is_restyled_and_wired_once() {
        let mut tree = WidgetTree::new();
        let (tabs, _) = tabs_with(&mut tree, 1);
        let selector = Label::new(&mut tree, "s");
        let content = Label::new(&mut tree, "c");
        tabs.add(&mut tree, selector, content).unwrap();
        tabs.set_selected(&mut tree, Some(1));

        // Removed while selected
        assert!(tabs.remove(&mut tree, content));
        assert_eq!(tabs.selected(&tree), Some(0));
        tabs.add(&mut tree, selector, content).unwrap();

        assert_aligned(&tree, tabs);
        assert_eq!(tree.handler_count(selector.id(), EventType::Click), 1);

        let outcome = tree
            .dispatch(&Interaction::new(selector.id().to_raw(), EventType::Click))
            .unwrap();
        assert_eq!(outcome.handlers_run, 1);
        assert_eq!(tabs.selected(&tree), Some(1));
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_removed_selector_click_is_ignored() {
        let mut tree = WidgetTree::new();
        let (tabs, _) = tabs_with(&mut tree, 1);
        let selector = Label::new(&mut tree, "s");
        let content = Label::new(&mut tree, "c");
        tabs.add(&mut tree, selector, content).unwrap();
        assert!(tabs.remove(&mut tree, selector));
        tree.clear_dirty();

        let outcome = tree
            .dispatch(&Interaction::new(selector.id().to_raw(), EventType::Click))
            .unwrap();
        assert_eq!(outcome.handlers_run, 0);
        assert_eq!(tabs.selected(&tree), Some(0));
        assert!(outcome.dirty_roots.is_empty());
    }

    #[test]
    fn test_remove_by_selector() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 2);
        let selector = tabs.selector_at(&tree, 1).unwrap();

        assert!(tabs.remove(&mut tree, selector));
        assert_eq!(tabs.len(&tree), 1);
        assert_eq!(tree.parent(contents[1].id()), None);
        assert_eq!(tree.parent(selector), None);

        // Unknown components are not removed
        let stranger = Label::new(&mut tree, "x");
        assert!(!tabs.remove(&mut tree, stranger));
    }

    #[test]
    fn test_tab_bar_remove_cascades_to_owner() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 2);
        let bar = tabs.tab_bar(&tree).unwrap();
        let selector = bar.child_at(&tree, 0).unwrap();

        assert_eq!(bar.owner(&tree), Some(tabs));
        assert!(bar.remove(&mut tree, selector));
        assert_eq!(tabs.len(&tree), 1);
        assert_eq!(tabs.child_at(&tree, 0), Some(contents[1].id()));
        assert_aligned(&tree, tabs);

        // Generic removal through the tree behaves the same way
        assert!(tree.remove_child(tabs.id(), contents[1].id()));
        assert!(tabs.is_empty(&tree));
        assert!(bar.is_empty(&tree));
    }

    #[test]
    fn test_add_requires_pair() {
        let mut tree = WidgetTree::new();
        let tabs = TabPanel::new(&mut tree);
        let label = Label::new(&mut tree, "x");

        assert_eq!(
            tabs.add(&mut tree, label, label),
            Err(TreeError::RequiresPair(tabs.id()))
        );
        assert_eq!(
            tree.add_child(tabs.id(), label.id()),
            Err(TreeError::RequiresPair(tabs.id()))
        );

        // An owned content component is rejected without attaching the selector
        let panel = Panel::new(&mut tree);
        panel.add(&mut tree, label).unwrap();
        let selector = Label::new(&mut tree, "s");
        assert!(tabs.add(&mut tree, selector, label).is_err());
        assert_eq!(tree.parent(selector.id()), None);
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_clear() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 3);

        tabs.clear(&mut tree);
        assert!(tabs.is_empty(&tree));
        assert_eq!(tabs.selected(&tree), None);
        assert!(contents.iter().all(|c| tree.parent(c.id()).is_none()));
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_selector_click_selects_content() {
        let mut tree = WidgetTree::new();
        let (tabs, _) = tabs_with(&mut tree, 3);
        let selector = tabs.selector_at(&tree, 2).unwrap();
        tree.clear_dirty();

        let outcome = tree
            .dispatch(&Interaction::new(selector.to_raw(), EventType::Click))
            .unwrap();

        assert_eq!(outcome.handlers_run, 1);
        assert_eq!(tabs.selected(&tree), Some(2));
        assert_eq!(outcome.dirty_roots, vec![tabs.id()]);
        assert_aligned(&tree, tabs);
    }

    #[test]
    fn test_churn_keeps_alignment() {
        let mut tree = WidgetTree::new();
        let tabs = TabPanel::new(&mut tree);
        let mut seed: u64 = 42;
        let mut next = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 33) as usize
        };

        for step in 0..300 {
            let len = tabs.len(&tree);
            match next() % 4 {
                0 | 1 => {
                    let content = Label::new(&mut tree, format!("c{step}"));
                    tabs.add_string(&mut tree, format!("t{step}"), content).unwrap();
                }
                2 if len > 0 => {
                    let index = next() % len;
                    let selected = tabs.selected(&tree);
                    let target = tabs.child_at(&tree, index).unwrap();
                    assert!(tabs.remove(&mut tree, target));
                    if let Some(sel) = selected {
                        if index < sel {
                            assert_eq!(tabs.selected(&tree), Some(sel - 1));
                        }
                    }
                }
                _ if len > 0 => {
                    tabs.set_selected(&mut tree, Some(next() % len));
                }
                _ => {}
            }
            assert_aligned(&tree, tabs);
        }
    }

    #[test]
    fn test_placement() {
        let mut tree = WidgetTree::new();
        let tabs = TabPanel::new(&mut tree);
        let bar = tabs.tab_bar(&tree).unwrap().id();
        assert!(tree.style(bar).unwrap().has_class("trl-TabBar-Top"));
        assert_eq!(tree.panel_data(bar).unwrap().layout, Layout::Horizontal);

        tabs.set_tab_bar_placement(&mut tree, TabBarPlacement::Left);
        let style = tree.style(bar).unwrap();
        assert!(style.has_class("trl-TabBar-Left"));
        assert!(!style.has_class("trl-TabBar-Top"));
        assert!(style.has_class("trl-TabBar"));
        let data = tree.panel_data(bar).unwrap();
        assert_eq!(data.layout, Layout::Vertical);
        assert_eq!((data.h_align, data.v_align), (HAlign::Right, VAlign::Top));
        assert_eq!(tabs.tab_bar_placement(&tree), TabBarPlacement::Left);
    }

    #[test]
    fn test_placement_from_defaults() {
        let defaults = WidgetDefaults {
            tab_bar_placement: TabBarPlacement::Bottom,
            ..WidgetDefaults::default()
        };
        let mut tree = WidgetTree::with_defaults(defaults);
        let tabs = TabPanel::new(&mut tree);
        assert_eq!(tabs.tab_bar_placement(&tree), TabBarPlacement::Bottom);
    }

    #[test]
    fn test_render_only_selected_content() {
        let mut tree = WidgetTree::new();
        let (tabs, _) = tabs_with(&mut tree, 3);
        tabs.set_selected(&mut tree, Some(1));

        let html = tree.render_to_string(tabs.id());
        assert!(html.contains("content 1"));
        assert!(!html.contains("content 0"));
        assert!(!html.contains("content 2"));
        // Every selector is rendered
        assert!(html.contains("tab 0") && html.contains("tab 2"));
        assert!(html.contains("class=\"trl-TabPanel-Content\""));
        // Top placement: bar before content
        assert!(html.find("tab 0").unwrap() < html.find("content 1").unwrap());

        tabs.set_tab_bar_placement(&mut tree, TabBarPlacement::Right);
        let html = tree.render_to_string(tabs.id());
        assert!(html.find("content 1").unwrap() < html.find("tab 0").unwrap());

        tabs.set_selected(&mut tree, None);
        let html = tree.render_to_string(tabs.id());
        assert!(!html.contains("content"));
        assert!(html.contains("<td></td>"));
    }

    #[test]
    fn test_find_by_id_reaches_selectors() {
        let mut tree = WidgetTree::new();
        let (tabs, contents) = tabs_with(&mut tree, 2);
        let selector = tabs.selector_at(&tree, 1).unwrap();

        assert_eq!(tree.find_by_id(tabs.id(), selector.to_raw()), Some(selector));
        assert_eq!(
            tree.find_by_id(tabs.id(), contents[0].id().to_raw()),
            Some(contents[0].id())
        );
    }
}
