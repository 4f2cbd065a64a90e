//! Base widget trait and the per-widget node stored in the tree

use smallvec::SmallVec;
use trellis_core::{Attrs, EventType, Style, WidgetId};

use crate::button::ButtonData;
use crate::handler::EventHandlers;
use crate::label::LabelData;
use crate::panel::PanelData;
use crate::state_button::StateButtonData;
use crate::switch_button::SwitchData;
use crate::tab_panel::{TabBarData, TabPanelData};
use crate::text_box::TextBoxData;

/// Base trait for all widget handles
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;
}

impl Widget for WidgetId {
    fn id(&self) -> WidgetId {
        *self
    }
}

/// Widget-specific data
#[derive(Debug)]
pub(crate) enum WidgetKind {
    Panel(PanelData),
    Label(LabelData),
    Button(ButtonData),
    StateButton(StateButtonData),
    Switch(SwitchData),
    TabPanel(TabPanelData),
    TabBar(TabBarData),
    TextBox(TextBoxData),
}

impl WidgetKind {
    /// Short name for logging
    pub(crate) fn name(&self) -> &'static str {
        match self {
            WidgetKind::Panel(_) => "panel",
            WidgetKind::Label(_) => "label",
            WidgetKind::Button(_) => "button",
            WidgetKind::StateButton(_) => "state_button",
            WidgetKind::Switch(_) => "switch_button",
            WidgetKind::TabPanel(_) => "tab_panel",
            WidgetKind::TabBar(_) => "tab_bar",
            WidgetKind::TextBox(_) => "text_box",
        }
    }
}

/// Everything the tree stores for one widget
#[derive(Debug)]
pub(crate) struct Node {
    /// Owning container, if attached
    pub(crate) parent: Option<WidgetId>,
    pub(crate) attrs: Attrs,
    pub(crate) style: Style,
    pub(crate) enabled: bool,
    pub(crate) visible: bool,
    /// Event kinds on which the client sends the component value along
    pub(crate) sync_on: SmallVec<[EventType; 2]>,
    /// Client-side expression producing the component value
    pub(crate) value_provider: Option<String>,
    pub(crate) handlers: EventHandlers,
    pub(crate) kind: WidgetKind,
}

impl Node {
    pub(crate) fn new(kind: WidgetKind) -> Self {
        Self {
            parent: None,
            attrs: Attrs::new(),
            style: Style::new(),
            enabled: true,
            visible: true,
            sync_on: SmallVec::new(),
            value_provider: None,
            handlers: EventHandlers::new(),
            kind,
        }
    }

    pub(crate) fn with_value_provider(mut self, js: impl Into<String>) -> Self {
        self.value_provider = Some(js.into());
        self
    }

    pub(crate) fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.set(name, value);
        self
    }

    pub(crate) fn with_class(mut self, class: &str) -> Self {
        self.style.add_class(class);
        self
    }

    pub(crate) fn sync_on(mut self, event_type: EventType) -> Self {
        if !self.sync_on.contains(&event_type) {
            self.sync_on.push(event_type);
        }
        self
    }
}
