//! Markup rendering
//!
//! Rendering a widget always writes its complete subtree. Partial updates
//! come from re-rendering only the dirty roots, never from patching.

use trellis_core::{EventType, RenderSink, WidgetId};

use crate::tree::WidgetTree;
use crate::widget::{Node, WidgetKind};
use crate::{button, label, panel, state_button, switch_button, tab_panel, text_box};

impl WidgetTree {
    /// Render the full subtree rooted at `id`
    pub fn render(&self, id: WidgetId, sink: &mut dyn RenderSink) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.kind {
            WidgetKind::Panel(data) => panel::render(self, id, node, data, sink),
            WidgetKind::Label(data) => label::render(id, node, data, sink),
            WidgetKind::Button(data) => button::render(id, node, data, sink),
            WidgetKind::StateButton(data) => state_button::render(self, id, node, data, sink),
            WidgetKind::Switch(data) => switch_button::render(self, id, node, data, sink),
            WidgetKind::TabPanel(data) => tab_panel::render(self, id, node, data, sink),
            WidgetKind::TabBar(data) => panel::render(self, id, node, &data.panel, sink),
            WidgetKind::TextBox(data) => text_box::render(id, node, data, sink),
        }
    }

    /// Render the full subtree rooted at `id` into a new string
    pub fn render_to_string(&self, id: WidgetId) -> String {
        let mut out = String::new();
        self.render(id, &mut out);
        out
    }
}

/// ` id="..."`, the attributes, and class/style (with `display:none` when hidden)
pub(crate) fn render_attrs_and_style(id: WidgetId, node: &Node, sink: &mut dyn RenderSink) {
    sink.write_attr("id", &id.to_raw().to_string());
    node.attrs.render(sink);
    let hidden: &[(&str, &str)] = if node.visible {
        &[]
    } else {
        &[("display", "none")]
    };
    node.style.render(sink, hidden);
}

/// ` disabled="disabled"` for disabled widgets
pub(crate) fn render_enabled(node: &Node, sink: &mut dyn RenderSink) {
    if !node.enabled {
        sink.write_attr("disabled", "disabled");
    }
}

/// One `on<event>` attribute per event kind with handlers or value sync.
///
/// Handled kinds call `se(...)`; kinds that only synchronize the value call
/// `sev(...)`. The value provider is appended when the kind is synchronized.
pub(crate) fn render_event_handlers(id: WidgetId, node: &Node, sink: &mut dyn RenderSink) {
    for event_type in EventType::ALL {
        let handled = node.handlers.has_handler(event_type);
        let synced = node.sync_on.contains(&event_type);
        if !handled && !synced {
            continue;
        }

        let func = if handled { "se" } else { "sev" };
        let mut js = format!("{func}(event,{},{}", event_type.code(), id.to_raw());
        if synced {
            if let Some(provider) = &node.value_provider {
                js.push(',');
                js.push_str(provider);
            }
        }
        js.push(')');
        sink.write_attr(event_type.attr_name(), &js);
    }
}
