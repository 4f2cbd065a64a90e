//! Trellis Widgets
//!
//! The stateful component model of the Trellis server-side widget toolkit.
//! A [`WidgetTree`] owns every component of one session; widget handles
//! such as [`Panel`], [`CheckBox`] or [`TabPanel`] are `Copy` ids whose
//! methods take the tree.
//!
//! - **Containers**: [`Panel`] with natural, horizontal and vertical layouts
//! - **State widgets**: [`CheckBox`], [`RadioButton`] + [`RadioGroup`], [`SwitchButton`]
//! - **Composite containers**: [`TabPanel`] and its internal [`TabBar`]
//! - **Text input**: [`TextBox`] (also as a password box)
//! - **Dispatch**: [`WidgetTree::dispatch`] folds an inbound [`Interaction`] into
//!   state, runs handlers and reports the dirty roots
//! - **Rendering**: [`WidgetTree::render`] writes the markup of any subtree
//!
//! # Example
//!
//! ```rust
//! use trellis_widgets::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let root = Panel::new(&mut tree);
//! let agree = CheckBox::new(&mut tree, "I agree");
//! let status = Label::new(&mut tree, "");
//! root.add(&mut tree, agree).unwrap();
//! root.add(&mut tree, status).unwrap();
//!
//! tree.on_click(agree.id(), move |ctx| {
//!     let text = if agree.state(ctx.tree) { "Thanks!" } else { "" };
//!     status.set_text(ctx.tree, text);
//! });
//! tree.clear_dirty();
//!
//! let click = Interaction::new(agree.id().to_raw(), EventType::Click).with_value("true");
//! let outcome = tree.dispatch(&click).unwrap();
//!
//! assert!(agree.state(&tree));
//! assert_eq!(outcome.dirty_roots, vec![status.id()]);
//! ```

pub mod button;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod label;
pub mod layout;
pub mod panel;
pub mod radio_group;
mod render;
pub mod state_button;
pub mod switch_button;
pub mod tab_panel;
pub mod text_box;
pub mod tree;
pub mod widget;

pub use button::Button;
pub use config::WidgetDefaults;
pub use dispatch::DispatchOutcome;
pub use error::{DispatchError, TreeError};
pub use handler::{EventCallback, EventContext, EventHandlers};
pub use label::Label;
pub use layout::{CellFmt, HAlign, Layout, VAlign};
pub use panel::Panel;
pub use radio_group::RadioGroup;
pub use state_button::{CheckBox, RadioButton, StateWidget};
pub use switch_button::SwitchButton;
pub use tab_panel::{TabBar, TabBarPlacement, TabPanel};
pub use text_box::TextBox;
pub use tree::WidgetTree;
pub use widget::Widget;

pub use trellis_core::{EventType, Interaction, RadioGroupId, RenderSink, WidgetId};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::button::Button;
    pub use crate::dispatch::DispatchOutcome;
    pub use crate::error::{DispatchError, TreeError};
    pub use crate::handler::EventContext;
    pub use crate::label::Label;
    pub use crate::layout::{CellFmt, HAlign, Layout, VAlign};
    pub use crate::panel::Panel;
    pub use crate::radio_group::RadioGroup;
    pub use crate::state_button::{CheckBox, RadioButton, StateWidget};
    pub use crate::switch_button::SwitchButton;
    pub use crate::tab_panel::{TabBar, TabBarPlacement, TabPanel};
    pub use crate::text_box::TextBox;
    pub use crate::tree::WidgetTree;
    pub use crate::widget::Widget;

    pub use trellis_core::{EventType, Interaction, RenderSink, WidgetId};
}
