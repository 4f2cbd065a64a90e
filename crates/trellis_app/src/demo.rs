//! Demo window used by `trellis-replay`
//!
//! A tab panel with one tab per stateful widget kind and a status line the
//! handlers write to:
//!
//! ```text
//! Panel (root)
//! ├── Label "Trellis demo"
//! ├── TabPanel
//! │   ├── "Options" → CheckBox
//! │   ├── "Size"    → RadioButton × 3 (group "size")
//! │   ├── "Power"   → SwitchButton
//! │   └── "Notes"   → TextBox (3 rows)
//! └── Label (status)
//! ```

use trellis_widgets::prelude::*;

use crate::config::AppConfig;
use crate::error::Result;
use crate::session::Session;

/// Handles of the demo window's widgets
#[derive(Clone, Debug)]
pub struct Demo {
    pub root: Panel,
    pub tabs: TabPanel,
    pub newsletter: CheckBox,
    pub size_group: RadioGroup,
    pub sizes: Vec<RadioButton>,
    pub power: SwitchButton,
    pub notes: TextBox,
    pub status: Label,
}

impl Demo {
    /// Build the demo window in `tree`
    pub fn build(tree: &mut WidgetTree) -> Result<Self> {
        let root = Panel::new(tree);
        let title = Label::new(tree, "Trellis demo");
        let tabs = TabPanel::new(tree);
        let status = Label::new(tree, "");
        root.add(tree, title)?;
        root.add(tree, tabs)?;
        root.add(tree, status)?;

        let options = Panel::new(tree);
        let newsletter = CheckBox::new(tree, "Send me the newsletter");
        options.add(tree, newsletter)?;
        tabs.add_string(tree, "Options", options)?;
        tree.on_click(newsletter.id(), move |ctx| {
            let text = if newsletter.state(ctx.tree) {
                "Subscribed"
            } else {
                "Unsubscribed"
            };
            status.set_text(ctx.tree, text);
        });

        let size_panel = Panel::with_layout(tree, Layout::Horizontal);
        let size_group = RadioGroup::new(tree, "size");
        let mut sizes = Vec::new();
        for name in ["Small", "Medium", "Large"] {
            let button = RadioButton::new(tree, name, size_group);
            size_panel.add(tree, button)?;
            tree.on_click(button.id(), move |ctx| {
                let chosen = match size_group.selected(ctx.tree) {
                    Some(selected) => selected.text(ctx.tree).to_string(),
                    None => "none".to_string(),
                };
                status.set_text(ctx.tree, format!("Size: {chosen}"));
            });
            sizes.push(button);
        }
        tabs.add_string(tree, "Size", size_panel)?;

        let power = SwitchButton::new(tree);
        tabs.add_string(tree, "Power", power)?;
        tree.on_click(power.id(), move |ctx| {
            let side = if power.state(ctx.tree) {
                power.on_text(ctx.tree).to_string()
            } else {
                power.off_text(ctx.tree).to_string()
            };
            status.set_text(ctx.tree, format!("Power: {side}"));
        });

        let notes = TextBox::new(tree, "");
        notes.set_rows(tree, 3);
        tabs.add_string(tree, "Notes", notes)?;
        tree.on(notes.id(), EventType::Change, move |ctx| {
            let count = notes.text(ctx.tree).chars().count();
            status.set_text(ctx.tree, format!("Notes: {count} characters"));
        });

        tree.clear_dirty();
        Ok(Self {
            root,
            tabs,
            newsletter,
            size_group,
            sizes,
            power,
            notes,
            status,
        })
    }
}

/// A session showing the demo window, configured by `config`
pub fn demo_session(config: &AppConfig) -> Result<(Session, Demo)> {
    let mut tree = WidgetTree::with_defaults(config.widgets.clone());
    let demo = Demo::build(&mut tree)?;
    let session = Session::new(tree, demo.root, &config.protocol);
    Ok((session, demo))
}
