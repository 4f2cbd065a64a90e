//! Layout cell formatting
//!
//! Containers render their children into table cells. A [`CellFmt`] carries
//! the alignment, attributes and style of one such cell.

use serde::{Deserialize, Serialize};
use trellis_core::{Attrs, RenderSink, Style};

/// Horizontal alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    #[default]
    Default,
    Left,
    Center,
    Right,
}

impl HAlign {
    fn attr_value(self) -> Option<&'static str> {
        match self {
            HAlign::Default => None,
            HAlign::Left => Some("left"),
            HAlign::Center => Some("center"),
            HAlign::Right => Some("right"),
        }
    }
}

/// Vertical alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    #[default]
    Default,
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    fn attr_value(self) -> Option<&'static str> {
        match self {
            VAlign::Default => None,
            VAlign::Top => Some("top"),
            VAlign::Middle => Some("middle"),
            VAlign::Bottom => Some("bottom"),
        }
    }
}

/// How a panel lays out its children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Children rendered one after the other, no table
    #[default]
    Natural,
    /// One table row, one cell per child
    Horizontal,
    /// One table row per child
    Vertical,
}

/// Formatting of one layout cell
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellFmt {
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub attrs: Attrs,
    pub style: Style,
}

impl CellFmt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both alignments
    pub fn set_align(&mut self, h_align: HAlign, v_align: VAlign) {
        self.h_align = h_align;
        self.v_align = v_align;
    }

    /// Render the opening `<tag ...>` of this cell
    pub fn render_open(&self, tag: &str, sink: &mut dyn RenderSink) {
        self.render_open_with(tag, HAlign::Default, VAlign::Default, sink);
    }

    /// Render the opening tag, falling back to the given alignment where
    /// this cell has none of its own
    pub(crate) fn render_open_with(
        &self,
        tag: &str,
        h_fallback: HAlign,
        v_fallback: VAlign,
        sink: &mut dyn RenderSink,
    ) {
        sink.write_str("<");
        sink.write_str(tag);
        let h_align = if self.h_align == HAlign::Default {
            h_fallback
        } else {
            self.h_align
        };
        let v_align = if self.v_align == VAlign::Default {
            v_fallback
        } else {
            self.v_align
        };
        if let Some(value) = h_align.attr_value() {
            sink.write_attr("align", value);
        }
        if let Some(value) = v_align.attr_value() {
            sink.write_attr("valign", value);
        }
        self.attrs.render(sink);
        self.style.render(sink, &[]);
        sink.write_str(">");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_fmt_render() {
        let mut fmt = CellFmt::new();
        fmt.set_align(HAlign::Left, VAlign::Top);
        fmt.style.add_class("cell");

        let mut out = String::new();
        fmt.render_open("td", &mut out);
        assert_eq!(out, "<td align=\"left\" valign=\"top\" class=\"cell\">");
    }

    #[test]
    fn test_cell_fmt_fallback_alignment() {
        let mut fmt = CellFmt::new();
        fmt.v_align = VAlign::Bottom;

        let mut out = String::new();
        fmt.render_open_with("td", HAlign::Right, VAlign::Top, &mut out);
        assert_eq!(out, "<td align=\"right\" valign=\"bottom\">");
    }
}
