//! Render sink
//!
//! Widgets write markup fragments into a [`RenderSink`]. The sink is
//! append-only; nothing ever reads back what was written.

/// Append-only markup sink
pub trait RenderSink {
    /// Append raw markup
    fn write_str(&mut self, s: &str);

    /// Append text content, HTML-escaped
    fn write_text(&mut self, text: &str) {
        self.write_str(&html_escape::encode_text(text));
    }

    /// Append ` name="value"` with the value escaped for a double-quoted attribute
    fn write_attr(&mut self, name: &str, value: &str) {
        self.write_str(" ");
        self.write_str(name);
        self.write_str("=\"");
        self.write_str(&html_escape::encode_double_quoted_attribute(value));
        self.write_str("\"");
    }
}

impl RenderSink for String {
    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_escapes() {
        let mut out = String::new();
        out.write_str("<b");
        out.write_attr("title", "a \"quoted\" <value>");
        out.write_str(">");
        out.write_text("1 < 2 & 3");
        out.write_str("</b>");

        assert!(out.starts_with("<b title=\"a &quot;quoted&quot; &lt;value&gt;\">"));
        assert!(out.contains("1 &lt; 2 &amp; 3"));
    }
}
