//! Attribute and style bags
//!
//! [`Attrs`] is a plain string map of HTML attributes. [`Style`] keeps the
//! CSS class set and inline CSS properties, and counts effective mutations
//! in a revision number so a caller can tell whether anything changed.

use indexmap::{IndexMap, IndexSet};

use crate::render::RenderSink;

/// HTML attribute bag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs {
    values: IndexMap<String, String>,
}

impl Attrs {
    /// Create an empty attribute bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. An empty value removes it.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value.is_empty() {
            self.values.shift_remove(&name);
        } else {
            self.values.insert(name, value);
        }
    }

    /// Get an attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Remove an attribute, returning its old value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.shift_remove(name)
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render every attribute as ` name="value"`
    pub fn render(&self, sink: &mut dyn RenderSink) {
        for (name, value) in self.iter() {
            sink.write_attr(name, value);
        }
    }
}

/// CSS class set plus inline CSS properties
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    classes: IndexSet<String>,
    props: IndexMap<String, String>,
    revision: u64,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of effective mutations since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add a class; no-op if already present
    pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
        if self.classes.insert(class.into()) {
            self.revision += 1;
        }
        self
    }

    /// Remove a class; no-op if absent
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        if self.classes.shift_remove(class) {
            self.revision += 1;
        }
        self
    }

    /// Replace all classes with a single one
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        let class = class.into();
        if self.classes.len() != 1 || !self.classes.contains(&class) {
            self.classes.clear();
            self.classes.insert(class);
            self.revision += 1;
        }
        self
    }

    /// Iterate over classes in insertion order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Set an inline CSS property. An empty value removes it.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        let changed = if value.is_empty() {
            self.props.shift_remove(&name).is_some()
        } else {
            self.props.insert(name, value.clone()).as_deref() != Some(value.as_str())
        };
        if changed {
            self.revision += 1;
        }
        self
    }

    /// Get an inline CSS property
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// Render ` class="..."` and ` style="..."` if non-empty.
    ///
    /// `extra_props` are appended to the inline style without being stored.
    pub fn render(&self, sink: &mut dyn RenderSink, extra_props: &[(&str, &str)]) {
        if !self.classes.is_empty() {
            let classes: Vec<&str> = self.classes().collect();
            sink.write_attr("class", &classes.join(" "));
        }

        if self.props.is_empty() && extra_props.is_empty() {
            return;
        }
        let mut css = String::new();
        let stored = self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        for (name, value) in stored.chain(extra_props.iter().copied()) {
            css.push_str(name);
            css.push(':');
            css.push_str(value);
            css.push(';');
        }
        sink.write_attr("style", &css);
    }
}
