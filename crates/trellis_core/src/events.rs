//! Event kinds and the inbound interaction record
//!
//! An [`Interaction`] is one client-triggered event delivered to the server:
//! the wire id of the target component, the event kind, and the values sent
//! under the well-known component-value parameter.

use serde::{Deserialize, Serialize};

/// Client event kinds a component can be wired to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Click,
    DblClick,
    MouseDown,
    MouseMove,
    MouseOver,
    MouseOut,
    MouseUp,
    KeyDown,
    KeyPress,
    KeyUp,
    Blur,
    Change,
    Focus,
    WinLoad,
    WinUnload,
}

impl EventType {
    /// All event kinds, in wire-code order
    pub const ALL: [EventType; 15] = [
        EventType::Click,
        EventType::DblClick,
        EventType::MouseDown,
        EventType::MouseMove,
        EventType::MouseOver,
        EventType::MouseOut,
        EventType::MouseUp,
        EventType::KeyDown,
        EventType::KeyPress,
        EventType::KeyUp,
        EventType::Blur,
        EventType::Change,
        EventType::Focus,
        EventType::WinLoad,
        EventType::WinUnload,
    ];

    /// Numeric code used in rendered handler attributes
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Decode a numeric wire code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// HTML attribute the handler is rendered into
    pub fn attr_name(self) -> &'static str {
        match self {
            EventType::Click => "onclick",
            EventType::DblClick => "ondblclick",
            EventType::MouseDown => "onmousedown",
            EventType::MouseMove => "onmousemove",
            EventType::MouseOver => "onmouseover",
            EventType::MouseOut => "onmouseout",
            EventType::MouseUp => "onmouseup",
            EventType::KeyDown => "onkeydown",
            EventType::KeyPress => "onkeypress",
            EventType::KeyUp => "onkeyup",
            EventType::Blur => "onblur",
            EventType::Change => "onchange",
            EventType::Focus => "onfocus",
            EventType::WinLoad => "onload",
            EventType::WinUnload => "onbeforeunload",
        }
    }
}

/// One inbound interaction against a component tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Wire id of the target component
    pub target: u64,
    /// The event kind that fired
    pub event_type: EventType,
    /// Values sent under the component-value parameter.
    ///
    /// `None` means the parameter was absent, which is distinct from
    /// present-but-empty.
    #[serde(default)]
    pub values: Option<Vec<String>>,
    /// Mouse position relative to the window, if reported
    #[serde(default)]
    pub mouse: Option<(i32, i32)>,
    /// Key code for keyboard events, if reported
    #[serde(default)]
    pub key_code: Option<u32>,
}

impl Interaction {
    /// Create an interaction with no value payload
    pub fn new(target: u64, event_type: EventType) -> Self {
        Self {
            target,
            event_type,
            values: None,
            mouse: None,
            key_code: None,
        }
    }

    /// Attach a single component value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values = Some(vec![value.into()]);
        self
    }

    /// Build an interaction from raw form pairs.
    ///
    /// Only pairs keyed by `param` contribute values; if none are keyed by it,
    /// the value parameter counts as absent.
    pub fn from_form<'a, I>(target: u64, event_type: EventType, pairs: I, param: &str) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| *key == param)
            .map(|(_, value)| value.to_string())
            .collect();

        Self {
            values: if values.is_empty() { None } else { Some(values) },
            ..Self::new(target, event_type)
        }
    }

    /// The first component value, `Some("")` if present but empty
    pub fn comp_value(&self) -> Option<&str> {
        self.values.as_ref()?.first().map(String::as_str)
    }

    /// Whether the component-value parameter was sent at all
    pub fn has_value(&self) -> bool {
        self.values.as_ref().is_some_and(|v| !v.is_empty())
    }
}
