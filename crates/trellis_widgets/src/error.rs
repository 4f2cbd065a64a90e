//! Error types for trellis_widgets

use thiserror::Error;
use trellis_core::WidgetId;

/// Rejected structural requests against a widget tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The widget is not (or no longer) in the tree
    #[error("unknown widget {0}")]
    UnknownWidget(WidgetId),

    /// The child is already owned by another container
    #[error("widget {child} is already attached to {parent}")]
    AlreadyAttached { child: WidgetId, parent: WidgetId },

    /// The target cannot hold children
    #[error("widget {0} is not a container")]
    NotAContainer(WidgetId),

    /// The container only accepts (selector, content) pairs
    #[error("widget {0} only accepts children as tab pairs")]
    RequiresPair(WidgetId),

    /// Attaching would make a widget its own ancestor
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle { child: WidgetId, parent: WidgetId },
}

/// Failures while dispatching an inbound interaction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No live widget has the given wire id
    #[error("unknown interaction target {0}")]
    UnknownTarget(u64),
}
