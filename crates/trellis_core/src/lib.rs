//! Trellis Core
//!
//! Foundational types for the Trellis server-side widget toolkit:
//!
//! - **Identity**: slotmap-keyed widget and radio group ids with a raw wire form
//! - **Events**: event kinds and the inbound [`Interaction`] record
//! - **Style Bags**: HTML attributes, CSS classes and inline properties
//! - **Render Sink**: the append-only markup target widgets render into
//! - **Dirty Tracking**: which components need re-rendering after an interaction
//!
//! # Example
//!
//! ```rust
//! use trellis_core::{EventType, Interaction};
//!
//! let interaction = Interaction::from_form(
//!     7,
//!     EventType::Change,
//!     [("cv", "")],
//!     "cv",
//! );
//!
//! // Present-but-empty is a real value
//! assert_eq!(interaction.comp_value(), Some(""));
//! ```

pub mod dirty;
pub mod events;
pub mod id;
pub mod render;
pub mod style;
pub mod value;

pub use dirty::DirtyTracker;
pub use events::{EventType, Interaction};
pub use id::{RadioGroupId, WidgetId};
pub use render::RenderSink;
pub use style::{Attrs, Style};
pub use value::parse_bool;
