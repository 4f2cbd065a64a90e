//! Trellis Application Layer
//!
//! Hosts widget trees behind a request/response boundary:
//!
//! - **Sessions**: one [`WidgetTree`](trellis_widgets::WidgetTree) per client
//!   window; each interaction is dispatched and the stale components are
//!   re-rendered as [`Fragment`]s
//! - **Configuration**: TOML [`AppConfig`] with logging, protocol and widget
//!   default sections
//! - **Logging**: `tracing` subscriber setup via [`init_logging`]
//!
//! # Example
//!
//! ```rust
//! use trellis_app::{AppConfig, Session};
//! use trellis_widgets::prelude::*;
//!
//! let config = AppConfig::default();
//! let mut tree = WidgetTree::with_defaults(config.widgets.clone());
//! let root = Panel::new(&mut tree);
//! let text = TextBox::new(&mut tree, "draft");
//! root.add(&mut tree, text).unwrap();
//!
//! let mut session = Session::new(tree, root, &config.protocol);
//! let page = session.render_full();
//! assert!(page.contains("value=\"draft\""));
//!
//! // The client cleared the box
//! let raw = text.id().to_raw();
//! session
//!     .process_form(raw, EventType::Change, [("cv", "")])
//!     .unwrap();
//! assert_eq!(text.text(session.tree()), "");
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod session;


pub use config::{AppConfig, LoggingConfig, ProtocolConfig};
pub use demo::{demo_session, Demo};
pub use error::{AppError, Result};
pub use logging::init_logging;
pub use session::{Fragment, Session};
