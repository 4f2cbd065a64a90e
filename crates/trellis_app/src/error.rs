//! Error types for trellis_app

use thiserror::Error;
use trellis_widgets::{DispatchError, TreeError};

/// Errors that can occur in a Trellis application
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected structural request while building a tree
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    /// Interaction could not be dispatched
    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// Logging could not be initialised
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Result type for trellis_app operations
pub type Result<T> = std::result::Result<T, AppError>;
