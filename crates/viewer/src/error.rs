//! Viewer error types.

use thiserror::Error;

/// Reasons a status fetch can fail.
///
/// Both collapse to [`crate::ViewerState::Disconnected`]; the detail is only logged.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not JSON.
    #[error("Invalid status body: {0}")]
    Decode(#[from] serde_json::Error),
}
