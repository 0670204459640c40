//! Status viewer: fetches the backend status once and renders it.
//!
//! The viewer is a one-shot state machine, `Loading → Connected | Disconnected`,
//! with no retry or polling once resolved.

pub mod error;
pub mod render;
pub mod viewer;

pub use error::ViewerError;
pub use render::{RenderOptions, render};
pub use viewer::{STATUS_PATH, StatusInfo, StatusViewer, ViewerState};
