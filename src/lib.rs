//! Lightbox - Elm-style viewer state core
//!
//! This crate provides the image registry, dual-mode (controlled and
//! uncontrolled) visibility state and the zoom/pan bounds for an overlay
//! image viewer, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod image;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use image::ScaleLimits;
pub use messages::Msg;
pub use model::{ImageDescriptor, ImageKey, ViewerState};
pub use runtime::{Coordinator, ViewerHandle};
