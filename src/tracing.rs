//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! registry churn and visibility/index transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=viewer=debug,registry=trace` - scoped filtering
//! - `RUST_LOG=scale=trace` - per-frame scale normalization
//! - `RUST_LOG=lightbox::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/lightbox/logs/lightbox.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::collections::HashSet;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{ImageKey, ViewerModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/lightbox/logs/lightbox.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stderr keeps stdout free for reports
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "lightbox.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of viewer state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSnapshot {
    pub visible: bool,
    pub effective_visible: bool,
    pub index: usize,
    pub keys: Vec<ImageKey>,
}

impl ViewerSnapshot {
    pub fn from_model<T>(model: &ViewerModel<T>) -> Self {
        Self {
            visible: model.state.visible,
            effective_visible: model.effective_visible(),
            index: model.state.index,
            keys: model.state.keys(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ViewerSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.visible != other.visible {
            changes.push(format!("visible: {} → {}", self.visible, other.visible));
        }
        if self.effective_visible != other.effective_visible {
            changes.push(format!(
                "shown: {} → {}",
                self.effective_visible, other.effective_visible
            ));
        }
        if self.index != other.index {
            changes.push(format!("index: {} → {}", self.index, other.index));
        }
        if self.keys != other.keys {
            let before: HashSet<ImageKey> = self.keys.iter().copied().collect();
            let after: HashSet<ImageKey> = other.keys.iter().copied().collect();
            let added = after.difference(&before).count();
            let removed = before.difference(&after).count();
            if added == 0 && removed == 0 {
                changes.push("images reordered".to_string());
            } else {
                changes.push(format!(
                    "images: {} → {} (+{} -{})",
                    self.keys.len(),
                    other.keys.len(),
                    added,
                    removed
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
