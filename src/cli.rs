//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a YAML script of viewer operations
//! - Starting in controlled mode
//! - Overriding scale limits and the default start index

use clap::Parser;
use std::path::PathBuf;

use crate::config::ViewerConfig;

/// Replay viewer operations and print the resulting states as JSON
#[derive(Parser, Debug)]
#[command(
    name = "lightbox",
    version,
    about = "Replay lightbox viewer operations"
)]
pub struct CliArgs {
    /// YAML script to replay
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Start in controlled mode with this visibility (overrides the script)
    #[arg(long, value_name = "BOOL")]
    pub controlled: Option<bool>,

    /// Config file to use instead of ~/.config/lightbox/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Nominal minimum zoom
    #[arg(long, value_name = "SCALE")]
    pub min_scale: Option<f64>,

    /// Nominal maximum zoom
    #[arg(long, value_name = "SCALE")]
    pub max_scale: Option<f64>,

    /// Position opened by an index-less `open`
    #[arg(long, value_name = "N")]
    pub default_index: Option<usize>,

    /// Pretty-print one JSON document instead of one line per step
    #[arg(long)]
    pub pretty: bool,
}

impl CliArgs {
    /// Layer command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, mut config: ViewerConfig) -> ViewerConfig {
        if let Some(min) = self.min_scale {
            config.min_scale = min;
        }
        if let Some(max) = self.max_scale {
            config.max_scale = max;
        }
        if let Some(index) = self.default_index {
            config.default_start_index = index;
        }
        config
    }
}
