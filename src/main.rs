use anyhow::{Context, Result};
use clap::Parser;

use lightbox::cli::CliArgs;
use lightbox::config::ViewerConfig;
use lightbox::script::{load_script_file, run_script};

fn main() -> Result<()> {
    lightbox::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => ViewerConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::load(),
    };
    let config = args.apply_overrides(config);
    config.validate().context("Invalid configuration")?;

    let mut script = load_script_file(&args.script)
        .with_context(|| format!("Failed to load script {}", args.script.display()))?;
    if args.controlled.is_some() {
        script.controlled_visible = args.controlled;
    }

    tracing::info!(
        steps = script.steps.len(),
        controlled = script.controlled_visible.is_some(),
        "replaying {}",
        args.script.display()
    );
    let reports = run_script(&script, &config);

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", serde_json::to_string(report)?);
        }
    }

    Ok(())
}
