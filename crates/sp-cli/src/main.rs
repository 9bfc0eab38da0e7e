use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sp_cli::commands::render::RenderOptions;
use sp_cli::commands::util::parse_clock;
use sp_cli::commands::{interactive, plan};
use sp_cli::{Cli, Commands, Config};

/// Load config and resolve presentation settings, letting `--start` win.
fn render_options(config_path: Option<&Path>, start: Option<&str>) -> Result<RenderOptions> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let start = match start {
        Some(start) => parse_clock(start)?,
        None => config
            .start_clock()
            .context("invalid start_time in configuration")?,
    };
    Ok(RenderOptions {
        start,
        motivation: config.motivation,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays clean for the plan and JSON
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Plan {
            hours,
            subjects,
            json,
            start,
        }) => {
            let options = render_options(cli.config.as_deref(), start.as_deref())?;
            plan::run(&mut io::stdout().lock(), *hours, subjects, options, *json)?;
        }
        Some(Commands::Interactive { json }) => {
            let options = render_options(cli.config.as_deref(), None)?;
            run_interactive(options, *json)?;
        }
        None => {
            // No subcommand: ask for everything
            let options = render_options(cli.config.as_deref(), None)?;
            run_interactive(options, false)?;
        }
    }

    Ok(())
}

fn run_interactive(options: RenderOptions, json: bool) -> Result<()> {
    let mut reader = io::stdin().lock();
    if json {
        // Keep stdout for the JSON document
        interactive::run(&mut reader, &mut io::stderr(), &mut io::stdout(), options, true)
    } else {
        interactive::run(&mut reader, &mut io::stdout(), &mut io::stdout(), options, false)
    }
}
