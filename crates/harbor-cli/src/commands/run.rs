//! Run command handler for executing scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use harbor_cli::output::{render_records, render_state, OutputFormat};
use harbor_cli::terminal::ColorPalette;
use harbor_lib::{Scenario, Simulation};

/// Environment variable naming a scenario file when `--scenario` is absent.
pub const SCENARIO_ENV: &str = "HARBOR_SCENARIO";

/// Arguments for the run command.
#[derive(Debug, Clone)]
pub struct RunCommandArgs {
    /// Scenario file given on the command line.
    pub scenario: Option<PathBuf>,
    /// Where to write the JSON report.
    pub output: Option<PathBuf>,
    /// Format printed to stdout.
    pub format: OutputFormat,
}

/// Handle the run subcommand.
pub fn handle_run_command(args: &RunCommandArgs) -> Result<()> {
    let scenario = load_scenario(args.scenario.as_deref())?;
    let (simulation, records) =
        Simulation::run_scenario(&scenario).context("failed to run scenario")?;
    let report = simulation.report();

    match args.format {
        OutputFormat::Text => {
            let palette = ColorPalette::detect();
            println!("Actions:");
            print!("{}", render_records(&records, &palette));
            print!("{}", render_state(&simulation, &palette));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// Resolve the scenario: explicit path, then `HARBOR_SCENARIO`, then the built-in demo.
fn load_scenario(explicit: Option<&Path>) -> Result<Scenario> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(SCENARIO_ENV).map(PathBuf::from));

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading scenario");
            Scenario::from_path(&path)
                .with_context(|| format!("failed to load scenario from {}", path.display()))
        }
        None => {
            debug!("no scenario given; using built-in demo scenario");
            Ok(Scenario::demo())
        }
    }
}
