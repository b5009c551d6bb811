mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use harbor_cli::output::OutputFormat;

use commands::run::RunCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Port, vessel and cargo scenario runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario and report the final state of ports and vessels.
    Run {
        /// Scenario JSON file. Falls back to HARBOR_SCENARIO, then the built-in demo.
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Write the JSON report to this path.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Format printed to stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the preset vessel classes.
    Classes,
    /// Show weight and consumption cost of each unit in a cargo manifest.
    Manifest {
        /// CSV manifest path.
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            scenario,
            output,
            format,
        } => commands::run::handle_run_command(&RunCommandArgs {
            scenario,
            output,
            format,
        }),
        Command::Classes => commands::classes::handle_list_classes(),
        Command::Manifest { path } => commands::manifest::handle_manifest(&path),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
