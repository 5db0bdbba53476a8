//! ZDL launcher entry point.
//!
//! Loads `zdl.ini`, builds the launch plan for the selected source port and
//! IWAD, and starts the engine.
//!
//! # Usage
//!
//! ```text
//! zdl-launcher [OPTIONS]
//!
//! Options:
//!   --config <PATH>   zdl.ini to read [env: ZDL_CONFIG] [default: platform config dir]
//!   --dry-run         Print the launch plan instead of starting the engine
//!   --json            With --dry-run, print the plan as JSON
//! ```
//!
//! # Exit codes
//!
//! `0` on a successful launch or a silent abort (empty argument list), `1`
//! when the user has to fix the configuration or the engine failed.  When
//! the launcher waits for the engine, the engine's own exit code is passed
//! through.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zdl_core::{ConfigDocument, LaunchPlan};
use zdl_launcher::application::launch::{LaunchOutcome, LaunchUseCase, LaunchUseCaseError};
use zdl_launcher::infrastructure::process::TokioProcessSpawner;
use zdl_launcher::infrastructure::storage::config::{config_file_path, load_config};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// ZDL source port launcher.
#[derive(Debug, Parser)]
#[command(
    name = "zdl-launcher",
    about = "Launches the selected Doom source port with the options saved in zdl.ini",
    version
)]
struct Cli {
    /// Path of the zdl.ini to read.
    ///
    /// Defaults to `zdl.ini` in the platform config directory.
    #[arg(long, env = "ZDL_CONFIG")]
    config: Option<PathBuf>,

    /// Print the executable, working directory and arguments, then exit.
    #[arg(long)]
    dry_run: bool,

    /// Print the dry-run plan as JSON.
    #[arg(long, requires = "dry_run")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = match cli.config {
        Some(path) => path,
        None => config_file_path().context("locating zdl.ini")?,
    };
    let store: ConfigDocument =
        load_config(&path).with_context(|| format!("loading {}", path.display()))?;

    let current_dir = std::env::current_dir().context("reading the current directory")?;
    let use_case = LaunchUseCase::new(TokioProcessSpawner, current_dir);

    if cli.dry_run {
        return match use_case.plan(&store) {
            Ok(plan) => {
                print_plan(&plan, cli.json)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => Ok(report(&LaunchUseCaseError::from(e))),
        };
    }

    match use_case.launch(&store).await {
        Ok(LaunchOutcome::Detached) => {
            info!("engine started; closing launcher");
            Ok(ExitCode::SUCCESS)
        }
        Ok(LaunchOutcome::Exited(code)) => Ok(ExitCode::from(exit_code_byte(code))),
        Err(e) => Ok(report(&e)),
    }
}

/// Shows the failure to the user and picks the launcher's exit code.
fn report(err: &LaunchUseCaseError) -> ExitCode {
    match err.user_message() {
        Some(message) => {
            error!("{err}");
            eprintln!("ZDL: {message}");
            ExitCode::FAILURE
        }
        None => {
            info!("{err}; nothing launched");
            ExitCode::SUCCESS
        }
    }
}

fn print_plan(plan: &LaunchPlan, json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(plan).context("serialising the launch plan")?
        );
    } else {
        println!("executable: {}", plan.executable);
        println!("working directory: {}", plan.working_directory.display());
        for arg in &plan.arguments {
            println!("  {arg}");
        }
    }
    Ok(())
}

/// Clamps an engine exit code into the range `ExitCode` accepts.
fn exit_code_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
