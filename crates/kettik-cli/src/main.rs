/*
[INPUT]:  CLI arguments, YAML configuration file, KETTIK_* environment
[OUTPUT]: Command output on stdout, diagnostics on stderr, exit status
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;
use kettik_client::KettikError;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kettik_cli::{App, CliConfig, CliOverrides, Command};

#[derive(Parser, Debug)]
#[command(name = "kettik", version, about = "Kettik account client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "data-dir", value_name = "DIR")]
    data_dir: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("{} {err:#}", style("error:").red().bold());
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", style("error:").red().bold(), failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = CliConfig::load(
        args.config_path.as_deref(),
        CliOverrides {
            base_url: args.base_url,
            data_dir: args.data_dir,
        },
    )?;
    info!(api_base = %config.api_base, dry_run = args.dry_run, "configuration loaded");

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let app = App::new(config)?;
    app.run(args.command.unwrap_or(Command::Status)).await
}

/// Client failures are shown exactly as the backend (or the client) worded them
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<KettikError>() {
        Some(err) => err.user_message(),
        None => format!("{err:#}"),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
