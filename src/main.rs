//! Command-line entry point.
//!
//! Parses the arguments, sets up logging, runs one probe and renders how it
//! ended. Every outcome a user can cause (bad arguments, unreachable host,
//! invalid redirect) exits with status 0; only faults in reach itself abort
//! with a non-zero status.

use clap::{CommandFactory, Parser};
use color_eyre::eyre::eyre;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use reach::{error_line, ProberBuilder, ProberConfig, ProgressDisplay, Status};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nLicense MIT: <https://opensource.org/licenses/MIT>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Check whether a URL is reachable, following redirects.
#[derive(Parser, Debug)]
#[command(name = "reach", version, long_version = LONG_VERSION)]
struct Cli {
    /// Print output without colors
    #[arg(short = 'c', long = "nocolor")]
    no_color: bool,

    /// Maximum redirects to follow
    #[arg(
        long = "maxredirects",
        value_name = "REDIRECTS",
        default_value_t = reach::prober::DEFAULT_MAX_REDIRECTS
    )]
    max_redirects: u32,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = reach::prober::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// URL to probe; `http://` is assumed when no scheme is given
    url: String,
}

impl From<&Cli> for ProberConfig {
    fn from(cli: &Cli) -> Self {
        ProberConfig {
            timeout: Duration::from_secs(cli.timeout),
            max_redirects: cli.max_redirects,
            color: !cli.no_color,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.print()?,
                _ => {
                    tracing::debug!(error = %e, "invalid arguments");
                    Cli::command().print_help()?;
                }
            }
            return Ok(());
        }
    };

    let config = ProberConfig::from(&cli);
    let color = config.color;
    let display = ProgressDisplay::new();
    let prober = ProberBuilder::new()
        .config(config)
        .display(display.clone())
        .build();

    let summary = prober.probe(&cli.url).await;
    if let Status::Failed(err) = summary.status() {
        if err.is_internal() {
            display.close();
            return Err(eyre!("{}: {}", err.label(), err));
        }
        display.finish_line(&error_line(err, color))?;
    }
    display.close();

    Ok(())
}
