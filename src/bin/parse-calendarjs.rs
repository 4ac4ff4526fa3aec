use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use calendarjs::{Spider, SpiderConfig};
use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Reads a downloaded calendar.js body and prints one JSON object per event.
#[derive(Parser)]
#[command(name = "parse-calendarjs")]
#[command(version)]
struct Cli {
    /// Spider configuration (defaults to the Queens CB2 feed)
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Feed body to parse (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .into_diagnostic()
        .wrap_err("failed to set up logging")
}

pub fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = match &cli.config {
        Some(path) => SpiderConfig::load(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("loading {}", path.display()))?,
        None => SpiderConfig::default(),
    };
    let spider = Spider::new(config);

    let body = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {}", path.display()))?,
        None => {
            let mut body = String::new();
            stdin().read_to_string(&mut body).into_diagnostic()?;
            body
        }
    };
    info!(spider = spider.name(), bytes = body.len(), "parsing feed body");

    let mut out = stdout().lock();
    for event in spider.parse(&body) {
        let json = serde_json::to_string(&event).into_diagnostic()?;
        writeln!(out, "{json}").into_diagnostic()?;
    }
    Ok(())
}
