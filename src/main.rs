use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use netperf::commands::{self, ScanOptions};
use netperf::config::Config;
use netperf::ExportFormat;
use netperf_feeds::LineSource;

#[derive(Parser)]
#[command(
    name = "netperf",
    about = "Backup job network metrics parser (file or folder)"
)]
struct Cli {
    /// Write debug logs to stderr (RUST_LOG overrides the filter).
    #[arg(long, global = true)]
    debug: bool,

    /// TOML file layered over the built-in defaults.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show raw lines the patterns recognise (quick check).
    Validate {
        /// Log file, or directory searched recursively for *.log files.
        #[arg(long)]
        input: PathBuf,

        /// Stop after this many matching lines [default: 40].
        #[arg(long)]
        limit: Option<NonZeroUsize>,
    },
    /// Parse every line and write the events file.
    Scan {
        /// Log file, or directory searched recursively for *.log files.
        #[arg(long)]
        input: PathBuf,

        /// Output path. Defaults to <input-name>.<format> in the configured
        /// output location.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Export format: csv or jsonl [default: csv].
        #[arg(long)]
        format: Option<ExportFormat>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::debug!("netperf debug log started");
    }

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Command::Validate { input, limit } => {
            let limit = match limit {
                Some(limit) => limit.get(),
                None if config.validate.limit > 0 => config.validate.limit,
                None => anyhow::bail!("validate.limit must be at least 1"),
            };
            let source = LineSource::open(&input)
                .with_context(|| format!("cannot read input {}", input.display()))?;

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            commands::run_validate(source, limit, &mut out)?;
            out.flush()?;
        }
        Command::Scan { input, out, format } => {
            let summary = commands::run_scan(&ScanOptions {
                input,
                out,
                format: format.unwrap_or(config.scan.format),
                output_location: config.scan.output_location,
            })?;
            println!("{summary}");
        }
    }

    Ok(())
}
