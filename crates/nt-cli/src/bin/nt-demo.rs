//! nt-demo binary
//!
//! Walks through what `nt-core` records can do, one section at a time.
//!
//! # Usage
//!
//! ```bash
//! # List the available sections
//! nt-demo list
//!
//! # Run every section
//! nt-demo run
//!
//! # Run two sections and print JSON
//! nt-demo run composition showcase --format json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use nt_cli::{
    Result,
    cli::DemoConfig,
    commands::{self, list::ListArgs, run::RunArgs},
};
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "nt-demo",
    version = env!("CARGO_PKG_VERSION"),
    about = "nt-demo: a tour of compile-time named tuples",
    long_about = r#"
A tour of compile-time named tuples. Runs small programs built on nt-core
records and prints what they produce. Every field name in them is checked
by the compiler; the program only shows the values.

EXAMPLES:
    nt-demo list                           # Show the sections
    nt-demo run                            # Run all of them
    nt-demo run showcase --format json     # Employees as JSON
    "#
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo sections
    List(ListArgs),

    /// Run demo sections
    Run(RunArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format)?;

    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }

    let result = DemoConfig::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::List(args) => commands::list_command(args, &config),
        Commands::Run(args) => commands::run_command(args, &config),
    });

    match result {
        Ok(()) => {
            debug!("command completed");
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            debug!(error = ?e, "command failed");
            std::process::exit(1);
        }
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so that stdout carries only section output.
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
