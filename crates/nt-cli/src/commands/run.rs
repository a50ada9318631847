//! Run command implementation.

use crate::cli::{DemoConfig, OutputFormat};
use crate::sections::{self, Section};
use crate::Result;
use clap::Args;
use std::io::Write;
use tracing::info;

/// Arguments for the run command
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Sections to run, in order (defaults to the configured sections)
    #[arg(value_enum)]
    pub sections: Vec<Section>,

    /// Output format (overrides the configuration file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print each JSON document on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run_command(args: RunArgs, config: &DemoConfig) -> Result<()> {
    let mut output = config.output.clone();
    if let Some(format) = args.format {
        output.format = format;
    }
    if args.compact {
        output.pretty = false;
    }

    let selected: Vec<Section> = if args.sections.is_empty() {
        config.sections()
    } else {
        args.sections
    };
    info!("Running {} section(s) as {:?}", selected.len(), output.format);

    let stdout = std::io::stdout();
    let mut out = sections::run_all(selected, &output, stdout.lock())?;
    out.flush()?;

    Ok(())
}
