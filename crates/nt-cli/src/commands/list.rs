//! List command implementation

use crate::cli::DemoConfig;
use crate::sections::Section;
use crate::Result;
use clap::Args;
use console::style;

/// Arguments for the list command
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only list the sections the configuration selects
    #[arg(long)]
    pub configured: bool,
}

/// Execute the list command
pub fn list_command(args: ListArgs, config: &DemoConfig) -> Result<()> {
    let sections = if args.configured {
        config.sections()
    } else {
        Section::ALL.to_vec()
    };

    for section in sections {
        println!(
            "{:<16} {}",
            style(section.name()).green().bold(),
            section.about()
        );
    }

    Ok(())
}
