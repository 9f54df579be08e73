//! Headless demo surface for the folio preview pipeline.
//!
//! Loads a project catalog, resolves a screenshot preview for every card
//! through the provider fallback chain, and renders the outcome as text.

mod catalog;
mod platform;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Resolve visual previews for a catalog of project links")]
struct Cli {
    /// Catalog file (.ron or .json); the built-in catalog is used when omitted.
    catalog: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "terminal")]
    log: LogArg,

    /// Address shown in the contact shortcut line.
    #[arg(long, default_value = "hello@aafcbuilders.org")]
    contact_email: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log.into());

    let projects = catalog::load(cli.catalog.as_deref())?;
    platform::app::run(projects, &cli.contact_email)
}
