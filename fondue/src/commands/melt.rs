use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fondue_manifest::FondueToml;

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct MeltCommand {
    /// Path to fondue.toml (defaults to ./fondue.toml)
    #[arg(short, long, default_value = "fondue.toml")]
    pub config: PathBuf,

    /// Project root that manifest paths resolve against
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Assemble and print the artifact instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl MeltCommand {
    /// Run the melt command
    pub fn run(&self) -> Result<()> {
        let fondue_toml = FondueToml::open(&self.config).unwrap_or_exit();
        let outcome = ops::melt(fondue_toml.manifest(), &self.root, self.dry_run)?;

        outcome.render(&mut TerminalOutput::new());

        Ok(())
    }
}
