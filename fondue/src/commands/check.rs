use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fondue_manifest::FondueToml;

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to fondue.toml (defaults to ./fondue.toml)
    #[arg(short, long, default_value = "fondue.toml")]
    pub config: PathBuf,

    /// Project root that manifest paths resolve against
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let fondue_toml = FondueToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(fondue_toml.manifest(), &self.root, fondue_toml.path());

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
