use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use fondue_core::{GeneratedFile, WriteResult};
use fondue_manifest::ManifestTemplate;

#[derive(Args)]
pub struct InitCommand {
    /// Library name (defaults to current directory)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;

        match ManifestTemplate::new(&name).write(&output_dir)? {
            WriteResult::Written => {
                println!(
                    "Created fondue.toml for '{}' in {}",
                    name,
                    output_dir.display()
                );
                println!();
                println!("Next steps:");
                println!("  list your units in fondue.toml");
                println!("  fondue check");
                println!("  fondue melt");
            }
            WriteResult::Skipped => {
                println!(
                    "fondue.toml already exists in {}, leaving it alone",
                    output_dir.display()
                );
            }
        }

        Ok(())
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}
