// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod layout;
mod library;
mod parse;
mod template;
mod validate;

pub use error::{Error, Result};
pub use file::FondueToml;
pub use layout::Layout;
pub use library::Library;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use template::ManifestTemplate;

/// Root manifest for fondue.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Library metadata
    pub library: Library,

    /// Source tree layout
    #[serde(default)]
    pub layout: Layout,

    /// Translation units in merge order
    pub units: Vec<String>,
}
