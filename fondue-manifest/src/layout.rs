use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Source tree layout configuration
///
/// Every field is optional in the manifest; defaults follow the common
/// C++ library convention of `include/<name>` headers and `src` sources.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Directory holding declaration files (defaults to include/<name>)
    pub declarations: Option<PathBuf>,

    /// Directory holding implementation files
    pub implementations: PathBuf,

    /// Extension of declaration files
    pub declaration_ext: String,

    /// Extension of implementation files
    pub implementation_ext: String,

    /// Path of the assembled artifact (defaults to single_include/<name>/<name>.<ext>)
    pub output: Option<PathBuf>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            declarations: None,
            implementations: PathBuf::from("src"),
            declaration_ext: String::from("hpp"),
            implementation_ext: String::from("cpp"),
            output: None,
        }
    }
}

impl Layout {
    /// The declarations directory, relative to the project root
    pub fn declarations_dir(&self, library: &str) -> PathBuf {
        match &self.declarations {
            Some(dir) => dir.clone(),
            None => Path::new("include").join(library),
        }
    }

    /// The artifact path, relative to the project root
    pub fn output_path(&self, library: &str) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => Path::new("single_include")
                .join(library)
                .join(format!("{}.{}", library, self.declaration_ext)),
        }
    }
}
