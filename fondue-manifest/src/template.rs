//! Starter fondue.toml scaffolded by `fondue init`.

use std::path::{Path, PathBuf};

use fondue_core::{FileRules, GeneratedFile, Overwrite, to_macro_case};

/// The fondue.toml configuration file.
pub struct ManifestTemplate {
    name: String,
}

impl ManifestTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for ManifestTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("fondue.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> String {
        format!(
            r#"# Units merge in order; earlier units must not depend on later ones.
units = ["core"]

[library]
name = "{name}"
# guard = "{macro_name}_IMPLEMENTATION"
# include_prefix = "{name}"
# banner = """
# /* {name} -- license and attribution comment */
# """

# Uncomment to change where source files are read and the artifact is written:
# [layout]
# declarations = "include/{name}"
# implementations = "src"
# declaration_ext = "hpp"
# implementation_ext = "cpp"
# output = "single_include/{name}/{name}.hpp"
"#,
            name = self.name,
            macro_name = to_macro_case(&self.name),
        )
    }
}
