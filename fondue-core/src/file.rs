use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that render to a single file on disk
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, creating missing parent directories
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (the melted artifact)
    Always,
    /// Only create if the file doesn't exist (scaffolded manifests)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note {
        name: &'static str,
        text: &'static str,
        overwrite: Overwrite,
    }

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("out").join(self.name)
        }

        fn rules(&self) -> FileRules {
            FileRules {
                overwrite: self.overwrite,
            }
        }

        fn render(&self) -> String {
            self.text.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "always.txt",
            text: "updated",
            overwrite: Overwrite::Always,
        };

        fs::create_dir_all(temp.path().join("out")).unwrap();
        fs::write(note.path(temp.path()), "original").unwrap();

        let result = note.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(note.path(temp.path())).unwrap(), "updated");
    }

    #[test]
    fn test_generated_file_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "new.txt",
            text: "new content",
            overwrite: Overwrite::IfMissing,
        };

        let result = note.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(note.path(temp.path())).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_generated_file_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "existing.txt",
            text: "should not write",
            overwrite: Overwrite::IfMissing,
        };

        fs::create_dir_all(temp.path().join("out")).unwrap();
        fs::write(note.path(temp.path()), "original").unwrap();

        let result = note.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(note.path(temp.path())).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_default_rules_overwrite() {
        assert_eq!(FileRules::default().overwrite, Overwrite::Always);
    }
}
