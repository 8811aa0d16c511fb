//! Per-file transform that splits a source file into includes and content.

use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr};
use fondue_manifest::Library;

/// Which half of a translation unit a source file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A header wrapped in its own include guard.
    Declaration,
    /// An implementation file with the definitions.
    Implementation,
}

/// Library-specific matching rules shared by every file in a merge.
#[derive(Debug, Clone)]
pub struct MergeRules {
    namespace_marker: String,
    local_prefix: String,
}

impl MergeRules {
    pub fn new(library: &Library) -> Self {
        Self {
            namespace_marker: format!("using namespace {}", library.name),
            local_prefix: format!("#include <{}", library.local_prefix()),
        }
    }
}

/// The two streams extracted from one source file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnitText {
    /// Collected `#include` lines, newline-terminated, in source order.
    pub includes: String,
    /// Code with comments, guards, and local includes stripped.
    pub content: String,
}

/// Read a source file and run it through [`transform_source`].
pub fn transform_file(path: &Path, kind: FileKind, rules: &MergeRules) -> Result<UnitText> {
    let source = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Ok(transform_source(&source, kind, rules))
}

/// Split one source file into its include lines and its merged content.
///
/// Block comments, include guards, and local includes are stripped, and
/// remaining `#include` lines are diverted into [`UnitText::includes`]
/// for later deduplication. Content begins at the include guard of a
/// declaration file, or at the first `namespace` line of an
/// implementation file; anything before that is dropped. Line comments
/// are cut, trailing whitespace is trimmed, and runs of blank lines
/// collapse.
pub fn transform_source(source: &str, kind: FileKind, rules: &MergeRules) -> UnitText {
    let mut includes = String::new();
    let mut content = String::new();
    let mut in_comment = false;
    let mut found_content = false;

    for line in source.lines() {
        let sline = line.trim();

        // A block comment only counts when it opens at the start of a
        // line; it swallows every line up to one that ends with `*/`.
        if sline.starts_with("/*") {
            in_comment = true;
        }
        if in_comment {
            if sline.ends_with("*/") {
                in_comment = false;
            }
            continue;
        }

        if kind == FileKind::Declaration && sline.starts_with("#ifndef") {
            found_content = true;
            continue;
        }

        if kind == FileKind::Implementation
            && (sline.starts_with(&rules.namespace_marker) || sline.starts_with("namespace"))
        {
            // The namespace line itself is kept.
            found_content = true;
        } else if sline.starts_with(&rules.local_prefix) || sline.starts_with("#include \"") {
            continue;
        } else if sline.starts_with("#include") {
            includes.push_str(line);
            includes.push('\n');
            continue;
        } else if kind == FileKind::Declaration && sline.starts_with("#endif") {
            break;
        }

        if found_content && !sline.starts_with("#define") {
            let code = match line.split_once("//") {
                Some((before, _)) => before,
                None => line,
            };
            content.push_str(code.trim_end());
            if !content.ends_with('\n') {
                content.push('\n');
            }
        }
    }

    UnitText { includes, content }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_for(name: &str) -> MergeRules {
        MergeRules::new(&Library {
            name: name.into(),
            guard: None,
            include_prefix: None,
            banner: None,
        })
    }

    #[test]
    fn test_declaration_guard_is_stripped() {
        let source =
            "#ifndef MYLIB_ERROR_HPP\n#define MYLIB_ERROR_HPP\n\nnamespace mylib {\n  int f();\n}\n\n#endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("mylib"));
        assert_eq!(text.includes, "");
        assert_eq!(text.content, "\nnamespace mylib {\n  int f();\n}\n");
    }

    #[test]
    fn test_system_includes_are_collected() {
        let source = "#ifndef X_HPP\n\
                      #define X_HPP\n\
                      #include <string>\n\
                      #include <vector>\n\
                      #include \"helpers.hpp\"\n\
                      #include <optionpp/error.hpp>\n\
                      namespace optionpp {\n\
                      class A;\n\
                      }\n\
                      #endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("optionpp"));
        assert_eq!(text.includes, "#include <string>\n#include <vector>\n");
        assert_eq!(text.content, "namespace optionpp {\nclass A;\n}\n");
    }

    #[test]
    fn test_include_lines_are_kept_verbatim() {
        let source = "#ifndef G\n  #include <vector>  // used everywhere\nint a;\n#endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text.includes, "  #include <vector>  // used everywhere\n");
    }

    #[test]
    fn test_local_include_prefix_override() {
        let source = "#ifndef G\n\
                      #include <ml/a.hpp>\n\
                      #include <mylib/b.hpp>\n\
                      int a;\n\
                      #endif\n";
        let rules = MergeRules::new(&Library {
            name: "mylib".into(),
            guard: None,
            include_prefix: Some("ml".into()),
            banner: None,
        });
        let text = transform_source(source, FileKind::Declaration, &rules);
        assert_eq!(text.includes, "#include <mylib/b.hpp>\n");
        assert_eq!(text.content, "int a;\n");
    }

    #[test]
    fn test_line_comments_are_cut() {
        let source = "#ifndef G\n\
                      #define G\n\
                      int f(); // returns the thing\n\
                      // standalone note\n\
                      int g();\n\
                      #endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text.content, "int f();\nint g();\n");
    }

    #[test]
    fn test_block_comments_are_skipped() {
        let source = "/* banner\n\
                       * copyright\n\
                       */\n\
                      #ifndef G\n\
                      #define G\n\
                      int a;\n\
                      /* one-liner */\n\
                      int b;\n\
                      #endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text.content, "int a;\nint b;\n");
    }

    #[test]
    fn test_block_comment_swallows_until_closing_line() {
        // Code after `*/` on the opening line is lost with it.
        let source = "#ifndef G\n\
                      #define G\n\
                      /* note */ int x;\n\
                      int y;\n\
                      ok */\n\
                      int z;\n\
                      #endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text.content, "int z;\n");
    }

    #[test]
    fn test_defines_are_dropped_everywhere() {
        let source = "#ifndef G\n\
                      #define G\n\
                      int a;\n\
                      #define MAX 10\n\
                      int b;\n\
                      #endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text.content, "int a;\nint b;\n");
    }

    #[test]
    fn test_blank_runs_collapse() {
        let source = "#ifndef G\n#define G\nint a;\n\n\n\nint b;\n#endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text.content, "int a;\nint b;\n");
    }

    #[test]
    fn test_guard_only_declaration_is_empty() {
        let source = "#ifndef G\n#define G\n#endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text, UnitText::default());
    }

    #[test]
    fn test_inner_endif_truncates_declaration() {
        let source = "#ifndef G\n\
                      #define G\n\
                      #ifdef _WIN32\n\
                      int w();\n\
                      #endif\n\
                      int rest();\n\
                      #endif\n";
        let text = transform_source(source, FileKind::Declaration, &rules_for("x"));
        assert_eq!(text.content, "#ifdef _WIN32\nint w();\n");
    }

    #[test]
    fn test_implementation_waits_for_namespace() {
        let source = "#include <string>\n\
                      #include <optionpp/parser.hpp>\n\
                      static int helper = 1;\n\
                      \n\
                      namespace optionpp {\n\
                      \n\
                      int parse() { return helper; }\n\
                      \n\
                      } // namespace optionpp\n";
        let text = transform_source(source, FileKind::Implementation, &rules_for("optionpp"));
        assert_eq!(text.includes, "#include <string>\n");
        assert_eq!(
            text.content,
            "namespace optionpp {\nint parse() { return helper; }\n}\n"
        );
    }

    #[test]
    fn test_using_namespace_marker_starts_content() {
        let source = "#include <cstdio>\n\
                      using namespace optionpp;\n\
                      void run() {}\n";
        let text = transform_source(source, FileKind::Implementation, &rules_for("optionpp"));
        assert_eq!(text.content, "using namespace optionpp;\nvoid run() {}\n");
    }

    #[test]
    fn test_foreign_using_namespace_does_not_start_content() {
        let source = "using namespace std;\n\
                      namespace optionpp {\n\
                      }\n";
        let text = transform_source(source, FileKind::Implementation, &rules_for("optionpp"));
        assert_eq!(text.content, "namespace optionpp {\n}\n");
    }

    #[test]
    fn test_endif_does_not_terminate_implementation() {
        let source = "namespace x {\n\
                      #ifdef DEBUG\n\
                      void dbg();\n\
                      #endif\n\
                      }\n";
        let text = transform_source(source, FileKind::Implementation, &rules_for("x"));
        assert_eq!(text.content, "namespace x {\n#ifdef DEBUG\nvoid dbg();\n#endif\n}\n");
    }

    #[test]
    fn test_transform_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.hpp");
        std::fs::write(&path, "#ifndef G\nint a;\n#endif\n").unwrap();

        let text = transform_file(&path, FileKind::Declaration, &rules_for("x")).unwrap();
        assert_eq!(text.content, "int a;\n");
    }

    #[test]
    fn test_transform_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.cpp");

        let err = transform_file(&path, FileKind::Implementation, &rules_for("x")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
