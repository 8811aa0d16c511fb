use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the manifest content and filename, reducing parameter
/// passing in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for an empty unit registry.
    pub fn no_units_error(&self, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::NoUnits {
            src: self.named_source(),
            span,
        })
    }

    /// Create a duplicate unit error labeling both occurrences.
    pub fn duplicate_unit_error(
        &self,
        name: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateUnit {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    /// Create an invalid name error.
    pub fn invalid_name_error(
        &self,
        name: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.into(),
            field: field.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid guard macro error.
    pub fn invalid_guard_error(
        &self,
        guard: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidGuard {
            src: self.named_source(),
            span,
            guard: guard.into(),
        })
    }

    /// Create an empty extension error.
    pub fn empty_extension_error(
        &self,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::EmptyExtension {
            src: self.named_source(),
            span,
            field: field.into(),
        })
    }

    /// Create a dotted extension error.
    pub fn dotted_extension_error(
        &self,
        ext: impl Into<String>,
        trimmed: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DottedExtension {
            src: self.named_source(),
            span,
            ext: ext.into(),
            trimmed: trimmed.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'fondue init' to create a fondue.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fondue.toml")]
    #[diagnostic(code(fondue::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("no units declared")]
    #[diagnostic(
        code(fondue::no_units),
        help("list at least one unit to merge, e.g. units = [\"core\"]")
    )]
    NoUnits {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a non-empty array")]
        span: Option<SourceSpan>,
    },

    #[error("duplicate unit '{name}'")]
    #[diagnostic(
        code(fondue::duplicate_unit),
        help("each unit is merged exactly once; remove the second occurrence")
    )]
    DuplicateUnit {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid {field} '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, digits, underscores, dashes, and dots, starting with a letter, digit, or underscore."
    ))]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        field: String,
        reason: String,
    },

    #[error("invalid guard macro '{guard}'")]
    #[diagnostic(help(
        "use uppercase letters, digits, and underscores, starting with a letter or underscore, e.g. 'MYLIB_IMPLEMENTATION'"
    ))]
    InvalidGuard {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid macro name")]
        span: Option<SourceSpan>,
        guard: String,
    },

    #[error("{field} must not be empty")]
    #[diagnostic(help("give a file extension such as 'hpp', or drop the field to use the default"))]
    EmptyExtension {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty extension")]
        span: Option<SourceSpan>,
        field: String,
    },

    #[error("extension '{ext}' must not start with a dot")]
    #[diagnostic(
        code(fondue::dotted_extension),
        help("write '{trimmed}' instead; the dot is added when paths are built")
    )]
    DottedExtension {
        #[source_code]
        src: NamedSource<String>,
        #[label("leading dot")]
        span: Option<SourceSpan>,
        ext: String,
        trimmed: String,
    },
}
