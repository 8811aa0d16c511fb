//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use crate::{
    Error, Manifest, Result,
    error::SourceContext,
    validate::{find_key_span, find_quoted_span, is_macro_name, validate_stem},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "fondue.toml")
    }
}

impl Manifest {
    /// Parse a fondue.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a fondue.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let src = ctx.src();

    let name = &manifest.library.name;
    if let Some(reason) = validate_stem(name) {
        return Err(ctx.invalid_name_error(
            name,
            "library name",
            reason,
            find_quoted_span(src, name, 0),
        ));
    }

    let guard = manifest.library.guard_macro();
    if !is_macro_name(&guard) {
        // Point at the explicit guard if there is one, otherwise at the
        // name the guard was derived from
        let span = match &manifest.library.guard {
            Some(explicit) => find_quoted_span(src, explicit, 0),
            None => find_quoted_span(src, name, 0),
        };
        return Err(ctx.invalid_guard_error(&guard, span));
    }

    if manifest.units.is_empty() {
        return Err(ctx.no_units_error(find_key_span(src, "units")));
    }

    let mut seen = HashSet::new();
    for unit in &manifest.units {
        if let Some(reason) = validate_stem(unit) {
            return Err(ctx.invalid_name_error(
                unit,
                "unit name",
                reason,
                find_quoted_span(src, unit, 0),
            ));
        }
        if !seen.insert(unit.as_str()) {
            return Err(ctx.duplicate_unit_error(
                unit,
                find_quoted_span(src, unit, 0),
                find_quoted_span(src, unit, 1),
            ));
        }
    }

    for (field, ext) in [
        ("declaration extension", &manifest.layout.declaration_ext),
        ("implementation extension", &manifest.layout.implementation_ext),
    ] {
        if ext.is_empty() {
            return Err(ctx.empty_extension_error(field, None));
        }
        if ext.starts_with('.') {
            return Err(ctx.dotted_extension_error(
                ext,
                ext.trim_start_matches('.'),
                find_quoted_span(src, ext, 0),
            ));
        }
    }

    Ok(())
}
