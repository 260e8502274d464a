//! Blueprint parsing from files and strings.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;

use crate::{
    Blueprint, Error, Result,
    blueprint::BlueprintFile,
    error::SourceContext,
};

impl FromStr for Blueprint {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_blueprint(s, crate::BLUEPRINT_FILE_NAME)
    }
}

impl Blueprint {
    /// Parse a blueprint file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_blueprint(&content, &path.display().to_string())
    }

    /// Parse a blueprint from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_blueprint(content, filename)
    }
}

/// Parse a blueprint from content with the given filename for error reporting.
pub fn parse_blueprint(content: &str, filename: &str) -> Result<Blueprint> {
    let ctx = SourceContext::new(content, filename);
    let file: BlueprintFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    let blueprint = Blueprint::from(file);
    validate_blueprint(&blueprint, &ctx)?;
    Ok(blueprint)
}

/// Structural checks the TOML schema cannot express.
fn validate_blueprint(blueprint: &Blueprint, ctx: &SourceContext) -> Result<()> {
    if blueprint.package_name.trim().is_empty() {
        return Err(ctx.validation_error(
            "module package must not be empty",
            find_key_span(ctx.src(), "package"),
        ));
    }

    if blueprint.min_sdk_version > blueprint.target_sdk_version {
        return Err(ctx.validation_error(
            format!(
                "min sdk {} is greater than target sdk {}",
                blueprint.min_sdk_version, blueprint.target_sdk_version
            ),
            find_key_span(ctx.src(), "min"),
        ));
    }

    Ok(())
}

/// Find the span of the first `key = ...` assignment in the source.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, key.len())));
            }
        }
        offset += line.len();
    }
    None
}
