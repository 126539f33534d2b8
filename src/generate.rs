//! End-to-end generation: read grammar, extract keywords, write the list.
//!
//! - String-based [`generate_from_source`] does the actual work
//! - [`load_and_render`] reads the input file, then delegates to it
//! - [`generate`] additionally replaces the output file
//!
//! The output file is overwritten in place, keeping its permissions and, for a
//! symlink, writing through to the link target. Nothing is written unless the
//! input was read and rendered. The destination directory must already exist.

use crate::config::GeneratorConfig;
use crate::extraction::ExtractError;
use crate::rendering::render;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Errors during a generation run
#[derive(Debug)]
pub enum GenerateError {
    /// The configured marker could not be compiled
    Extract(ExtractError),
    /// The grammar could not be read (missing, unreadable, or not UTF-8)
    ReadInput { path: PathBuf, source: io::Error },
    /// The generated file could not be written
    WriteOutput { path: PathBuf, source: io::Error },
    /// The keyword list could not be serialized
    Render(serde_json::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Extract(err) => write!(f, "{}", err),
            GenerateError::ReadInput { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            GenerateError::WriteOutput { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            GenerateError::Render(err) => write!(f, "Failed to render keywords: {}", err),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Extract(err) => Some(err),
            GenerateError::ReadInput { source, .. } | GenerateError::WriteOutput { source, .. } => {
                Some(source)
            }
            GenerateError::Render(err) => Some(err),
        }
    }
}

impl From<ExtractError> for GenerateError {
    fn from(err: ExtractError) -> Self {
        GenerateError::Extract(err)
    }
}

/// Result of a run: the keywords found and their rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub keywords: Vec<String>,
    pub rendered: String,
}

/// Extract and render keywords from grammar text already in memory
pub fn generate_from_source(
    source: &str,
    config: &GeneratorConfig,
) -> Result<Generated, GenerateError> {
    let extractor = config.extractor()?;
    let keywords = extractor.extract(source);
    debug!(
        marker = extractor.marker(),
        count = keywords.len(),
        "extracted keywords"
    );
    let rendered = render(&keywords, &config.render_options()).map_err(GenerateError::Render)?;
    Ok(Generated { keywords, rendered })
}

/// Read the configured input and render its keywords without writing anything
pub fn load_and_render(config: &GeneratorConfig) -> Result<Generated, GenerateError> {
    debug!(path = %config.input.display(), "reading grammar");
    let source = fs::read_to_string(&config.input).map_err(|source| GenerateError::ReadInput {
        path: config.input.clone(),
        source,
    })?;
    generate_from_source(&source, config)
}

/// Run the whole pipeline, replacing the configured output file
pub fn generate(config: &GeneratorConfig) -> Result<Generated, GenerateError> {
    let generated = load_and_render(config)?;
    write_output(&config.output, &generated.rendered)?;
    info!(
        count = generated.keywords.len(),
        path = %config.output.display(),
        "wrote keyword list"
    );
    Ok(generated)
}

/// Overwrite `path` with `contents`.
///
/// The parent directory is never created; a missing one is a write error.
pub fn write_output(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
