//! Configuration loading for kwgen.
//!
//! `defaults/kwgen.default.toml` is embedded into the binary and carries the
//! paths and names used when nothing else is configured. A `kwgen.toml` in the
//! working directory, an explicit config file, and command-line flags are
//! layered on top of those defaults via [`Loader`] before deserializing into
//! [`GeneratorConfig`].

use crate::extraction::{ExtractError, Extractor};
use crate::rendering::{OutputFormat, RenderOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/kwgen.default.toml");

/// Project-local config file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "kwgen.toml";

/// Everything a single generation run needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Grammar source to scan
    pub input: PathBuf,
    /// Destination of the generated list
    pub output: PathBuf,
    /// Token preceding each keyword call
    pub marker: String,
    /// Name of the exported list
    pub list_name: String,
    pub format: OutputFormat,
}

impl GeneratorConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            list_name: self.list_name.clone(),
        }
    }

    pub fn extractor(&self) -> Result<Extractor, ExtractError> {
        Extractor::new(&self.marker)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tree-sitter-sql/grammar.js"),
            output: PathBuf::from("src/sql.ts"),
            marker: crate::extraction::DEFAULT_MARKER.to_string(),
            list_name: crate::rendering::DEFAULT_LIST_NAME.to_string(),
            format: OutputFormat::Typescript,
        }
    }
}

/// Settings given on the command line.
///
/// `None` leaves whatever the defaults and config files produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Extra config file layered over `kwgen.toml`; must exist
    pub config_file: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub marker: Option<String>,
    pub list_name: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Builds a [`GeneratorConfig`] from embedded defaults, config files and
/// command-line overrides, in that order of precedence.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Embedded defaults only.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Embedded defaults plus `kwgen.toml` from the working directory, if any.
    pub fn for_project() -> Self {
        Self::new().layer_file(LOCAL_CONFIG_FILE, false)
    }

    /// Layer a config file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path, true)
    }

    fn layer_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply command-line settings on top of every file layer.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(path) = &overrides.config_file {
            self = self.with_file(path);
        }

        let paths = [("input", &overrides.input), ("output", &overrides.output)];
        for (key, path) in paths {
            if let Some(path) = path {
                let value = path.to_string_lossy().into_owned();
                self.builder = self.builder.set_override(key, value)?;
            }
        }

        let names = [("marker", &overrides.marker), ("list_name", &overrides.list_name)];
        for (key, name) in names {
            if let Some(name) = name {
                self.builder = self.builder.set_override(key, name.as_str())?;
            }
        }

        if let Some(format) = overrides.format {
            self.builder = self.builder.set_override("format", format.as_str())?;
        }
        Ok(self)
    }

    /// Finalize the layers and deserialize the resulting configuration.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

/// Resolve the configuration for a run from the working directory.
pub fn load(overrides: &Overrides) -> Result<GeneratorConfig, ConfigError> {
    Loader::for_project().with_overrides(overrides)?.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn embedded_defaults_match_builtin() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn applies_overrides() {
        let overrides = Overrides {
            output: Some(PathBuf::from("out/keywords.json")),
            format: Some(OutputFormat::Json),
            ..Overrides::default()
        };
        let config = Loader::new().with_overrides(&overrides).unwrap().build().unwrap();
        assert_eq!(config.output, PathBuf::from("out/keywords.json"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.marker, "kw");
        assert_eq!(config.input, PathBuf::from("tree-sitter-sql/grammar.js"));
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let config = Loader::new()
            .with_overrides(&Overrides::default())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn layers_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kwgen.toml");
        fs::write(&path, "marker = \"keyword\"\nlist_name = \"SQL\"\n").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(config.marker, "keyword");
        assert_eq!(config.list_name, "SQL");
        assert_eq!(config.input, PathBuf::from("tree-sitter-sql/grammar.js"));
    }

    #[test]
    fn overrides_win_over_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "list_name = \"FROM_FILE\"\nmarker = \"keyword\"\n").unwrap();

        let overrides = Overrides {
            config_file: Some(path),
            list_name: Some("FROM_FLAG".to_string()),
            ..Overrides::default()
        };
        let config = Loader::new().with_overrides(&overrides).unwrap().build().unwrap();
        assert_eq!(config.list_name, "FROM_FLAG");
        assert_eq!(config.marker, "keyword");
    }

    #[test]
    fn ts_alias_accepted_in_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kwgen.toml");
        fs::write(&path, "format = \"ts\"\n").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(config.format, OutputFormat::Typescript);
    }

    #[test]
    fn missing_required_file_errors() {
        let dir = tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kwgen.toml");
        fs::write(&path, "format = \"yaml\"\n").unwrap();

        assert!(Loader::new().with_file(&path).build().is_err());
    }
}
