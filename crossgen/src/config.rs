//! `crossgen.toml` driver configuration.
//!
//! ```toml
//! [target]
//! language = "csharp"
//! indent = 4              # 0 selects tabs
//! field-init = "defer-constructions"
//!
//! [output]
//! dir = "generated"
//! staleness = "newer"     # "always" | "missing" | "newer"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use crossgen_codegen::FieldInitPolicy;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

use crate::language::Language;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "crossgen.toml";

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(crossgen::config_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(crossgen::config_parse))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub target: TargetConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TargetConfig {
    pub language: Language,
    /// Spaces per indent level; `0` selects tabs.
    pub indent: u8,
    pub field_init: FieldInitPolicy,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            indent: 4,
            field_init: FieldInitPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub staleness: Staleness,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
            staleness: Staleness::default(),
        }
    }
}

/// When an existing output file is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Staleness {
    /// Regenerate every file.
    Always,
    /// Only write files that do not exist.
    Missing,
    /// Regenerate files older than the declaration input.
    #[default]
    Newer,
}

impl Config {
    /// Read and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(CONFIG_FILE);
        Self::from_str_with_filename(&content, filename)
    }

    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `crossgen.toml` in the
    /// working directory is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None if Path::new(CONFIG_FILE).exists() => Self::open(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration text, naming `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                filename: filename.to_string(),
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str_with_filename("", CONFIG_FILE).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.target.indent, 4);
        assert_eq!(config.output.dir, PathBuf::from("generated"));
        assert_eq!(config.output.staleness, Staleness::Newer);
        assert_eq!(config.target.field_init, FieldInitPolicy::DeferConstructions);
    }

    #[test]
    fn test_full_config() {
        let content = r#"
[target]
language = "cs"
indent = 0
field-init = "defer-non-literal"

[output]
dir = "out/cs"
staleness = "missing"
"#;
        let config = Config::from_str_with_filename(content, CONFIG_FILE).unwrap();
        assert_eq!(config.target.language, Language::CSharp);
        assert_eq!(config.target.indent, 0);
        assert_eq!(config.target.field_init, FieldInitPolicy::DeferNonLiteral);
        assert_eq!(config.output.dir, PathBuf::from("out/cs"));
        assert_eq!(config.output.staleness, Staleness::Missing);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_str_with_filename("[target]\ntabs = true\n", CONFIG_FILE)
            .unwrap_err();
        match *err {
            ConfigError::Parse { filename, span, .. } => {
                assert_eq!(filename, CONFIG_FILE);
                assert!(span.is_some());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::open(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_open_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[output]\nstaleness = \"always\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output.staleness, Staleness::Always);
        assert_eq!(config.target, TargetConfig::default());
    }
}
