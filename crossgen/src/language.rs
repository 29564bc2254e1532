//! Unified language dispatch.
//!
//! Maps the configured output language to its [`Target`] implementation.

use std::{fmt, str::FromStr};

use crossgen_codegen::Target;
use crossgen_codegen_csharp::CSharpTarget;
use crossgen_core::Indent;
use serde::{Deserialize, Serialize};

use crate::config::TargetConfig;

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C#
    #[default]
    #[serde(alias = "cs")]
    CSharp,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            _ => Err(format!("unknown language '{}', expected 'csharp'", s)),
        }
    }
}

/// Language-specific support for emission.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Create the target for this language with the configured formatting.
    pub fn target(&self, config: &TargetConfig) -> Box<dyn Target> {
        let indent = Indent::from_width(config.indent);
        match self.language {
            Language::CSharp => Box::new(
                CSharpTarget::new()
                    .with_indent(indent)
                    .with_field_init(config.field_init),
            ),
        }
    }
}
