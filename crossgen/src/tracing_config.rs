//! Tracing configuration.
//!
//! Output is controlled by two environment variables:
//!
//! - `CROSSGEN_LOG`: a filter in `RUST_LOG` syntax (e.g. `debug`,
//!   `crossgen_codegen=trace`). `RUST_LOG` is used when it is unset.
//! - `CROSSGEN_LOG_FORMAT`: `text` (default) or `json`.
//!
//! ```bash
//! CROSSGEN_LOG=crossgen_codegen=trace crossgen emit decls.json
//! CROSSGEN_LOG=debug CROSSGEN_LOG_FORMAT=json crossgen emit decls.json
//! ```
//!
//! No subscriber is installed unless one of the filter variables is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines (default).
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("CROSSGEN_LOG_FORMAT").unwrap_or_default())
    }
}

fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("CROSSGEN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Everything goes to stderr; stdout carries reports and `--dry-run`
/// previews.
pub fn init_tracing() {
    let has_crossgen_log = std::env::var("CROSSGEN_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_crossgen_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("tree"), LogFormat::Text);
    }
}
