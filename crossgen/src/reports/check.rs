//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from declaration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the declaration file.
    pub input: PathBuf,
    /// Number of declarations in the file.
    pub declarations: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} declaration{})",
                self.input.display(),
                self.declarations,
                if self.declarations == 1 { "" } else { "s" }
            ));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.input.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
    }
}
