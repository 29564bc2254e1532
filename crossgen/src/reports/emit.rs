//! Emit command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from an emission run.
#[derive(Debug)]
pub struct EmitReport {
    /// Validation warnings.
    pub warnings: Vec<String>,
    /// Declarations in the input.
    pub declarations: usize,
    /// Declarations whose output was already current.
    pub skipped: usize,
    pub result: EmitResult,
}

/// What happened to the emitted files.
#[derive(Debug)]
pub enum EmitResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<PathBuf>,
    /// Files rewritten with identical content.
    pub unchanged: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

impl Report for EmitReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            EmitResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} of {} declarations would be emitted",
                    files.len(),
                    self.declarations
                ));
            }
            EmitResult::Written(written) => {
                if !written.written.is_empty() {
                    out.section("Written");
                    for path in &written.written {
                        out.added_item(&path.display().to_string());
                    }
                    out.newline();
                }
                out.preformatted(&format!(
                    "Emitted {} of {} declarations to {} ({} unchanged, {} up to date)",
                    written.written.len() + written.unchanged.len(),
                    self.declarations,
                    written.output_dir.display(),
                    written.unchanged.len(),
                    self.skipped
                ));
            }
        }
    }
}
