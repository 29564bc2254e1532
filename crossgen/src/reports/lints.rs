//! Lint listing report.

use crossgen_codegen::validate::LintInfo;

use super::output::{Output, Report};

/// The lints a check runs.
#[derive(Debug)]
pub struct LintsReport {
    pub lints: Vec<LintInfo>,
}

impl Report for LintsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Lints");
        for lint in &self.lints {
            out.key_value_indented(lint.name, lint.description);
        }
    }
}
