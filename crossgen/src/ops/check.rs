//! Check operation - declaration validation.

use std::path::Path;

use crossgen_codegen::validate::{Diagnostic, Severity, Validator};
use crossgen_ir::DeclarationTable;

use crate::reports::CheckReport;

/// Run the built-in lints over a table.
pub fn check(table: &DeclarationTable, input: &Path) -> CheckReport {
    let report = Validator::new().run(table);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &report.diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        input: input.to_path_buf(),
        declarations: table.len(),
        errors,
        warnings,
        infos,
    }
}

fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("[{}] {}\n  --> {}", diag.lint, diag.message, loc),
        None => format!("[{}] {}", diag.lint, diag.message),
    }
}

#[cfg(test)]
mod tests {
    use crossgen_ir::{Declaration, Field, Method, TypeRef};

    use super::*;

    #[test]
    fn test_valid_table() {
        let mut table = DeclarationTable::new();
        table.insert(Declaration::class("a", "Pair")).unwrap();
        table.insert(Declaration::class("", "Main")).unwrap();

        let report = check(&table, Path::new("decls.json"));
        assert!(report.is_valid());
        assert_eq!(report.declarations, 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_errors_and_warnings_are_split() {
        let mut table = DeclarationTable::new();
        table
            .insert(
                Declaration::interface("a", "IShape")
                    .field(Field::new("x", TypeRef::int()))
                    .method(Method::constructor()),
            )
            .unwrap();

        let report = check(&table, Path::new("decls.json"));
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.errors[0].starts_with("[interface-fields] "));
        assert!(report.errors[0].ends_with("\n  --> a.IShape.x"));
    }
}
