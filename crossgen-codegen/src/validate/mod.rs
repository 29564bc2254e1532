//! Modeling lints run ahead of emission.
//!
//! The emitter refuses fatal inputs on its own; the lints exist so a driver
//! can report every problem of a compilation unit at once instead of
//! stopping at the first declaration that fails.

mod diagnostic;
mod lint;
pub mod lints;

use crossgen_ir::DeclarationTable;
pub use diagnostic::{Diagnostic, Severity};
pub use lint::{Lint, LintInfo};
pub use lints::{
    AccessorConstructorLint, DuplicateMembersLint, InterfaceBodiesLint, InterfaceFieldsLint,
    UnresolvedTypesLint,
};

/// Runs a configurable set of lints over a declaration table.
pub struct Validator {
    lints: Vec<Box<dyn Lint>>,
}

impl Validator {
    /// Create a validator with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(InterfaceFieldsLint),
                Box::new(InterfaceBodiesLint),
                Box::new(AccessorConstructorLint),
                Box::new(UnresolvedTypesLint),
                Box::new(DuplicateMembersLint),
            ],
        }
    }

    /// Create a validator with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Check every declaration of the table.
    pub fn run(&self, table: &DeclarationTable) -> Report {
        let mut diagnostics = Vec::new();
        for (_, decl) in table.iter() {
            for lint in &self.lints {
                lint.check(table, decl, &mut diagnostics);
            }
        }
        tracing::debug!(
            declarations = table.len(),
            diagnostics = diagnostics.len(),
            "validated declarations"
        );
        Report { diagnostics }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the built-in lints over a table.
pub fn validate(table: &DeclarationTable) -> Report {
    Validator::new().run(table)
}

/// Diagnostics collected by one validation run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crossgen_ir::{Declaration, Field, Method, TypeRef};

    use super::*;

    #[test]
    fn test_clean_table() {
        let mut table = DeclarationTable::new();
        table
            .insert(
                Declaration::class("a", "Pair")
                    .field(Field::new("x", TypeRef::int()))
                    .method(Method::constructor()),
            )
            .unwrap();

        let report = validate(&table);
        assert!(report.is_empty());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_errors_and_warnings_are_counted() {
        let mut table = DeclarationTable::new();
        table
            .insert(
                Declaration::interface("a", "IShape")
                    .field(Field::new("x", TypeRef::int()))
                    .method(Method::constructor()),
            )
            .unwrap();

        let report = validate(&table);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_warnings());
    }

    #[test]
    fn test_custom_lint() {
        struct AlwaysInfo;
        impl Lint for AlwaysInfo {
            fn name(&self) -> &'static str {
                "always-info"
            }
            fn description(&self) -> &'static str {
                "Reports every declaration"
            }
            fn check(
                &self,
                _table: &DeclarationTable,
                decl: &Declaration,
                diagnostics: &mut Vec<Diagnostic>,
            ) {
                diagnostics.push(Diagnostic::info(self.name(), decl.qualified_name()));
            }
        }

        let mut table = DeclarationTable::new();
        table.insert(Declaration::class("", "A")).unwrap();
        table.insert(Declaration::class("", "B")).unwrap();

        let validator = Validator::empty().with_lint(AlwaysInfo);
        assert_eq!(validator.lint_names(), ["always-info"]);

        let report = validator.run(&table);
        let messages: Vec<_> = report.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["A", "B"]);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_builtin_lint_names() {
        assert_eq!(
            Validator::new().lint_names(),
            [
                "interface-fields",
                "interface-bodies",
                "accessor-constructor",
                "unresolved-types",
                "duplicate-members"
            ]
        );
    }
}
