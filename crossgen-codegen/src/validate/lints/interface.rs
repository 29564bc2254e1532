//! Lints for interface declarations.

use crossgen_ir::{Declaration, DeclarationTable};

use super::{super::Lint, member_path};
use crate::validate::Diagnostic;

/// Lint that errors on fields declared by an interface.
pub struct InterfaceFieldsLint;

impl Lint for InterfaceFieldsLint {
    fn name(&self) -> &'static str {
        "interface-fields"
    }

    fn description(&self) -> &'static str {
        "Interfaces may not declare fields"
    }

    fn check(&self, _table: &DeclarationTable, decl: &Declaration, diagnostics: &mut Vec<Diagnostic>) {
        if !decl.is_interface() {
            return;
        }
        for field in &decl.fields {
            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!("interface '{}' declares field '{}'", decl.name, field.name),
                )
                .at(member_path(decl, &field.name)),
            );
        }
    }
}

/// Lint that warns about interface members the emitter drops.
///
/// Interface constructors are skipped and interface method bodies are never
/// written, so either one usually means the front end misclassified a class.
pub struct InterfaceBodiesLint;

impl Lint for InterfaceBodiesLint {
    fn name(&self) -> &'static str {
        "interface-bodies"
    }

    fn description(&self) -> &'static str {
        "Interfaces may only declare method signatures"
    }

    fn check(&self, _table: &DeclarationTable, decl: &Declaration, diagnostics: &mut Vec<Diagnostic>) {
        if !decl.is_interface() {
            return;
        }
        for method in &decl.methods {
            let message = if method.is_constructor() {
                format!("interface '{}' declares a constructor", decl.name)
            } else if method.body.first_statement().is_some() {
                format!("body of interface method '{}' is ignored", method.name)
            } else {
                continue;
            };
            diagnostics.push(Diagnostic::warning(self.name(), message).at(member_path(decl, &method.name)));
        }
    }
}
