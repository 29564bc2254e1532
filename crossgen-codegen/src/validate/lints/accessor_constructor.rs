//! Lint for methods flagged both as constructor and accessor.

use crossgen_ir::{Declaration, DeclarationTable};

use super::{super::Lint, member_path};
use crate::validate::Diagnostic;

/// Lint that errors on a constructor that is also a getter or setter.
pub struct AccessorConstructorLint;

impl Lint for AccessorConstructorLint {
    fn name(&self) -> &'static str {
        "accessor-constructor"
    }

    fn description(&self) -> &'static str {
        "A constructor cannot be a getter or setter"
    }

    fn check(&self, _table: &DeclarationTable, decl: &Declaration, diagnostics: &mut Vec<Diagnostic>) {
        for method in decl.methods.iter().filter(|m| m.is_constructor() && m.is_accessor()) {
            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!(
                        "method '{}' of '{}' is both a constructor and an accessor",
                        method.name, decl.name
                    ),
                )
                .at(member_path(decl, &method.name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crossgen_ir::Method;

    use super::*;

    #[test]
    fn test_accessor_constructor() {
        let decl = Declaration::class("", "Odd")
            .method(Method::constructor().as_setter())
            .method(Method::new("size").as_getter())
            .method(Method::constructor());

        let mut diagnostics = Vec::new();
        AccessorConstructorLint.check(&DeclarationTable::new(), &decl, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Odd.constructor"));
    }
}
