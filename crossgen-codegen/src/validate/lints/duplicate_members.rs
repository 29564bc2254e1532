//! Lint for duplicate member names.

use std::collections::HashSet;

use crossgen_ir::{Declaration, DeclarationTable};

use super::{super::Lint, member_path};
use crate::validate::Diagnostic;

/// Lint that errors on fields sharing a name with another field or method.
///
/// Methods may repeat a name (overloads, getter/setter pairs); fields may not.
pub struct DuplicateMembersLint;

impl Lint for DuplicateMembersLint {
    fn name(&self) -> &'static str {
        "duplicate-members"
    }

    fn description(&self) -> &'static str {
        "Detect fields declared twice or shadowing a method"
    }

    fn check(&self, _table: &DeclarationTable, decl: &Declaration, diagnostics: &mut Vec<Diagnostic>) {
        let methods: HashSet<&str> = decl
            .methods
            .iter()
            .filter(|m| !m.is_constructor())
            .map(|m| m.name.as_str())
            .collect();
        let mut seen = HashSet::new();

        for field in &decl.fields {
            let message = if !seen.insert(field.name.as_str()) {
                format!("field '{}' is declared more than once", field.name)
            } else if methods.contains(field.name.as_str()) {
                format!("field '{}' has the same name as a method", field.name)
            } else {
                continue;
            };
            diagnostics.push(Diagnostic::error(self.name(), message).at(member_path(decl, &field.name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossgen_ir::{Field, Method, TypeRef};

    use super::*;

    #[test]
    fn test_duplicate_fields() {
        let decl = Declaration::class("a", "B")
            .field(Field::new("x", TypeRef::int()))
            .field(Field::new("y", TypeRef::int()))
            .field(Field::new("x", TypeRef::number()));

        let mut diagnostics = Vec::new();
        DuplicateMembersLint.check(&DeclarationTable::new(), &decl, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("more than once"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("a.B.x"));
    }

    #[test]
    fn test_field_shadowing_method() {
        let decl = Declaration::class("a", "B")
            .field(Field::new("size", TypeRef::int()))
            .method(Method::new("size").as_getter());

        let mut diagnostics = Vec::new();
        DuplicateMembersLint.check(&DeclarationTable::new(), &decl, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("method"));
    }

    #[test]
    fn test_overloads_and_accessor_pairs_are_fine() {
        let decl = Declaration::class("a", "B")
            .field(Field::new("_size", TypeRef::int()))
            .method(Method::new("size").as_getter())
            .method(Method::new("size").as_setter())
            .method(Method::constructor())
            .method(Method::constructor().param("n", TypeRef::int()));

        let mut diagnostics = Vec::new();
        DuplicateMembersLint.check(&DeclarationTable::new(), &decl, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
