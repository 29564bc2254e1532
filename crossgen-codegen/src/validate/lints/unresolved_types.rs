//! Lint for type handles that point nowhere.

use crossgen_ir::{DeclId, Declaration, DeclarationTable, TypeRef};

use super::{super::Lint, member_path};
use crate::validate::Diagnostic;

/// Lint that errors on user class references without a declaration.
pub struct UnresolvedTypesLint;

impl Lint for UnresolvedTypesLint {
    fn name(&self) -> &'static str {
        "unresolved-types"
    }

    fn description(&self) -> &'static str {
        "Every user type must point at an existing declaration"
    }

    fn check(&self, table: &DeclarationTable, decl: &Declaration, diagnostics: &mut Vec<Diagnostic>) {
        let mut report = |member: &str, ty: &TypeRef| {
            let mut dangling = Vec::new();
            collect_dangling(table, ty, &mut dangling);
            for (name, id) in dangling {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("type '{name}' points at missing declaration {id}"),
                    )
                    .at(member_path(decl, member)),
                );
            }
        };

        if let Some(extends) = decl.extends_type() {
            report("extends", extends);
        }
        for interface in &decl.interfaces {
            report("implements", interface);
        }
        for field in &decl.fields {
            report(&field.name, &field.ty);
        }
        for method in &decl.methods {
            for ty in method.return_type.iter().chain(method.params.iter().map(|p| &p.ty)) {
                report(&method.name, ty);
            }
        }
        for function_type in &decl.function_types {
            for ty in function_type
                .return_type
                .iter()
                .chain(function_type.params.iter().map(|p| &p.ty))
            {
                report(&function_type.name, ty);
            }
        }
        for ty in &decl.additional_imports {
            report("imports", ty);
        }
    }
}

fn collect_dangling<'t>(table: &DeclarationTable, ty: &'t TypeRef, out: &mut Vec<(&'t str, DeclId)>) {
    match ty {
        TypeRef::Class {
            name,
            decl: Some(id),
        } if table.get(*id).is_none() => out.push((name.as_str(), *id)),
        TypeRef::Class { .. } | TypeRef::Primitive { .. } => {}
        TypeRef::Vector { element } => collect_dangling(table, element, out),
        TypeRef::Function { ret, params } => {
            if let Some(ret) = ret {
                collect_dangling(table, ret, out);
            }
            for param in params {
                collect_dangling(table, param, out);
            }
        }
    }
}
