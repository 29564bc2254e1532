//! Namespace import collection.

use std::collections::BTreeSet;

use crossgen_ir::{Declaration, DeclarationTable, TypeRef};

use crate::{EmitError, Result};

/// Collects the packages a declaration depends on.
///
/// Packages are kept sorted so the rendered import list never depends on
/// the order in which members were visited.
///
/// # Example
///
/// ```
/// use crossgen_codegen::ImportCollector;
/// use crossgen_ir::{Declaration, DeclarationTable, Field, TypeRef};
///
/// let mut table = DeclarationTable::new();
/// let point = table.insert(Declaration::class("geom", "Point")).unwrap();
/// let scene = Declaration::class("app", "Scene")
///     .field(Field::new("origin", TypeRef::user_class("Point", point)));
///
/// let imports = ImportCollector::for_declaration(&table, &scene).unwrap();
/// assert_eq!(imports.iter().collect::<Vec<_>>(), ["geom"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    packages: BTreeSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every package referenced by a declaration.
    ///
    /// Walks the base class, interfaces, field types, method signatures,
    /// nested function types and the declaration's forced imports.
    pub fn for_declaration(table: &DeclarationTable, decl: &Declaration) -> Result<Self> {
        let mut imports = Self::new();
        let scope = Scope { table, decl };

        if let Some(extends) = decl.extends_type() {
            imports.add_type(&scope, "extends", extends)?;
        }
        for interface in &decl.interfaces {
            imports.add_type(&scope, "implements", interface)?;
        }
        for field in &decl.fields {
            imports.add_type(&scope, &field.name, &field.ty)?;
        }
        for method in &decl.methods {
            if let Some(ret) = &method.return_type {
                imports.add_type(&scope, &method.name, ret)?;
            }
            for param in &method.params {
                imports.add_type(&scope, &method.name, &param.ty)?;
            }
        }
        for function_type in &decl.function_types {
            if let Some(ret) = &function_type.return_type {
                imports.add_type(&scope, &function_type.name, ret)?;
            }
            for param in &function_type.params {
                imports.add_type(&scope, &function_type.name, &param.ty)?;
            }
        }
        for ty in &decl.additional_imports {
            imports.add_type(&scope, "additional import", ty)?;
        }

        tracing::trace!(
            decl = %decl.qualified_name(),
            count = imports.len(),
            "collected imports"
        );
        Ok(imports)
    }

    /// Add a package directly. Empty (top-level) packages are ignored.
    pub fn add(&mut self, package: &str) {
        if !package.is_empty() {
            self.packages.insert(package.to_string());
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        self.packages.extend(other.packages.iter().cloned());
    }

    /// Check if a package is already imported.
    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains(package)
    }

    /// Iterate over packages in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    fn add_type(&mut self, scope: &Scope<'_>, member: &str, ty: &TypeRef) -> Result<()> {
        match ty {
            TypeRef::Primitive { .. } | TypeRef::Class { decl: None, .. } => {}
            TypeRef::Class {
                name,
                decl: Some(id),
            } => {
                let target = scope
                    .table
                    .get(*id)
                    .ok_or_else(|| EmitError::UnresolvedType {
                        declaration: scope.decl.qualified_name(),
                        member: member.to_string(),
                        type_name: name.clone(),
                        id: *id,
                    })?;
                self.add(&target.package);
            }
            TypeRef::Vector { element } => self.add_type(scope, member, element)?,
            TypeRef::Function { ret, params } => {
                if let Some(ret) = ret {
                    self.add_type(scope, member, ret)?;
                }
                for param in params {
                    self.add_type(scope, member, param)?;
                }
            }
        }
        Ok(())
    }
}

struct Scope<'a> {
    table: &'a DeclarationTable,
    decl: &'a Declaration,
}
