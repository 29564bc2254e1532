//! Arena of declarations addressed by [`DeclId`] handles.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Declaration, TypeRef};

/// Handle to a declaration stored in a [`DeclarationTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(u32);

impl DeclId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DeclId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised while building a declaration table.
#[derive(Debug, Error)]
pub enum IrError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed declaration JSON")]
    Json(#[from] serde_json::Error),

    #[error("declaration '{0}' is defined more than once")]
    DuplicateDeclaration(String),

    #[error("type '{name}' matches several declarations: {}", candidates.join(", "))]
    AmbiguousType {
        name: String,
        candidates: Vec<String>,
    },
}

/// Every declaration of a compilation unit.
///
/// Declarations are appended once and never removed, so a [`DeclId`] stays
/// valid for the table's whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct DeclarationTable {
    decls: Vec<Declaration>,
    /// Qualified name -> handle, in insertion order.
    by_name: IndexMap<String, DeclId>,
}

impl DeclarationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration and return its handle.
    pub fn insert(&mut self, decl: Declaration) -> Result<DeclId, IrError> {
        let qualified = decl.qualified_name();
        if self.by_name.contains_key(&qualified) {
            return Err(IrError::DuplicateDeclaration(qualified));
        }
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(decl);
        self.by_name.insert(qualified, id);
        Ok(id)
    }

    /// Reserve the handle the next inserted declaration will receive.
    ///
    /// Lets a declaration refer to itself (or to a later sibling) before it
    /// is inserted.
    pub fn next_id(&self) -> DeclId {
        DeclId(self.decls.len() as u32)
    }

    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    /// Find a declaration by its qualified name (e.g., `a.b.Pair`).
    pub fn lookup(&self, qualified: &str) -> Option<DeclId> {
        self.by_name.get(qualified).copied()
    }

    /// Iterate over all declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        self.decls
            .iter()
            .enumerate()
            .map(|(i, decl)| (DeclId(i as u32), decl))
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Parse a JSON array of declarations and link their class references.
    pub fn from_json(json: &str) -> Result<Self, IrError> {
        let decls: Vec<Declaration> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for decl in decls {
            table.insert(decl)?;
        }
        table.link()?;
        Ok(table)
    }

    /// Read and parse a JSON declaration file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, IrError> {
        let path = path.into();
        let json = std::fs::read_to_string(&path).map_err(|source| IrError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Attach handles to class references the front end left unresolved.
    ///
    /// A reference is matched by qualified name first, then by simple name.
    /// Names that match no declaration are built-in classes and stay
    /// unlinked.
    pub fn link(&mut self) -> Result<(), IrError> {
        let mut simple: IndexMap<String, Vec<DeclId>> = IndexMap::new();
        for (id, decl) in self.iter() {
            simple.entry(decl.name.clone()).or_default().push(id);
        }

        let resolve = |name: &str| -> Result<Option<DeclId>, IrError> {
            if let Some(id) = self.by_name.get(name) {
                return Ok(Some(*id));
            }
            match simple.get(name).map(Vec::as_slice) {
                None | Some([]) => Ok(None),
                Some([id]) => Ok(Some(*id)),
                Some(ids) => Err(IrError::AmbiguousType {
                    name: name.to_string(),
                    candidates: ids
                        .iter()
                        .filter_map(|id| self.get(*id))
                        .map(Declaration::qualified_name)
                        .collect(),
                }),
            }
        };

        let mut links = Vec::new();
        for (index, decl) in self.decls.iter().enumerate() {
            let mut pending = Vec::new();
            collect_unlinked(decl, &mut pending);
            for name in pending {
                if let Some(id) = resolve(&name)? {
                    links.push((index, name, id));
                }
            }
        }

        for (index, name, id) in links {
            let simple_name = self.decls[id.index()].name.clone();
            visit_types_mut(&mut self.decls[index], &mut |ty| {
                if let TypeRef::Class { name: n, decl } = ty
                    && decl.is_none()
                    && *n == name
                {
                    *decl = Some(id);
                    *n = simple_name.clone();
                }
            });
        }
        Ok(())
    }
}

fn collect_unlinked(decl: &Declaration, out: &mut Vec<String>) {
    fn walk(ty: &TypeRef, out: &mut Vec<String>) {
        match ty {
            TypeRef::Class { name, decl: None } => {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
            TypeRef::Class { .. } | TypeRef::Primitive { .. } => {}
            TypeRef::Vector { element } => walk(element, out),
            TypeRef::Function { ret, params } => {
                if let Some(ret) = ret {
                    walk(ret, out);
                }
                for param in params {
                    walk(param, out);
                }
            }
        }
    }

    let function_types = decl.function_types.iter().flat_map(|ft| {
        ft.return_type
            .iter()
            .chain(ft.params.iter().map(|p| &p.ty))
    });
    for ty in decl
        .signature_types()
        .chain(&decl.additional_imports)
        .chain(function_types)
    {
        walk(ty, out);
    }
}

fn visit_types_mut(decl: &mut Declaration, f: &mut dyn FnMut(&mut TypeRef)) {
    fn walk(ty: &mut TypeRef, f: &mut dyn FnMut(&mut TypeRef)) {
        f(ty);
        match ty {
            TypeRef::Vector { element } => walk(element, f),
            TypeRef::Function { ret, params } => {
                if let Some(ret) = ret {
                    walk(ret, f);
                }
                for param in params {
                    walk(param, f);
                }
            }
            TypeRef::Class { .. } | TypeRef::Primitive { .. } => {}
        }
    }

    if let crate::DeclKind::Class {
        extends: Some(extends),
    } = &mut decl.kind
    {
        walk(extends, f);
    }
    for ty in &mut decl.interfaces {
        walk(ty, f);
    }
    for field in &mut decl.fields {
        walk(&mut field.ty, f);
    }
    for method in &mut decl.methods {
        if let Some(ret) = &mut method.return_type {
            walk(ret, f);
        }
        for param in &mut method.params {
            walk(&mut param.ty, f);
        }
    }
    for ft in &mut decl.function_types {
        if let Some(ret) = &mut ft.return_type {
            walk(ret, f);
        }
        for param in &mut ft.params {
            walk(&mut param.ty, f);
        }
    }
    for ty in &mut decl.additional_imports {
        walk(ty, f);
    }
}
