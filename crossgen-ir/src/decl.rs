//! Class, interface and member declarations.

use crossgen_core::OutputBuffer;
use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// Access level of a declaration member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

impl Visibility {
    /// Get the keyword for this visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Private => "private",
        }
    }

    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Class or interface, with the data only the respective kind may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclKind {
    Class {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extends: Option<TypeRef>,
    },
    Interface,
}

/// A resolved class or interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(flatten)]
    pub kind: DeclKind,
    /// Dot-separated package name; empty for the top-level package.
    #[serde(default)]
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub is_final: bool,
    /// Implemented (or, for interfaces, extended) interfaces in declared order.
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub function_types: Vec<FunctionTypeDecl>,
    /// Types referenced only inside pre-rendered bodies.
    #[serde(default)]
    pub additional_imports: Vec<TypeRef>,
}

impl Declaration {
    /// Create an empty class declaration.
    pub fn class(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(DeclKind::Class { extends: None }, package, name)
    }

    /// Create an empty interface declaration.
    pub fn interface(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(DeclKind::Interface, package, name)
    }

    fn with_kind(kind: DeclKind, package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            package: package.into(),
            name: name.into(),
            is_final: false,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            function_types: Vec::new(),
            additional_imports: Vec::new(),
        }
    }

    /// Set the base class. Ignored for interfaces.
    pub fn extends(mut self, ty: TypeRef) -> Self {
        if let DeclKind::Class { extends } = &mut self.kind {
            *extends = Some(ty);
        }
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, ty: TypeRef) -> Self {
        self.interfaces.push(ty);
        self
    }

    /// Mark the class as final.
    pub fn final_class(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Add a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a nested function type.
    pub fn function_type(mut self, function_type: FunctionTypeDecl) -> Self {
        self.function_types.push(function_type);
        self
    }

    /// Force an import for a type the member signatures do not mention.
    pub fn import(mut self, ty: TypeRef) -> Self {
        self.additional_imports.push(ty);
        self
    }

    /// The base class, if any.
    pub fn extends_type(&self) -> Option<&TypeRef> {
        match &self.kind {
            DeclKind::Class { extends } => extends.as_ref(),
            DeclKind::Interface => None,
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, DeclKind::Interface)
    }

    /// Package-qualified name (e.g., `a.b.Pair`).
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Every type mentioned by the declaration's own signatures.
    pub fn signature_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.extends_type()
            .into_iter()
            .chain(&self.interfaces)
            .chain(self.fields.iter().map(|f| &f.ty))
            .chain(self.methods.iter().flat_map(|m| {
                m.return_type
                    .iter()
                    .chain(m.params.iter().map(|p| &p.ty))
            }))
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
    /// Pre-rendered initializer expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
}

impl Field {
    /// Create a new public instance field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            visibility: Visibility::Public,
            is_const: false,
            is_static: false,
            ty,
            name: name.into(),
            initializer: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn as_const(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the pre-rendered initializer expression.
    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }
}

/// Method kind and modifier flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodFlags {
    pub is_static: bool,
    pub is_override: bool,
    pub is_constructor: bool,
    pub is_getter: bool,
    pub is_setter: bool,
}

/// A method, constructor or property accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(flatten)]
    pub flags: MethodFlags,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub params: Vec<Param>,
    /// Pre-rendered statements, without the enclosing block delimiters.
    #[serde(default)]
    pub body: OutputBuffer,
}

impl Method {
    /// Create a new public method returning nothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            flags: MethodFlags::default(),
            name: name.into(),
            return_type: None,
            params: Vec::new(),
            body: OutputBuffer::new(),
        }
    }

    /// Create a new public constructor.
    pub fn constructor() -> Self {
        let mut method = Self::new("constructor");
        method.flags.is_constructor = true;
        method
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    /// Set the pre-rendered body statements.
    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = OutputBuffer::from_lines(lines);
        self
    }

    pub fn as_static(mut self) -> Self {
        self.flags.is_static = true;
        self
    }

    pub fn as_override(mut self) -> Self {
        self.flags.is_override = true;
        self
    }

    pub fn as_getter(mut self) -> Self {
        self.flags.is_getter = true;
        self
    }

    pub fn as_setter(mut self) -> Self {
        self.flags.is_setter = true;
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.flags.is_constructor
    }

    pub fn is_accessor(&self) -> bool {
        self.flags.is_getter || self.flags.is_setter
    }
}

/// A method or function-type parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub name: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// A named function type declared inside a class (a delegate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionTypeDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub params: Vec<Param>,
}

impl FunctionTypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            params: Vec::new(),
        }
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        assert_eq!(Declaration::class("a.b", "Pair").qualified_name(), "a.b.Pair");
        assert_eq!(Declaration::class("", "Main").qualified_name(), "Main");
    }

    #[test]
    fn test_interfaces_cannot_extend() {
        let iface = Declaration::interface("a", "IShape").extends(TypeRef::class("Object"));
        assert!(iface.is_interface());
        assert!(iface.extends_type().is_none());
    }

    #[test]
    fn test_signature_types_order() {
        let decl = Declaration::class("a", "C")
            .extends(TypeRef::class("Base"))
            .implements(TypeRef::class("IFoo"))
            .field(Field::new("n", TypeRef::int()))
            .method(
                Method::new("f")
                    .returns(TypeRef::boolean())
                    .param("x", TypeRef::number()),
            );

        let types: Vec<_> = decl.signature_types().cloned().collect();
        assert_eq!(
            types,
            vec![
                TypeRef::class("Base"),
                TypeRef::class("IFoo"),
                TypeRef::int(),
                TypeRef::boolean(),
                TypeRef::number(),
            ]
        );
    }

    #[test]
    fn test_deserialize_method_flags() {
        let method: Method = serde_json::from_str(
            r#"{"name":"size","is_getter":true,"return_type":{"kind":"primitive","name":"int"},"body":["return _size;"]}"#,
        )
        .unwrap();

        assert!(method.flags.is_getter);
        assert!(!method.flags.is_static);
        assert_eq!(method.visibility, Visibility::Public);
        assert_eq!(method.body.len(), 1);
    }

    #[test]
    fn test_deserialize_declaration_kinds() {
        let class: Declaration = serde_json::from_str(
            r#"{"kind":"class","package":"a","name":"B","extends":{"kind":"class","name":"Base"}}"#,
        )
        .unwrap();
        assert_eq!(class.extends_type(), Some(&TypeRef::class("Base")));

        let iface: Declaration =
            serde_json::from_str(r#"{"kind":"interface","name":"IFoo"}"#).unwrap();
        assert!(iface.is_interface());
        assert_eq!(iface.package, "");
    }
}
