//! Type references shared by every declaration.

use serde::{Deserialize, Serialize};

use crate::DeclId;

/// A resolved reference to a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A built-in scalar type.
    Primitive { name: PrimitiveType },
    /// A class or interface.
    ///
    /// `decl` is `None` for built-in classes (`String`, `Object`, ...) and
    /// points at the defining declaration for user types.
    Class {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        decl: Option<DeclId>,
    },
    /// A generic container with a single element type.
    Vector { element: Box<TypeRef> },
    /// A function signature.
    Function {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ret: Option<Box<TypeRef>>,
        #[serde(default)]
        params: Vec<TypeRef>,
    },
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(name: PrimitiveType) -> Self {
        Self::Primitive { name }
    }

    /// Create a reference to a built-in class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class {
            name: name.into(),
            decl: None,
        }
    }

    /// Create a reference to a user-defined class.
    pub fn user_class(name: impl Into<String>, decl: DeclId) -> Self {
        Self::Class {
            name: name.into(),
            decl: Some(decl),
        }
    }

    /// Create a vector type reference.
    pub fn vector(element: TypeRef) -> Self {
        Self::Vector {
            element: Box::new(element),
        }
    }

    /// Create a function type reference.
    pub fn function(ret: Option<TypeRef>, params: Vec<TypeRef>) -> Self {
        Self::Function {
            ret: ret.map(Box::new),
            params,
        }
    }

    /// Convenience: int type.
    pub fn int() -> Self {
        Self::primitive(PrimitiveType::Int)
    }

    /// Convenience: uint type.
    pub fn uint() -> Self {
        Self::primitive(PrimitiveType::UInt)
    }

    /// Convenience: Number type.
    pub fn number() -> Self {
        Self::primitive(PrimitiveType::Number)
    }

    /// Convenience: Boolean type.
    pub fn boolean() -> Self {
        Self::primitive(PrimitiveType::Boolean)
    }

    /// Check if values of this type are object references.
    ///
    /// Such types cannot be compile-time constants in most targets.
    pub fn is_class_like(&self) -> bool {
        matches!(self, Self::Class { .. } | Self::Vector { .. })
    }

    /// The element type of a vector.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            Self::Vector { element } => Some(element),
            _ => None,
        }
    }

    /// The declaration handle of a user class.
    pub fn decl(&self) -> Option<DeclId> {
        match self {
            Self::Class { decl, .. } => *decl,
            _ => None,
        }
    }
}

/// Scalar types of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Int,
    #[serde(rename = "uint")]
    UInt,
    Number,
    Boolean,
    /// The untyped `*` of the source language.
    Any,
}

impl PrimitiveType {
    /// Get the source-language name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Any => "*",
        }
    }
}
