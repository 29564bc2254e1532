//! Resolved declaration tree for the crossgen transpiler backend.
//!
//! The front end hands over one [`DeclarationTable`] per compilation unit.
//! Every declaration lives in the table's arena and type references point
//! back at declarations through lightweight [`DeclId`] handles, which the
//! emitter only ever reads.
//!
//! # Architecture
//!
//! ```text
//! front end (parse + resolve) → crossgen-ir (declarations) → crossgen-codegen → target
//! ```

mod decl;
mod table;
mod types;

pub use decl::{
    DeclKind, Declaration, Field, FunctionTypeDecl, Method, MethodFlags, Param, Visibility,
};
pub use table::{DeclId, DeclarationTable, IrError};
pub use types::{PrimitiveType, TypeRef};
