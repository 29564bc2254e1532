use crossgen_ir::DeclId;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for emission.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Modeling violations that abort emission of a compilation unit.
///
/// Each of these points at a defect in the front end that built the
/// declaration tree; none of them is ever coerced into emitted output.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("type '{type_name}' used by '{declaration}' ({member}) points at missing declaration {id}")]
    #[diagnostic(
        code(crossgen::unresolved_type),
        help("every user type must be linked to the declaration that defines it")
    )]
    UnresolvedType {
        declaration: String,
        member: String,
        type_name: String,
        id: DeclId,
    },

    #[error("declaration {0} does not exist")]
    #[diagnostic(code(crossgen::unknown_declaration))]
    UnknownDeclaration(DeclId),

    #[error("interface '{declaration}' declares field '{field}'")]
    #[diagnostic(
        code(crossgen::interface_field),
        help("interfaces may only declare method signatures")
    )]
    InterfaceField { declaration: String, field: String },

    #[error("method '{method}' of '{declaration}' is both a constructor and an accessor")]
    #[diagnostic(code(crossgen::accessor_constructor))]
    AccessorConstructor { declaration: String, method: String },

    #[error("constructor of '{declaration}' starts with an unknown delegation marker: `{line}`")]
    #[diagnostic(
        code(crossgen::delegation_marker),
        help("delegating calls must be encoded as `this-call(...)` or `super-call(...)`")
    )]
    UnknownDelegationMarker { declaration: String, line: String },
}
