//! Built-in lints for declaration validation.

mod accessor_constructor;
mod duplicate_members;
mod interface;
mod unresolved_types;

pub use accessor_constructor::AccessorConstructorLint;
pub use duplicate_members::DuplicateMembersLint;
pub use interface::{InterfaceBodiesLint, InterfaceFieldsLint};
pub use unresolved_types::UnresolvedTypesLint;

use crossgen_ir::Declaration;

/// Location string for a member of a declaration.
fn member_path(decl: &Declaration, member: &str) -> String {
    format!("{}.{}", decl.qualified_name(), member)
}
