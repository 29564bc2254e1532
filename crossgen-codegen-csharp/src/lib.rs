//! C# target for the crossgen transpiler backend.
//!
//! Plugs into [`crossgen_codegen::Emitter`] through the [`CSharpTarget`]
//! implementation of [`crossgen_codegen::Target`].

mod naming;
mod target;

pub use naming::CS_NAMING;
pub use target::CSharpTarget;
