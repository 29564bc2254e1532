//! Retargetable class and member emitter.
//!
//! This crate turns a resolved [`crossgen_ir::Declaration`] into source
//! text for an object-oriented target language. Every lexical decision is
//! delegated to a [`Target`] implementation, so adding a language means
//! implementing that trait in its own crate (e.g., `crossgen-codegen-csharp`).
//!
//! # Module Organization
//!
//! - [`emitter`] - The declaration walk (Emitter, EmittedFile)
//! - [`target`] - Target formatting strategy (Target, FieldInitPolicy)
//! - [`naming`] - Reserved words and identifier casing (NamingConvention)
//! - [`imports`] - Namespace import collection (ImportCollector)
//! - [`validate`] - Modeling lints run ahead of emission
//! - [`testing`] - Minimal target for tests (feature-gated)

mod error;

pub mod emitter;
pub mod imports;
pub mod naming;
pub mod target;
pub mod validate;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use emitter::{EmittedFile, Emitter, SUPER_CALL_MARKER, THIS_CALL_MARKER};
pub use error::{EmitError, Result};
pub use imports::ImportCollector;
pub use naming::NamingConvention;
pub use target::{FieldInitPolicy, Target};
