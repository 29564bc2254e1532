//! Core utilities and types for the crossgen transpiler backend.
//!
//! This crate provides the pieces shared by the IR, the emitter and the
//! driver: the line-addressable [`OutputBuffer`], indentation settings,
//! string-case helpers, generated-file writing and staleness oracles.

mod buffer;
mod file;
mod indent;
mod staleness;
mod utils;

// Output composition
pub use buffer::{Delimiters, Line, OutputBuffer};
pub use indent::Indent;
// File operations
pub use file::{GeneratedFile, WriteResult};
pub use staleness::{Always, IfMissing, NewerThan, StalenessOracle};
// String utilities
pub use utils::{capitalize, to_camel_case, to_pascal_case};
