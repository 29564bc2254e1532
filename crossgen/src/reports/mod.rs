//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod emit;
mod lints;
mod output;

pub use check::CheckReport;
pub use emit::{EmitReport, EmitResult, PreviewFile, WrittenResult};
pub use lints::LintsReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
