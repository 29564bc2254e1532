//! Emit operation - writing rendered declarations.

use std::path::Path;

use crossgen_codegen::EmittedFile;
use crossgen_core::{Always, IfMissing, NewerThan, StalenessOracle, WriteResult};
use eyre::{Context, Result};

use crate::{
    config::Staleness,
    reports::{EmitReport, EmitResult, PreviewFile, WrittenResult},
};

/// Options for one emission run.
#[derive(Debug)]
pub struct EmitOptions<'a> {
    pub output_dir: &'a Path,
    pub declarations: usize,
    pub warnings: Vec<String>,
    pub dry_run: bool,
}

/// Pick the staleness oracle for a run.
///
/// `force` overrides the configured rule. The `newer` rule compares output
/// files against the modification time of `input`.
pub fn oracle(input: &Path, staleness: Staleness, force: bool) -> Result<Box<dyn StalenessOracle>> {
    if force {
        return Ok(Box::new(Always));
    }
    Ok(match staleness {
        Staleness::Always => Box::new(Always),
        Staleness::Missing => Box::new(IfMissing),
        Staleness::Newer => {
            let modified = std::fs::metadata(input)
                .and_then(|meta| meta.modified())
                .wrap_err_with(|| format!("Failed to read modification time of {}", input.display()))?;
            Box::new(NewerThan(modified))
        }
    })
}

/// Write emitted files, or collect them for preview on a dry run.
pub fn write(files: Vec<EmittedFile>, opts: EmitOptions<'_>) -> Result<EmitReport> {
    let skipped = opts.declarations.saturating_sub(files.len());

    let result = if opts.dry_run {
        let files = files
            .iter()
            .map(|file| PreviewFile {
                path: file.path.clone(),
                content: file.render(),
            })
            .collect();
        EmitResult::Preview(files)
    } else {
        let mut written = WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            ..Default::default()
        };
        for file in files {
            let generated = file.into_generated();
            match generated.write()? {
                WriteResult::Written => written.written.push(generated.path().to_path_buf()),
                WriteResult::Unchanged => written.unchanged.push(generated.path().to_path_buf()),
            }
        }
        tracing::info!(
            written = written.written.len(),
            unchanged = written.unchanged.len(),
            skipped,
            "emission finished"
        );
        EmitResult::Written(written)
    };

    Ok(EmitReport {
        warnings: opts.warnings,
        declarations: opts.declarations,
        skipped,
        result,
    })
}
