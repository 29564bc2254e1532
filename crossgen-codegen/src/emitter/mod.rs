//! Declaration emitter.
//!
//! Walks one declaration and produces the complete target source file as an
//! [`OutputBuffer`]. The walk is the same for every target; the [`Target`]
//! passed in at construction supplies all of the syntax.

mod constructor;
mod writer;

use std::path::{Path, PathBuf};

use crossgen_core::{GeneratedFile, Indent, OutputBuffer, StalenessOracle};
use crossgen_ir::{DeclId, Declaration, DeclarationTable};

pub use constructor::{SUPER_CALL_MARKER, THIS_CALL_MARKER};
use writer::DeclarationWriter;

use crate::{EmitError, ImportCollector, Result, Target};

/// A rendered declaration together with its destination.
#[derive(Debug, Clone)]
pub struct EmittedFile {
    pub id: DeclId,
    pub qualified_name: String,
    pub path: PathBuf,
    pub buffer: OutputBuffer,
    indent: Indent,
}

impl EmittedFile {
    /// Render the buffer with the target's indentation.
    pub fn render(&self) -> String {
        self.buffer.render(self.indent)
    }

    /// Convert into a file ready to be written.
    pub fn into_generated(self) -> GeneratedFile {
        let content = self.render();
        GeneratedFile::new(self.path, content)
    }
}

/// Emits declarations of one table for one target.
///
/// The emitter only borrows the table: declarations are never modified, and
/// constructor bodies are edited on private copies.
pub struct Emitter<'a> {
    table: &'a DeclarationTable,
    target: &'a dyn Target,
}

impl<'a> Emitter<'a> {
    pub fn new(table: &'a DeclarationTable, target: &'a dyn Target) -> Self {
        Self { table, target }
    }

    pub fn target(&self) -> &dyn Target {
        self.target
    }

    /// Output location: `root/<package path>/<Name>.<ext>`.
    pub fn output_path(&self, decl: &Declaration, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in decl.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.{}", decl.name, self.target.file_extension()));
        path
    }

    /// Sorted packages the declaration has to import.
    pub fn collect_imports(&self, decl: &Declaration) -> Result<Vec<String>> {
        let imports = ImportCollector::for_declaration(self.table, decl)?;
        Ok(imports.iter().map(String::from).collect())
    }

    /// Render a declaration without consulting any staleness oracle.
    pub fn render(&self, decl: &Declaration) -> Result<OutputBuffer> {
        let imports = self.collect_imports(decl)?;
        DeclarationWriter::new(self.target, decl).write(&imports)
    }

    /// Emit one declaration of the table.
    ///
    /// Returns `Ok(None)` when the oracle reports the output as current.
    #[tracing::instrument(level = "debug", skip(self, oracle, root))]
    pub fn emit(
        &self,
        id: DeclId,
        oracle: &dyn StalenessOracle,
        root: &Path,
    ) -> Result<Option<EmittedFile>> {
        let decl = self.table.get(id).ok_or(EmitError::UnknownDeclaration(id))?;
        let qualified_name = decl.qualified_name();
        let path = self.output_path(decl, root);

        if !oracle.should_emit(&qualified_name, &path) {
            tracing::debug!(decl = %qualified_name, "output is current, skipping");
            return Ok(None);
        }

        let buffer = self.render(decl)?;
        tracing::debug!(decl = %qualified_name, path = %path.display(), lines = buffer.len(), "emitted");
        Ok(Some(EmittedFile {
            id,
            qualified_name,
            path,
            buffer,
            indent: self.target.indent(),
        }))
    }

    /// Emit every stale declaration of the table, in table order.
    pub fn emit_all(&self, oracle: &dyn StalenessOracle, root: &Path) -> Result<Vec<EmittedFile>> {
        let mut files = Vec::new();
        for (id, _) in self.table.iter() {
            if let Some(file) = self.emit(id, oracle, root)? {
                files.push(file);
            }
        }
        Ok(files)
    }
}
