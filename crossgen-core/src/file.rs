use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A rendered source file ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
}

impl GeneratedFile {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Content identical to what is already on disk is not rewritten.
    pub fn write(&self) -> Result<WriteResult> {
        if std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == self.content) {
            tracing::debug!(path = %self.path.display(), "content unchanged");
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Write through a sibling temp file and rename it into place.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = path.with_file_name(format!(".{file_name}.tmp"));
    std::fs::write(&staging, content)
        .wrap_err_with(|| format!("failed to write '{}'", staging.display()))?;
    std::fs::rename(&staging, path)
        .wrap_err_with(|| format!("failed to move output into '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("Foo.cs");

        let file = GeneratedFile::new(&path, "class Foo {}");
        assert_eq!(file.write().unwrap(), WriteResult::Written);

        assert_eq!(fs::read_to_string(&path).unwrap(), "class Foo {}");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.cs");
        fs::write(&path, "old").unwrap();

        GeneratedFile::new(&path, "new").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_identical_content_is_not_rewritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.cs");
        fs::write(&path, "same").unwrap();

        let result = GeneratedFile::new(&path, "same").write().unwrap();
        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_no_staging_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.cs");

        GeneratedFile::new(&path, "x").write().unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
