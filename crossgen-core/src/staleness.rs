//! Oracles deciding whether a declaration's output file needs to be written.

use std::{path::Path, time::SystemTime};

/// Decides whether the output for a declaration is stale.
///
/// Any `Fn(&str, &Path) -> bool` closure is an oracle, which keeps tests and
/// drivers free to plug in their own rules.
pub trait StalenessOracle {
    /// Return `true` when `path` must be (re)generated for the declaration
    /// named `qualified_name`.
    fn should_emit(&self, qualified_name: &str, path: &Path) -> bool;
}

impl<F> StalenessOracle for F
where
    F: Fn(&str, &Path) -> bool,
{
    fn should_emit(&self, qualified_name: &str, path: &Path) -> bool {
        self(qualified_name, path)
    }
}

/// Always regenerate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl StalenessOracle for Always {
    fn should_emit(&self, _qualified_name: &str, _path: &Path) -> bool {
        true
    }
}

/// Only generate files that do not exist yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfMissing;

impl StalenessOracle for IfMissing {
    fn should_emit(&self, _qualified_name: &str, path: &Path) -> bool {
        !path.exists()
    }
}

/// Regenerate files older than the input they were produced from.
#[derive(Debug, Clone, Copy)]
pub struct NewerThan(pub SystemTime);

impl StalenessOracle for NewerThan {
    fn should_emit(&self, _qualified_name: &str, path: &Path) -> bool {
        match std::fs::metadata(path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified < self.0,
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_always() {
        assert!(Always.should_emit("a.B", Path::new("/nonexistent/B.cs")));
    }

    #[test]
    fn test_if_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("B.cs");
        assert!(IfMissing.should_emit("a.B", &path));

        std::fs::write(&path, "").unwrap();
        assert!(!IfMissing.should_emit("a.B", &path));
    }

    #[test]
    fn test_newer_than() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("B.cs");
        assert!(NewerThan(SystemTime::now()).should_emit("a.B", &path));

        std::fs::write(&path, "").unwrap();
        let long_ago = SystemTime::UNIX_EPOCH + Duration::from_secs(1);
        assert!(!NewerThan(long_ago).should_emit("a.B", &path));

        let future = SystemTime::now() + Duration::from_secs(3600);
        assert!(NewerThan(future).should_emit("a.B", &path));
    }

    #[test]
    fn test_closure_oracle() {
        let only_b = |name: &str, _: &Path| name.ends_with(".B");
        assert!(only_b.should_emit("a.B", Path::new("B.cs")));
        assert!(!only_b.should_emit("a.C", Path::new("C.cs")));
    }
}
