use std::path::{Path, PathBuf};

/// A file on local disk that exists only for the duration of one request.
///
/// The file is removed when the guard is dropped, whichever path the
/// owning code takes out of its scope.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    /// Takes ownership of an already written file.
    pub fn adopt(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        // Missing file is fine: the writer may have failed before creating it.
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn should_remove_file_when_dropped() {
        let path = scratch_path("temp-file-drop");
        std::fs::write(&path, b"payload").unwrap();

        {
            let guard = TempFile::adopt(&path);
            assert!(guard.path().exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn should_not_panic_when_file_never_written() {
        let path = scratch_path("temp-file-missing");
        let guard = TempFile::adopt(&path);
        drop(guard);
        assert!(!path.exists());
    }
}
