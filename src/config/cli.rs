use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Rooted at the process's working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Resolved input path: {}", full_path.display());
        let data = fs::read(full_path)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested/data.csv"), "org1,daniel,admin").unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let data = storage.read_file("nested/data.csv").unwrap();

        assert_eq!(data, b"org1,daniel,admin");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        match storage.read_file("missing.csv") {
            Err(EtlError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected IoError, got {:?}", other),
        }
    }

    #[test]
    fn test_current_dir_matches_process_cwd() {
        let storage = LocalStorage::current_dir().unwrap();
        assert_eq!(storage.base_path(), std::env::current_dir().unwrap());
    }
}
