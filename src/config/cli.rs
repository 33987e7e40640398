use crate::core::{PathKind, Storage};
use crate::utils::error::Result;
use std::path::Path;

/// Filesystem storage rooted at `base_path`; absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn path_kind(&self, path: &str) -> PathKind {
        let full_path = Path::new(&self.base_path).join(path);
        match tokio::fs::metadata(full_path).await {
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            Ok(_) => PathKind::File,
            Err(_) => PathKind::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_dirs_and_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/dir/report.md", b"# hi").await.unwrap();
        let data = storage.read_file("nested/dir/report.md").await.unwrap();
        assert_eq!(data, b"# hi");
    }

    #[tokio::test]
    async fn test_path_kind_is_relative_to_base_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        storage.write_file("v1.2/pools.json", b"{}").await.unwrap();

        assert_eq!(storage.path_kind("v1.2").await, PathKind::Directory);
        assert_eq!(storage.path_kind("v1.2/pools.json").await, PathKind::File);
        assert_eq!(storage.path_kind("absent").await, PathKind::Missing);
        // `src` exists under the process working directory, not under the storage root.
        assert_eq!(storage.path_kind("src").await, PathKind::Missing);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        assert!(matches!(
            storage.read_file("absent.json").await,
            Err(crate::utils::error::RosterError::IoError(_))
        ));
    }
}
