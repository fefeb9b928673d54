use std::io;
use std::path::PathBuf;
use tokio::fs::{self, File};
use tracing::info;

/// Local-disk storage rooted at the configured upload directory.
///
/// Filenames passed in must be bare path segments; callers validate them
/// before they reach this service, so a join can never escape the root.
pub struct StorageService {
    root: PathBuf,
}

impl StorageService {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the storage directory if it does not exist yet. Idempotent.
    pub async fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    /// Write the uploaded bytes verbatim to `<root>/<filename>`.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.root.join(filename);
        fs::write(&path, bytes).await?;
        info!("💾 Stored {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Open a stored file for streaming back to a client.
    pub async fn open(&self, filename: &str) -> io::Result<File> {
        File::open(self.root.join(filename)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageService::new(dir.path().to_path_buf());

        storage.save("a.bin", b"hello").await.unwrap();
        assert!(storage.open("a.bin").await.is_ok());
        assert_eq!(std::fs::read(dir.path().join("a.bin")).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_open_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageService::new(dir.path().to_path_buf());

        let err = storage.open("nope.jpg").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_ensure_root_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("uploads");
        let storage = StorageService::new(root.clone());

        storage.ensure_root().await.unwrap();
        storage.ensure_root().await.unwrap();
        assert!(root.is_dir());
    }
}
