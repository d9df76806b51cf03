//! Filesystem seam for upload payloads

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Reads a local file into a UTF-8 string
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_text(&self, path: &Path) -> Result<String>;
}

/// `tokio::fs`-backed reader used by the CLI
#[derive(Debug, Default)]
pub struct TokioFileReader;

#[async_trait]
impl FileReader for TokioFileReader {
    async fn read_text(&self, path: &Path) -> Result<String> {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_text_returns_contents() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "payload body").unwrap();

        let content = TokioFileReader.read_text(file.path()).await.unwrap();
        assert_eq!(content, "payload body");
    }

    #[tokio::test]
    async fn test_read_text_missing_file_is_io_error() {
        let result = TokioFileReader
            .read_text(Path::new("/no/such/file.dat"))
            .await;

        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
