//! Mock file reader for testing

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use isir_client_core::{Error, FileReader, Result};

/// Mock implementation of [`FileReader`] backed by an in-memory path map
pub struct MockFileReader {
    files: Mutex<HashMap<PathBuf, String>>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockFileReader {
    /// Create an empty mock file system
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Add a readable file
    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
    }

    /// Make every read fail with the given message
    pub fn expect_failure(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Number of reads attempted
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockFileReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileReader for MockFileReader {
    async fn read_text(&self, path: &Path) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &*self.failure.lock().unwrap() {
            return Err(Error::Io(std::io::Error::other(message.clone())));
        }

        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                ))
            })
    }
}
