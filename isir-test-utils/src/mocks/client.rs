//! Mock record API for testing

use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use isir_client_core::{AuthHeader, CorrectionFile, Error, RecordApi, Result, UploadId};

/// Mock implementation of [`RecordApi`] for testing
///
/// Both operations have independently configurable outcomes and call
/// counters. The corrections mock returns the configured list as-is and
/// does not touch the output directory.
///
/// # Examples
///
/// ```
/// use isir_client_core::CorrectionFile;
/// use isir_test_utils::MockRecordApi;
///
/// let mock = MockRecordApi::new();
/// mock.expect_corrections(vec![CorrectionFile {
///     name: "corr-0001.dat".to_string(),
///     award_year: None,
/// }]);
/// assert_eq!(mock.corrections_call_count(), 0);
/// ```
pub struct MockRecordApi {
    corrections: Mutex<CorrectionsBehavior>,
    upload: Mutex<UploadBehavior>,
    corrections_calls: AtomicUsize,
    upload_calls: AtomicUsize,
    last_window: Mutex<Option<(String, String)>>,
    last_award_years: Mutex<Option<String>>,
}

enum CorrectionsBehavior {
    Return(Vec<CorrectionFile>),
    Fail(String),
}

enum UploadBehavior {
    Return(String),
    Fail(String),
}

impl MockRecordApi {
    /// Create a mock that returns an empty batch and a fixed upload id
    pub fn new() -> Self {
        Self {
            corrections: Mutex::new(CorrectionsBehavior::Return(Vec::new())),
            upload: Mutex::new(UploadBehavior::Return("81244".to_string())),
            corrections_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            last_window: Mutex::new(None),
            last_award_years: Mutex::new(None),
        }
    }

    /// Configure the correction fetch to return the given descriptors
    pub fn expect_corrections(&self, files: Vec<CorrectionFile>) {
        *self.corrections.lock().unwrap() = CorrectionsBehavior::Return(files);
    }

    /// Configure the correction fetch to fail with the given message
    pub fn expect_corrections_failure(&self, message: &str) {
        *self.corrections.lock().unwrap() = CorrectionsBehavior::Fail(message.to_string());
    }

    /// Configure the upload to succeed with the given file id
    pub fn expect_upload_id(&self, id: &str) {
        *self.upload.lock().unwrap() = UploadBehavior::Return(id.to_string());
    }

    /// Configure the upload to be rejected with the given message
    pub fn expect_upload_failure(&self, message: &str) {
        *self.upload.lock().unwrap() = UploadBehavior::Fail(message.to_string());
    }

    /// Number of correction fetches attempted
    pub fn corrections_call_count(&self) -> usize {
        self.corrections_calls.load(Ordering::SeqCst)
    }

    /// Number of uploads attempted
    pub fn upload_call_count(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    /// The wire-format date window passed to the last correction fetch
    pub fn last_window(&self) -> Option<(String, String)> {
        self.last_window.lock().unwrap().clone()
    }

    /// The award-year range passed to the last upload
    pub fn last_award_years(&self) -> Option<String> {
        self.last_award_years.lock().unwrap().clone()
    }
}

impl Default for MockRecordApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordApi for MockRecordApi {
    async fn get_corrections(
        &self,
        _authorization: &AuthHeader,
        start: &str,
        end: &str,
        _output_dir: &Path,
    ) -> Result<Vec<CorrectionFile>> {
        self.corrections_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_window.lock().unwrap() = Some((start.to_string(), end.to_string()));

        match &*self.corrections.lock().unwrap() {
            CorrectionsBehavior::Return(files) => Ok(files.clone()),
            CorrectionsBehavior::Fail(message) => Err(Error::api(500, message.clone())),
        }
    }

    async fn upload(
        &self,
        _authorization: &AuthHeader,
        award_years: &str,
        _content: &str,
    ) -> Result<UploadId> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_award_years.lock().unwrap() = Some(award_years.to_string());

        match &*self.upload.lock().unwrap() {
            UploadBehavior::Return(id) => Ok(UploadId::new(id.clone())),
            UploadBehavior::Fail(message) => Err(Error::api(403, message.clone())),
        }
    }
}
