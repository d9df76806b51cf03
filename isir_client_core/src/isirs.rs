//! Record API client for ISIR operations
//!
//! Two operations are exposed: fetching the correction files issued inside a
//! date window (the files are materialized into a local directory) and
//! uploading a correction payload under an award-year range.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::auth::AuthHeader;
use crate::error::{Error, Result};

/// Descriptor for a retrieved correction file
///
/// The file content itself is written to disk during the fetch; only the
/// name and metadata are retained for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionFile {
    pub name: String,
    pub award_year: Option<String>,
}

/// Identifier the record API assigns to an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadId(String);

impl UploadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operations of the remote record API
#[async_trait]
pub trait RecordApi: Send + Sync {
    /// Fetch the correction files issued between `start` and `end` (wire
    /// `MM-DD-YYYY` strings) and write them into `output_dir`
    async fn get_corrections(
        &self,
        authorization: &AuthHeader,
        start: &str,
        end: &str,
        output_dir: &Path,
    ) -> Result<Vec<CorrectionFile>>;

    /// Upload a correction payload under the given award-year range
    async fn upload(
        &self,
        authorization: &AuthHeader,
        award_years: &str,
        content: &str,
    ) -> Result<UploadId>;
}

/// Correction file as returned on the wire, content included
#[derive(Debug, Clone, Deserialize)]
struct CorrectionPayload {
    name: String,
    #[serde(rename = "awardYear", default)]
    award_year: Option<String>,
    content: String,
}

impl CorrectionPayload {
    fn descriptor(&self) -> CorrectionFile {
        CorrectionFile {
            name: self.name.clone(),
            award_year: self.award_year.clone(),
        }
    }
}

/// Write each fetched payload into `output_dir`, preserving response order
async fn materialize(payloads: Vec<CorrectionPayload>, output_dir: &Path) -> Result<Vec<CorrectionFile>> {
    let mut files = Vec::with_capacity(payloads.len());

    for payload in payloads {
        let target = output_dir.join(&payload.name);
        tokio::fs::write(&target, payload.content.as_bytes()).await?;
        debug!("wrote correction file {}", target.display());
        files.push(payload.descriptor());
    }

    Ok(files)
}

/// HTTP client for the record API
pub struct IsirClient {
    http: reqwest::Client,
    root_url: String,
}

impl IsirClient {
    /// Create a client for the given API root; `timeout`, when set, bounds
    /// each request end to end
    pub fn new(root_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let root_url: String = root_url.into();
        Ok(Self {
            http: builder.build()?,
            root_url: root_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RecordApi for IsirClient {
    async fn get_corrections(
        &self,
        authorization: &AuthHeader,
        start: &str,
        end: &str,
        output_dir: &Path,
    ) -> Result<Vec<CorrectionFile>> {
        let url = format!("{}/isirs/corrections", self.root_url);
        debug!("fetching corrections from {url} for {start}..{end}");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, authorization.as_str())
            .query(&[("startDate", start), ("endDate", end)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), body));
        }

        let payloads: Vec<CorrectionPayload> = response.json().await?;
        debug!("received {} correction file(s)", payloads.len());

        materialize(payloads, output_dir).await
    }

    async fn upload(
        &self,
        authorization: &AuthHeader,
        award_years: &str,
        content: &str,
    ) -> Result<UploadId> {
        let url = format!("{}/isirs/{}", self.root_url, award_years);
        debug!("uploading {} byte(s) to {url}", content.len());

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, authorization.as_str())
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(content.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::api(status.as_u16(), body));
        }

        // The API answers with the new file id, sometimes quoted as JSON.
        Ok(UploadId::new(body.trim().trim_matches('"')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payloads() -> Vec<CorrectionPayload> {
        serde_json::from_str(
            r#"[
                {"name": "corr-0001.dat", "awardYear": "2024-2025", "content": "REC1"},
                {"name": "corr-0002.dat", "content": "REC2"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_payload_decode_with_optional_award_year() {
        let payloads = sample_payloads();

        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0].award_year.as_deref(), Some("2024-2025"));
        assert_eq!(payloads[1].award_year, None);
    }

    #[tokio::test]
    async fn test_materialize_writes_files_and_returns_descriptors() {
        let dir = tempfile::tempdir().unwrap();

        let files = materialize(sample_payloads(), dir.path()).await.unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "corr-0001.dat");
        assert_eq!(files[1].name, "corr-0002.dat");

        let first = std::fs::read_to_string(dir.path().join("corr-0001.dat")).unwrap();
        assert_eq!(first, "REC1");
        let second = std::fs::read_to_string(dir.path().join("corr-0002.dat")).unwrap();
        assert_eq!(second, "REC2");
    }

    #[tokio::test]
    async fn test_materialize_empty_batch() {
        let dir = tempfile::tempdir().unwrap();

        let files = materialize(Vec::new(), dir.path()).await.unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_upload_id_display() {
        assert_eq!(UploadId::new("81244").to_string(), "81244");
    }

    #[test]
    fn test_root_url_trailing_slash_is_normalized() {
        let client = IsirClient::new("https://api.example.org/svc/", None).unwrap();
        assert_eq!(client.root_url, "https://api.example.org/svc");
    }
}
