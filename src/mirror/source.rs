//! Upstream document source for the mirror.

use crate::types::errors::MirrorError;

/// Trait defining where the source document is downloaded from.
pub trait DocumentSource {
    /// Fetches the full document body.
    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<u8>, MirrorError>> + Send;
}

/// Document source downloading from a Google Drive file id.
pub struct DriveSource {
    client: reqwest::Client,
    file_id: String,
}

impl DriveSource {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            file_id: file_id.into(),
        }
    }

    /// Direct-download URL for the file id. `confirm=t` skips the virus-scan
    /// interstitial Drive inserts for large files.
    pub fn download_url(&self) -> String {
        format!(
            "https://drive.google.com/uc?export=download&id={}&confirm=t",
            self.file_id
        )
    }
}

impl DocumentSource for DriveSource {
    async fn fetch(&self) -> Result<Vec<u8>, MirrorError> {
        let response = self
            .client
            .get(self.download_url())
            .send()
            .await
            .map_err(|e| MirrorError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MirrorError::UpstreamStatus(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MirrorError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
