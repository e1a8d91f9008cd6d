use serde::{Deserialize, Serialize};

/// Whether the mirror found an existing copy or had to upload a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorStatus {
    /// A durable copy already existed; no download was performed.
    Exists,
    /// The document was downloaded from the source and stored.
    Uploaded,
}

/// Result of a successful mirror run: the public address of the durable copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorOutcome {
    pub url: String,
    pub status: MirrorStatus,
}
