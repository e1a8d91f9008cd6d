use std::fmt;

// === MirrorError ===

/// Errors related to the remote mirror operation.
///
/// The mirror is the only path in the system where failures propagate to the
/// caller: the local persistence stores recover with defaults instead.
#[derive(Debug)]
pub enum MirrorError {
    /// A network error occurred while contacting the source.
    Network(String),
    /// The source responded with a non-success HTTP status.
    UpstreamStatus(u16),
    /// The durable store rejected the upload or could not be queried.
    Store(String),
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorError::Network(msg) => write!(f, "Download error: {}", msg),
            MirrorError::UpstreamStatus(status) => write!(f, "Failed to download: {}", status),
            MirrorError::Store(msg) => write!(f, "Upload failed: {}", msg),
        }
    }
}

impl std::error::Error for MirrorError {}
