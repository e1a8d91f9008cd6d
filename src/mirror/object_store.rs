//! Durable object storage seam for the mirror.

use std::fs;
use std::path::PathBuf;

use crate::types::errors::MirrorError;

/// Trait defining the durable store the mirrored document lives in.
pub trait ObjectStore {
    /// Whether an object with this name already exists.
    fn exists(&self, name: &str) -> Result<bool, MirrorError>;
    /// Stores `data` under `name`, replacing any previous object.
    fn put(&self, name: &str, data: &[u8]) -> Result<(), MirrorError>;
    /// The public address the object is (or will be) served from.
    fn public_url(&self, name: &str) -> String;
}

/// Object store over a local directory, served under a public base URL.
pub struct FsObjectStore {
    root: PathBuf,
    public_base: String,
}

impl FsObjectStore {
    pub fn new(root: PathBuf, public_base: impl Into<String>) -> Self {
        Self {
            root,
            public_base: public_base.into(),
        }
    }

    /// Directory the objects are written to.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ObjectStore for FsObjectStore {
    fn exists(&self, name: &str) -> Result<bool, MirrorError> {
        Ok(self.root.join(name).is_file())
    }

    fn put(&self, name: &str, data: &[u8]) -> Result<(), MirrorError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| MirrorError::Store(format!("create directory: {}", e)))?;
        fs::write(self.root.join(name), data).map_err(|e| MirrorError::Store(e.to_string()))
    }

    fn public_url(&self, name: &str) -> String {
        format!("{}/{}", self.public_base.trim_end_matches('/'), name)
    }
}
