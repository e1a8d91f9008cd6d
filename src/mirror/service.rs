//! Idempotent mirroring of the source document into durable storage.

use log::info;

use crate::mirror::object_store::ObjectStore;
use crate::mirror::source::DocumentSource;
use crate::types::errors::MirrorError;
use crate::types::mirror::{MirrorOutcome, MirrorStatus};

/// Object name the mirrored document is stored under.
pub const DOCUMENT_OBJECT_NAME: &str = "quran.pdf";

/// Mirror service: downloads the source document once and re-hosts it.
pub struct MirrorService<S: ObjectStore, D: DocumentSource> {
    store: S,
    source: D,
    object_name: String,
}

impl<S: ObjectStore, D: DocumentSource> MirrorService<S, D> {
    pub fn new(store: S, source: D) -> Self {
        Self {
            store,
            source,
            object_name: DOCUMENT_OBJECT_NAME.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    /// Ensures a durable public copy of the document exists and returns its
    /// address.
    ///
    /// Idempotent: when the object is already stored, returns `exists`
    /// without contacting the source. Otherwise downloads, stores, and
    /// returns `uploaded`. Unlike the local persistence stores, failures
    /// here propagate to the caller.
    pub async fn ensure_mirrored(&self) -> Result<MirrorOutcome, MirrorError> {
        if self.store.exists(&self.object_name)? {
            return Ok(MirrorOutcome {
                url: self.store.public_url(&self.object_name),
                status: MirrorStatus::Exists,
            });
        }

        let data = self.source.fetch().await?;
        info!("downloaded {} bytes", data.len());

        self.store.put(&self.object_name, &data)?;

        Ok(MirrorOutcome {
            url: self.store.public_url(&self.object_name),
            status: MirrorStatus::Uploaded,
        })
    }
}
