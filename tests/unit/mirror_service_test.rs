//! Unit tests for the mirror service.
//!
//! Uses in-memory test doubles for the object store and document source to
//! verify idempotency and error propagation without touching the network,
//! plus `FsObjectStore` against a temp directory.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use quranreader::mirror::service::DOCUMENT_OBJECT_NAME;
use quranreader::mirror::{DocumentSource, FsObjectStore, MirrorService, ObjectStore};
use quranreader::types::errors::MirrorError;
use quranreader::types::mirror::MirrorStatus;

/// Object store over a HashMap.
struct MemStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_put: bool,
}

impl MemStore {
    fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail_put: false,
        }
    }

    fn seeded(name: &str) -> Self {
        let store = Self::new();
        store
            .objects
            .lock()
            .unwrap()
            .insert(name.to_string(), b"seed".to_vec());
        store
    }
}

impl ObjectStore for MemStore {
    fn exists(&self, name: &str) -> Result<bool, MirrorError> {
        Ok(self.objects.lock().unwrap().contains_key(name))
    }

    fn put(&self, name: &str, data: &[u8]) -> Result<(), MirrorError> {
        if self.fail_put {
            return Err(MirrorError::Store("bucket unavailable".to_string()));
        }
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), data.to_vec());
        Ok(())
    }

    fn public_url(&self, name: &str) -> String {
        format!("mem://bucket/{}", name)
    }
}

/// Document source that counts fetches and either serves bytes or fails.
struct CountingSource {
    data: Option<Vec<u8>>,
    calls: AtomicUsize,
}

impl CountingSource {
    fn serving(data: &[u8]) -> Self {
        Self {
            data: Some(data.to_vec()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            data: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl DocumentSource for CountingSource {
    async fn fetch(&self) -> Result<Vec<u8>, MirrorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.data {
            Some(data) => Ok(data.clone()),
            None => Err(MirrorError::UpstreamStatus(404)),
        }
    }
}

#[tokio::test]
async fn test_first_run_downloads_and_uploads() {
    let service = MirrorService::new(MemStore::new(), CountingSource::serving(b"%PDF-1.7"));

    let outcome = service.ensure_mirrored().await.unwrap();
    assert_eq!(outcome.status, MirrorStatus::Uploaded);
    assert_eq!(outcome.url, format!("mem://bucket/{}", DOCUMENT_OBJECT_NAME));
}

#[tokio::test]
async fn test_second_run_detects_existing_copy() {
    let service = MirrorService::new(MemStore::new(), CountingSource::serving(b"%PDF-1.7"));

    let first = service.ensure_mirrored().await.unwrap();
    let second = service.ensure_mirrored().await.unwrap();

    assert_eq!(first.status, MirrorStatus::Uploaded);
    assert_eq!(second.status, MirrorStatus::Exists);
    assert_eq!(first.url, second.url);
    // The document was fetched exactly once
    assert_eq!(service.source().calls.load(Ordering::SeqCst), 1);
}

/// Once a copy exists the source is never contacted again.
#[tokio::test]
async fn test_existing_copy_skips_download() {
    let source = CountingSource::serving(b"%PDF-1.7");
    let service = MirrorService::new(MemStore::seeded(DOCUMENT_OBJECT_NAME), source);

    let outcome = service.ensure_mirrored().await.unwrap();
    assert_eq!(outcome.status, MirrorStatus::Exists);
    assert_eq!(service.source().calls.load(Ordering::SeqCst), 0);
}

/// An upstream failure propagates with the HTTP status, exactly once.
#[tokio::test]
async fn test_download_failure_propagates_status() {
    let service = MirrorService::new(MemStore::new(), CountingSource::failing());

    let err = service.ensure_mirrored().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to download: 404");
}

/// A durable-store failure propagates with the store's message.
#[tokio::test]
async fn test_upload_failure_propagates_message() {
    let mut store = MemStore::new();
    store.fail_put = true;
    let service = MirrorService::new(store, CountingSource::serving(b"%PDF-1.7"));

    let err = service.ensure_mirrored().await.unwrap_err();
    assert_eq!(err.to_string(), "Upload failed: bucket unavailable");
}

/// FsObjectStore writes the object to disk and reports it afterwards.
#[tokio::test]
async fn test_fs_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path().to_path_buf(), "https://cdn.example/quran");
    let service = MirrorService::new(store, CountingSource::serving(b"%PDF-1.7 body"));

    let outcome = service.ensure_mirrored().await.unwrap();
    assert_eq!(outcome.status, MirrorStatus::Uploaded);
    assert_eq!(outcome.url, "https://cdn.example/quran/quran.pdf");

    let on_disk = std::fs::read(dir.path().join(DOCUMENT_OBJECT_NAME)).unwrap();
    assert_eq!(on_disk, b"%PDF-1.7 body");

    let again = service.ensure_mirrored().await.unwrap();
    assert_eq!(again.status, MirrorStatus::Exists);
}

/// The outcome serializes to the wire shape the app consumes.
#[test]
fn test_outcome_wire_shape() {
    let outcome = quranreader::types::mirror::MirrorOutcome {
        url: "https://cdn.example/quran/quran.pdf".to_string(),
        status: MirrorStatus::Exists,
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"url": "https://cdn.example/quran/quran.pdf", "status": "exists"})
    );

    let uploaded = serde_json::to_value(MirrorStatus::Uploaded).unwrap();
    assert_eq!(uploaded, serde_json::json!("uploaded"));
}
