//! Remote Mirror for QuranReader.
//!
//! One-shot out-of-band operation: guarantee a durable, publicly addressable
//! copy of the source PDF exists. The interactive reading path never calls
//! this — it only ever consumes the resulting address.

pub mod object_store;
pub mod service;
pub mod source;

pub use object_store::{FsObjectStore, ObjectStore};
pub use service::MirrorService;
pub use source::{DocumentSource, DriveSource};
