mod store;
mod tagger;
mod types;

pub use store::{BlobStore, S3BlobStore};
pub use tagger::{ArchivalTagger, blob_key, event_source};
pub use types::{ArchiveRequest, ArchiveResponse};
