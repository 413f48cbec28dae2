use serde::{Deserialize, Serialize};

/// Payload of an event whose description should be archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRequest {
    pub id: i64,
    pub description: String,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveResponse {
    pub id: i64,
    pub tag: String,
}
