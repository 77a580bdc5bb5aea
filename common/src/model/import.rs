use crate::model::supporter::ExtractedPerson;
use serde::{Deserialize, Serialize};

/// Result of parsing and extracting an upload, reported as the payload of a
/// completed parse job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    /// MD5 of the uploaded bytes; used to commit the preview later.
    pub upload_id: String,
    pub extracted: usize,
    pub rejected: usize,
    /// People that passed the name check, in file order.
    pub preview: Vec<ExtractedPerson>,
}

/// Result of committing an upload to the supporter store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub supporter_ids: Vec<String>,
}

/// Returned by the upload endpoint so the client can poll the parse job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadAccepted {
    pub job_id: String,
    pub upload_id: String,
}
