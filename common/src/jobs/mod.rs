use serde::{Deserialize, Serialize};

/// Lifecycle of a background job as seen by a polling client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    InProgress(u32),
    /// Carries a JSON document describing the result.
    Completed(String),
    Failed(String),
}
