//! Supporter sheet uploads and the status of their parse jobs.
//!
//! The provided routes are:
//! - `POST /api/data_sources/csv/upload`: multipart/form-data upload with a `file`
//!   field holding a `.csv` sheet. The bytes are hashed with MD5 to form the
//!   `upload_id`, and a background job parses the sheet and extracts the people
//!   in it. Responds at once with `{job_id, upload_id}`. A second upload of the
//!   same bytes is refused with `409 Conflict` while the first parse still runs.
//!
//! - `GET /api/data_sources/csv/status/{job_id}`: current `JobStatus` of a parse
//!   job. A `Completed` status carries the JSON `UploadSummary` (extracted and
//!   rejected counts plus the preview); the rows themselves wait in the session
//!   until `POST /api/import/commit`.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod get_status;
mod parse;
pub(crate) mod upload;

const API_PATH: &str = "/api/data_sources/csv";

/// Configures and returns the Actix scope for CSV data source routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to upload a sheet and start its parse job.
        .route("/upload", post().to(upload::process))
        // Route to get the status of a parse job.
        .route("/status/{job_id}", get().to(get_status::process))
}
