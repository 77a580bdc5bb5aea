//! Commits a parsed upload to the supporter store.
//!
//! Routes:
//! - `POST /api/import/commit`: body `{"upload_id": ...}`. Runs the import
//!   normalizer over the rows kept from the upload's parse job and stores every
//!   accepted supporter in one transaction. Returns `{accepted, rejected,
//!   supporter_ids}`. The preview is consumed; committing the same upload again
//!   needs a fresh upload.

mod commit;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/import";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/commit", post().to(commit::process))
}
