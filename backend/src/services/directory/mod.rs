//! Consent-gated member directory.
//!
//! Routes under `/api/directory`:
//! - `GET /?search=&status=`: members matching the search text (name, company,
//!   industry; case-insensitive) and the consent status (`all` for any).
//! - `POST /`: adds a member; new members start `pending`.
//! - `POST /{id}/consent`: body `{"status", "notes"?}`; moves the member to the
//!   given consent status.
//! - `GET /stats`: counts per consent status.
//! - `GET /export`: CSV of members with granted consent only.

mod consent;
mod create;
mod export;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/directory";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/stats", get().to(list::stats))
        .route("/export", get().to(export::process))
        .route("/{id}/consent", post().to(consent::process))
}
