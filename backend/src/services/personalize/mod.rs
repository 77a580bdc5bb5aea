//! Template personalization for the current selection.
//!
//! Routes under `/api/personalize`:
//! - `POST /`: body `{"template_id": ...}`. Renders the template for every
//!   selected supporter still present in the store and replaces the session's
//!   message collection with the result. An empty selection is refused with
//!   `422`, an unknown template with `404`; in both cases the previous
//!   collection is kept.
//! - `GET /`: the collection produced by the last successful run.

mod generate;
mod get;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/personalize";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(generate::process))
        .route("", get().to(get::process))
}
