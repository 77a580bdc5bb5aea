//! The outreach selection of the current session.
//!
//! Routes under `/api/selection`, each answering with the resulting
//! `SelectionSnapshot`:
//! - `GET /`: current selection.
//! - `POST /toggle/{id}`: adds the id if absent, removes it if present. The id
//!   does not have to exist in the supporter store.
//! - `PUT /`: body `{"ids": [...]}`; replaces the selection with exactly these ids.
//! - `DELETE /`: clears the selection.

mod get;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/selection";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("", put().to(update::select_all))
        .route("", delete().to(update::clear))
        .route("/toggle/{id}", post().to(update::toggle))
}
