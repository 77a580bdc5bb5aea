//! Direct access to the supporter store.
//!
//! Routes under `/api/supporters`:
//! - `GET /`: every supporter, in import order.
//! - `GET /{id}`: one supporter, `404` when unknown.
//! - `PATCH /{id}`: partial update; absent fields stay as they are.
//! - `DELETE /{id}`: removes the supporter. Any selection holding the id keeps
//!   it; personalization skips ids that no longer resolve.

mod list;
mod remove;
mod update;

use actix_web::web::{delete, get, patch, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/supporters";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{id}", get().to(list::one))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(remove::process))
}
