//! # Template Service Module
//!
//! This module aggregates all API endpoints related to outreach templates.
//! Templates are only read by the personalization pipeline; these routes are
//! how they get into the template store in the first place.
//!
//! ## Sub-modules:
//! - `list`: Returns every stored template.
//! - `get`: Returns one template by id.
//! - `save`: Creates or replaces a template.
//! - `check`: Lists the placeholders of a template the personalizer would not fill.

mod check;
mod get;
mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: all templates, oldest first.
///
/// *   **`POST /save`**:
///     - **Handler**: `save::process`
///     - **Description**: Inserts or replaces a `Template` by id. When the payload
///       lists no `variables`, they are filled in from the placeholders found in the
///       subject and content.
///
/// *   **`GET /{template_id}`**: a single template, `404` when unknown.
///
/// *   **`GET /{template_id}/check`**:
///     - **Handler**: `check::process`
///     - **Description**: Returns `{"template_id", "unrecognized": [...]}`. Tokens in this
///       list would be sent verbatim, so a client can refuse to approve such a template.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{template_id}", get().to(get::process))
        .route("/{template_id}/check", get().to(check::process))
}
