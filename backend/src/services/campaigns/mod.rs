//! # Campaign Service Module
//!
//! Campaigns group the templates of one outreach effort and track its
//! progress (status, dates, amount raised, participants). The console also
//! remembers which campaign it is currently working on.
//!
//! ## Sub-modules:
//! - `list`: Returns every campaign, or one by id.
//! - `save`: Creates a campaign or applies a partial update to one.
//! - `remove`: Deletes a campaign.
//! - `active`: Reads and sets the active campaign of the session.

mod active;
mod list;
mod remove;
mod save;

use actix_web::web::{delete, get, patch, post, put, scope};
use actix_web::Scope;

/// The base path for all campaign-related API endpoints.
const API_PATH: &str = "/api/campaigns";

/// Configures and returns the Actix `Scope` for all campaign routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: all campaigns, oldest first.
///
/// *   **`POST /`**:
///     - **Handler**: `save::create`
///     - **Description**: Body is a `NewCampaign`. The server assigns the id and
///       `createdAt`. Every listed template id must name a stored template.
///
/// *   **`GET /active`**, **`PUT /active`**: the session's active campaign (`null`
///     when none). `PUT` takes `{"campaign_id": ...}`.
///
/// *   **`GET /{id}`**, **`PATCH /{id}`**, **`DELETE /{id}`**: read, partially
///     update, or delete one campaign; `404` when unknown.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::create))
        .route("/active", get().to(active::get_active))
        .route("/active", put().to(active::set_active))
        .route("/{id}", get().to(list::one))
        .route("/{id}", patch().to(save::update))
        .route("/{id}", delete().to(remove::process))
}
