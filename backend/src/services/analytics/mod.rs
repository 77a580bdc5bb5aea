//! Dashboard numbers.
//!
//! - `GET /api/analytics/overview`: totals over the supporter store and the
//!   distribution of supporters across all five segments.

mod overview;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/analytics";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/overview", get().to(overview::process))
}
