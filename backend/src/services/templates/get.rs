//! # Template Retrieval Service
//!
//! Backend logic for `GET /api/templates/{template_id}`.
//!
//! `process` delegates to `get_template`, which looks the id up in the
//! template store. A missing template is a `404` with a plain-text body. This
//! module never looks at supporters or at the session; rendering happens in
//! `services::personalize`.

use crate::error::{PipelineError, Result};
use crate::store::{Database, TemplateStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use outreach_common::model::template::Template;

/// Actix web handler for the `GET /api/templates/{template_id}` endpoint.
///
/// # Returns
/// - `200 OK` with the `Template` as JSON on success.
/// - `404 Not Found` when no template has this id.
pub(crate) async fn process(template_id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match get_template(db.get_ref(), &template_id) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => e.error_response(),
    }
}

/// Fetches a template, turning absence into `TemplateNotFound`.
pub(crate) fn get_template(store: &dyn TemplateStore, template_id: &str) -> Result<Template> {
    store
        .get_template(template_id)?
        .ok_or_else(|| PipelineError::TemplateNotFound(template_id.to_string()))
}
