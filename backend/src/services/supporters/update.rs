use crate::store::{Database, SupporterStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use outreach_common::model::supporter::SupporterPatch;

pub(crate) async fn process(
    id: web::Path<String>,
    patch: web::Json<SupporterPatch>,
    db: web::Data<Database>,
) -> impl Responder {
    match db.update(&id, patch.into_inner()) {
        Ok(supporter) => HttpResponse::Ok().json(supporter),
        Err(e) => e.error_response(),
    }
}
