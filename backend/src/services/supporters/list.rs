use crate::error::PipelineError;
use crate::store::{Database, SupporterStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub(crate) async fn process(db: web::Data<Database>) -> impl Responder {
    match db.list() {
        Ok(supporters) => HttpResponse::Ok().json(supporters),
        Err(e) => e.error_response(),
    }
}

pub(crate) async fn one(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match db.get(&id) {
        Ok(Some(supporter)) => HttpResponse::Ok().json(supporter),
        Ok(None) => PipelineError::SupporterNotFound(id.into_inner()).error_response(),
        Err(e) => e.error_response(),
    }
}
