use crate::store::{Database, SupporterStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub(crate) async fn process(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match db.remove(&id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}
