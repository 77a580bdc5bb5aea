use crate::store::{Database, TemplateStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub(crate) async fn process(db: web::Data<Database>) -> impl Responder {
    match db.list_templates() {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => e.error_response(),
    }
}
