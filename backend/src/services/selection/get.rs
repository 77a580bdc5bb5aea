use crate::session::SessionState;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(session: web::Data<SessionState>) -> impl Responder {
    let selection = session.selection.read().await;
    HttpResponse::Ok().json(selection.snapshot())
}
