use crate::session::SessionState;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(session: web::Data<SessionState>) -> impl Responder {
    let messages = session.messages.read().await;
    HttpResponse::Ok().json(&*messages)
}
