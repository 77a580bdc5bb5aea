use crate::session::SessionState;
use actix_web::{web, HttpResponse, Responder};
use outreach_common::requests::SelectAllRequest;

pub(crate) async fn toggle(id: web::Path<String>, session: web::Data<SessionState>) -> impl Responder {
    let mut selection = session.selection.write().await;
    selection.toggle(&id);
    HttpResponse::Ok().json(selection.snapshot())
}

pub(crate) async fn select_all(
    payload: web::Json<SelectAllRequest>,
    session: web::Data<SessionState>,
) -> impl Responder {
    let mut selection = session.selection.write().await;
    selection.select_all(payload.into_inner().ids);
    HttpResponse::Ok().json(selection.snapshot())
}

pub(crate) async fn clear(session: web::Data<SessionState>) -> impl Responder {
    let mut selection = session.selection.write().await;
    selection.clear();
    HttpResponse::Ok().json(selection.snapshot())
}
