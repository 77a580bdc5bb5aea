use crate::session::SessionState;
use crate::store::{CampaignStore, Database};
use actix_web::{web, HttpResponse, Responder, ResponseError};

/// Deletes the campaign and, when it was the active one, leaves the session without one.
pub(crate) async fn process(
    id: web::Path<String>,
    db: web::Data<Database>,
    session: web::Data<SessionState>,
) -> impl Responder {
    match db.remove_campaign(&id) {
        Ok(()) => {
            session.forget_campaign(&id).await;
            HttpResponse::NoContent().finish()
        }
        Err(e) => e.error_response(),
    }
}
