use crate::directory::apply_consent;
use crate::error::Result;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::{Local, NaiveDate};
use log::info;
use outreach_common::model::directory::DirectoryMember;
use outreach_common::requests::ConsentUpdateRequest;

pub(crate) async fn process(
    id: web::Path<i64>,
    payload: web::Json<ConsentUpdateRequest>,
    db: web::Data<Database>,
) -> impl Responder {
    let today = Local::now().date_naive();
    match update_consent(db.get_ref(), id.into_inner(), payload.into_inner(), today) {
        Ok(member) => HttpResponse::Ok().json(member),
        Err(e) => e.error_response(),
    }
}

fn update_consent(
    db: &Database,
    id: i64,
    request: ConsentUpdateRequest,
    today: NaiveDate,
) -> Result<DirectoryMember> {
    let mut member = db.get_member(id)?;
    let previous = member.consent_status;
    apply_consent(&mut member, request.status, request.notes, today);
    db.save_consent(&member)?;

    info!(
        "consent of directory member {} changed from {} to {}",
        id, previous, member.consent_status
    );
    Ok(member)
}
