use crate::error::{PipelineError, Result};
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::Local;
use log::info;
use outreach_common::model::directory::{DirectoryMember, NewDirectoryMember};

pub(crate) async fn process(payload: web::Json<NewDirectoryMember>, db: web::Data<Database>) -> impl Responder {
    match create_member(db.get_ref(), payload.into_inner()) {
        Ok(member) => HttpResponse::Ok().json(member),
        Err(e) => e.error_response(),
    }
}

fn create_member(db: &Database, member: NewDirectoryMember) -> Result<DirectoryMember> {
    if member.name.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "Member name must not be empty".to_string(),
        ));
    }
    let member = db.add_member(member, Local::now().date_naive())?;
    info!("added directory member {} pending consent", member.id);
    Ok(member)
}
