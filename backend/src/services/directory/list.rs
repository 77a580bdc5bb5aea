use crate::directory;
use crate::error::{PipelineError, Result};
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use outreach_common::model::directory::DirectoryMember;
use outreach_common::requests::DirectoryQuery;

pub(crate) async fn process(query: web::Query<DirectoryQuery>, db: web::Data<Database>) -> impl Responder {
    match list_members(db.get_ref(), &query) {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(e) => e.error_response(),
    }
}

pub(crate) async fn stats(db: web::Data<Database>) -> impl Responder {
    match db.list_members() {
        Ok(members) => HttpResponse::Ok().json(directory::stats(&members)),
        Err(e) => e.error_response(),
    }
}

fn list_members(db: &Database, query: &DirectoryQuery) -> Result<Vec<DirectoryMember>> {
    let status =
        directory::parse_status_filter(query.status.as_deref()).map_err(PipelineError::InvalidInput)?;
    let search = query.search.as_deref().unwrap_or_default();

    Ok(db
        .list_members()?
        .into_iter()
        .filter(|member| directory::matches(member, search, status))
        .collect())
}
