use crate::error::PipelineError;
use crate::store::{CampaignStore, Database};
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub(crate) async fn process(db: web::Data<Database>) -> impl Responder {
    match db.list_campaigns() {
        Ok(campaigns) => HttpResponse::Ok().json(campaigns),
        Err(e) => e.error_response(),
    }
}

pub(crate) async fn one(id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    match db.get_campaign(&id) {
        Ok(Some(campaign)) => HttpResponse::Ok().json(campaign),
        Ok(None) => PipelineError::CampaignNotFound(id.into_inner()).error_response(),
        Err(e) => e.error_response(),
    }
}
