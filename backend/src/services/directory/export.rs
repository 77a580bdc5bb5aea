use crate::error::Result;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::info;
use outreach_common::model::directory::{ConsentStatus, DirectoryMember};

const EXPORT_HEADER: [&str; 8] = [
    "name",
    "email",
    "linkedin",
    "company",
    "title",
    "industry",
    "location",
    "consent_date",
];

pub(crate) async fn process(db: web::Data<Database>) -> impl Responder {
    match db.list_members().and_then(|members| export_csv(&members)) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"directory.csv\""))
            .body(body),
        Err(e) => e.error_response(),
    }
}

/// Writes the members with granted consent; everyone else is left out.
pub(crate) fn export_csv(members: &[DirectoryMember]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;

    let mut exported = 0;
    for m in members
        .iter()
        .filter(|m| m.consent_status == ConsentStatus::Granted)
    {
        let consent_date = m.consent_date.map(|d| d.to_string()).unwrap_or_default();
        writer
            .write_record([
                m.name.as_str(),
                m.email.as_str(),
                m.linkedin.as_str(),
                m.company.as_str(),
                m.title.as_str(),
                m.industry.as_str(),
                m.location.as_str(),
                consent_date.as_str(),
            ])?;
        exported += 1;
    }

    info!("exported {} of {} directory members", exported, members.len());
    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}
