//! Error taxonomy of the import and outreach pipeline.
//!
//! Every variant is a condition the console surfaces to the user; none of them
//! is fatal to the process. Handlers turn them into HTTP responses through the
//! `ResponseError` impl below.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The uploaded file could not be read as a table.
    #[error("Unparseable input: {0}")]
    Unparseable(String),

    /// The upload parsed but held no data rows.
    #[error("No data rows found in upload")]
    NoData,

    /// A parse of the same upload has not finished yet.
    #[error("Upload {0} is already being parsed")]
    ImportInProgress(String),

    #[error("No parsed upload with id {0}")]
    UploadNotFound(String),

    /// Personalization was requested with nobody selected.
    #[error("No supporters selected for personalization")]
    EmptySelection,

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Supporter not found: {0}")]
    SupporterNotFound(String),

    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    #[error("Directory member not found: {0}")]
    MemberNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ResponseError for PipelineError {
    fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::Unparseable(_) | PipelineError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            PipelineError::NoData | PipelineError::EmptySelection => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PipelineError::ImportInProgress(_) => StatusCode::CONFLICT,
            PipelineError::UploadNotFound(_)
            | PipelineError::TemplateNotFound(_)
            | PipelineError::SupporterNotFound(_)
            | PipelineError::CampaignNotFound(_)
            | PipelineError::MemberNotFound(_) => StatusCode::NOT_FOUND,
            PipelineError::Database(_)
            | PipelineError::Io(_)
            | PipelineError::Json(_)
            | PipelineError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(format!("Error: {}", self))
    }
}
