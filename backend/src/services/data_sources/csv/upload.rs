// Rust
use crate::config::Settings;
use crate::error::{PipelineError, Result};
use crate::job_controller::state::{JobUpdate, JobsState};
use crate::pipeline::extractor;
use crate::services::data_sources::csv::parse::parse_rows;
use crate::session::{ImportPreview, SessionState};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use futures_util::StreamExt;
use log::{info, warn};
use md5::Context;
use outreach_common::jobs::JobStatus;
use outreach_common::model::import::{UploadAccepted, UploadSummary};

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the job id and the upload id.
/// - On failure: the status of the `PipelineError` with its message.
pub(crate) async fn process(
    payload: Multipart,
    jobs_state: web::Data<JobsState>,
    session: web::Data<SessionState>,
    settings: web::Data<Settings>,
) -> impl Responder {
    match upload_data_source(payload, jobs_state, session, settings.upload_limit_bytes).await {
        Ok(accepted) => HttpResponse::Ok().json(accepted),
        Err(e) => e.error_response(),
    }
}

/// Reads the `file` field of the multipart body and starts a parse job for it.
///
/// Other fields are skipped. A file larger than `limit` bytes is refused
/// before it is fully read.
async fn upload_data_source(
    mut payload: Multipart,
    jobs_state: web::Data<JobsState>,
    session: web::Data<SessionState>,
    limit: usize,
) -> Result<UploadAccepted> {
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| PipelineError::InvalidInput(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if !filename.to_lowercase().ends_with(".csv") {
            return Err(PipelineError::InvalidInput(
                "The file must end with .csv".to_string(),
            ));
        }

        let mut buf = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| PipelineError::InvalidInput(e.to_string()))?;
            if buf.len() + chunk.len() > limit {
                return Err(PipelineError::InvalidInput(format!(
                    "The file exceeds the upload limit of {} bytes",
                    limit
                )));
            }
            buf.extend_from_slice(&chunk);
        }
        bytes = Some(buf);
    }

    let bytes = bytes.ok_or_else(|| PipelineError::InvalidInput("Missing file".to_string()))?;
    schedule_parse_job(&jobs_state, &session, bytes).await
}

/// The upload id is the MD5 of the bytes, so re-sending a file maps to the same upload.
pub(crate) fn upload_id(bytes: &[u8]) -> String {
    let mut hasher = Context::new();
    hasher.consume(bytes);
    format!("{:x}", hasher.finalize())
}

/// Parses and extracts an upload. Runs on the blocking pool.
pub(crate) fn parse_and_extract(upload_id: String, bytes: &[u8]) -> Result<ImportPreview> {
    let rows = parse_rows(bytes)?;
    let (accepted, rejected): (Vec<_>, Vec<_>) = extractor::extract_all(&rows)
        .into_iter()
        .partition(|person| person.has_full_name());

    Ok(ImportPreview {
        upload_id,
        rows,
        accepted,
        rejected: rejected.len(),
    })
}

/// Registers a parse job and runs it in the background.
///
/// Refuses to start while a parse of the same bytes is still running. The
/// preview is stored in the session before the job reports `Completed`.
pub(crate) async fn schedule_parse_job(
    jobs_state: &JobsState,
    session: &SessionState,
    bytes: Vec<u8>,
) -> Result<UploadAccepted> {
    let upload_id = upload_id(&bytes);
    session.begin_parse(&upload_id).await?;

    let job_id = jobs_state.register().await;
    let tx = jobs_state.tx.clone();
    let session = session.clone();
    let accepted = UploadAccepted {
        job_id: job_id.clone(),
        upload_id: upload_id.clone(),
    };

    tokio::spawn(async move {
        let _ = tx
            .send(JobUpdate {
                job_id: job_id.clone(),
                status: JobStatus::InProgress(0),
            })
            .await;

        let upload_for_blocking = upload_id.clone();
        let handle =
            tokio::task::spawn_blocking(move || parse_and_extract(upload_for_blocking, &bytes));

        let status = match handle.await {
            Ok(Ok(preview)) => {
                let summary = UploadSummary {
                    upload_id: upload_id.clone(),
                    extracted: preview.accepted.len(),
                    rejected: preview.rejected,
                    preview: preview.accepted.clone(),
                };
                info!(
                    "parsed upload {}: {} extracted, {} rejected",
                    upload_id, summary.extracted, summary.rejected
                );
                session.store_preview(preview).await;
                match serde_json::to_string(&summary) {
                    Ok(json) => JobStatus::Completed(json),
                    Err(e) => JobStatus::Failed(e.to_string()),
                }
            }
            Ok(Err(e)) => {
                warn!("parse of upload {} failed: {}", upload_id, e);
                JobStatus::Failed(e.to_string())
            }
            Err(join_err) => JobStatus::Failed(format!("join error: {}", join_err)),
        };

        session.end_parse(&upload_id).await;
        let _ = tx.send(JobUpdate { job_id, status }).await;
    });

    Ok(accepted)
}
