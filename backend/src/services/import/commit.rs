use crate::error::{PipelineError, Result};
use crate::pipeline::normalizer::{self, IdSequence, RandomScorer, SegmentScorer};
use crate::session::SessionState;
use crate::store::{Database, SupporterStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::Utc;
use log::info;
use outreach_common::model::import::ImportSummary;
use outreach_common::model::raw_row::RawRow;
use outreach_common::requests::CommitImportRequest;

pub(crate) async fn process(
    payload: web::Json<CommitImportRequest>,
    session: web::Data<SessionState>,
    db: web::Data<Database>,
    ids: web::Data<IdSequence>,
) -> impl Responder {
    match commit_import(&payload.upload_id, &session, db.get_ref(), &ids).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}

/// Imports the preview of `upload_id`. On a store failure nothing is written
/// and the preview is kept so the import can be retried.
async fn commit_import(
    upload_id: &str,
    session: &SessionState,
    store: &dyn SupporterStore,
    ids: &IdSequence,
) -> Result<ImportSummary> {
    if session.is_parsing(upload_id).await {
        return Err(PipelineError::ImportInProgress(upload_id.to_string()));
    }
    let preview = session
        .take_preview(upload_id)
        .await
        .ok_or_else(|| PipelineError::UploadNotFound(upload_id.to_string()))?;

    let result = {
        let mut scorer = RandomScorer::thread_local();
        let batch = Utc::now().timestamp_millis();
        import_rows(store, &preview.rows, batch, ids, &mut scorer)
    };

    if result.is_err() {
        session.restore_preview(preview).await;
    }
    result
}

/// Normalizes `rows` and adds the accepted supporters to `store` in one step.
pub(crate) fn import_rows(
    store: &dyn SupporterStore,
    rows: &[RawRow],
    batch: i64,
    ids: &IdSequence,
    scorer: &mut dyn SegmentScorer,
) -> Result<ImportSummary> {
    let outcome = normalizer::normalize(rows, batch, ids, scorer);
    store.add_many(&outcome.supporters)?;

    info!(
        "imported {} supporters, rejected {} rows",
        outcome.accepted(),
        outcome.rejected
    );
    Ok(ImportSummary {
        accepted: outcome.accepted(),
        rejected: outcome.rejected,
        supporter_ids: outcome.supporters.into_iter().map(|s| s.id).collect(),
    })
}
