use crate::error::{PipelineError, Result};
use crate::session::SessionState;
use crate::store::{CampaignStore, Database};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::info;
use outreach_common::model::campaign::Campaign;
use outreach_common::requests::ActiveCampaignRequest;

pub(crate) async fn get_active(
    db: web::Data<Database>,
    session: web::Data<SessionState>,
) -> impl Responder {
    match active_campaign(db.get_ref(), &session).await {
        Ok(campaign) => HttpResponse::Ok().json(campaign),
        Err(e) => e.error_response(),
    }
}

pub(crate) async fn set_active(
    payload: web::Json<ActiveCampaignRequest>,
    db: web::Data<Database>,
    session: web::Data<SessionState>,
) -> impl Responder {
    match activate(db.get_ref(), &session, payload.into_inner().campaign_id).await {
        Ok(campaign) => HttpResponse::Ok().json(campaign),
        Err(e) => e.error_response(),
    }
}

/// The active campaign, or `None` when none is set or it no longer exists.
async fn active_campaign(store: &dyn CampaignStore, session: &SessionState) -> Result<Option<Campaign>> {
    match session.active_campaign().await {
        Some(id) => store.get_campaign(&id),
        None => Ok(None),
    }
}

async fn activate(
    store: &dyn CampaignStore,
    session: &SessionState,
    campaign_id: Option<String>,
) -> Result<Option<Campaign>> {
    let campaign = match campaign_id {
        Some(id) => Some(
            store
                .get_campaign(&id)?
                .ok_or(PipelineError::CampaignNotFound(id))?,
        ),
        None => None,
    };

    let active_id = campaign.as_ref().map(|c| c.id.clone());
    info!("active campaign: {}", active_id.as_deref().unwrap_or("none"));
    session.set_active_campaign(active_id).await;
    Ok(campaign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{campaign, temp_database};

    #[actix_web::test]
    async fn activating_an_unknown_campaign_keeps_the_current_one() {
        let (_dir, db) = temp_database();
        db.insert_campaign(&campaign("spring", "Spring drive")).unwrap();
        let session = SessionState::default();

        activate(&db, &session, Some("spring".to_string())).await.unwrap();
        let err = activate(&db, &session, Some("ghost".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::CampaignNotFound(id) if id == "ghost"));
        assert_eq!(session.active_campaign().await.as_deref(), Some("spring"));
    }

    #[actix_web::test]
    async fn clearing_leaves_no_active_campaign() {
        let (_dir, db) = temp_database();
        db.insert_campaign(&campaign("spring", "Spring drive")).unwrap();
        let session = SessionState::default();

        activate(&db, &session, Some("spring".to_string())).await.unwrap();
        assert_eq!(
            active_campaign(&db, &session).await.unwrap().map(|c| c.id),
            Some("spring".to_string())
        );

        assert_eq!(activate(&db, &session, None).await.unwrap(), None);
        assert_eq!(active_campaign(&db, &session).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn a_deleted_active_campaign_reads_as_none() {
        let (_dir, db) = temp_database();
        db.insert_campaign(&campaign("spring", "Spring drive")).unwrap();
        let session = SessionState::default();
        activate(&db, &session, Some("spring".to_string())).await.unwrap();

        db.remove_campaign("spring").unwrap();
        assert_eq!(active_campaign(&db, &session).await.unwrap(), None);
    }
}
