use crate::error::{PipelineError, Result};
use crate::store::{CampaignStore, Database, TemplateStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::{DateTime, Utc};
use log::info;
use outreach_common::model::campaign::{Campaign, CampaignPatch, NewCampaign};

pub(crate) async fn create(payload: web::Json<NewCampaign>, db: web::Data<Database>) -> impl Responder {
    match create_campaign(db.get_ref(), db.get_ref(), payload.into_inner(), Utc::now()) {
        Ok(campaign) => HttpResponse::Ok().json(campaign),
        Err(e) => e.error_response(),
    }
}

pub(crate) async fn update(
    id: web::Path<String>,
    patch: web::Json<CampaignPatch>,
    db: web::Data<Database>,
) -> impl Responder {
    match update_campaign(db.get_ref(), db.get_ref(), &id, patch.into_inner()) {
        Ok(campaign) => HttpResponse::Ok().json(campaign),
        Err(e) => e.error_response(),
    }
}

pub(crate) fn create_campaign(
    campaigns: &dyn CampaignStore,
    templates: &dyn TemplateStore,
    new: NewCampaign,
    now: DateTime<Utc>,
) -> Result<Campaign> {
    let campaign = Campaign::from_new(uuid::Uuid::new_v4().to_string(), new, now);
    validate(&campaign, templates)?;
    campaigns.insert_campaign(&campaign)?;
    Ok(campaign)
}

/// Applies `patch` only if the patched campaign is still valid.
pub(crate) fn update_campaign(
    campaigns: &dyn CampaignStore,
    templates: &dyn TemplateStore,
    id: &str,
    patch: CampaignPatch,
) -> Result<Campaign> {
    let mut preview = campaigns
        .get_campaign(id)?
        .ok_or_else(|| PipelineError::CampaignNotFound(id.to_string()))?;
    preview.apply(patch.clone());
    validate(&preview, templates)?;

    let updated = campaigns.update_campaign(id, patch)?;
    info!("updated campaign {} (status {})", updated.id, updated.status);
    Ok(updated)
}

fn validate(campaign: &Campaign, templates: &dyn TemplateStore) -> Result<()> {
    if campaign.name.trim().is_empty() {
        return Err(PipelineError::InvalidInput(
            "Campaign name must not be empty".to_string(),
        ));
    }
    if let Some(end) = campaign.end_date {
        if end < campaign.start_date {
            return Err(PipelineError::InvalidInput(format!(
                "Campaign ends on {} before it starts on {}",
                end, campaign.start_date
            )));
        }
    }
    for template_id in &campaign.template_ids {
        if templates.get_template(template_id)?.is_none() {
            return Err(PipelineError::TemplateNotFound(template_id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::temp_database;
    use chrono::{NaiveDate, TimeZone};
    use outreach_common::model::campaign::CampaignStatus;
    use outreach_common::model::template::{Template, TemplateStatus, TemplateType};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn new_campaign(name: &str, template_ids: &[&str]) -> NewCampaign {
        NewCampaign {
            name: name.to_string(),
            description: String::new(),
            status: CampaignStatus::Draft,
            start_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            end_date: None,
            target_amount: None,
            current_amount: None,
            participant_count: 0,
            template_ids: template_ids.iter().map(|t| t.to_string()).collect(),
            campaign_type: None,
        }
    }

    fn store_template(db: &Database, id: &str) {
        db.save_template(&Template {
            id: id.to_string(),
            name: id.to_string(),
            template_type: TemplateType::Email,
            subject: None,
            content: "Hi {{first_name}}".to_string(),
            variables: Vec::new(),
            status: TemplateStatus::Approved,
        })
        .unwrap();
    }

    #[test]
    fn created_campaigns_get_distinct_ids() {
        let (_dir, db) = temp_database();
        store_template(&db, "welcome");
        let now = fixed_now();

        let a = create_campaign(&db, &db, new_campaign("Spring", &["welcome"]), now).unwrap();
        let b = create_campaign(&db, &db, new_campaign("Autumn", &[]), now).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, now);
        assert_eq!(db.list_campaigns().unwrap(), vec![a, b]);
    }

    #[test]
    fn unknown_template_is_refused() {
        let (_dir, db) = temp_database();
        let err = create_campaign(&db, &db, new_campaign("Spring", &["ghost"]), fixed_now())
            .unwrap_err();
        assert!(matches!(err, PipelineError::TemplateNotFound(id) if id == "ghost"));
        assert!(db.list_campaigns().unwrap().is_empty());
    }

    #[test]
    fn blank_name_is_refused() {
        let (_dir, db) = temp_database();
        let err = create_campaign(&db, &db, new_campaign("  ", &[]), fixed_now()).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn update_ending_before_the_start_changes_nothing() {
        let (_dir, db) = temp_database();
        let created = create_campaign(&db, &db, new_campaign("Spring", &[]), fixed_now()).unwrap();

        let patch = CampaignPatch {
            status: Some(CampaignStatus::Active),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            ..CampaignPatch::default()
        };
        let err = update_campaign(&db, &db, &created.id, patch).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
        assert_eq!(db.get_campaign(&created.id).unwrap(), Some(created));
    }

    #[test]
    fn valid_update_is_stored() {
        let (_dir, db) = temp_database();
        let created = create_campaign(&db, &db, new_campaign("Spring", &[]), fixed_now()).unwrap();

        let patch = CampaignPatch {
            status: Some(CampaignStatus::Paused),
            participant_count: Some(42),
            ..CampaignPatch::default()
        };
        let updated = update_campaign(&db, &db, &created.id, patch).unwrap();
        assert_eq!(updated.status, CampaignStatus::Paused);
        assert_eq!(updated.participant_count, 42);
        assert_eq!(db.get_campaign(&created.id).unwrap(), Some(updated));
    }
}
