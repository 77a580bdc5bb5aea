use crate::model::directory::ConsentStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
/// Request payload for committing a parsed upload to the supporter store.
pub struct CommitImportRequest {
    pub upload_id: String,
}

#[derive(Debug, Deserialize)]
/// Replaces the selection with exactly these ids.
pub struct SelectAllRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizeRequest {
    pub template_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ConsentUpdateRequest {
    pub status: ConsentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// Query string of the directory listing. `status=all` disables the status filter.
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
/// Chooses the campaign the console works on; `null` clears it.
pub struct ActiveCampaignRequest {
    pub campaign_id: Option<String>,
}
