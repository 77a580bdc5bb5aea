use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [
        CampaignStatus::Draft,
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown campaign status '{}'", s))
    }
}

/// A fundraising or mobilisation effort grouping the templates it sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: CampaignStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub target_amount: Option<u64>,
    pub current_amount: Option<u64>,
    pub participant_count: u32,
    /// Ids of stored templates, in the order the campaign uses them.
    pub template_ids: Vec<String>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Builds a stored campaign from a creation request; the server picks id and timestamp.
    pub fn from_new(id: String, new: NewCampaign, created_at: DateTime<Utc>) -> Self {
        Campaign {
            id,
            name: new.name,
            description: new.description,
            status: new.status,
            start_date: new.start_date,
            end_date: new.end_date,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            participant_count: new.participant_count,
            template_ids: new.template_ids,
            campaign_type: new.campaign_type,
            created_at,
        }
    }

    /// Overwrites every field the patch carries. Id and creation time never change.
    pub fn apply(&mut self, patch: CampaignPatch) {
        let CampaignPatch {
            name,
            description,
            status,
            start_date,
            end_date,
            target_amount,
            current_amount,
            participant_count,
            template_ids,
            campaign_type,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = start_date {
            self.start_date = v;
        }
        if let Some(v) = end_date {
            self.end_date = Some(v);
        }
        if let Some(v) = target_amount {
            self.target_amount = Some(v);
        }
        if let Some(v) = current_amount {
            self.current_amount = Some(v);
        }
        if let Some(v) = participant_count {
            self.participant_count = v;
        }
        if let Some(v) = template_ids {
            self.template_ids = v;
        }
        if let Some(v) = campaign_type {
            self.campaign_type = Some(v);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: CampaignStatus,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_amount: Option<u64>,
    #[serde(default)]
    pub current_amount: Option<u64>,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub template_ids: Vec<String>,
    #[serde(rename = "type", default)]
    pub campaign_type: Option<String>,
}

/// Partial update for a stored campaign; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<CampaignStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub target_amount: Option<u64>,
    pub current_amount: Option<u64>,
    pub participant_count: Option<u32>,
    pub template_ids: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
}
