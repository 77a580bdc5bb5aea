use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Email,
    Sms,
    Social,
    Petition,
    Donation,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    #[default]
    Draft,
    Approved,
    Archived,
}

impl TemplateType {
    pub const ALL: [TemplateType; 6] = [
        TemplateType::Email,
        TemplateType::Sms,
        TemplateType::Social,
        TemplateType::Petition,
        TemplateType::Donation,
        TemplateType::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Email => "email",
            TemplateType::Sms => "sms",
            TemplateType::Social => "social",
            TemplateType::Petition => "petition",
            TemplateType::Donation => "donation",
            TemplateType::Event => "event",
        }
    }
}

impl FromStr for TemplateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown template type '{}'", s))
    }
}

impl TemplateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateStatus::Draft => "draft",
            TemplateStatus::Approved => "approved",
            TemplateStatus::Archived => "archived",
        }
    }
}

impl FromStr for TemplateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TemplateStatus::Draft),
            "approved" => Ok(TemplateStatus::Approved),
            "archived" => Ok(TemplateStatus::Archived),
            other => Err(format!("unknown template status '{}'", other)),
        }
    }
}

/// An outreach message with `{{token}}` placeholders in its subject and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
    /// Placeholder tokens the template uses, in order of first appearance.
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub status: TemplateStatus,
}
