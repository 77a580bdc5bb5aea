use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a member agreed to be listed in the shared directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Granted,
    Pending,
    Declined,
}

impl ConsentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentStatus::Granted => "granted",
            ConsentStatus::Pending => "pending",
            ConsentStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(ConsentStatus::Granted),
            "pending" => Ok(ConsentStatus::Pending),
            "declined" => Ok(ConsentStatus::Declined),
            other => Err(format!("unknown consent status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryMember {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub company: String,
    pub title: String,
    pub industry: String,
    pub location: String,
    pub consent_status: ConsentStatus,
    /// Set while the status is `granted` or `declined`.
    pub consent_date: Option<NaiveDate>,
    pub last_updated: NaiveDate,
    pub consent_method: Option<String>,
    pub notes: String,
    pub skills: Vec<String>,
}

/// Fields supplied when adding someone to the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewDirectoryMember {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub company: String,
    pub title: String,
    pub industry: String,
    pub location: String,
    pub notes: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub granted: usize,
    pub pending: usize,
    pub declined: usize,
}
