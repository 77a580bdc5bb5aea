//! Consent rules of the member directory.
//!
//! A member is listed only while their consent is `granted`. Any status may
//! move to any other; a decided status (`granted` or `declined`) carries the
//! date and method of the decision, `pending` carries neither.

use chrono::NaiveDate;
use outreach_common::model::directory::{ConsentStatus, DirectoryMember, DirectoryStats};

pub const MANUAL_CONSENT_METHOD: &str = "Manual update";

/// Moves `member` to `status`, stamping the dates. Notes are replaced only when given.
pub fn apply_consent(
    member: &mut DirectoryMember,
    status: ConsentStatus,
    notes: Option<String>,
    today: NaiveDate,
) {
    member.consent_status = status;
    match status {
        ConsentStatus::Pending => {
            member.consent_date = None;
            member.consent_method = None;
        }
        ConsentStatus::Granted | ConsentStatus::Declined => {
            member.consent_date = Some(today);
            member.consent_method = Some(MANUAL_CONSENT_METHOD.to_string());
        }
    }
    member.last_updated = today;
    if let Some(notes) = notes {
        member.notes = notes;
    }
}

/// Parses the `status` query value. `all`, blank, or absent means no filter.
pub fn parse_status_filter(value: Option<&str>) -> Result<Option<ConsentStatus>, String> {
    match value.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(other) => other.parse::<ConsentStatus>().map(Some),
    }
}

/// Case-insensitive search over name, company, and industry, plus the status filter.
pub fn matches(member: &DirectoryMember, search: &str, status: Option<ConsentStatus>) -> bool {
    let needle = search.trim().to_lowercase();
    let matches_search = needle.is_empty()
        || [&member.name, &member.company, &member.industry]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
    let matches_status = status.map_or(true, |s| member.consent_status == s);
    matches_search && matches_status
}

pub fn stats(members: &[DirectoryMember]) -> DirectoryStats {
    let count = |status: ConsentStatus| {
        members
            .iter()
            .filter(|m| m.consent_status == status)
            .count()
    };
    DirectoryStats {
        total: members.len(),
        granted: count(ConsentStatus::Granted),
        pending: count(ConsentStatus::Pending),
        declined: count(ConsentStatus::Declined),
    }
}
