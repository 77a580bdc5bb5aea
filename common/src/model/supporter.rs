use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Coarse classification bucket used to group supporters for targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Segment {
    MajorDonor,
    ActiveVolunteer,
    Lapsed,
    New,
    Engaged,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::MajorDonor,
        Segment::ActiveVolunteer,
        Segment::Lapsed,
        Segment::New,
        Segment::Engaged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::MajorDonor => "major-donor",
            Segment::ActiveVolunteer => "active-volunteer",
            Segment::Lapsed => "lapsed",
            Segment::New => "new",
            Segment::Engaged => "engaged",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .into_iter()
            .find(|segment| segment.as_str() == s)
            .ok_or_else(|| format!("unknown segment '{}'", s))
    }
}

/// The handful of fields the import extractor pulls out of a loosely named row.
///
/// Every field is trimmed and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPerson {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub education: String,
    pub experience: String,
    pub company: String,
}

impl ExtractedPerson {
    /// Rows are only worth importing when both halves of the name are present.
    pub fn has_full_name(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }
}

/// A supporter as held by the supporter store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supporter {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub organization: String,
    pub urls: Vec<String>,
    /// Always within `0..=99`.
    pub segment_score: u8,
    pub segment: Segment,
    pub tags: BTreeSet<String>,
    pub total_donations: u32,
    pub event_attendance: u32,
    pub petitions_signed: u32,
    pub education: String,
    pub experience: String,
}

impl Supporter {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrites every field the patch carries. The id never changes.
    pub fn apply(&mut self, patch: SupporterPatch) {
        let SupporterPatch {
            first_name,
            last_name,
            email,
            phone,
            location,
            organization,
            urls,
            segment_score,
            segment,
            tags,
            total_donations,
            event_attendance,
            petitions_signed,
            education,
            experience,
        } = patch;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = organization {
            self.organization = v;
        }
        if let Some(v) = urls {
            self.urls = v;
        }
        if let Some(v) = segment_score {
            self.segment_score = v.min(99);
        }
        if let Some(v) = segment {
            self.segment = v;
        }
        if let Some(v) = tags {
            self.tags = v;
        }
        if let Some(v) = total_donations {
            self.total_donations = v;
        }
        if let Some(v) = event_attendance {
            self.event_attendance = v;
        }
        if let Some(v) = petitions_signed {
            self.petitions_signed = v;
        }
        if let Some(v) = education {
            self.education = v;
        }
        if let Some(v) = experience {
            self.experience = v;
        }
    }
}

/// Partial update for a stored supporter; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupporterPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub organization: Option<String>,
    pub urls: Option<Vec<String>>,
    pub segment_score: Option<u8>,
    pub segment: Option<Segment>,
    pub tags: Option<BTreeSet<String>>,
    pub total_donations: Option<u32>,
    pub event_attendance: Option<u32>,
    pub petitions_signed: Option<u32>,
    pub education: Option<String>,
    pub experience: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supporter() -> Supporter {
        Supporter {
            id: "s-1".to_string(),
            first_name: "Kay".to_string(),
            last_name: "Lee".to_string(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            organization: String::new(),
            urls: Vec::new(),
            segment_score: 10,
            segment: Segment::New,
            tags: BTreeSet::new(),
            total_donations: 0,
            event_attendance: 0,
            petitions_signed: 0,
            education: String::new(),
            experience: String::new(),
        }
    }

    #[test]
    fn segment_names_round_trip_through_from_str() {
        for segment in Segment::ALL {
            assert_eq!(segment.as_str().parse::<Segment>(), Ok(segment));
        }
        assert!("donor".parse::<Segment>().is_err());
    }

    #[test]
    fn segment_serializes_kebab_case() {
        let json = serde_json::to_string(&Segment::ActiveVolunteer).unwrap();
        assert_eq!(json, "\"active-volunteer\"");
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut s = supporter();
        s.apply(SupporterPatch {
            email: Some("kay@example.org".to_string()),
            segment_score: Some(250),
            ..Default::default()
        });

        assert_eq!(s.email, "kay@example.org");
        assert_eq!(s.segment_score, 99);
        assert_eq!(s.first_name, "Kay");
        assert_eq!(s.id, "s-1");
    }

    #[test]
    fn full_name_joins_with_single_space() {
        assert_eq!(supporter().full_name(), "Kay Lee");
    }
}
