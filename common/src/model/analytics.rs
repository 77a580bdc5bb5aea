use crate::model::supporter::Segment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentBucket {
    pub segment: Segment,
    pub count: usize,
}

/// Dashboard numbers derived from the supporter store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_supporters: usize,
    pub total_donations: u64,
    pub total_event_attendance: u64,
    pub total_petitions_signed: u64,
    /// One bucket per segment, in `Segment::ALL` order, zero counts included.
    pub segment_distribution: Vec<SegmentBucket>,
}
