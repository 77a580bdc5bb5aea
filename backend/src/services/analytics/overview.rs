use crate::store::{Database, SupporterStore};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use outreach_common::model::analytics::{AnalyticsOverview, SegmentBucket};
use outreach_common::model::supporter::{Segment, Supporter};

pub(crate) async fn process(db: web::Data<Database>) -> impl Responder {
    match db.list() {
        Ok(supporters) => HttpResponse::Ok().json(overview(&supporters)),
        Err(e) => e.error_response(),
    }
}

pub(crate) fn overview(supporters: &[Supporter]) -> AnalyticsOverview {
    let sum = |field: fn(&Supporter) -> u32| -> u64 {
        supporters.iter().map(|s| u64::from(field(s))).sum()
    };

    AnalyticsOverview {
        total_supporters: supporters.len(),
        total_donations: sum(|s| s.total_donations),
        total_event_attendance: sum(|s| s.event_attendance),
        total_petitions_signed: sum(|s| s.petitions_signed),
        segment_distribution: Segment::ALL
            .into_iter()
            .map(|segment| SegmentBucket {
                segment,
                count: supporters.iter().filter(|s| s.segment == segment).count(),
            })
            .collect(),
    }
}
