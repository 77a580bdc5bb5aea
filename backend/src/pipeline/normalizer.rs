//! Turns raw rows into supporters ready for the store.
//!
//! A row survives only when its extracted person has both a first and a last
//! name. Survivors get a fresh id, a score and segment from the injected
//! [`SegmentScorer`], and zeroed counters. The whole batch is computed before
//! anything is written, so a caller can commit it in one step.

use crate::pipeline::extractor;
use log::debug;
use outreach_common::model::raw_row::RawRow;
use outreach_common::model::supporter::{ExtractedPerson, Segment, Supporter};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Segments a freshly imported supporter may start in. Nobody enters as a
/// major donor or active volunteer through an import.
pub const IMPORT_SEGMENTS: [Segment; 3] = [Segment::New, Segment::Engaged, Segment::Lapsed];

/// Tag added when the row carried any education information.
pub const EDUCATION_TAG: &str = "education";

pub const MAX_SEGMENT_SCORE: u8 = 99;

/// Assigns the initial score and segment of an imported supporter.
pub trait SegmentScorer {
    /// Returns a score in `0..=99` and one of [`IMPORT_SEGMENTS`].
    fn assign(&mut self, person: &ExtractedPerson) -> (u8, Segment);
}

/// Placeholder scoring: uniform random score and segment.
pub struct RandomScorer<R> {
    rng: R,
}

impl<R: Rng> RandomScorer<R> {
    pub fn new(rng: R) -> Self {
        RandomScorer { rng }
    }
}

impl RandomScorer<ThreadRng> {
    pub fn thread_local() -> Self {
        RandomScorer::new(rand::thread_rng())
    }
}

impl<R: Rng> SegmentScorer for RandomScorer<R> {
    fn assign(&mut self, _person: &ExtractedPerson) -> (u8, Segment) {
        let score = self.rng.gen_range(0..=MAX_SEGMENT_SCORE);
        let segment = IMPORT_SEGMENTS[self.rng.gen_range(0..IMPORT_SEGMENTS.len())];
        (score, segment)
    }
}

/// Process-wide supporter id source.
///
/// Ids have the form `imported_{batch}_{n}`, where `batch` is the import's
/// millisecond timestamp and `n` never repeats within the process.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub const fn new() -> Self {
        IdSequence {
            next: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self, batch: i64) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("imported_{}_{}", batch, n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub supporters: Vec<Supporter>,
    pub rejected: usize,
}

impl ImportOutcome {
    pub fn accepted(&self) -> usize {
        self.supporters.len()
    }
}

/// Builds the supporter entity for an accepted person.
pub fn build_supporter(id: String, person: ExtractedPerson, score: u8, segment: Segment) -> Supporter {
    let mut tags = BTreeSet::new();
    if !person.education.is_empty() {
        tags.insert(EDUCATION_TAG.to_string());
    }

    Supporter {
        id,
        first_name: person.first_name,
        last_name: person.last_name,
        email: person.email,
        phone: String::new(),
        location: String::new(),
        organization: person.company,
        urls: Vec::new(),
        segment_score: score.min(MAX_SEGMENT_SCORE),
        segment,
        tags,
        total_donations: 0,
        event_attendance: 0,
        petitions_signed: 0,
        education: person.education,
        experience: person.experience,
    }
}

/// Extracts, filters, and converts a batch of rows.
pub fn normalize(
    rows: &[RawRow],
    batch: i64,
    ids: &IdSequence,
    scorer: &mut dyn SegmentScorer,
) -> ImportOutcome {
    let mut supporters = Vec::with_capacity(rows.len());
    let mut rejected = 0;

    for (index, person) in extractor::extract_all(rows).into_iter().enumerate() {
        if !person.has_full_name() {
            debug!("dropping row {}: missing first or last name", index + 1);
            rejected += 1;
            continue;
        }
        let (score, segment) = scorer.assign(&person);
        supporters.push(build_supporter(ids.next_id(batch), person, score, segment));
    }

    ImportOutcome {
        supporters,
        rejected,
    }
}
