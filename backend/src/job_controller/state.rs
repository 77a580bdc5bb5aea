//! Tracks background jobs that outlive the request which started them.
//!
//! Today the only such job is the parse of an uploaded supporter sheet
//! (`services::data_sources::csv::upload`). The client gets a job id back at
//! once and polls `/api/data_sources/csv/status/{job_id}` until the job is
//! `Completed` or `Failed`.
//!
//! The main components are:
//! - `JobsState`: clonable shared state holding the status of every job.
//! - `JobUpdate`: a status change sent by a worker.
//! - `start_job_updater`: the task that applies `JobUpdate`s to `JobsState`.

use outreach_common::jobs::JobStatus;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{mpsc, RwLock};

/// Shared status map of all jobs plus the sender workers report through.
#[derive(Clone)]
pub struct JobsState {
    /// Job id to its latest status.
    ///
    /// Read by the status endpoint; written by `register` and by the updater task.
    pub jobs: Arc<RwLock<HashMap<String, JobStatus>>>,

    /// Workers push `JobUpdate`s here instead of locking `jobs` themselves.
    pub tx: mpsc::Sender<JobUpdate>,
}

#[derive(Debug)]
pub struct JobUpdate {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
}

impl JobsState {
    /// Creates the state and the receiver to hand to `start_job_updater`.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<JobUpdate>) {
        let (tx, rx) = mpsc::channel(capacity);
        let state = JobsState {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            tx,
        };
        (state, rx)
    }

    /// Registers a new job as `Pending` and returns its id.
    pub async fn register(&self) -> String {
        let job_id = uuid::Uuid::new_v4().to_string();
        self.jobs
            .write()
            .await
            .insert(job_id.clone(), JobStatus::Pending);
        job_id
    }

    pub async fn status(&self, job_id: &str) -> Option<JobStatus> {
        self.jobs.read().await.get(job_id).cloned()
    }
}

/// Applies every `JobUpdate` received on `rx` until all senders are gone.
///
/// Spawned once from `main.rs`.
pub async fn start_job_updater(state: JobsState, mut rx: mpsc::Receiver<JobUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        jobs.insert(update.job_id.clone(), update.status);
    }
}
