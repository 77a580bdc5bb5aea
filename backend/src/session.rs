//! State owned by the single console session.
//!
//! The pipeline functions are pure; this container is the one place that
//! holds and replaces their artifacts between user actions:
//! - the parsed preview of each upload, waiting for an explicit import,
//! - the set of uploads whose parse has not finished,
//! - the current selection,
//! - the last personalized message collection,
//! - the campaign the console is currently working on.
//!
//! It is cloned into every Actix worker as `web::Data`; all clones share the
//! same maps.

use crate::error::{PipelineError, Result};
use crate::pipeline::selection::SelectionSet;
use outreach_common::model::message::PersonalizedMessage;
use outreach_common::model::raw_row::RawRow;
use outreach_common::model::supporter::ExtractedPerson;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// An upload that has been parsed and extracted but not yet imported.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    pub upload_id: String,
    pub rows: Vec<RawRow>,
    /// Rows that passed the name check, in file order.
    pub accepted: Vec<ExtractedPerson>,
    pub rejected: usize,
}

#[derive(Clone, Default)]
pub struct SessionState {
    pub selection: Arc<RwLock<SelectionSet>>,
    pub messages: Arc<RwLock<Vec<PersonalizedMessage>>>,
    previews: Arc<RwLock<HashMap<String, ImportPreview>>>,
    parsing: Arc<Mutex<HashSet<String>>>,
    active_campaign: Arc<RwLock<Option<String>>>,
}

impl SessionState {
    /// Marks `upload_id` as being parsed. Fails if a parse of it is still running.
    pub async fn begin_parse(&self, upload_id: &str) -> Result<()> {
        let mut parsing = self.parsing.lock().await;
        if !parsing.insert(upload_id.to_string()) {
            return Err(PipelineError::ImportInProgress(upload_id.to_string()));
        }
        Ok(())
    }

    pub async fn end_parse(&self, upload_id: &str) {
        self.parsing.lock().await.remove(upload_id);
    }

    pub async fn is_parsing(&self, upload_id: &str) -> bool {
        self.parsing.lock().await.contains(upload_id)
    }

    /// Stores a preview, discarding any earlier preview of the same upload.
    pub async fn store_preview(&self, preview: ImportPreview) {
        self.previews
            .write()
            .await
            .insert(preview.upload_id.clone(), preview);
    }

    /// Removes and returns the preview; importing consumes it.
    pub async fn take_preview(&self, upload_id: &str) -> Option<ImportPreview> {
        self.previews.write().await.remove(upload_id)
    }

    /// Puts a preview back unless a newer one arrived meanwhile.
    pub async fn restore_preview(&self, preview: ImportPreview) {
        self.previews
            .write()
            .await
            .entry(preview.upload_id.clone())
            .or_insert(preview);
    }

    /// Replaces the whole message collection.
    pub async fn replace_messages(&self, messages: Vec<PersonalizedMessage>) {
        *self.messages.write().await = messages;
    }

    pub async fn active_campaign(&self) -> Option<String> {
        self.active_campaign.read().await.clone()
    }

    /// `None` leaves the console without an active campaign.
    pub async fn set_active_campaign(&self, campaign_id: Option<String>) {
        *self.active_campaign.write().await = campaign_id;
    }

    /// Drops the active campaign if it is `campaign_id`.
    pub async fn forget_campaign(&self, campaign_id: &str) {
        let mut active = self.active_campaign.write().await;
        if active.as_deref() == Some(campaign_id) {
            *active = None;
        }
    }
}
