//! SQLite persistence for supporters, templates, campaigns, and the member directory.
//!
//! The pipeline only ever sees the traits below. `Database` implements all of
//! them, plus the directory queries, on top of a file opened per operation.

mod campaigns;
mod directory;
mod supporters;
mod templates;

use crate::error::Result;
use outreach_common::model::campaign::{Campaign, CampaignPatch};
use outreach_common::model::supporter::{Supporter, SupporterPatch};
use outreach_common::model::template::Template;
use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub trait SupporterStore {
    /// Inserts every supporter or none of them.
    fn add_many(&self, supporters: &[Supporter]) -> Result<()>;
    /// All supporters in insertion order.
    fn list(&self) -> Result<Vec<Supporter>>;
    fn get(&self, id: &str) -> Result<Option<Supporter>>;
    fn update(&self, id: &str, patch: SupporterPatch) -> Result<Supporter>;
    fn remove(&self, id: &str) -> Result<()>;
}

pub trait TemplateStore {
    fn list_templates(&self) -> Result<Vec<Template>>;
    fn get_template(&self, id: &str) -> Result<Option<Template>>;
    /// Inserts or replaces by id.
    fn save_template(&self, template: &Template) -> Result<()>;
}

pub trait CampaignStore {
    /// All campaigns, oldest first.
    fn list_campaigns(&self) -> Result<Vec<Campaign>>;
    fn get_campaign(&self, id: &str) -> Result<Option<Campaign>>;
    fn insert_campaign(&self, campaign: &Campaign) -> Result<()>;
    fn update_campaign(&self, id: &str, patch: CampaignPatch) -> Result<Campaign>;
    fn remove_campaign(&self, id: &str) -> Result<()>;
}

/// How long a connection waits on a lock held by another worker before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS supporters (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    location TEXT NOT NULL,
    organization TEXT NOT NULL,
    urls TEXT NOT NULL,
    segment_score INTEGER NOT NULL,
    segment TEXT NOT NULL,
    tags TEXT NOT NULL,
    total_donations INTEGER NOT NULL DEFAULT 0,
    event_attendance INTEGER NOT NULL DEFAULT 0,
    petitions_signed INTEGER NOT NULL DEFAULT 0,
    education TEXT NOT NULL,
    experience TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS templates (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    template_type TEXT NOT NULL,
    subject TEXT,
    content TEXT NOT NULL,
    variables TEXT NOT NULL,
    status TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS campaigns (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT,
    target_amount INTEGER,
    current_amount INTEGER,
    participant_count INTEGER NOT NULL DEFAULT 0,
    template_ids TEXT NOT NULL,
    campaign_type TEXT,
    created_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS directory_members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    linkedin TEXT NOT NULL,
    company TEXT NOT NULL,
    title TEXT NOT NULL,
    industry TEXT NOT NULL,
    location TEXT NOT NULL,
    consent_status TEXT NOT NULL,
    consent_date TEXT,
    last_updated TEXT NOT NULL,
    consent_method TEXT,
    notes TEXT NOT NULL,
    skills TEXT NOT NULL
);
";

/// Handle to the SQLite file. Cheap to clone; each operation opens its own connection.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database {
            path: path.as_ref().to_path_buf(),
        };
        db.connect()?.execute_batch(SCHEMA)?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

/// Reads a JSON-encoded TEXT column.
fn json_column<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a TEXT column holding the string form of an enum.
fn enum_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let text: String = row.get(idx)?;
    text.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into())
    })
}
