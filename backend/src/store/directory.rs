use super::{enum_column, json_column, Database};
use crate::error::{PipelineError, Result};
use chrono::NaiveDate;
use outreach_common::model::directory::{ConsentStatus, DirectoryMember, NewDirectoryMember};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_MEMBER: &str = "SELECT id, name, email, linkedin, company, title, industry, \
     location, consent_status, consent_date, last_updated, consent_method, notes, skills \
     FROM directory_members";

fn member_from_row(row: &Row<'_>) -> rusqlite::Result<DirectoryMember> {
    Ok(DirectoryMember {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        linkedin: row.get(3)?,
        company: row.get(4)?,
        title: row.get(5)?,
        industry: row.get(6)?,
        location: row.get(7)?,
        consent_status: enum_column(row, 8)?,
        consent_date: row.get(9)?,
        last_updated: row.get(10)?,
        consent_method: row.get(11)?,
        notes: row.get(12)?,
        skills: json_column(row, 13)?,
    })
}

fn find_member(conn: &Connection, id: i64) -> Result<Option<DirectoryMember>> {
    let member = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_MEMBER),
            params![id],
            member_from_row,
        )
        .optional()?;
    Ok(member)
}

impl Database {
    pub fn list_members(&self) -> Result<Vec<DirectoryMember>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_MEMBER))?;
        let members = stmt
            .query_map([], member_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(members)
    }

    pub fn get_member(&self, id: i64) -> Result<DirectoryMember> {
        find_member(&self.connect()?, id)?.ok_or(PipelineError::MemberNotFound(id))
    }

    /// New members start without consent.
    pub fn add_member(&self, member: NewDirectoryMember, today: NaiveDate) -> Result<DirectoryMember> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO directory_members (name, email, linkedin, company, title, industry, \
             location, consent_status, consent_date, last_updated, consent_method, notes, skills) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, NULL, ?9, NULL, ?10, ?11)",
            params![
                member.name,
                member.email,
                member.linkedin,
                member.company,
                member.title,
                member.industry,
                member.location,
                ConsentStatus::Pending.as_str(),
                today,
                member.notes,
                serde_json::to_string(&member.skills)?,
            ],
        )?;
        let id = conn.last_insert_rowid();
        find_member(&conn, id)?.ok_or(PipelineError::MemberNotFound(id))
    }

    /// Persists the consent-related fields of `member`.
    pub fn save_consent(&self, member: &DirectoryMember) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE directory_members SET consent_status = ?2, consent_date = ?3, \
             last_updated = ?4, consent_method = ?5, notes = ?6 WHERE id = ?1",
            params![
                member.id,
                member.consent_status.as_str(),
                member.consent_date,
                member.last_updated,
                member.consent_method,
                member.notes,
            ],
        )?;
        if changed == 0 {
            return Err(PipelineError::MemberNotFound(member.id));
        }
        Ok(())
    }
}
