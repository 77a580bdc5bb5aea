use super::{enum_column, json_column, Database, SupporterStore};
use crate::error::{PipelineError, Result};
use log::info;
use outreach_common::model::supporter::{Supporter, SupporterPatch};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_SUPPORTER: &str = "SELECT id, first_name, last_name, email, phone, location, \
     organization, urls, segment_score, segment, tags, total_donations, event_attendance, \
     petitions_signed, education, experience FROM supporters";

fn supporter_from_row(row: &Row<'_>) -> rusqlite::Result<Supporter> {
    Ok(Supporter {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        location: row.get(5)?,
        organization: row.get(6)?,
        urls: json_column(row, 7)?,
        segment_score: row.get(8)?,
        segment: enum_column(row, 9)?,
        tags: json_column(row, 10)?,
        total_donations: row.get(11)?,
        event_attendance: row.get(12)?,
        petitions_signed: row.get(13)?,
        education: row.get(14)?,
        experience: row.get(15)?,
    })
}

fn find(conn: &Connection, id: &str) -> Result<Option<Supporter>> {
    let supporter = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_SUPPORTER),
            params![id],
            supporter_from_row,
        )
        .optional()?;
    Ok(supporter)
}

impl SupporterStore for Database {
    fn add_many(&self, supporters: &[Supporter]) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO supporters (id, first_name, last_name, email, phone, location, \
                 organization, urls, segment_score, segment, tags, total_donations, \
                 event_attendance, petitions_signed, education, experience) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            )?;
            for s in supporters {
                stmt.execute(params![
                    s.id,
                    s.first_name,
                    s.last_name,
                    s.email,
                    s.phone,
                    s.location,
                    s.organization,
                    serde_json::to_string(&s.urls)?,
                    s.segment_score,
                    s.segment.as_str(),
                    serde_json::to_string(&s.tags)?,
                    s.total_donations,
                    s.event_attendance,
                    s.petitions_signed,
                    s.education,
                    s.experience,
                ])?;
            }
        }
        tx.commit()?;
        info!("stored {} supporters", supporters.len());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Supporter>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY seq", SELECT_SUPPORTER))?;
        let supporters = stmt
            .query_map([], supporter_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(supporters)
    }

    fn get(&self, id: &str) -> Result<Option<Supporter>> {
        find(&self.connect()?, id)
    }

    fn update(&self, id: &str, patch: SupporterPatch) -> Result<Supporter> {
        let conn = self.connect()?;
        let mut supporter =
            find(&conn, id)?.ok_or_else(|| PipelineError::SupporterNotFound(id.to_string()))?;
        supporter.apply(patch);

        conn.execute(
            "UPDATE supporters SET first_name = ?2, last_name = ?3, email = ?4, phone = ?5, \
             location = ?6, organization = ?7, urls = ?8, segment_score = ?9, segment = ?10, \
             tags = ?11, total_donations = ?12, event_attendance = ?13, petitions_signed = ?14, \
             education = ?15, experience = ?16 WHERE id = ?1",
            params![
                supporter.id,
                supporter.first_name,
                supporter.last_name,
                supporter.email,
                supporter.phone,
                supporter.location,
                supporter.organization,
                serde_json::to_string(&supporter.urls)?,
                supporter.segment_score,
                supporter.segment.as_str(),
                serde_json::to_string(&supporter.tags)?,
                supporter.total_donations,
                supporter.event_attendance,
                supporter.petitions_signed,
                supporter.education,
                supporter.experience,
            ],
        )?;
        Ok(supporter)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM supporters WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(PipelineError::SupporterNotFound(id.to_string()));
        }
        info!("deleted supporter {}", id);
        Ok(())
    }
}
