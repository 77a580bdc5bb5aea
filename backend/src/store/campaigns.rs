use super::{enum_column, json_column, CampaignStore, Database};
use crate::error::{PipelineError, Result};
use log::info;
use outreach_common::model::campaign::{Campaign, CampaignPatch};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_CAMPAIGN: &str = "SELECT id, name, description, status, start_date, end_date, \
     target_amount, current_amount, participant_count, template_ids, campaign_type, created_at \
     FROM campaigns";

fn campaign_from_row(row: &Row<'_>) -> rusqlite::Result<Campaign> {
    Ok(Campaign {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        status: enum_column(row, 3)?,
        start_date: row.get(4)?,
        end_date: row.get(5)?,
        target_amount: row.get(6)?,
        current_amount: row.get(7)?,
        participant_count: row.get(8)?,
        template_ids: json_column(row, 9)?,
        campaign_type: row.get(10)?,
        created_at: row.get(11)?,
    })
}

fn find(conn: &Connection, id: &str) -> Result<Option<Campaign>> {
    let campaign = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_CAMPAIGN),
            params![id],
            campaign_from_row,
        )
        .optional()?;
    Ok(campaign)
}

impl CampaignStore for Database {
    fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY seq", SELECT_CAMPAIGN))?;
        let campaigns = stmt
            .query_map([], campaign_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(campaigns)
    }

    fn get_campaign(&self, id: &str) -> Result<Option<Campaign>> {
        find(&self.connect()?, id)
    }

    fn insert_campaign(&self, c: &Campaign) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO campaigns (id, name, description, status, start_date, end_date, \
             target_amount, current_amount, participant_count, template_ids, campaign_type, \
             created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                c.id,
                c.name,
                c.description,
                c.status.as_str(),
                c.start_date,
                c.end_date,
                c.target_amount,
                c.current_amount,
                c.participant_count,
                serde_json::to_string(&c.template_ids)?,
                c.campaign_type,
                c.created_at,
            ],
        )?;
        info!("created campaign {} ({})", c.id, c.name);
        Ok(())
    }

    fn update_campaign(&self, id: &str, patch: CampaignPatch) -> Result<Campaign> {
        let conn = self.connect()?;
        let mut c =
            find(&conn, id)?.ok_or_else(|| PipelineError::CampaignNotFound(id.to_string()))?;
        c.apply(patch);

        conn.execute(
            "UPDATE campaigns SET name = ?2, description = ?3, status = ?4, start_date = ?5, \
             end_date = ?6, target_amount = ?7, current_amount = ?8, participant_count = ?9, \
             template_ids = ?10, campaign_type = ?11 WHERE id = ?1",
            params![
                c.id,
                c.name,
                c.description,
                c.status.as_str(),
                c.start_date,
                c.end_date,
                c.target_amount,
                c.current_amount,
                c.participant_count,
                serde_json::to_string(&c.template_ids)?,
                c.campaign_type,
            ],
        )?;
        Ok(c)
    }

    fn remove_campaign(&self, id: &str) -> Result<()> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM campaigns WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(PipelineError::CampaignNotFound(id.to_string()));
        }
        info!("deleted campaign {}", id);
        Ok(())
    }
}
