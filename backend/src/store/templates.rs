use super::{enum_column, json_column, Database, TemplateStore};
use crate::error::Result;
use outreach_common::model::template::Template;
use rusqlite::{params, OptionalExtension, Row};

const SELECT_TEMPLATE: &str =
    "SELECT id, name, template_type, subject, content, variables, status FROM templates";

fn template_from_row(row: &Row<'_>) -> rusqlite::Result<Template> {
    Ok(Template {
        id: row.get(0)?,
        name: row.get(1)?,
        template_type: enum_column(row, 2)?,
        subject: row.get(3)?,
        content: row.get(4)?,
        variables: json_column(row, 5)?,
        status: enum_column(row, 6)?,
    })
}

impl TemplateStore for Database {
    fn list_templates(&self) -> Result<Vec<Template>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY seq", SELECT_TEMPLATE))?;
        let templates = stmt
            .query_map([], template_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(templates)
    }

    fn get_template(&self, id: &str) -> Result<Option<Template>> {
        let conn = self.connect()?;
        let template = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_TEMPLATE),
                params![id],
                template_from_row,
            )
            .optional()?;
        Ok(template)
    }

    fn save_template(&self, template: &Template) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO templates (id, name, template_type, subject, content, variables, status) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, \
             template_type = excluded.template_type, subject = excluded.subject, \
             content = excluded.content, variables = excluded.variables, status = excluded.status",
            params![
                template.id,
                template.name,
                template.template_type.as_str(),
                template.subject,
                template.content,
                serde_json::to_string(&template.variables)?,
                template.status.as_str(),
            ],
        )?;
        Ok(())
    }
}
