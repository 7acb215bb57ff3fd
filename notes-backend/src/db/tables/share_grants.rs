//! Share grant database operations

use rusqlite::{params, OptionalExtension, Row};

use super::super::Database;
use crate::db::sqlite::{format_timestamp, parse_timestamp, stored_precision};
use crate::error::Result;
use crate::models::ShareGrant;

const GRANT_COLUMNS: &str = "id, note_id, share_token, expires_at, created_at";

fn grant_from_row(row: &Row) -> rusqlite::Result<ShareGrant> {
    let expires_at: String = row.get(3)?;
    let created_at: String = row.get(4)?;

    Ok(ShareGrant {
        id: row.get(0)?,
        note_id: row.get(1)?,
        share_token: row.get(2)?,
        expires_at: parse_timestamp(3, &expires_at)?,
        created_at: parse_timestamp(4, &created_at)?,
    })
}

impl Database {
    pub fn insert_share_grant(&self, grant: &ShareGrant) -> Result<ShareGrant> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO share_grants (id, note_id, share_token, expires_at, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                grant.id,
                grant.note_id,
                grant.share_token,
                format_timestamp(&grant.expires_at),
                format_timestamp(&grant.created_at),
            ],
        )?;
        Ok(ShareGrant {
            expires_at: stored_precision(grant.expires_at),
            created_at: stored_precision(grant.created_at),
            ..grant.clone()
        })
    }

    /// Look up a grant by token. Expired grants are returned as-is; callers decide.
    pub fn get_share_grant_by_token(&self, token: &str) -> Result<Option<ShareGrant>> {
        let conn = self.conn()?;
        let grant = conn
            .query_row(
                &format!(
                    "SELECT {} FROM share_grants WHERE share_token = ?1",
                    GRANT_COLUMNS
                ),
                params![token],
                grant_from_row,
            )
            .optional()?;
        Ok(grant)
    }

    /// Grants outlive their note, so this still lists them after a delete.
    #[cfg(test)]
    pub fn list_share_grants_for_note(&self, note_id: &str) -> Result<Vec<ShareGrant>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM share_grants WHERE note_id = ?1 ORDER BY created_at ASC, rowid ASC",
            GRANT_COLUMNS
        ))?;
        let grants = stmt
            .query_map(params![note_id], grant_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(grants)
    }
}
