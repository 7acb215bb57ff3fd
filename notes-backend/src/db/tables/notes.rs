//! Note database operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::super::Database;
use crate::db::sqlite::{format_timestamp, parse_timestamp, stored_precision};
use crate::error::Result;
use crate::models::Note;

const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: parse_timestamp(3, &created_at)?,
        updated_at: parse_timestamp(4, &updated_at)?,
    })
}

impl Database {
    /// Persist a note whose id and timestamps were assigned by the caller.
    /// The returned note carries the timestamps as stored.
    pub fn insert_note(&self, note: &Note) -> Result<Note> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO notes (id, title, content, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                note.id,
                note.title,
                note.content,
                format_timestamp(&note.created_at),
                format_timestamp(&note.updated_at),
            ],
        )?;
        Ok(Note {
            created_at: stored_precision(note.created_at),
            updated_at: stored_precision(note.updated_at),
            ..note.clone()
        })
    }

    pub fn get_note(&self, id: &str) -> Result<Option<Note>> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                &format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS),
                params![id],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    /// All notes, oldest first
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM notes ORDER BY created_at ASC, rowid ASC",
            NOTE_COLUMNS
        ))?;
        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    /// Replace title and content. `updated_at` never moves backwards, and
    /// `created_at` is left alone. Returns `None` if the note does not exist.
    pub fn update_note(
        &self,
        id: &str,
        title: &str,
        content: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Note>> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                &format!(
                    "UPDATE notes
                     SET title = ?2, content = ?3, updated_at = MAX(updated_at, ?4)
                     WHERE id = ?1
                     RETURNING {}",
                    NOTE_COLUMNS
                ),
                params![id, title, content, format_timestamp(&updated_at)],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    /// Returns `false` if there was nothing to delete
    pub fn delete_note(&self, id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let rows_affected = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        Ok(rows_affected > 0)
    }

    pub fn count_notes(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }
}
