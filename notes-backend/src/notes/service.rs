//! NoteService: validation and timestamp stamping in front of the note table.

use std::sync::Arc;
use uuid::Uuid;

use crate::clock::Clock;
use crate::db::Database;
use crate::error::{NotesError, Result};
use crate::models::Note;
use notes_types::NoteRequest;

#[derive(Clone)]
pub struct NoteService {
    db: Arc<Database>,
    clock: Arc<dyn Clock>,
}

impl NoteService {
    pub fn new(db: Arc<Database>, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    pub fn list(&self) -> Result<Vec<Note>> {
        self.db.list_notes()
    }

    pub fn get(&self, id: &str) -> Result<Note> {
        self.db.get_note(id)?.ok_or(NotesError::NotFound)
    }

    /// Assigns a fresh id and sets both timestamps to now
    pub fn create(&self, req: &NoteRequest) -> Result<Note> {
        validate(req)?;

        let now = self.clock.now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: req.title.clone(),
            content: req.content.clone(),
            created_at: now,
            updated_at: now,
        };
        self.db.insert_note(&note)
    }

    /// Replaces title and content, refreshing `updated_at`
    pub fn update(&self, id: &str, req: &NoteRequest) -> Result<Note> {
        validate(req)?;

        self.db
            .update_note(id, &req.title, req.content.as_deref(), self.clock.now())?
            .ok_or(NotesError::NotFound)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        if self.db.delete_note(id)? {
            Ok(())
        } else {
            Err(NotesError::NotFound)
        }
    }

    pub fn count(&self) -> Result<i64> {
        self.db.count_notes()
    }
}

fn validate(req: &NoteRequest) -> Result<()> {
    if req.title.trim().is_empty() {
        return Err(NotesError::invalid("title is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::ManualClock;
    use crate::db::sqlite::testing::temp_db;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Arc<ManualClock>, NoteService) {
        let (dir, db) = temp_db();
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
        ));
        let service = NoteService::new(Arc::new(db), clock.clone());
        (dir, clock, service)
    }

    #[test]
    fn test_create_stamps_id_and_timestamps() {
        let (_dir, clock, service) = setup();

        let note = service.create(&NoteRequest::new("A", Some("B"))).unwrap();
        assert!(!note.id.is_empty());
        assert_eq!(note.title, "A");
        assert_eq!(note.content.as_deref(), Some("B"));
        assert_eq!(note.created_at, clock.now());
        assert_eq!(note.created_at, note.updated_at);

        assert_eq!(service.get(&note.id).unwrap(), note);
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let (_dir, _clock, service) = setup();

        let a = service.create(&NoteRequest::new("Same", None)).unwrap();
        let b = service.create(&NoteRequest::new("Same", None)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let (_dir, _clock, service) = setup();

        for title in ["", "   ", "\n\t"] {
            let err = service.create(&NoteRequest::new(title, Some("body"))).unwrap_err();
            assert!(matches!(err, NotesError::Invalid(_)));
        }
        assert_eq!(service.count().unwrap(), 0);

        let note = service.create(&NoteRequest::new("Ok", None)).unwrap();
        let err = service.update(&note.id, &NoteRequest::default()).unwrap_err();
        assert!(matches!(err, NotesError::Invalid(_)));
        assert_eq!(service.get(&note.id).unwrap().title, "Ok");
    }

    #[test]
    fn test_update_refreshes_updated_at_only() {
        let (_dir, clock, service) = setup();
        let created = service.create(&NoteRequest::new("Draft", Some("v1"))).unwrap();

        for step in 1..=3 {
            clock.advance(Duration::minutes(10));
            let content = format!("v{}", step + 1);
            let updated = service
                .update(&created.id, &NoteRequest::new("Draft", Some(content.as_str())))
                .unwrap();

            assert_eq!(updated.id, created.id);
            assert_eq!(updated.created_at, created.created_at);
            assert_eq!(updated.updated_at, clock.now());
            assert!(updated.updated_at >= updated.created_at);
        }
    }

    #[test]
    fn test_updated_at_monotonic_when_clock_goes_back() {
        let (_dir, clock, service) = setup();
        let created = service.create(&NoteRequest::new("Title", None)).unwrap();

        clock.advance(Duration::hours(-2));
        let updated = service.update(&created.id, &NoteRequest::new("Title 2", None)).unwrap();
        assert_eq!(updated.updated_at, created.updated_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_missing_note_is_not_found_and_store_unchanged() {
        let (_dir, _clock, service) = setup();
        let kept = service.create(&NoteRequest::new("Keep", Some("me"))).unwrap();

        assert!(matches!(service.get("missing"), Err(NotesError::NotFound)));
        assert!(matches!(
            service.update("missing", &NoteRequest::new("X", None)),
            Err(NotesError::NotFound)
        ));
        assert!(matches!(service.delete("missing"), Err(NotesError::NotFound)));

        assert_eq!(service.list().unwrap(), vec![kept]);
    }

    #[test]
    fn test_delete_removes_note() {
        let (_dir, _clock, service) = setup();
        let note = service.create(&NoteRequest::new("Temp", None)).unwrap();

        service.delete(&note.id).unwrap();
        assert!(matches!(service.get(&note.id), Err(NotesError::NotFound)));
        assert!(matches!(service.delete(&note.id), Err(NotesError::NotFound)));
    }
}
