//! SharingService: issues and resolves share grants

use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

use super::token::generate_share_token;
use crate::clock::Clock;
use crate::db::Database;
use crate::error::{NotesError, Result};
use crate::models::{Note, ShareGrant};
use notes_types::ShareLinkResponse;

/// Lifetime of every grant. Fixed at issuance, never extended.
pub const SHARE_TTL_DAYS: i64 = 7;

#[derive(Clone)]
pub struct SharingService {
    db: Arc<Database>,
    clock: Arc<dyn Clock>,
    base_url: String,
}

impl SharingService {
    /// `base_url` is the front-end origin; links look like `{base_url}/shared/{token}`
    pub fn new(db: Arc<Database>, clock: Arc<dyn Clock>, base_url: impl Into<String>) -> Self {
        Self {
            db,
            clock,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn share_ttl() -> Duration {
        Duration::days(SHARE_TTL_DAYS)
    }

    /// Create a new grant for an existing note.
    ///
    /// Every call produces an independent grant with its own token and expiry,
    /// even for the same note.
    pub fn issue_grant(&self, note_id: &str) -> Result<ShareLinkResponse> {
        if self.db.get_note(note_id)?.is_none() {
            return Err(NotesError::NotFound);
        }

        let now = self.clock.now();
        let grant = self.db.insert_share_grant(&ShareGrant {
            id: Uuid::new_v4().to_string(),
            note_id: note_id.to_string(),
            share_token: generate_share_token(),
            expires_at: now + Self::share_ttl(),
            created_at: now,
        })?;

        log::info!(
            "[SHARE] Issued grant {} for note {} (expires {})",
            grant.id,
            note_id,
            grant.expires_at.to_rfc3339()
        );

        Ok(ShareLinkResponse {
            share_url: self.share_url(&grant.share_token),
            expires_at: grant.expires_at,
        })
    }

    /// Resolve a token to its note.
    ///
    /// Checks run in order on every call: grant exists, grant not expired,
    /// note still exists. All three failures return [`NotesError::NotFound`].
    pub fn resolve_grant(&self, token: &str) -> Result<Note> {
        let grant = match self.db.get_share_grant_by_token(token)? {
            Some(grant) => grant,
            None => {
                log::debug!("[SHARE] Unknown token");
                return Err(NotesError::NotFound);
            }
        };

        if !grant.is_live_at(self.clock.now()) {
            log::debug!("[SHARE] Grant {} expired at {}", grant.id, grant.expires_at.to_rfc3339());
            return Err(NotesError::NotFound);
        }

        match self.db.get_note(&grant.note_id)? {
            Some(note) => Ok(note),
            None => {
                log::debug!("[SHARE] Grant {} points at deleted note {}", grant.id, grant.note_id);
                Err(NotesError::NotFound)
            }
        }
    }

    fn share_url(&self, token: &str) -> String {
        format!("{}/shared/{}", self.base_url, token)
    }
}
