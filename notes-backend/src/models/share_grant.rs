use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed permission to read one note through its share token.
///
/// `note_id` is only checked at issuance; the note may be deleted later,
/// leaving the grant dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGrant {
    pub id: String,
    pub note_id: String,
    pub share_token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ShareGrant {
    /// Still usable at `now`. Expiry is exclusive: at `expires_at` the grant is dead.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
