//! Shared types for the notes backend and its HTTP clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteRequest {
    /// Required, must not be blank. Missing or null is treated like empty so
    /// the server can answer with its own validation error.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteRequest {
    pub fn new(title: impl Into<String>, content: Option<&str>) -> Self {
        Self {
            title: title.into(),
            content: content.map(str::to_string),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =====================================================
// Response Types
// =====================================================

/// Returned by `GET /api/notes/{id}/share`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkResponse {
    pub share_url: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
