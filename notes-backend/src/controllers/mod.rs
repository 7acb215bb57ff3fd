pub mod health;
pub mod notes;
pub mod shared;

use actix_web::{error, web, HttpResponse};
use notes_types::ErrorResponse;

use crate::error::NotesError;

/// Map a service error to its HTTP response.
///
/// Every not-found condition gets the same body, including expired and
/// dangling share grants.
pub(crate) fn error_response(err: NotesError) -> HttpResponse {
    match err {
        NotesError::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new("Note not found"))
        }
        NotesError::Invalid(msg) => HttpResponse::BadRequest().json(ErrorResponse::new(msg)),
        NotesError::Storage(_) | NotesError::Pool(_) => {
            log::error!("Storage failure: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

/// Malformed JSON bodies get a 400 with the usual error shape
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use actix_web::web;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::clock::testing::ManualClock;
    use crate::config::Config;
    use crate::db::sqlite::testing::temp_db;
    use crate::AppState;

    pub const TEST_SHARE_BASE_URL: &str = "http://frontend.test";

    /// App state over a fresh database with a manual clock
    pub fn test_state() -> (TempDir, Arc<ManualClock>, web::Data<AppState>) {
        let (dir, db) = temp_db();
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap(),
        ));
        let config = Config {
            share_base_url: TEST_SHARE_BASE_URL.to_string(),
            ..Config::default()
        };
        let state = AppState::new(config, Arc::new(db), clock.clone());
        (dir, clock, web::Data::new(state))
    }
}
