//! Notes REST API: CRUD plus share link issuance.

use actix_web::{web, HttpResponse, Responder};
use notes_types::{MessageResponse, NoteRequest};

use super::{error_response, json_config};
use crate::AppState;

/// List every note
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.notes.list() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => error_response(e),
    }
}

async fn create_note(data: web::Data<AppState>, body: web::Json<NoteRequest>) -> impl Responder {
    match data.notes.create(&body) {
        Ok(note) => {
            log::debug!("Created note {}", note.id);
            HttpResponse::Ok().json(note)
        }
        Err(e) => error_response(e),
    }
}

async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match data.notes.get(&id) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => error_response(e),
    }
}

async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<NoteRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data.notes.update(&id, &body) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => error_response(e),
    }
}

async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match data.notes.delete(&id) {
        Ok(()) => {
            log::debug!("Deleted note {}", id);
            HttpResponse::Ok().json(MessageResponse::new("Note deleted"))
        }
        Err(e) => error_response(e),
    }
}

/// Issue a new share link for a note
async fn share_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match data.sharing.issue_grant(&id) {
        Ok(link) => HttpResponse::Ok().json(link),
        Err(e) => error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .app_data(json_config())
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note))
            .route("/{id}/share", web::get().to(share_note)),
    );
}
