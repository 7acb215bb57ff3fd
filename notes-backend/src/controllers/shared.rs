//! Public read access to a note through its share token.

use actix_web::{web, HttpResponse, Responder};

use super::error_response;
use crate::AppState;

/// Invalid, expired and dangling tokens all answer 404 with the same body
async fn get_shared_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let token = path.into_inner();

    match data.sharing.resolve_grant(&token) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/shared/{token}").route(web::get().to(get_shared_note)));
}
