use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod clock;
mod config;
mod controllers;
mod db;
mod error;
mod models;
mod notes;
mod sharing;

use clock::{Clock, SystemClock};
use config::Config;
use db::Database;
use notes::NoteService;
use sharing::SharingService;

pub struct AppState {
    pub config: Config,
    pub notes: NoteService,
    pub sharing: SharingService,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    /// Wire the services over one shared database and clock
    pub fn new(config: Config, db: Arc<Database>, clock: Arc<dyn Clock>) -> Self {
        let notes = NoteService::new(Arc::clone(&db), Arc::clone(&clock));
        let sharing = SharingService::new(db, clock, config.share_base_url.clone());
        Self {
            config,
            notes,
            sharing,
            started_at: std::time::Instant::now(),
        }
    }
}

/// Browser front-ends on any origin may call the API. No credentials.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let port = config.port;
    let bind_address = config.bind_address.clone();

    log::info!("Initializing database at {}", config.database_url);
    let db = match Database::new(&config.database_url, config.db_pool_size) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            log::error!("Failed to initialize database: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    log::info!("Share links point at {}/shared/<token>", config.share_base_url);

    let state = web::Data::new(AppState::new(config, db, Arc::new(SystemClock)));

    log::info!("Listening on http://{}:{}", bind_address, port);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors())
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
            .configure(controllers::shared::config)
    })
    .bind((bind_address.as_str(), port))?
    .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
