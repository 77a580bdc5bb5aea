mod config;
mod directory;
mod error;
mod job_controller;
mod pipeline;
mod services;
mod session;
mod store;

use crate::config::Settings;
use crate::job_controller::state::JobsState;
use crate::pipeline::normalizer::IdSequence;
use crate::session::SessionState;
use crate::store::Database;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = Settings::load().map_err(std::io::Error::other)?;
    env_logger::init_from_env(Env::default().default_filter_or(settings.log_level.as_str()));

    let database = Database::open(&settings.database_path).map_err(std::io::Error::other)?;
    info!("Using database {}", database.path().display());

    // Initialize job controller state
    let (jobs_state, rx) = JobsState::new(settings.job_channel_capacity);

    // Start job updater task
    let updater_state = jobs_state.clone();
    tokio::spawn(async move {
        job_controller::state::start_job_updater(updater_state, rx).await;
    });

    // One console session, one id sequence: shared by every worker.
    let session = SessionState::default();
    let ids = web::Data::new(IdSequence::new());
    let json_limit = settings.json_limit_bytes;
    let shared_settings = web::Data::new(settings.clone());

    info!("Server running at {}", settings.url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(web::Data::new(jobs_state.clone()))
            .app_data(web::Data::new(session.clone()))
            .app_data(web::Data::new(database.clone()))
            .app_data(ids.clone())
            .app_data(shared_settings.clone())
            .service(services::templates::configure_routes())
            .service(services::campaigns::configure_routes())
            .service(services::data_sources::csv::configure_routes())
            .service(services::import::configure_routes())
            .service(services::supporters::configure_routes())
            .service(services::selection::configure_routes())
            .service(services::personalize::configure_routes())
            .service(services::directory::configure_routes())
            .service(services::analytics::configure_routes())
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
