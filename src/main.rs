//! SkillBridge Backend
//!
//! Serves the mentor/student task marketplace: tasks, submissions, messages,
//! leaderboards and a scripted career assistant, persisted to SQLite.

mod api;
mod chat;
mod config;
mod db;
mod errors;
mod market;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chat::Responder;
use config::Config;
use db::{Repository, Store};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SkillBridge Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Assistant reply delay: {:?}", config.chat_delay);

    // Initialize database and load collections
    let pool = db::init_database(&config.db_path).await?;
    let repo = Repository::open(Store::new(pool), Responder::new(config.chat_delay)).await?;

    let state = AppState {
        repo: Arc::new(repo),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Datastore and derived views
        .route("/datastore", get(api::get_datastore))
        .route("/datastore/revision", get(api::get_revision))
        .route("/stats", get(api::get_stats))
        .route("/leaderboard", get(api::get_leaderboard))
        .route("/skills", get(api::list_skills))
        // Tasks
        .route("/tasks", get(api::list_tasks).post(api::create_task))
        .route("/tasks/{id}", get(api::get_task))
        .route("/tasks/{id}/upvote", post(api::upvote_task))
        .route("/tasks/{id}/submissions", post(api::submit_solution))
        // Messages
        .route("/messages", get(api::list_messages).post(api::send_message))
        .route("/messages/{id}/read", post(api::mark_read))
        // Assistant
        .route(
            "/chat",
            get(api::get_transcript)
                .post(api::ask)
                .delete(api::clear_transcript),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
