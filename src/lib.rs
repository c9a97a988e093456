pub mod bank;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod quiz;
pub mod session;
pub mod state;

use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(handlers::index))
    .route("/start", post(handlers::start_quiz))
    .route("/q", get(handlers::question))
    .route("/answer", post(handlers::answer))
    .route("/result", get(handlers::result))
    .route("/review", get(handlers::review))
    .route("/reset", get(handlers::reset))
    .nest_service("/static", ServeDir::new("static"))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
