use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits", post(handlers::submit_habit))
        .route("/habits/:id/toggle", post(handlers::toggle_today))
        .route("/habits/:id/delete", post(handlers::delete_habit))
        .route("/api/habits", get(handlers::get_habits).post(handlers::create_habit))
        .route("/api/habits/:id", delete(handlers::remove_habit_api))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/load", post(handlers::reload))
        .route("/api/suggestions", get(handlers::get_suggestions))
        .with_state(state)
}
