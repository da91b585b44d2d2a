use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits", post(handlers::create_habit_form))
        .route("/habits/:id/:action", post(handlers::habit_action_form))
        .route("/api/habits", get(handlers::get_board).post(handlers::create_habit))
        .route("/api/habits/:id/:action", post(handlers::habit_action))
        .with_state(state)
}
