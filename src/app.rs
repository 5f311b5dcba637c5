use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            get(handlers::show_habit)
                .put(handlers::update_habit)
                .delete(handlers::delete_habit),
        )
        .route("/api/habits/:id/complete", post(handlers::complete_habit))
        .route("/api/habits/:id/uncomplete", post(handlers::uncomplete_habit))
        .with_state(state)
}
