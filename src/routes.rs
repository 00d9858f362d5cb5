use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{exercises, health, pages};

pub fn create_router(
    exercises_state: exercises::ExercisesState,
    pages_state: pages::PagesState,
) -> Router {
    Router::new()
        // JSON API
        .route("/exercises", get(exercises::list).post(exercises::create))
        .route(
            "/exercises/{id}",
            get(exercises::show)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        .with_state(exercises_state)
        // Pages
        .route("/", get(pages::home))
        .route("/create-exercise", get(pages::create_page))
        .route("/edit-exercise/{id}", get(pages::edit_page))
        .with_state(pages_state)
        .route("/health", get(health::health_check))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
