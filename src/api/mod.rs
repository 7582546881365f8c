//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/countdown", get(countdown_handler))
        .route("/event", get(event_handler))
        .route("/cards", get(cards_handler))
        .route("/cards/events", get(card_events_handler))
        .route("/cards/next", post(next_handler))
        .route("/cards/previous", post(previous_handler))
        .route("/cards/goto/:index", post(goto_handler))
        .route("/cards/swipe", post(swipe_handler))
        .route("/cards/scroll", post(scroll_handler))
        .route("/cards/click", post(click_handler))
        .route("/cards/key", post(key_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
