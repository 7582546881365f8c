//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, warn};

use crate::{
    navigation::Direction,
    state::{AppState, NavOutcome},
};
use super::responses::{
    ClickRequest, CountdownResponse, EventResponse, HealthResponse, KeyRequest, NavResponse,
    ScrollRequest, StatusResponse, SwipeRequest,
};

fn nav_result(action: &str, result: Result<NavOutcome, String>) -> Result<Json<NavResponse>, StatusCode> {
    match result {
        Ok(outcome) => Ok(Json(NavResponse::from_outcome(outcome))),
        Err(e) => {
            error!("Failed to handle {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn navigate(state: &AppState, action: &str, direction: Direction) -> Result<Json<NavResponse>, StatusCode> {
    let result = state
        .navigate(action, direction)
        .map(|cards| NavOutcome { accepted: true, cards });
    nav_result(action, result)
}

/// Handle GET /countdown - Return the latest countdown tick
pub async fn countdown_handler(State(state): State<Arc<AppState>>) -> Json<CountdownResponse> {
    Json(CountdownResponse::new(state.target, state.get_countdown()))
}

/// Handle GET /event - Return the event copy and chosen theme
pub async fn event_handler(State(state): State<Arc<AppState>>) -> Json<EventResponse> {
    Json(EventResponse {
        content: state.content.clone(),
        hashtags: state.content.hashtag_labels(),
        theme: state.theme.current().map(str::to_string),
        themes: state.theme.themes.clone(),
        target: state.target,
    })
}

/// Handle GET /cards - Return the current card position
pub async fn cards_handler(State(state): State<Arc<AppState>>) -> Result<Json<NavResponse>, StatusCode> {
    match state.get_card_snapshot() {
        Ok(cards) => Ok(Json(NavResponse::new(
            "current",
            format!("Showing card {} of {}", cards.index + 1, cards.total),
            cards,
        ))),
        Err(e) => {
            error!("Failed to get card state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /cards/events - Stream card position changes as server-sent events
pub async fn card_events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = state.subscribe_cards();
    debug!("Card event subscriber connected");

    let events = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(cards) => {
                    let event = Event::default().event("cards").json_data(cards);
                    return Some((event, rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Card event subscriber lagged, skipped {} changes", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle POST /cards/next - Show the next card
pub async fn next_handler(State(state): State<Arc<AppState>>) -> Result<Json<NavResponse>, StatusCode> {
    navigate(&state, "next", Direction::Next)
}

/// Handle POST /cards/previous - Show the previous card
pub async fn previous_handler(State(state): State<Arc<AppState>>) -> Result<Json<NavResponse>, StatusCode> {
    navigate(&state, "previous", Direction::Previous)
}

/// Handle POST /cards/goto/:index - Jump to a card
pub async fn goto_handler(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<NavResponse>, StatusCode> {
    navigate(&state, "goto", Direction::Goto(index))
}

/// Handle POST /cards/swipe - Navigate from a touch gesture
pub async fn swipe_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SwipeRequest>,
) -> Result<Json<NavResponse>, StatusCode> {
    nav_result("swipe", state.handle_swipe(request.dx, request.dy))
}

/// Handle POST /cards/scroll - Navigate from a wheel event
pub async fn scroll_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScrollRequest>,
) -> Result<Json<NavResponse>, StatusCode> {
    nav_result("scroll", state.handle_scroll(request.delta_y))
}

/// Handle POST /cards/click - Navigate from a tap position
pub async fn click_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClickRequest>,
) -> Result<Json<NavResponse>, StatusCode> {
    nav_result("click", state.handle_click(request.x, request.width))
}

/// Handle POST /cards/key - Navigate from a key press
pub async fn key_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<KeyRequest>,
) -> Result<Json<NavResponse>, StatusCode> {
    nav_result("key", state.handle_key(&request.key))
}

/// Handle GET /status - Return current server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let cards = match state.get_card_snapshot() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to get card state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let countdown = state.get_countdown();
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        cards,
        countdown_phase: countdown.phase(),
        countdown: countdown.remaining.display(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
