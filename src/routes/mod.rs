//! Route definitions for the canvas.
//!
//! ## Routes
//!
//! - `GET /` - Full canvas page
//! - `POST /send_message` - Generate posts for a prompt, returns the main-content fragment
//! - `GET /api/placeholder/:width/:height` - SVG placeholder image
//! - `GET /health` - Health check (JSON)

mod health;
mod home;
mod message;
mod placeholder;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the complete canvas router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/send_message", post(message::send_message))
        .route(
            "/api/placeholder/:width/:height",
            get(placeholder::placeholder_image),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
