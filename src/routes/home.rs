use axum::extract::State;
use maud::Markup;

use crate::render;
use crate::state::AppState;

/// Render the full canvas page from the current state.
pub async fn home_page(State(state): State<AppState>) -> Markup {
    let canvas = state.snapshot().await;
    render::page(&canvas)
}
