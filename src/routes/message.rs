//! Message submission handler.

use axum::extract::State;
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use crate::pipeline;
use crate::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub message: String,
}

/// Generate posts for the submitted message and return the main-content
/// fragment.
///
/// The pipeline and the state update run on their own task, so the canvas
/// is updated even if the client goes away mid-generation.
#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Markup {
    let message = form.message;
    tracing::info!(chars = message.chars().count(), "message received");

    state.canvas.write().await.begin_generation(&message);

    let task_state = state.clone();
    let generation = tokio::spawn(async move {
        let posts = pipeline::generate_posts(&task_state.writer, &message).await;
        let mut canvas = task_state.canvas.write().await;
        canvas.finish_generation(posts);
        canvas.clone()
    });

    let canvas = match generation.await {
        Ok(canvas) => canvas,
        Err(err) => {
            tracing::error!(error = %err, "generation task failed");
            let mut canvas = state.canvas.write().await;
            canvas.abandon_generation();
            canvas.clone()
        }
    };

    render::main_fragment(&canvas)
}
