//! Application state shared across all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::agent::PostWriter;
use crate::catalog::{self, AgentDescriptor};
use crate::chat::{ChatHistory, ChatMessage};
use crate::config::Config;
use crate::errors::ApiError;
use crate::posts::Posts;

/// The mutable UI state rendered by the page.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Id of the active agent in the sidebar.
    pub current_agent: &'static str,
    /// Generations started but not yet stored.
    pub in_flight: usize,
    pub posts: Posts,
    pub show_posts: bool,
    pub chat: ChatHistory,
}

impl Canvas {
    pub fn new(chat_history_limit: usize) -> Self {
        Self {
            current_agent: catalog::default_agent().id,
            in_flight: 0,
            posts: Posts::default(),
            show_posts: false,
            chat: ChatHistory::with_capacity(chat_history_limit),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight > 0
    }

    pub fn active_agent(&self) -> &'static AgentDescriptor {
        catalog::agent_or_default(self.current_agent)
    }

    /// Posts to show, once a generation has completed.
    pub fn visible_posts(&self) -> Option<&Posts> {
        self.show_posts.then_some(&self.posts)
    }

    /// Record a submitted message and mark a generation as running.
    pub fn begin_generation(&mut self, message: &str) {
        self.chat.push(ChatMessage::user(message));
        self.in_flight += 1;
    }

    /// Store the result of a generation. The latest completion wins.
    pub fn finish_generation(&mut self, posts: Posts) {
        self.posts = posts;
        self.show_posts = true;
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Drop a generation that will never finish.
    pub fn abandon_generation(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Completion client used by the post pipeline.
    pub writer: PostWriter,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Canvas state. Never held across the model call.
    pub canvas: Arc<RwLock<Canvas>>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let writer = PostWriter::new(&config)?;
        let canvas = Canvas::new(config.chat_history_limit);

        tracing::info!(
            model = %writer.model(),
            chat_history_limit = canvas.chat.capacity(),
            "application state initialized"
        );

        Ok(Self {
            writer,
            config: Arc::new(config),
            canvas: Arc::new(RwLock::new(canvas)),
        })
    }

    /// Clone the current canvas for rendering outside the lock.
    pub async fn snapshot(&self) -> Canvas {
        self.canvas.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::Post;

    fn posts(content: &str) -> Posts {
        Posts {
            linkedin: Post::new("", content),
            twitter: Post::new("", content),
        }
    }

    #[test]
    fn fresh_canvas_shows_welcome() {
        let canvas = Canvas::new(10);
        assert!(canvas.visible_posts().is_none());
        assert!(!canvas.is_generating());
        assert_eq!(canvas.active_agent().name, "Post Generator");
    }

    #[test]
    fn generation_lifecycle() {
        let mut canvas = Canvas::new(10);
        canvas.begin_generation("hello");
        assert!(canvas.is_generating());
        assert_eq!(canvas.chat.len(), 1);

        canvas.finish_generation(posts("done"));
        assert!(!canvas.is_generating());
        assert_eq!(canvas.visible_posts().unwrap().linkedin.content, "done");
    }

    #[test]
    fn overlapping_generations_last_completion_wins() {
        let mut canvas = Canvas::new(10);
        canvas.begin_generation("first");
        canvas.begin_generation("second");

        canvas.finish_generation(posts("second result"));
        assert!(canvas.is_generating());

        canvas.finish_generation(posts("first result"));
        assert!(!canvas.is_generating());
        assert_eq!(canvas.posts.twitter.content, "first result");
    }

    #[test]
    fn abandoned_generation_keeps_previous_posts() {
        let mut canvas = Canvas::new(10);
        canvas.begin_generation("first");
        canvas.finish_generation(posts("kept"));
        canvas.begin_generation("second");
        canvas.abandon_generation();

        assert!(!canvas.is_generating());
        assert_eq!(canvas.posts.linkedin.content, "kept");
        assert_eq!(canvas.chat.len(), 2);
    }

    #[test]
    fn unmatched_finish_does_not_underflow() {
        let mut canvas = Canvas::new(10);
        canvas.finish_generation(posts("x"));
        assert_eq!(canvas.in_flight, 0);
    }

    #[tokio::test]
    async fn app_state_uses_configured_history_limit() {
        let mut config = Config::new("sk-test");
        config.chat_history_limit = 3;
        let state = AppState::new(config).unwrap();
        assert_eq!(state.snapshot().await.chat.capacity(), 3);
    }
}
