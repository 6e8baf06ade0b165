//! Post Canvas - a server-rendered canvas that turns a prompt into LinkedIn
//! and X post previews.
//!
//! # Architecture
//!
//! - **Pipeline**: builds an instruction, asks an OpenAI-compatible model for
//!   a JSON pair of posts, and falls back to truncated or offline content
//! - **Render**: maud templates for the page and the htmx fragments
//! - **State**: the canvas (latest posts, bounded chat history) behind a lock
//!   in [`AppState`]

pub mod agent;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod posts;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
