//! HTML rendering for the post canvas.
//!
//! Every function here is a pure mapping from a [`Canvas`] snapshot to
//! [maud](https://maud.lambda.xyz/) markup. All dynamic values are escaped
//! by maud.

pub mod components;
pub mod posts;
pub mod welcome;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::state::Canvas;
use components::{chat_messages, header, sidebar, FONT_AWESOME_URL, HTMX_URL, PAGE_CSS, PICO_CSS_URL};

/// Render the full page.
pub fn page(canvas: &Canvas) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Open Gemini Canvas" }
                link rel="stylesheet" href=(PICO_CSS_URL);
                link rel="stylesheet" href=(FONT_AWESOME_URL);
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (sidebar(canvas))
                div id="main-content" class="main-content" {
                    (main_content(canvas))
                }
                script src=(HTMX_URL) {}
            }
        }
    }
}

/// Fragment returned after a submission. It replaces the inner HTML of
/// `#main-content` and swaps the sidebar chat history out of band.
pub fn main_fragment(canvas: &Canvas) -> Markup {
    html! {
        (main_content(canvas))
        (chat_messages(&canvas.chat, true))
    }
}

/// Header plus either the welcome screen or the post previews.
fn main_content(canvas: &Canvas) -> Markup {
    html! {
        (header(canvas.is_generating()))
        div id="canvas" {
            @match canvas.visible_posts() {
                Some(generated) => { (posts::posts_view(generated)) }
                None => { (welcome::welcome_screen()) }
            }
        }
    }
}
