//! Welcome screen shown before the first generation.

use maud::{html, Markup};

use super::components::BRAND_GRADIENT;
use crate::catalog::{QuickAction, QUICK_ACTIONS};

pub fn welcome_screen() -> Markup {
    html! {
        div class="canvas-area" {
            div style="text-align: center; padding: 4rem 0;" {
                div style={
                    "width: 80px; height: 80px; background: " (BRAND_GRADIENT) "; border-radius: 16px; "
                    "display: flex; align-items: center; justify-content: center; margin: 0 auto 2rem auto; "
                    "box-shadow: 0 20px 40px -10px rgba(59, 130, 246, 0.3);"
                } {
                    i class="fas fa-brain" style="color: white; font-size: 2.5rem;" {}
                }
                h3 class="gradient-text" style="font-size: 1.5rem; font-weight: bold; margin-bottom: 0.75rem; text-align: center;" {
                    "Ready to Explore"
                }
                p style="color: #6b7280; margin-bottom: 2rem; max-width: 400px; margin-left: auto; margin-right: auto; text-align: center; line-height: 1.6;" {
                    "Harness the power of Google's most advanced AI models for generating interactive LinkedIn and X Posts."
                }
                div style="display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; max-width: 500px; margin: 0 auto;" {
                    @for action in QUICK_ACTIONS {
                        (quick_action_button(action))
                    }
                }
            }
        }
    }
}

/// A quick action posts its canned prompt as the `message` field.
pub fn quick_action_button(action: &QuickAction) -> Markup {
    let vals = serde_json::json!({ "message": action.prompt }).to_string();

    html! {
        div class="quick-action-btn"
            hx-post="/send_message"
            hx-vals=(vals)
            hx-target="#main-content"
            hx-swap="innerHTML" {
            i class=(action.icon) style={ "color: " (action.color) ";" } {}
            span { (action.label) }
        }
    }
}
