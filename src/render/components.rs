//! Shared page chrome: stylesheet, sidebar, header and chat history.

use maud::{html, Markup};

use crate::catalog::AgentDescriptor;
use crate::chat::ChatHistory;
use crate::state::Canvas;

pub const PICO_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
pub const FONT_AWESOME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css";
pub const HTMX_URL: &str = "https://unpkg.com/htmx.org@1.9.10";

/// Brand gradient used by logos, buttons and gradient text.
pub const BRAND_GRADIENT: &str = "linear-gradient(135deg, #3b82f6, #8b5cf6, #ec4899)";

/// Inline CSS for the canvas page.
pub const PAGE_CSS: &str = r#"
:root{--primary-color:#3b82f6;--secondary-color:#8b5cf6;--accent-color:#ec4899;--background-gradient:linear-gradient(135deg,#f8fafc 0%,#e0e7ff 50%,#e0f2fe 100%)}
body{background:var(--background-gradient);min-height:100vh}
.sidebar{background:rgba(255,255,255,.8);backdrop-filter:blur(20px);border-right:1px solid rgba(229,231,235,.5);box-shadow:0 25px 50px -12px rgba(0,0,0,.25);width:320px;min-height:100vh;position:fixed;left:0;top:0;overflow-y:auto}
.sidebar-top{padding:1rem;border-bottom:1px solid rgba(229,231,235,.5);height:160px}
.sidebar-chat{display:flex;flex-direction:column;height:calc(100vh - 160px)}
.brand{display:flex;align-items:center;margin-bottom:1rem}
.brand-logo{width:40px;height:40px;border-radius:12px;display:flex;align-items:center;justify-content:center}
.brand-logo i{color:#fff;font-size:1.5rem}
.brand-text{margin-left:.75rem}
.brand-text h1{font-size:1.25rem;font-weight:bold;margin:0}
.brand-text p{font-size:.875rem;color:#6b7280;margin:0}
.main-content{margin-left:320px;min-height:100vh;padding:0}
.header{background:rgba(255,255,255,.8);backdrop-filter:blur(20px);border-bottom:1px solid rgba(229,231,235,.5);padding:1.5rem;box-shadow:0 4px 6px -1px rgba(0,0,0,.1);display:flex;align-items:center;justify-content:space-between}
.header-title{display:flex;align-items:center}
.header-logo{width:32px;height:32px;border-radius:8px;display:flex;align-items:center;justify-content:center}
.header-logo i{color:#fff;font-size:1.25rem}
.header-text{margin-left:1rem}
.header-text h2{font-size:1.5rem;font-weight:bold;margin:0}
.header-text p{font-size:.875rem;color:#6b7280;margin:0}
.header-status{display:flex;align-items:center;gap:.75rem}
.canvas-area{padding:1.5rem;min-height:calc(100vh - 120px)}
.gradient-text{background:linear-gradient(135deg,#3b82f6,#8b5cf6,#ec4899);-webkit-background-clip:text;-webkit-text-fill-color:transparent;background-clip:text}
.post-card{background:rgba(255,255,255,.9);backdrop-filter:blur(10px);border:1px solid rgba(229,231,235,.5);border-radius:12px;padding:1.5rem;margin-bottom:1rem;box-shadow:0 10px 25px -5px rgba(0,0,0,.1)}
.quick-action-btn{background:rgba(255,255,255,.5);backdrop-filter:blur(10px);border:1px solid rgba(229,231,235,.5);border-radius:12px;padding:1.5rem;text-align:center;transition:all .3s ease;cursor:pointer;display:flex;flex-direction:column;align-items:center;gap:.75rem}
.quick-action-btn:hover{background:rgba(255,255,255,.7);transform:translateY(-2px);box-shadow:0 15px 35px -5px rgba(0,0,0,.15)}
.quick-action-btn i{font-size:1.5rem}
.quick-action-btn span{font-size:.875rem;font-weight:500}
.agent-selector{background:rgba(255,255,255,.5);backdrop-filter:blur(10px);border:1px solid rgba(229,231,235,.5);border-radius:12px;padding:1rem;margin-bottom:1rem}
.agent-selector label{font-size:.875rem;font-weight:600;color:#374151;margin-bottom:.75rem;display:block}
.agent-row{display:flex;align-items:center}
.agent-icon{width:24px;height:24px;border-radius:6px;display:flex;align-items:center;justify-content:center}
.agent-icon i{color:#fff;font-size:1rem}
.agent-name{font-weight:500;color:#111827;margin-left:.75rem}
.chat-messages{flex:1;overflow-y:auto;padding:1rem;display:flex;flex-direction:column;gap:.5rem}
.chat-empty{margin:auto 0;text-align:center;font-size:.8rem;color:#9ca3af}
.chat-message{align-self:flex-end;max-width:90%;background:rgba(59,130,246,.1);border:1px solid rgba(59,130,246,.2);border-radius:12px;padding:.5rem .75rem;font-size:.875rem;color:#111827;white-space:pre-wrap;word-break:break-word}
.chat-form{padding:0 1rem 1rem 1rem}
.chat-input{background:rgba(255,255,255,.9);border:1px solid rgba(229,231,235,.5);border-radius:12px;padding:1rem;resize:vertical;min-height:80px;width:100%;margin-bottom:.75rem}
.send-btn{background:linear-gradient(135deg,#3b82f6,#8b5cf6,#ec4899);border:none;border-radius:12px;color:#fff;padding:.75rem 1.5rem;font-weight:600;cursor:pointer;transition:all .3s ease;width:100%}
.send-btn:hover{transform:translateY(-1px);box-shadow:0 10px 25px -5px rgba(59,130,246,.5)}
.send-btn i{margin-right:.5rem}
.status-badge{background:linear-gradient(135deg,#10b981,#059669);color:#fff;padding:.5rem 1rem;border-radius:20px;font-size:.875rem;font-weight:600;display:inline-flex;align-items:center;gap:.5rem}
.pulse{width:8px;height:8px;background:#fff;border-radius:50%;animation:pulse 2s infinite}
@keyframes pulse{0%,100%{opacity:1}50%{opacity:.5}}
.columns-layout{display:flex;gap:1.5rem;min-height:100%}
.linkedin-column{flex:3}
.twitter-column{flex:1}
"#;

/// Left sidebar: brand, active agent, chat history and message form.
pub fn sidebar(canvas: &Canvas) -> Markup {
    html! {
        div class="sidebar" {
            div class="sidebar-top" {
                div class="brand" {
                    div class="brand-logo" style={ "background: " (BRAND_GRADIENT) ";" } {
                        i class="fas fa-brain" {}
                    }
                    div class="brand-text" {
                        h1 class="gradient-text" { "Open Gemini Canvas" }
                        p { "Advanced AI Canvas" }
                    }
                }
                (agent_selector(canvas.active_agent()))
            }

            div class="sidebar-chat" {
                (chat_messages(&canvas.chat, false))

                form hx-post="/send_message" hx-target="#main-content" hx-swap="innerHTML" {
                    div class="chat-form" {
                        textarea class="chat-input" id="chat-input" name="message"
                            placeholder="Type your message..." {}
                        button type="submit" class="send-btn" {
                            i class="fas fa-paper-plane" {}
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

fn agent_selector(agent: &AgentDescriptor) -> Markup {
    html! {
        div class="agent-selector" title=(agent.description) {
            label { "Active Agent" }
            div class="agent-row" {
                div class="agent-icon" style={ "background: " (agent.gradient) ";" } {
                    i class=(agent.icon) {}
                }
                span class="agent-name" { (agent.name) }
            }
        }
    }
}

/// Chat history list. With `oob` set it replaces the sidebar list through an
/// htmx out-of-band swap.
pub fn chat_messages(history: &ChatHistory, oob: bool) -> Markup {
    html! {
        div id="chat-messages" class="chat-messages" hx-swap-oob=[oob.then_some("true")] {
            @if history.is_empty() {
                p class="chat-empty" { "Your prompts will show up here." }
            }
            @for message in history.iter() {
                div class="chat-message" { (message.content) }
            }
        }
    }
}

/// Canvas header with the "Live Research" badge while generating.
pub fn header(is_generating: bool) -> Markup {
    html! {
        div class="header" {
            div class="header-title" {
                div class="header-logo" style={ "background: " (BRAND_GRADIENT) ";" } {
                    i class="fas fa-sparkles" {}
                }
                div class="header-text" {
                    h2 class="gradient-text" { "Posts Generation Canvas" }
                    p { "Powered by Gemini AI & Google Web Search" }
                }
            }
            div class="header-status" {
                @if is_generating {
                    span class="status-badge" {
                        div class="pulse" {}
                        "Live Research"
                    }
                }
            }
        }
    }
}
