//! LinkedIn and X post preview cards.

use maud::{html, Markup};

use crate::posts::{Platform, Post, Posts};

const PROFILE_IMAGE: &str = "/api/placeholder/40/40";
const PROFILE_NAME: &str = "DeepMind Research";

const LINKEDIN_ACTION_STYLE: &str =
    "background: none; border: 1px solid #ccc; color: #666; padding: 0.5rem 1rem; border-radius: 20px; margin-right: 0.5rem;";
const TWITTER_ACTION_STYLE: &str =
    "background: none; border: none; color: #666; padding: 0.25rem 0.5rem;";

/// Two columns, one per platform. A column is omitted when its post has no
/// content.
pub fn posts_view(posts: &Posts) -> Markup {
    html! {
        div class="canvas-area" {
            div class="columns-layout" {
                @for platform in Platform::ALL {
                    @let post = posts.get(platform);
                    @if post.is_renderable() {
                        @match platform {
                            Platform::LinkedIn => {
                                div class="linkedin-column" data-platform=(platform.key()) { (linkedin_card(post)) }
                            }
                            Platform::Twitter => {
                                div class="twitter-column" data-platform=(platform.key()) { (twitter_card(post)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn linkedin_card(post: &Post) -> Markup {
    html! {
        div {
            h3 style="margin-bottom: 1rem; color: #0a66c2; font-weight: 600;" { (Platform::LinkedIn.label()) }
            div class="post-card" {
                div style="display: flex; align-items: center; margin-bottom: 1rem;" {
                    (profile_image())
                    div style="margin-left: 0.75rem;" {
                        strong { (PROFILE_NAME) }
                        br;
                        small style="color: #666;" { "AI Research Organization • 2h" }
                    }
                }
                @if !post.title.is_empty() {
                    h4 style="margin-bottom: 0.75rem; color: #000;" { (post.title) }
                }
                p style="line-height: 1.6; color: #000; white-space: pre-wrap;" { (post.content) }
                div style="margin-top: 1rem; padding-top: 1rem; border-top: 1px solid #eee;" {
                    button style=(LINKEDIN_ACTION_STYLE) { i class="fas fa-thumbs-up" {} " Like" }
                    button style=(LINKEDIN_ACTION_STYLE) { i class="fas fa-comment" {} " Comment" }
                    button style=(LINKEDIN_ACTION_STYLE) { i class="fas fa-share" {} " Share" }
                }
            }
        }
    }
}

pub fn twitter_card(post: &Post) -> Markup {
    html! {
        div {
            h3 style="margin-bottom: 1rem; color: #000; font-weight: 600;" { (Platform::Twitter.label()) }
            div class="post-card" {
                div style="display: flex; align-items: flex-start; margin-bottom: 1rem;" {
                    (profile_image())
                    div style="margin-left: 0.75rem;" {
                        strong { (PROFILE_NAME) }
                        span style="color: #666; margin-left: 0.25rem;" { " @deepmind_research" }
                        br;
                        small style="color: #666;" { "2h" }
                    }
                }
                @if !post.title.is_empty() {
                    h4 style="margin-bottom: 0.75rem; color: #000; font-size: 1rem;" { (post.title) }
                }
                p style="line-height: 1.5; color: #000; white-space: pre-wrap;" { (post.content) }
                div style="margin-top: 1rem; padding-top: 1rem; border-top: 1px solid #eee; display: flex; justify-content: space-around;" {
                    button style=(TWITTER_ACTION_STYLE) { i class="fas fa-comment" {} " 12" }
                    button style=(TWITTER_ACTION_STYLE) { i class="fas fa-retweet" {} " 45" }
                    button style=(TWITTER_ACTION_STYLE) { i class="fas fa-heart" {} " 234" }
                    button style=(TWITTER_ACTION_STYLE) { i class="fas fa-share" {} }
                }
            }
        }
    }
}

fn profile_image() -> Markup {
    html! {
        img src=(PROFILE_IMAGE) alt="Profile" style="width: 40px; height: 40px; border-radius: 50%;";
    }
}
