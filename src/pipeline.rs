//! Post generation pipeline.
//!
//! A prompt goes through three tiers, and the caller always gets a full
//! [`Posts`] value back:
//!
//! 1. **Model**: the completion decodes as a `Posts` JSON object.
//! 2. **Truncated**: the call succeeded but no object in the completion fits
//!    the schema, so the raw text is truncated per platform.
//! 3. **Offline**: the call failed, so the prompt is interpolated into fixed
//!    templates without touching the network.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::agent::Agent;
use crate::posts::{Platform, Post, Posts};

/// Max characters of raw completion kept for LinkedIn in the truncation tier.
pub const LINKEDIN_TRUNCATE_CHARS: usize = 500;

/// Max characters of raw completion kept for X in the truncation tier.
pub const TWITTER_TRUNCATE_CHARS: usize = 250;

pub const TRUNCATED_LINKEDIN_TITLE: &str = "AI-Generated Insights";
pub const TRUNCATED_LINKEDIN_SUFFIX: &str = "\n\n#AI #Technology #Innovation";
pub const TRUNCATED_TWITTER_SUFFIX: &str = " #AI #Tech";

pub const OFFLINE_LINKEDIN_TITLE: &str = "AI-Powered Content Generation";
pub const OFFLINE_LINKEDIN_SUFFIX: &str = "#AI #Innovation #Technology";
pub const OFFLINE_TWITTER_SUFFIX: &str = "#AI #Tech #Innovation";

/// Which tier produced a set of posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSource {
    Model,
    Truncated,
    Offline,
}

impl fmt::Display for PostSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Model => "model",
            Self::Truncated => "truncated",
            Self::Offline => "offline",
        })
    }
}

/// Posts plus the tier that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub posts: Posts,
    pub source: PostSource,
}

/// Generate a LinkedIn and an X post for `prompt`. Never fails.
pub async fn generate_posts<A: Agent>(agent: &A, prompt: &str) -> Posts {
    generate(agent, prompt).await.posts
}

/// Like [`generate_posts`], but also reports which tier was used.
pub async fn generate<A: Agent>(agent: &A, prompt: &str) -> Generation {
    let instruction = build_instruction(prompt);

    let generation = match agent.prompt(&instruction).await {
        Ok(raw) => match decode_posts(&raw) {
            Some(posts) => Generation {
                posts,
                source: PostSource::Model,
            },
            None => Generation {
                posts: truncated_posts(&raw),
                source: PostSource::Truncated,
            },
        },
        Err(err) => {
            tracing::warn!(agent = %agent.name(), error = %err, "post generation failed, using offline templates");
            Generation {
                posts: offline_posts(prompt),
                source: PostSource::Offline,
            }
        }
    };

    tracing::info!(
        agent = %agent.name(),
        source = %generation.source,
        linkedin_chars = generation.posts.linkedin.content.chars().count(),
        twitter_chars = generation.posts.twitter.content.chars().count(),
        "posts generated"
    );

    generation
}

/// Instruction sent to the model for a user prompt.
pub fn build_instruction(prompt: &str) -> String {
    format!(
        r#"Generate both a LinkedIn post and a Twitter/X post based on the user's request: "{prompt}"

Please respond with a JSON object containing:
{{
    "linkedin": {{
        "title": "Professional title for LinkedIn post",
        "content": "Professional LinkedIn post content with relevant hashtags and insights"
    }},
    "twitter": {{
        "title": "",
        "content": "Engaging Twitter/X post content with relevant hashtags (under 280 characters)"
    }}
}}

Make the content engaging, professional, and relevant to the topic. Include appropriate hashtags and emojis where suitable."#
    )
}

/// Upper bound on candidate start offsets tried per completion.
const MAX_CANDIDATES: usize = 64;

/// Decode a completion as [`Posts`].
///
/// The whole text is tried first. After that every `{` is a candidate start,
/// left to right, and the leading JSON value at each start is searched for an
/// object whose `linkedin` and `twitter` members are themselves objects. Text
/// after that value is ignored, so prose, code fences and extra JSON blocks
/// around the object do not matter. Braces inside a value that already
/// parsed are not tried again.
pub fn decode_posts(raw: &str) -> Option<Posts> {
    if let Ok(value) = serde_json::from_str::<Value>(raw.trim()) {
        if let Some(posts) = find_posts(&value) {
            return Some(posts);
        }
    }

    let mut resume = 0;
    let mut tried = 0;
    for (start, _) in raw.match_indices('{') {
        if start < resume {
            continue;
        }
        if tried == MAX_CANDIDATES {
            tracing::debug!(tried, "giving up on structured decode");
            break;
        }
        tried += 1;

        let mut values = serde_json::Deserializer::from_str(&raw[start..]).into_iter::<Value>();
        if let Some(Ok(value)) = values.next() {
            if let Some(posts) = find_posts(&value) {
                return Some(posts);
            }
            resume = start + values.byte_offset();
        }
    }

    None
}

/// Depth-first search for the first object shaped like [`Posts`].
fn find_posts(value: &Value) -> Option<Posts> {
    match value {
        Value::Object(map) => {
            let has_platforms = Platform::ALL
                .iter()
                .all(|platform| map.get(platform.key()).is_some_and(Value::is_object));
            if has_platforms {
                if let Ok(posts) = Posts::deserialize(value) {
                    return Some(posts);
                }
            }
            map.values().find_map(find_posts)
        }
        Value::Array(items) => items.iter().find_map(find_posts),
        _ => None,
    }
}

/// Truncation tier: keep a prefix of the raw completion per platform.
pub fn truncated_posts(raw: &str) -> Posts {
    Posts {
        linkedin: Post::new(
            TRUNCATED_LINKEDIN_TITLE,
            format!(
                "{}{TRUNCATED_LINKEDIN_SUFFIX}",
                truncate_chars(raw, LINKEDIN_TRUNCATE_CHARS)
            ),
        ),
        twitter: Post::new(
            "",
            format!(
                "{}{TRUNCATED_TWITTER_SUFFIX}",
                truncate_chars(raw, TWITTER_TRUNCATE_CHARS)
            ),
        ),
    }
}

/// Offline tier: interpolate the prompt into fixed templates.
pub fn offline_posts(prompt: &str) -> Posts {
    Posts {
        linkedin: Post::new(
            OFFLINE_LINKEDIN_TITLE,
            format!(
                "Exploring: {prompt}\n\nThe integration of advanced AI systems is transforming how we approach content creation and research.\n\n{OFFLINE_LINKEDIN_SUFFIX}"
            ),
        ),
        twitter: Post::new(
            "",
            format!(
                "🤖 AI insights on {prompt}! The future of intelligent content creation is here. {OFFLINE_TWITTER_SUFFIX}"
            ),
        ),
    }
}

/// First `max` characters of `s`, on a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
