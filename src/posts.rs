//! Post data model shared by the pipeline and the view builder.

use serde::{Deserialize, Deserializer};

/// A titled text blob destined for one platform's preview card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Whether this post has anything to show as a card.
    pub fn is_renderable(&self) -> bool {
        !self.content.is_empty()
    }
}

/// One post per platform. Both keys are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Posts {
    pub linkedin: Post,
    pub twitter: Post,
}

impl Posts {
    pub fn get(&self, platform: Platform) -> &Post {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::Twitter => &self.twitter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinkedIn,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::LinkedIn, Platform::Twitter];

    /// Key used in the JSON payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::Twitter => "twitter",
        }
    }

    /// Heading shown above the preview card.
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn Post",
            Self::Twitter => "X Post",
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
