use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three enumerated statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PostStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Post entity - a stored blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Markdown body.
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub status: PostStatus,
    pub author_id: Uuid,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated form state, kept in memory while an operator edits a post.
///
/// Every field is raw text exactly as typed, including `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub thumbnail_url: String,
    pub status: String,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            thumbnail_url: String::new(),
            status: PostStatus::Draft.as_str().to_string(),
        }
    }
}

/// A post that passed [`crate::validate_post`], with trimmed and normalized fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub status: PostStatus,
}

impl ValidatedPost {
    /// Turn the normalized record back into form state.
    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone().unwrap_or_default(),
            content: self.content.clone(),
            thumbnail_url: self.thumbnail_url.clone().unwrap_or_default(),
            status: self.status.as_str().to_string(),
        }
    }
}

/// Insert record handed to the content store.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub status: PostStatus,
    pub author_id: Uuid,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    /// Stamp a validated post with its author; `published_at` is set only for published posts.
    pub fn stamp(post: ValidatedPost, author_id: Uuid, now: DateTime<Utc>) -> Self {
        let published_at = (post.status == PostStatus::Published).then_some(now);

        Self {
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            thumbnail_url: post.thumbnail_url,
            status: post.status,
            author_id,
            published_at,
        }
    }

    /// Materialize the stored entity once the store has assigned identity and time.
    pub fn into_post(self, id: Uuid, created_at: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            thumbnail_url: self.thumbnail_url,
            status: self.status,
            author_id: self.author_id,
            published_at: self.published_at,
            created_at,
        }
    }
}
