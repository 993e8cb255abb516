//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate-blog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBlogRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

/// Successful generation: the drafted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateBlogResponse {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

/// Body of `POST /api/admin/posts`. Fields mirror the editor form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    /// Derived from the title when the key is absent. A blank value is kept
    /// and rejected by validation.
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub thumbnail_url: String,
    /// `draft`, `published` or `archived`; `draft` when omitted.
    pub status: Option<String>,
}

/// A stored post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub status: String,
    pub author_id: String,
    pub published_at: Option<String>,
    pub created_at: String,
}

/// One page of the public listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<PostResponse>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub has_more: bool,
}

/// Which admin screens the caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResponse {
    pub authenticated: bool,
    pub is_admin: bool,
}

/// Admin dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub blogs: u64,
}
