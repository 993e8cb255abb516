use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, Identity, NewBlogPost, PostStatus, Role};
use crate::error::RepoError;
use crate::ports::AuthError;

/// Authenticated content service - blog records, identities and role membership.
///
/// Implementations own the row-level rules: `insert` must refuse authors that
/// do not hold [`Role::Admin`] and must reject a slug that is already taken.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Persist a new post, assigning `id` and `created_at`.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Resolve the identity behind a bearer credential.
    async fn get_identity(&self, credential: &str) -> Result<Identity, AuthError>;

    /// Single equality lookup against the role-membership records.
    async fn has_role(&self, identity_id: Uuid, role: Role) -> Result<bool, RepoError>;

    /// Published posts, newest `created_at` first, plus the total number of published posts.
    async fn list_published(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<BlogPost>, u64), RepoError>;

    /// Find a post by slug in the given status, or [`RepoError::NotFound`].
    async fn get_by_slug(&self, slug: &str, status: PostStatus) -> Result<BlogPost, RepoError>;

    /// Number of posts in any status.
    async fn count_posts(&self) -> Result<u64, RepoError>;
}
