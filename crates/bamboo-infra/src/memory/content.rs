//! In-memory content service - used when no database is configured.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use bamboo_core::domain::{BlogPost, Identity, NewBlogPost, PostStatus, Role};
use bamboo_core::error::RepoError;
use bamboo_core::ports::{AuthError, ContentService, TokenService};

/// Content service keeping posts and role memberships in process memory.
///
/// Applies the same rules as the database: admin-only inserts and unique slugs.
/// Data is lost on process restart.
pub struct InMemoryContentService {
    tokens: Arc<dyn TokenService>,
    posts: RwLock<Vec<BlogPost>>,
    roles: RwLock<HashSet<(Uuid, Role)>>,
}

impl InMemoryContentService {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self {
            tokens,
            posts: RwLock::new(Vec::new()),
            roles: RwLock::new(HashSet::new()),
        }
    }

    /// Seed admin memberships, e.g. from configuration.
    pub fn with_admins(self, admins: impl IntoIterator<Item = Uuid>) -> Self {
        let roles = admins.into_iter().map(|id| (id, Role::Admin)).collect();
        Self {
            roles: RwLock::new(roles),
            ..self
        }
    }

    pub async fn grant(&self, identity_id: Uuid, role: Role) {
        self.roles.write().await.insert((identity_id, role));
    }
}

#[async_trait]
impl ContentService for InMemoryContentService {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        if !self.has_role(post.author_id, Role::Admin).await? {
            return Err(RepoError::PermissionDenied(
                "only admins can create blog posts".to_string(),
            ));
        }

        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::Constraint(format!(
                "slug '{}' already exists",
                post.slug
            )));
        }

        let post = post.into_post(Uuid::new_v4(), Utc::now());
        posts.push(post.clone());
        Ok(post)
    }

    async fn get_identity(&self, credential: &str) -> Result<Identity, AuthError> {
        self.tokens.verify(credential)
    }

    async fn has_role(&self, identity_id: Uuid, role: Role) -> Result<bool, RepoError> {
        Ok(self.roles.read().await.contains(&(identity_id, role)))
    }

    async fn list_published(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<BlogPost>, u64), RepoError> {
        let posts = self.posts.read().await;
        // Reversed first so equal timestamps keep the later insert on top.
        let mut published: Vec<&BlogPost> = posts
            .iter()
            .rev()
            .filter(|p| p.status == PostStatus::Published)
            .collect();
        published.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = published.len() as u64;
        let page = published
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((page, total))
    }

    async fn get_by_slug(&self, slug: &str, status: PostStatus) -> Result<BlogPost, RepoError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.slug == slug && p.status == status)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn count_posts(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }
}
