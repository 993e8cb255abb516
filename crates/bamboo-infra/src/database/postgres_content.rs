//! PostgreSQL content service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr,
};
use uuid::Uuid;

use bamboo_core::domain::{BlogPost, Identity, NewBlogPost, PostStatus, Role};
use bamboo_core::error::RepoError;
use bamboo_core::ports::{AuthError, ContentService, TokenService};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::user_role::{self, Entity as UserRoleEntity};

/// Content service backed by the `blogs` and `user_roles` tables.
///
/// Credentials are verified locally with the shared token secret.
pub struct PostgresContentService {
    db: DbConn,
    tokens: Arc<dyn TokenService>,
}

impl PostgresContentService {
    pub fn new(db: DbConn, tokens: Arc<dyn TokenService>) -> Self {
        Self { db, tokens }
    }
}

fn query_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

fn insert_err(e: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        return RepoError::Constraint(detail);
    }
    let message = e.to_string();
    if message.contains("duplicate key") || message.contains("unique constraint") {
        return RepoError::Constraint("A post with this slug already exists".to_string());
    }
    query_err(e)
}

#[async_trait]
impl ContentService for PostgresContentService {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        if !self.has_role(post.author_id, Role::Admin).await? {
            tracing::warn!(author_id = %post.author_id, "Insert refused: author is not an admin");
            return Err(RepoError::PermissionDenied(
                "only admins can create blog posts".to_string(),
            ));
        }

        tracing::debug!(slug = %post.slug, status = %post.status, "Inserting blog post");

        let model = blog::ActiveModel::from_new(post, Uuid::new_v4(), Utc::now().into())
            .insert(&self.db)
            .await
            .map_err(insert_err)?;

        BlogPost::try_from(model)
    }

    async fn get_identity(&self, credential: &str) -> Result<Identity, AuthError> {
        self.tokens.verify(credential)
    }

    async fn has_role(&self, identity_id: Uuid, role: Role) -> Result<bool, RepoError> {
        tracing::debug!(user_id = %identity_id, role = %role, "Checking role membership");

        let membership = UserRoleEntity::find()
            .filter(user_role::Column::UserId.eq(identity_id))
            .filter(user_role::Column::Role.eq(role.as_str()))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(membership.is_some())
    }

    async fn list_published(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<BlogPost>, u64), RepoError> {
        let published =
            BlogEntity::find().filter(blog::Column::Status.eq(PostStatus::Published.as_str()));

        let total = published.clone().count(&self.db).await.map_err(query_err)?;

        let rows = published
            .order_by_desc(blog::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        tracing::debug!(offset, limit, total, returned = rows.len(), "Listed published posts");

        let posts = rows
            .into_iter()
            .map(BlogPost::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((posts, total))
    }

    async fn get_by_slug(&self, slug: &str, status: PostStatus) -> Result<BlogPost, RepoError> {
        tracing::debug!(slug, status = %status, "Finding blog post by slug");

        let model = BlogEntity::find()
            .filter(blog::Column::Slug.eq(slug))
            .filter(blog::Column::Status.eq(status.as_str()))
            .one(&self.db)
            .await
            .map_err(query_err)?
            .ok_or(RepoError::NotFound)?;

        BlogPost::try_from(model)
    }

    async fn count_posts(&self) -> Result<u64, RepoError> {
        BlogEntity::find().count(&self.db).await.map_err(query_err)
    }
}
