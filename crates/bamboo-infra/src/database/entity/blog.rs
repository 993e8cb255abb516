//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use bamboo_core::domain::{BlogPost, NewBlogPost};
use bamboo_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub excerpt: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub status: String,
    pub author_id: Uuid,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain post. Fails on an unknown status.
impl TryFrom<Model> for BlogPost {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse()
            .map_err(|e| RepoError::Query(format!("blog {}: {e}", model.id)))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            thumbnail_url: model.thumbnail_url,
            status,
            author_id: model.author_id,
            published_at: model.published_at.map(Into::into),
            created_at: model.created_at.into(),
        })
    }
}

impl ActiveModel {
    /// Insert model for a new post; identity and creation time are assigned here.
    pub fn from_new(post: NewBlogPost, id: Uuid, created_at: DateTimeWithTimeZone) -> Self {
        Self {
            id: Set(id),
            title: Set(post.title),
            slug: Set(post.slug),
            excerpt: Set(post.excerpt),
            content: Set(post.content),
            thumbnail_url: Set(post.thumbnail_url),
            status: Set(post.status.as_str().to_string()),
            author_id: Set(post.author_id),
            published_at: Set(post.published_at.map(Into::into)),
            created_at: Set(created_at),
        }
    }
}
