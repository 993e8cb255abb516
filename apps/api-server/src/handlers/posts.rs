//! Public blog endpoints.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use bamboo_core::domain::{BlogPost, Pagination, PostStatus};
use bamboo_shared::dto::{PostPage, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

pub(crate) fn post_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        slug: post.slug,
        excerpt: post.excerpt,
        content: post.content,
        thumbnail_url: post.thumbnail_url,
        status: post.status.to_string(),
        author_id: post.author_id.to_string(),
        published_at: post.published_at.map(|at| at.to_rfc3339()),
        created_at: post.created_at.to_rfc3339(),
    }
}

/// GET /api/posts?page=N
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let pagination = Pagination::page(query.page.unwrap_or(1));

    let (posts, total) = state
        .content
        .list_published(pagination.offset(), pagination.limit())
        .await?;

    Ok(HttpResponse::Ok().json(PostPage {
        posts: posts.into_iter().map(post_response).collect(),
        page: pagination.page,
        per_page: pagination.per_page,
        total,
        has_more: pagination.has_more(total),
    }))
}

/// GET /api/posts/{slug} - published posts only.
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state
        .content
        .get_by_slug(&slug, PostStatus::Published)
        .await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}
