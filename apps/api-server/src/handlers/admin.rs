//! Admin endpoints: saving posts, dashboard figures and the UI access check.

use actix_web::{HttpResponse, web};

use bamboo_core::domain::{PostDraft, PostStatus};
use bamboo_core::{Composer, check_access, dashboard_stats};
use bamboo_shared::dto::{AccessResponse, CreatePostRequest, StatsResponse};

use super::posts::post_response;
use crate::middleware::auth::BearerCredential;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/admin/posts
pub async fn create_post(
    state: web::Data<AppState>,
    credential: BearerCredential,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let derive_slug = req.slug.is_none();

    let draft = PostDraft {
        title: req.title,
        slug: req.slug.unwrap_or_default(),
        excerpt: req.excerpt,
        content: req.content,
        thumbnail_url: req.thumbnail_url,
        status: req
            .status
            .unwrap_or_else(|| PostStatus::Draft.as_str().to_string()),
    };

    let mut composer = Composer::new(
        state.content.clone(),
        state.generator(),
        credential.into_inner(),
    )
    .with_draft(draft);
    if derive_slug {
        composer.rederive_slug();
    }

    let post = composer.save().await?;
    Ok(HttpResponse::Created().json(post_response(post)))
}

/// GET /api/admin/stats
pub async fn stats(
    state: web::Data<AppState>,
    credential: BearerCredential,
) -> AppResult<HttpResponse> {
    let stats = dashboard_stats(state.content.as_ref(), credential.as_deref()).await?;
    Ok(HttpResponse::Ok().json(StatsResponse { blogs: stats.blogs }))
}

/// GET /api/admin/access
pub async fn access(state: web::Data<AppState>, credential: BearerCredential) -> HttpResponse {
    let access = check_access(state.content.as_ref(), credential.as_deref()).await;

    HttpResponse::Ok().json(AccessResponse {
        authenticated: access.authenticated,
        is_admin: access.is_admin,
    })
}
