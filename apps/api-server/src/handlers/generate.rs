//! AI blog generation endpoint.

use actix_web::{HttpResponse, web};

use bamboo_shared::dto::GenerateBlogResponse;

use crate::middleware::auth::BearerCredential;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/generate-blog
///
/// The raw body goes to the gateway untouched so that authorization is
/// checked before the body is parsed. If the client disconnects, actix drops
/// this future and the upstream call is abandoned with it.
pub async fn generate_blog(
    state: web::Data<AppState>,
    credential: BearerCredential,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let generation = state.gateway.handle(credential.as_deref(), &body).await?;

    let post = generation.post;
    Ok(HttpResponse::Ok().json(GenerateBlogResponse {
        title: post.title,
        excerpt: post.excerpt,
        content: post.content,
    }))
}
