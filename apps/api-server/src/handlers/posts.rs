//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_shared::dto::CreatePostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts - posts with authors, without comments.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id} - one post with its comments.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}
