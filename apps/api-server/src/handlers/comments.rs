//! Comment handlers.

use actix_web::{HttpResponse, web};

use blog_shared::dto::CreateCommentRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/{post_id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let comment = state
        .comments
        .create(body.into_inner(), path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}
