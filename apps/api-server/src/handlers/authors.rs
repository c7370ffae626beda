//! Author handlers.

use actix_web::{HttpResponse, web};

use blog_shared::dto::CreateAuthorRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/authors
pub async fn list_authors(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.authors.list_all().await?;
    Ok(HttpResponse::Ok().json(authors))
}

/// GET /api/authors/{id}
pub async fn get_author(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let author = state.authors.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(author))
}

/// POST /api/authors
pub async fn create_author(
    state: web::Data<AppState>,
    body: web::Json<CreateAuthorRequest>,
) -> AppResult<HttpResponse> {
    let author = state.authors.create(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(author))
}
