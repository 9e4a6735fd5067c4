// src/presentation/http/controllers/articles.rs
use crate::application::{dto::ArticleDto, error::ApplicationError};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/articles/latest",
    responses(
        (status = 200, description = "Most recently published article.", body = ArticleDto),
        (status = 404, description = "No article has been published yet.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Database failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn latest_article(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .latest_published()
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::not_found("no published article"))
        })
}
