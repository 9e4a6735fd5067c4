// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, HealthDto};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, response::Redirect, routing::get};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::health::health,
        crate::presentation::http::controllers::articles::latest_article
    ),
    components(schemas(HealthDto, ArticleDto, ErrorResponse)),
    tags(
        (name = "Articles", description = "Published article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Gazette API",
        description = "Site backend: liveness and published articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
