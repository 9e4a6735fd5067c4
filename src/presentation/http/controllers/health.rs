use crate::application::dto::HealthDto;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderName, header},
};

/// Liveness probe. The payload is computed per request and must never be
/// stored by intermediaries.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive.", body = HealthDto,
            headers(("cache-control" = String, description = "Always `no-store`.")))
    ),
    tag = "System"
)]
pub async fn health(
    Extension(state): Extension<HttpState>,
) -> ([(HeaderName, &'static str); 1], Json<HealthDto>) {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(state.services.health.check()),
    )
}
