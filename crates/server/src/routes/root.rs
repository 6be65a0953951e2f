use axum::http::StatusCode;

/// Landing endpoint for load balancers and uptime checks
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Office portal API is running", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Office portal API")
}
