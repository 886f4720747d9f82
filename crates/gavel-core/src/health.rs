use axum::http::StatusCode;

/// `GET /healthz`: the process is up and serving. Readiness is service-specific.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
