use axum::http::StatusCode;

/// `GET /healthz`: the process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` for services without dependencies worth probing.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
