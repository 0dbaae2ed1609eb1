//! One-shot request helpers for exercising a `Router` in-process.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use crate::auth::MockAuth;

/// Build a request, optionally authenticated and carrying a JSON body.
pub fn request<B: Serialize>(
    method: Method,
    uri: &str,
    auth: Option<&MockAuth>,
    body: Option<&B>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        for (name, value) in &auth.headers() {
            builder = builder.header(name, value);
        }
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn get(uri: &str, auth: Option<&MockAuth>) -> Request<Body> {
    request::<()>(Method::GET, uri, auth, None)
}

/// Drive `app` with a single request.
pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send and return status plus decoded envelope.
pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send(app, request).await;
    let status = response.status();
    (status, body_json(response).await)
}
