use anyhow::anyhow;
use axum::{
    body::HttpBody,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use skripsi_core::AppError;

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const REQUEST_TIMEOUT_MESSAGE: &str = "Request timed out";

/// Router fallback for paths no module serves.
pub async fn route_not_found() -> AppError {
    AppError::not_found(anyhow!(ROUTE_NOT_FOUND_MESSAGE))
}

fn message_for(status: StatusCode) -> String {
    match status {
        StatusCode::NOT_FOUND => ROUTE_NOT_FOUND_MESSAGE.to_string(),
        StatusCode::METHOD_NOT_ALLOWED => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        StatusCode::REQUEST_TIMEOUT => REQUEST_TIMEOUT_MESSAGE.to_string(),
        other => other.canonical_reason().unwrap_or("Request failed").to_string(),
    }
}

/// Gives bodiless 4xx/5xx responses produced below the handlers (method
/// mismatch, request timeout) the usual `{"message": ...}` body. Headers such
/// as `Allow` are kept.
pub async fn fill_empty_error_body(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error())
        || response.body().size_hint().exact() != Some(0)
    {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    let (json_parts, body) = AppError::new(status, anyhow!(message_for(status)))
        .into_response()
        .into_parts();

    parts.headers.remove(header::CONTENT_LENGTH);
    if let Some(content_type) = json_parts.headers.get(header::CONTENT_TYPE) {
        parts.headers.insert(header::CONTENT_TYPE, content_type.clone());
    }

    Response::from_parts(parts, body)
}
