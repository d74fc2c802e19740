//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    middleware::Next,
    response::Response,
};

/// The number of bytes of a request or response body that are logged at the
/// `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
/// Bodies that are not valid UTF-8 are logged lossily but forwarded unchanged.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (headers, body) = extract_header_and_body_from_request(request).await;
    log_request(&headers, &String::from_utf8_lossy(&body));

    let request = Request::from_parts(headers, Body::from(body));
    let response = next.run(request).await;

    let (headers, body) = extract_header_and_body_from_response(response).await;
    log_response(&headers, &String::from_utf8_lossy(&body));

    Response::from_parts(headers, Body::from(body))
}

async fn extract_header_and_body_from_request(
    request: Request,
) -> (axum::http::request::Parts, Bytes) {
    let (headers, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read request body: {error}"))
        .unwrap_or_default();

    (headers, body_bytes)
}

async fn extract_header_and_body_from_response(
    response: Response,
) -> (axum::http::response::Parts, Bytes) {
    let (headers, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read response body: {error}"))
        .unwrap_or_default();

    (headers, body_bytes)
}

/// The first [LOG_BODY_LENGTH_LIMIT] bytes of `body`, shortened further if
/// needed so that a multi-byte character is not split.
fn truncate_body(body: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(body.len());

    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(headers: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {headers:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {headers:#?}\nbody: {body:?}");
    }
}

fn log_response(headers: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {headers:#?}\nbody: {:}...",
            truncate_body(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {headers:#?}\nbody: {body:?}");
    }
}
