//! CORS preflight handling.
//!
//! `CorsLayer` answers well-formed preflight requests itself. Any other `OPTIONS`
//! request reaching the application is answered here with an empty 200, whatever the
//! path, instead of the router's 404/405.

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Short-circuits every `OPTIONS` request with an empty 200 response.
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}
