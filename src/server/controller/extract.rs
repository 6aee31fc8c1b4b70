//! Request extractors that report rejections through `AppError`.
//!
//! Axum's stock `Json` and `Path` extractors answer malformed input with plain-text
//! bodies. These wrappers keep the same parsing but route rejections through
//! `AppError::BadRequest`, so clients always receive the JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor with `AppError` rejections.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor with `AppError` rejections.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
