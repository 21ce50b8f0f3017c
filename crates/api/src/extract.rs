//! Request extractors whose rejections are reported as [`AppError`].
//!
//! Axum's stock `Json` and `Path` extractors answer malformed input with a
//! plain-text body. These wrappers route the rejection through [`AppError`]
//! so every error response shares the same JSON shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
