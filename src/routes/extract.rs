use axum::extract::FromRequest;

use crate::error::Error;

/// `axum::Json` whose rejections render as [`Error`], so malformed bodies get
/// a 400 with the usual `{"message": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);
