//! Request extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! - [`AppJson`] -- `axum::Json` with a 400 `{"error", "code"}` rejection.
//! - [`ValidJson`] -- [`AppJson`] plus `validator` checks on the payload.
//! - [`AppPath`] -- `axum::extract::Path`; a malformed UUID segment is a 400.
//! - [`AppQuery`] -- `axum::extract::Query`; a malformed UUID parameter is a 400.

use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// JSON body that has passed its `#[validate(..)]` rules.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}
