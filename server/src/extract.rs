//! Request extraction that defers to the resources.
//!
//! Ids arrive as raw path segments and request bodies as [`Payload`], so a
//! segment that is not a number or a body that does not decode never
//! short-circuits the lookup. An unknown todo or item still answers 404,
//! and a bad body answers 422 with a `{"message": ..}` body.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use todo_core::{NotFound, ResourceError, TodoId};

use crate::error::AppError;

/// Parses an id segment. Anything that is not an id names no row.
pub fn id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

pub fn todo_id(raw: &str) -> Result<TodoId, ResourceError> {
    id(raw).ok_or_else(|| NotFound::todo(raw).into())
}

/// JSON request body that never rejects on its own.
///
/// An empty body decodes as `T::default()`, i.e. no attributes supplied.
/// The content type is not checked. A body that does not decode is kept as
/// an error until the handler has resolved what the path names.
#[derive(Debug)]
pub struct Payload<T>(Result<T, String>);

impl<T> Payload<T> {
    pub fn into_inner(self) -> Result<T, AppError> {
        self.0.map_err(AppError::Body)
    }

    /// Returns the decoded body, or runs `resolve` and then reports the
    /// body error. A failed lookup in `resolve` wins.
    pub fn after<R>(
        self,
        resolve: impl FnOnce() -> Result<R, ResourceError>,
    ) -> Result<T, AppError> {
        match self.0 {
            Ok(input) => Ok(input),
            Err(detail) => {
                resolve()?;
                Err(AppError::Body(detail))
            }
        }
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => return Ok(Self(Err(rejection.body_text()))),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Ok(T::default())));
        }
        let decoded = Json::<T>::from_bytes(&bytes)
            .map(|Json(input)| input)
            .map_err(|rejection| rejection.body_text());
        Ok(Self(decoded))
    }
}
