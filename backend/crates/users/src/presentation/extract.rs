//! Request Extractors
//!
//! A `Json` replacement whose rejection renders the standard response
//! envelope. axum's own `Json` rejection is a plain-text 422, which
//! would be the one response in the API without `{success, message}`.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::UserError;

/// JSON request body. Deserialization failures become a 400 inside the
/// envelope instead of axum's bare 422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(UserError::InvalidBody(rejection.body_text())),
        }
    }
}
