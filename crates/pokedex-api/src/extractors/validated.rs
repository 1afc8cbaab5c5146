//! Extractors that deserialize and then run `validator` rules.
//!
//! Both reject with a 400 carrying the first problem found, whether it is
//! malformed input, an undeclared field, or a failed rule.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use pokedex_core::error::AppError;

use crate::error::ApiError;

/// JSON body that has passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Query string that has passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

fn validation_error(errors: ValidationErrors) -> ApiError {
    ApiError(AppError::bad_request(errors.to_string()))
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError(AppError::bad_request(rejection.body_text())))?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError(AppError::bad_request(rejection.body_text())))?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}
