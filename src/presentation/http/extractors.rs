// src/presentation/http/extractors.rs
//
// Requester identity for delete operations. There is no real authentication
// layer; callers identify themselves with the `x-user-id` header or a
// `userId` query parameter. Swapping in real auth means replacing this
// extractor, nothing below it changes.
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::application::error::ApplicationError;

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Requester(pub String);

#[derive(Debug, Deserialize)]
struct IdentityParams {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(value) = parts.headers.get("x-user-id").and_then(|v| v.to_str().ok()) {
            if !value.trim().is_empty() {
                return Ok(Self(value.to_string()));
            }
        }

        let Query(params) = Query::<IdentityParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| authentication_required())?;

        match params.user_id {
            Some(user_id) if !user_id.trim().is_empty() => Ok(Self(user_id)),
            _ => Err(authentication_required()),
        }
    }
}

fn authentication_required() -> HttpError {
    HttpError::from_error(ApplicationError::unauthorized("authentication required"))
}
