//! Custom Axum extractors
//!
//! Both turn rejections into `ApiError::Validation` so every client error
//! carries the same `{"error": ...}` body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract an integer id from path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidId { value: String::new() }))?;

        let id = raw
            .parse::<i32>()
            .map_err(|_| ApiError::Validation(ValidationError::InvalidId { value: raw }))?;

        Ok(Self(id))
    }
}

/// JSON body decoded whatever the `Content-Type` header says.
///
/// Only a body that fails to decode is rejected, with the decoder's message.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: rejection.body_text(),
            })
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: e.to_string(),
            })
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        name: String,
    }

    #[tokio::test]
    async fn malformed_json_is_validation_error() {
        let req = HttpRequest::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let result = JsonBody::<Payload>::from_request(req, &()).await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::MalformedBody { .. }))
        ));
    }

    #[tokio::test]
    async fn body_without_json_content_type_is_accepted() {
        for content_type in [None, Some("application/x-www-form-urlencoded"), Some("text/plain")] {
            let mut builder = HttpRequest::builder().method("POST");
            if let Some(ct) = content_type {
                builder = builder.header("content-type", ct);
            }
            let req = builder.body(Body::from(r#"{"name":"x"}"#)).unwrap();

            let result = JsonBody::<Payload>::from_request(req, &()).await;
            assert!(result.is_ok(), "rejected with content type {content_type:?}");
        }
    }

    #[tokio::test]
    async fn empty_body_is_validation_error() {
        let req = HttpRequest::builder()
            .method("POST")
            .body(Body::empty())
            .unwrap();

        let result = JsonBody::<Payload>::from_request(req, &()).await;
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::MalformedBody { .. }))
        ));
    }
}
