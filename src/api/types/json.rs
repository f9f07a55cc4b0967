//! Custom JSON extractor that returns errors as JSON
//!
//! Wraps `axum::Json` so body rejections match the service's error format:
//! a request without a JSON content type is answered with the same
//! `Request must be JSON` message the clients already handle.

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiErrorBody;

#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// JSON rejection error that returns the API error format
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.message,
            details: None,
        };

        (self.status, AxumJson(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(reject(&rejection)),
        }
    }
}

fn reject(rejection: &axum::extract::rejection::JsonRejection) -> JsonRejection {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        MissingJsonContentType(_) => JsonRejection {
            status: StatusCode::BAD_REQUEST,
            message: "Request must be JSON".to_string(),
        },
        JsonSyntaxError(err) => JsonRejection {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid JSON syntax: {}", err.body_text()),
        },
        JsonDataError(err) => JsonRejection {
            status: rejection.status(),
            message: format!("Invalid JSON data: {}", err.body_text()),
        },
        BytesRejection(err) => JsonRejection {
            status: rejection.status(),
            message: format!("Failed to read request body: {}", err.body_text()),
        },
        _ => JsonRejection {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid JSON request".to_string(),
        },
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}
