// src/presentation/http/error.rs
use crate::application::{ResponderResult, error::ResponderError};
use crate::domain::fault::{Fault, MessageBag};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Last-resort mapping for errors the responder hands back to the framework.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<MessageBag>,
}

impl HttpError {
    pub fn from_error(err: ResponderError) -> Self {
        match err {
            ResponderError::Raised(Fault::Validation(validation)) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: validation.message().to_owned(),
                errors: Some(validation.errors().clone()),
            },
            other => {
                tracing::error!(error = %other, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Server Error".into())
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: None,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            message: self.message,
            errors: self.errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<MessageBag>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ResponderResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
