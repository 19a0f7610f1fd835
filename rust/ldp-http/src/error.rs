//! HTTP errors and the mapping from failures to status codes.

use std::{backtrace::Backtrace, backtrace::BacktraceStatus, borrow::Cow};

use http::StatusCode;
use ldp_authorization::AuthorizationError;
use ldp_common::UnsupportedInputError;
use serde::Serialize;
use thiserror::Error;

/// Classification of HTTP errors.
///
/// Each kind maps to an HTTP status code via [`HttpErrorKind::status_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HttpErrorKind {
    // 4xx
    /// The request is malformed
    BadRequest,
    /// The requester must authenticate
    Unauthorized,
    /// The requester is not allowed to do this
    Forbidden,
    /// The resource does not exist
    NotFound,
    /// The method is not supported on the resource
    MethodNotAllowed,
    /// No representation matches the preferences
    NotAcceptable,
    /// The request conflicts with the state of the resource
    Conflict,
    /// A precondition of the request does not hold
    PreconditionFailed,
    /// The content type of the input is not supported
    UnsupportedMediaType,

    // 5xx
    /// Something went wrong on the server
    Internal,
    /// The server does not implement the requested functionality
    NotImplemented,
}

impl HttpErrorKind {
    /// Get the HTTP status code for this kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HttpErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            HttpErrorKind::Forbidden => StatusCode::FORBIDDEN,
            HttpErrorKind::NotFound => StatusCode::NOT_FOUND,
            HttpErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HttpErrorKind::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            HttpErrorKind::Conflict => StatusCode::CONFLICT,
            HttpErrorKind::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
            HttpErrorKind::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            HttpErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            HttpErrorKind::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }

    /// The name errors of this kind carry.
    pub fn name(&self) -> &'static str {
        match self {
            HttpErrorKind::BadRequest => "BadRequestHttpError",
            HttpErrorKind::Unauthorized => "UnauthorizedHttpError",
            HttpErrorKind::Forbidden => "ForbiddenHttpError",
            HttpErrorKind::NotFound => "NotFoundHttpError",
            HttpErrorKind::MethodNotAllowed => "MethodNotAllowedHttpError",
            HttpErrorKind::NotAcceptable => "NotAcceptableHttpError",
            HttpErrorKind::Conflict => "ConflictHttpError",
            HttpErrorKind::PreconditionFailed => "PreconditionFailedHttpError",
            HttpErrorKind::UnsupportedMediaType => "UnsupportedMediaTypeHttpError",
            HttpErrorKind::Internal => "InternalServerError",
            HttpErrorKind::NotImplemented => "NotImplementedHttpError",
        }
    }
}

/// A failure on its way to becoming a response.
///
/// Carries a [`HttpErrorKind`] (and so a status code), a name, a message and
/// optionally a trace describing where the failure happened. Whether the
/// trace is ever shown to the client is decided by the error handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}: {message}")]
pub struct HttpError {
    kind: HttpErrorKind,
    name: Cow<'static, str>,
    message: String,
    trace: Option<String>,
}

impl HttpError {
    /// Create an error of the given kind.
    pub fn new(kind: HttpErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            name: Cow::Borrowed(kind.name()),
            message: message.into(),
            trace: None,
        }
    }

    /// An unclassified failure: named `Error`, answered with a 500.
    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            name: Cow::Borrowed("Error"),
            ..Self::new(HttpErrorKind::Internal, message)
        }
    }

    /// Classify an arbitrary error with [`status_code_of`]. The result keeps
    /// the original message. Unclassified errors get a trace of the call
    /// site when backtraces are enabled.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        if let Some(error) = error.downcast_ref::<HttpError>() {
            return error.clone();
        }
        if let Some(error) = error.downcast_ref::<AuthorizationError>() {
            return error.clone().into();
        }
        if let Some(error) = error.downcast_ref::<UnsupportedInputError>() {
            return error.clone().into();
        }
        Self::generic(error.to_string()).capture_trace()
    }

    /// Attach a trace.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Attach a backtrace of the current call site, when backtraces are
    /// enabled for the process.
    pub fn capture_trace(self) -> Self {
        let backtrace = Backtrace::capture();
        match backtrace.status() {
            BacktraceStatus::Captured => {
                let trace = format!("{self}\n{backtrace}");
                self.with_trace(trace)
            }
            _ => self,
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> HttpErrorKind {
        self.kind
    }

    /// The status code responses to this error carry.
    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    /// The name of this error.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The trace of this error, if one was attached.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    // Convenience constructors for common errors

    /// The request is malformed.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::BadRequest, message)
    }

    /// The resource does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::NotFound, message)
    }

    /// No representation matches the preferences.
    pub fn not_acceptable(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::NotAcceptable, message)
    }

    /// The content type of the input is not supported.
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::UnsupportedMediaType, message)
    }

    /// Something went wrong on the server.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::Internal, message)
    }
}

/// Map any error to the status code a response to it should carry.
///
/// Errors of this workspace map according to their kind; anything else is
/// an internal server error.
pub fn status_code_of(error: &(dyn std::error::Error + 'static)) -> StatusCode {
    HttpError::from_error(error).status_code()
}

impl From<UnsupportedInputError> for HttpError {
    fn from(value: UnsupportedInputError) -> Self {
        HttpError::new(HttpErrorKind::NotImplemented, value.0)
    }
}

impl From<AuthorizationError> for HttpError {
    fn from(value: AuthorizationError) -> Self {
        let kind = match &value {
            AuthorizationError::Unsupported(_) | AuthorizationError::UnknownMode(_) => {
                HttpErrorKind::BadRequest
            }
            AuthorizationError::Unauthorized { .. } => HttpErrorKind::Unauthorized,
            AuthorizationError::Forbidden { .. } => HttpErrorKind::Forbidden,
            AuthorizationError::Store { .. } => HttpErrorKind::Internal,
        };
        HttpError::new(kind, value.to_string())
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(value: serde_json::Error) -> Self {
        HttpError::internal(format!("Could not serialize error: {value}"))
    }
}
