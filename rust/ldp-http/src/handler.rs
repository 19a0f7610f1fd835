use ldp_common::Handler;

use crate::{HttpError, HttpRequest, RepresentationPreferences, ResponseDescription};

mod converting;
pub use converting::*;

mod safe;
pub use safe::*;

/// Input of an [`ErrorHandler`].
#[derive(Debug, Clone)]
pub struct ErrorHandlerInput {
    /// The failure to answer.
    pub error: HttpError,
    /// What the client wants to receive.
    pub preferences: RepresentationPreferences,
    /// The request that failed, when it got far enough to be parsed.
    pub request: Option<HttpRequest>,
}

impl ErrorHandlerInput {
    /// Answer `error` with no preferences and no request.
    pub fn new(error: impl Into<HttpError>) -> Self {
        Self {
            error: error.into(),
            preferences: RepresentationPreferences::default(),
            request: None,
        }
    }

    /// Answer `error` raised while serving `request`, negotiating with the
    /// preferences its `Accept` headers state.
    pub fn from_request(error: impl Into<HttpError>, request: HttpRequest) -> Self {
        Self {
            error: error.into(),
            preferences: request.preferences(),
            request: Some(request),
        }
    }

    /// Set the preferences of the client.
    pub fn with_preferences(mut self, preferences: RepresentationPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Set the request that failed.
    pub fn with_request(mut self, request: HttpRequest) -> Self {
        self.request = Some(request);
        self
    }
}

/// Turns a failure into a [`ResponseDescription`].
pub trait ErrorHandler:
    Handler<ErrorHandlerInput, Output = ResponseDescription, Error = HttpError>
{
}

impl<T> ErrorHandler for T where
    T: Handler<ErrorHandlerInput, Output = ResponseDescription, Error = HttpError> + ?Sized
{
}
