use std::sync::Arc;

use ldp_common::{Handler, ResourceIdentifier};
use serde::{Deserialize, Serialize};

use crate::{
    APPLICATION_JSON, Data, HttpError, HttpErrorKind, INTERNAL_ERROR, Representation,
    RepresentationPreferences, TEXT_PLAIN,
};

mod error_to_json;
pub use error_to_json::*;

mod error_to_text;
pub use error_to_text::*;

mod negotiating;
pub use negotiating::*;

/// Input of a [`RepresentationConverter`].
#[derive(Debug)]
pub struct RepresentationConverterArgs {
    /// The resource the representation belongs to.
    pub identifier: ResourceIdentifier,
    /// The representation to convert.
    pub representation: Representation,
    /// What the client wants to receive.
    pub preferences: RepresentationPreferences,
}

/// Converts a [`Representation`] into a content type the client prefers.
pub trait RepresentationConverter:
    Handler<RepresentationConverterArgs, Output = Representation, Error = HttpError>
{
}

impl<T> RepresentationConverter for T where
    T: Handler<RepresentationConverterArgs, Output = Representation, Error = HttpError> + ?Sized
{
}

/// The converters shipped with this crate, negotiated against the client's
/// preferences. JSON wins ties with plain text.
pub fn error_converters() -> NegotiatingConverter {
    NegotiatingConverter::default()
        .with_converter(APPLICATION_JSON, Arc::new(ErrorToJsonConverter))
        .with_converter(TEXT_PLAIN, Arc::new(ErrorToTextConverter))
}

/// How an error looks inside an internal error representation.
///
/// `stack` is only present when traces may be disclosed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPresentation {
    /// The name of the error.
    pub name: String,
    /// The message of the error.
    pub message: String,
    /// Where the error happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorPresentation {
    /// Present `error`, dropping its trace unless `show_stack_trace` is set.
    pub fn new(error: &HttpError, show_stack_trace: bool) -> Self {
        Self {
            name: error.name().to_owned(),
            message: error.message().to_owned(),
            stack: error
                .trace()
                .filter(|_| show_stack_trace)
                .map(str::to_owned),
        }
    }

    /// `stack` when present, `name: message` otherwise.
    pub fn describe(&self) -> String {
        match &self.stack {
            Some(stack) => stack.clone(),
            None => format!("{}: {}", self.name, self.message),
        }
    }
}

/// Check that `args` holds an internal error representation and that the
/// client accepts `target`.
pub(crate) fn check_error_conversion(
    args: &RepresentationConverterArgs,
    target: &str,
) -> Result<(), HttpError> {
    let content_type = args.representation.metadata.content_type();
    if content_type != Some(INTERNAL_ERROR) {
        return Err(HttpError::unsupported_media_type(format!(
            "Can only convert {INTERNAL_ERROR}, not {}",
            content_type.unwrap_or("untyped data")
        )));
    }
    if !args.preferences.accepts(target) {
        return Err(HttpError::not_acceptable(format!("{target} is not acceptable")));
    }
    Ok(())
}

/// The error carried by an internal error representation.
pub(crate) fn presented_error(data: Data) -> Result<ErrorPresentation, HttpError> {
    match data {
        Data::Objects(objects) => {
            let value = objects
                .into_iter()
                .next()
                .ok_or_else(|| HttpError::internal("Error representation is empty"))?;
            Ok(serde_json::from_value(value)?)
        }
        Data::Binary(_) => Err(HttpError::new(
            HttpErrorKind::UnsupportedMediaType,
            "Error representations carry objects",
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::ErrorPresentation;
    use crate::HttpError;

    #[test]
    fn it_omits_the_stack_unless_disclosure_is_enabled() -> Result<(), serde_json::Error> {
        let error = HttpError::generic("boom").with_trace("Error: boom\n at f()");

        assert_eq!(
            serde_json::to_value(ErrorPresentation::new(&error, false))?,
            json!({ "name": "Error", "message": "boom" })
        );
        assert_eq!(
            serde_json::to_value(ErrorPresentation::new(&error, true))?,
            json!({ "name": "Error", "message": "boom", "stack": "Error: boom\n at f()" })
        );
        Ok(())
    }

    #[test]
    fn it_describes_itself_by_stack_or_by_name_and_message() {
        let error = HttpError::not_found("/missing");
        assert_eq!(
            ErrorPresentation::new(&error, true).describe(),
            "NotFoundHttpError: /missing"
        );
    }
}
