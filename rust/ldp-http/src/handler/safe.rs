use std::{panic::AssertUnwindSafe, sync::Arc};

use async_trait::async_trait;
use futures_util::FutureExt;
use ldp_common::Handler;
use ldp_rdf::{Literal, vocab::http as http_vocab};

use crate::{
    ErrorHandler, ErrorHandlerInput, ErrorMetadataCollector, ErrorPresentation, HttpError,
    RepresentationMetadata, ResponseDescription, TEXT_PLAIN, body_from, collect_metadata,
};

/// Last line of defence on the error path.
///
/// Delegates to the wrapped [`ErrorHandler`] and, should that fail or
/// panic, answers with a plain-text description of the original error. It
/// never returns an error itself.
pub struct SafeErrorHandler<Inner> {
    error_handler: Inner,
    show_stack_trace: bool,
    metadata_collector: Option<Arc<dyn ErrorMetadataCollector>>,
}

impl<Inner> SafeErrorHandler<Inner>
where
    Inner: ErrorHandler,
{
    /// Guard `error_handler`. Stack traces stay hidden.
    pub fn new(error_handler: Inner) -> Self {
        Self {
            error_handler,
            show_stack_trace: false,
            metadata_collector: None,
        }
    }

    /// Whether the fallback body may contain the trace of the error.
    pub fn with_stack_trace(mut self, show_stack_trace: bool) -> Self {
        self.show_stack_trace = show_stack_trace;
        self
    }

    /// Add metadata from `collector` to fallback responses.
    pub fn with_metadata_collector(mut self, collector: Arc<dyn ErrorMetadataCollector>) -> Self {
        self.metadata_collector = Some(collector);
        self
    }

    /// Answer the error in `input`.
    pub async fn respond(&self, input: ErrorHandlerInput) -> ResponseDescription {
        let error = input.error.clone();
        let request = input.request.clone();

        match AssertUnwindSafe(self.error_handler.handle_safe(input))
            .catch_unwind()
            .await
        {
            Ok(Ok(response)) => return response,
            Ok(Err(failure)) => {
                tracing::debug!(error = %failure, "Recovering from error handler failure");
            }
            Err(_) => {
                tracing::debug!("Recovering from error handler panic");
            }
        }

        let status_code = error.status_code();
        let mut metadata = RepresentationMetadata::new(TEXT_PLAIN);
        metadata.add(
            http_vocab::STATUS_CODE_NUMBER,
            Literal::integer(i64::from(status_code.as_u16())),
        );
        if let (Some(collector), Some(request)) = (&self.metadata_collector, &request) {
            collect_metadata(collector.as_ref(), request, &mut metadata).await;
        }

        let text = ErrorPresentation::new(&error, self.show_stack_trace).describe();

        ResponseDescription {
            status_code,
            metadata: Some(metadata),
            data: Some(body_from(format!("{text}\n"))),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Inner> Handler<ErrorHandlerInput> for SafeErrorHandler<Inner>
where
    Inner: ErrorHandler,
{
    type Output = ResponseDescription;
    type Error = HttpError;

    async fn handle(&self, input: ErrorHandlerInput) -> Result<ResponseDescription, HttpError> {
        Ok(self.respond(input).await)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, sync::Arc};

    use async_trait::async_trait;
    use http::{Method, StatusCode};
    use ldp_authorization::{AccessMode, AuthorizationError};
    use ldp_common::Handler;
    use ldp_rdf::{
        Literal, NamedNode, Term,
        vocab::{acl, auth, http as http_vocab},
    };
    use pretty_assertions::assert_eq;
    use testresult::TestResult;
    use url::Url;

    use crate::{
        ConvertingErrorHandler, ErrorHandlerInput, HttpError, HttpRequest, Representation,
        RepresentationConverterArgs, ResponseDescription, SafeErrorHandler, TEXT_PLAIN,
        TicketMetadataCollector, read_to_end,
    };

    struct Broken;

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl Handler<RepresentationConverterArgs> for Broken {
        type Output = Representation;
        type Error = HttpError;

        async fn handle(&self, _: RepresentationConverterArgs) -> Result<Representation, HttpError> {
            Err(HttpError::internal("converter exploded"))
        }
    }

    struct Panicking;

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl Handler<RepresentationConverterArgs> for Panicking {
        type Output = Representation;
        type Error = HttpError;

        async fn handle(&self, _: RepresentationConverterArgs) -> Result<Representation, HttpError> {
            panic!("converter panicked")
        }
    }

    async fn body(response: ResponseDescription) -> String {
        let data = read_to_end(response.data.expect("data")).await.expect("body");
        String::from_utf8(data.to_vec()).expect("utf-8 body")
    }

    fn boom() -> HttpError {
        HttpError::generic("boom").with_trace("Error: boom\n at f()")
    }

    #[tokio::test]
    async fn it_falls_back_to_name_and_message() -> TestResult {
        let handler = SafeErrorHandler::new(ConvertingErrorHandler::new(Broken));

        let response = handler.handle_safe(ErrorHandlerInput::new(boom())).await?;

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        let metadata = response.metadata.clone().expect("metadata");
        assert_eq!(metadata.content_type(), Some(TEXT_PLAIN));
        assert_eq!(
            metadata.get(&http_vocab::STATUS_CODE_NUMBER),
            Some(&Term::from(Literal::integer(500)))
        );
        assert_eq!(body(response).await, "Error: boom\n");
        Ok(())
    }

    #[tokio::test]
    async fn it_shows_the_trace_when_enabled() -> TestResult {
        let handler =
            SafeErrorHandler::new(ConvertingErrorHandler::new(Broken)).with_stack_trace(true);

        let response = handler.respond(ErrorHandlerInput::new(boom())).await;

        assert_eq!(body(response).await, "Error: boom\n at f()\n");
        Ok(())
    }

    #[tokio::test]
    async fn it_survives_a_panicking_converter() {
        let handler = SafeErrorHandler::new(ConvertingErrorHandler::new(Panicking));
        let error = AuthorizationError::Forbidden {
            identifier: "/a".into(),
            web_id: "https://ex.org/bob#me".into(),
            missing: BTreeSet::from([AccessMode::Write]),
        };

        let response = handler.respond(ErrorHandlerInput::new(error)).await;

        assert_eq!(response.status_code, StatusCode::FORBIDDEN);
        assert_eq!(
            body(response).await,
            "ForbiddenHttpError: Agent https://ex.org/bob#me may not write on /a\n"
        );
    }

    #[tokio::test]
    async fn it_adds_ticket_metadata_to_the_fallback() -> TestResult {
        let handler = SafeErrorHandler::new(ConvertingErrorHandler::new(Broken))
            .with_metadata_collector(Arc::new(TicketMetadataCollector));
        let request = HttpRequest::new(Method::GET, Url::parse("https://ex.org/a")?);

        let response = handler
            .respond(ErrorHandlerInput::new(boom()).with_request(request))
            .await;

        let metadata = response.metadata.expect("metadata");
        assert_eq!(
            metadata.get(&auth::TICKET_SUBJECT),
            Some(&Term::from(NamedNode::new("https://ex.org/a")))
        );
        assert_eq!(
            metadata.get_all(&auth::TICKET_NEEDS).cloned().collect::<Vec<_>>(),
            vec![Term::from(acl::READ)]
        );
        Ok(())
    }
}
