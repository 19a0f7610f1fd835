use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use ldp_common::{Handler, ResourceIdentifier};
use ldp_rdf::{Literal, vocab::http as http_vocab};

use crate::{
    Data, ErrorHandlerInput, ErrorMetadataCollector, ErrorPresentation, HttpError,
    INTERNAL_ERROR, Representation, RepresentationConverter, RepresentationConverterArgs,
    RepresentationMetadata, ResponseDescription, collect_metadata,
};

/// Answers errors in whatever format the client prefers.
///
/// The error is wrapped in an `internal/error` representation that records
/// the status code as `http:statusCodeNumber`, and handed to a
/// [`RepresentationConverter`]. Traces are stripped from the representation
/// unless stack traces are enabled.
///
/// Only [`handle_safe`](Handler::handle_safe) consults the metadata
/// collector. A failing collector is logged and otherwise ignored.
pub struct ConvertingErrorHandler<Converter> {
    converter: Converter,
    show_stack_trace: bool,
    metadata_collector: Option<Arc<dyn ErrorMetadataCollector>>,
}

impl<Converter> ConvertingErrorHandler<Converter>
where
    Converter: RepresentationConverter,
{
    /// Convert errors with `converter`. Stack traces stay hidden.
    pub fn new(converter: Converter) -> Self {
        Self {
            converter,
            show_stack_trace: false,
            metadata_collector: None,
        }
    }

    /// Whether traces may be shown to clients.
    pub fn with_stack_trace(mut self, show_stack_trace: bool) -> Self {
        self.show_stack_trace = show_stack_trace;
        self
    }

    /// Add metadata from `collector` to converted responses.
    pub fn with_metadata_collector(mut self, collector: Arc<dyn ErrorMetadataCollector>) -> Self {
        self.metadata_collector = Some(collector);
        self
    }

    fn prepare(
        &self,
        input: &ErrorHandlerInput,
    ) -> Result<(StatusCode, RepresentationConverterArgs), HttpError> {
        let status_code = input.error.status_code();

        let mut metadata = RepresentationMetadata::new(INTERNAL_ERROR);
        metadata.add(
            http_vocab::STATUS_CODE_NUMBER,
            Literal::integer(i64::from(status_code.as_u16())),
        );

        let presentation = ErrorPresentation::new(&input.error, self.show_stack_trace);
        let identifier = ResourceIdentifier::new(metadata.identifier().value());

        Ok((
            status_code,
            RepresentationConverterArgs {
                identifier,
                representation: Representation::objects(
                    metadata,
                    vec![serde_json::to_value(presentation)?],
                ),
                preferences: input.preferences.clone(),
            },
        ))
    }
}

fn create_response(
    status_code: StatusCode,
    converted: Representation,
) -> Result<ResponseDescription, HttpError> {
    let Data::Binary(data) = converted.data else {
        return Err(HttpError::internal("Converted error representation is not serialized"));
    };

    Ok(ResponseDescription {
        status_code,
        metadata: Some(converted.metadata),
        data: Some(data),
    })
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Converter> Handler<ErrorHandlerInput> for ConvertingErrorHandler<Converter>
where
    Converter: RepresentationConverter,
{
    type Output = ResponseDescription;
    type Error = HttpError;

    async fn can_handle(&self, input: &ErrorHandlerInput) -> Result<(), HttpError> {
        let (_, args) = self.prepare(input)?;
        self.converter.can_handle(&args).await
    }

    async fn handle(&self, input: ErrorHandlerInput) -> Result<ResponseDescription, HttpError> {
        let (status_code, args) = self.prepare(&input)?;
        let converted = self.converter.handle(args).await?;
        create_response(status_code, converted)
    }

    async fn handle_safe(&self, input: ErrorHandlerInput) -> Result<ResponseDescription, HttpError> {
        let (status_code, args) = self.prepare(&input)?;
        let mut converted = self.converter.handle_safe(args).await?;

        if let (Some(collector), Some(request)) = (&self.metadata_collector, &input.request) {
            collect_metadata(collector.as_ref(), request, &mut converted.metadata).await;
        }

        create_response(status_code, converted)
    }
}
