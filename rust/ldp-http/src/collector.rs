use ldp_common::Handler;

use crate::{HttpError, HttpRequest, MetadataDelta, RepresentationMetadata};

mod ticket;
pub use ticket::*;

/// Input of an [`ErrorMetadataCollector`].
#[derive(Debug, Clone)]
pub struct ErrorMetadataCollectorInput {
    /// The request that failed.
    pub request: HttpRequest,
    /// The metadata of the error response so far.
    pub metadata: RepresentationMetadata,
}

/// Derives extra metadata for an error response from the request that
/// caused it.
///
/// Collectors return the statements to add; the error handlers fold them
/// into the response metadata.
pub trait ErrorMetadataCollector:
    Handler<ErrorMetadataCollectorInput, Output = MetadataDelta, Error = HttpError>
{
}

impl<T> ErrorMetadataCollector for T where
    T: Handler<ErrorMetadataCollectorInput, Output = MetadataDelta, Error = HttpError> + ?Sized
{
}

/// Run `collector` and fold its statements into `metadata`. A failing
/// collector leaves `metadata` as it was.
pub(crate) async fn collect_metadata(
    collector: &dyn ErrorMetadataCollector,
    request: &HttpRequest,
    metadata: &mut RepresentationMetadata,
) {
    let input = ErrorMetadataCollectorInput {
        request: request.clone(),
        metadata: metadata.clone(),
    };

    match collector.handle_safe(input).await {
        Ok(delta) => metadata.extend(delta),
        Err(error) => {
            tracing::debug!(error = %error, "Error metadata collection failed");
        }
    }
}
