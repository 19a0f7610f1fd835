use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    ConvertingErrorHandler, ErrorMetadataCollector, RepresentationConverter, SafeErrorHandler,
};

/// Settings of the error handling chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorHandlerConfig {
    /// Whether clients may see the traces of errors. Off by default.
    pub show_stack_trace: bool,
}

impl ErrorHandlerConfig {
    /// Set whether clients may see the traces of errors.
    pub fn with_stack_trace(mut self, show_stack_trace: bool) -> Self {
        self.show_stack_trace = show_stack_trace;
        self
    }

    /// Build the standard chain: a [`ConvertingErrorHandler`] using
    /// `converter`, guarded by a [`SafeErrorHandler`]. Both consult
    /// `metadata_collector` when one is given.
    pub fn build<Converter>(
        &self,
        converter: Converter,
        metadata_collector: Option<Arc<dyn ErrorMetadataCollector>>,
    ) -> SafeErrorHandler<ConvertingErrorHandler<Converter>>
    where
        Converter: RepresentationConverter,
    {
        let mut converting =
            ConvertingErrorHandler::new(converter).with_stack_trace(self.show_stack_trace);
        if let Some(collector) = metadata_collector.clone() {
            converting = converting.with_metadata_collector(collector);
        }

        let mut safe = SafeErrorHandler::new(converting).with_stack_trace(self.show_stack_trace);
        if let Some(collector) = metadata_collector {
            safe = safe.with_metadata_collector(collector);
        }
        safe
    }
}
