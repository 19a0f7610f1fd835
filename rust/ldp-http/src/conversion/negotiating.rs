use async_trait::async_trait;
use ldp_common::{DynHandler, Handler, UnsupportedInputError};

use crate::{HttpError, Representation, RepresentationConverterArgs};

/// A converter registered with the media type it produces.
pub type TypedConverter = (String, DynHandler<RepresentationConverterArgs, Representation, HttpError>);

/// Runs the converter whose output the client wants most.
///
/// Every registered converter is asked whether it supports the input. Among
/// those that do, the one whose media type has the highest weight in the
/// preferences wins. Ties go to the converter registered first.
#[derive(Default)]
pub struct NegotiatingConverter {
    converters: Vec<TypedConverter>,
}

impl NegotiatingConverter {
    /// Register `converter` as producing `media_type`.
    pub fn with_converter(
        mut self,
        media_type: impl Into<String>,
        converter: DynHandler<RepresentationConverterArgs, Representation, HttpError>,
    ) -> Self {
        self.converters.push((media_type.into(), converter));
        self
    }

    /// Number of registered converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Whether no converter is registered.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    async fn select(
        &self,
        args: &RepresentationConverterArgs,
    ) -> Result<&DynHandler<RepresentationConverterArgs, Representation, HttpError>, HttpError> {
        let mut supported = Vec::with_capacity(self.converters.len());
        let mut reasons = Vec::new();

        for (media_type, converter) in &self.converters {
            match converter.can_handle(args).await {
                Ok(()) => supported.push((media_type.as_str(), converter)),
                Err(error) => reasons.push(error.to_string()),
            }
        }

        let candidates: Vec<&str> = supported.iter().map(|(media_type, _)| *media_type).collect();
        let best = args.preferences.best_match(&candidates);

        match supported.into_iter().find(|(media_type, _)| Some(*media_type) == best) {
            Some((media_type, converter)) => {
                tracing::debug!(media_type, "Selected error converter");
                Ok(converter)
            }
            None => Err(UnsupportedInputError::new(format!(
                "No converter produces an acceptable representation: [{}]",
                reasons.join(", ")
            ))
            .into()),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<RepresentationConverterArgs> for NegotiatingConverter {
    type Output = Representation;
    type Error = HttpError;

    async fn can_handle(&self, args: &RepresentationConverterArgs) -> Result<(), HttpError> {
        self.select(args).await.map(|_| ())
    }

    async fn handle(&self, args: RepresentationConverterArgs) -> Result<Representation, HttpError> {
        let converter = self.select(&args).await?;
        converter.handle(args).await
    }

    async fn handle_safe(&self, args: RepresentationConverterArgs) -> Result<Representation, HttpError> {
        self.handle(args).await
    }
}
