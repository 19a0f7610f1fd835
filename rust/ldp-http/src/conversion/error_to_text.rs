use async_trait::async_trait;
use ldp_common::Handler;

use crate::{
    HttpError, Representation, RepresentationConverterArgs, TEXT_PLAIN, body_from,
    check_error_conversion, presented_error,
};

/// Writes internal error representations as a single line of text, or as
/// the stack when it was disclosed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorToTextConverter;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<RepresentationConverterArgs> for ErrorToTextConverter {
    type Output = Representation;
    type Error = HttpError;

    async fn can_handle(&self, args: &RepresentationConverterArgs) -> Result<(), HttpError> {
        check_error_conversion(args, TEXT_PLAIN)
    }

    async fn handle(&self, args: RepresentationConverterArgs) -> Result<Representation, HttpError> {
        let Representation { mut metadata, data } = args.representation;
        let error = presented_error(data)?;

        metadata.set_content_type(TEXT_PLAIN);
        Ok(Representation::binary(
            metadata,
            body_from(format!("{}\n", error.describe())),
        ))
    }
}
