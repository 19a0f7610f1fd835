use async_trait::async_trait;
use ldp_common::Handler;
use ldp_rdf::{Literal, Term, vocab::http as http_vocab};

use crate::{
    APPLICATION_JSON, HttpError, Representation, RepresentationConverterArgs, body_from,
    check_error_conversion, presented_error,
};

/// Serializes internal error representations as JSON objects with `name`,
/// `message`, `statusCode` and, when disclosed, `stack`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorToJsonConverter;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<RepresentationConverterArgs> for ErrorToJsonConverter {
    type Output = Representation;
    type Error = HttpError;

    async fn can_handle(&self, args: &RepresentationConverterArgs) -> Result<(), HttpError> {
        check_error_conversion(args, APPLICATION_JSON)
    }

    async fn handle(&self, args: RepresentationConverterArgs) -> Result<Representation, HttpError> {
        let Representation { mut metadata, data } = args.representation;
        let error = presented_error(data)?;

        let mut body = serde_json::to_value(&error)?;
        let status_code = metadata
            .get(&http_vocab::STATUS_CODE_NUMBER)
            .and_then(Term::as_literal)
            .and_then(Literal::as_integer);
        if let (Some(status_code), Some(object)) = (status_code, body.as_object_mut()) {
            object.insert("statusCode".to_owned(), status_code.into());
        }

        metadata.set_content_type(APPLICATION_JSON);
        Ok(Representation::binary(metadata, body_from(serde_json::to_vec(&body)?)))
    }
}
