use std::fmt::Debug;

use http::StatusCode;

use crate::{ByteStream, RepresentationMetadata};

/// Everything needed to write a response: status, metadata and body.
pub struct ResponseDescription {
    /// The status of the response.
    pub status_code: StatusCode,
    /// Metadata to be turned into headers.
    pub metadata: Option<RepresentationMetadata>,
    /// The body, if there is one.
    pub data: Option<ByteStream>,
}

impl Debug for ResponseDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseDescription")
            .field("status_code", &self.status_code)
            .field("metadata", &self.metadata)
            .field("data", &self.data.as_ref().map(|_| "<stream>"))
            .finish()
    }
}
