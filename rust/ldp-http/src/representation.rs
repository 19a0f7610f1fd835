use std::{fmt::Debug, io, pin::Pin};

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt, stream};

use crate::RepresentationMetadata;

/// Content type of the internal representation wrapping an error.
pub const INTERNAL_ERROR: &str = "internal/error";
/// Plain text.
pub const TEXT_PLAIN: &str = "text/plain";
/// JSON.
pub const APPLICATION_JSON: &str = "application/json";

/// A stream of body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, io::Error>> + Send + Sync>>;

/// A stream yielding `content` as its single chunk.
pub fn body_from(content: impl Into<Bytes>) -> ByteStream {
    Box::pin(stream::once(std::future::ready(Ok(content.into()))))
}

/// Drain `stream` into one buffer.
pub async fn read_to_end(mut stream: ByteStream) -> Result<Bytes, io::Error> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk?);
    }
    Ok(buffer.freeze())
}

/// The content of a [`Representation`].
pub enum Data {
    /// Structured values that have not been serialized. Only internal
    /// representations carry these.
    Objects(Vec<serde_json::Value>),
    /// Serialized content.
    Binary(ByteStream),
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Data::Objects(objects) => f.debug_tuple("Objects").field(objects).finish(),
            Data::Binary(_) => f.debug_tuple("Binary").finish_non_exhaustive(),
        }
    }
}

/// Content together with the metadata describing it.
#[derive(Debug)]
pub struct Representation {
    /// What the content is.
    pub metadata: RepresentationMetadata,
    /// The content.
    pub data: Data,
}

impl Representation {
    /// A representation of structured values.
    pub fn objects(metadata: RepresentationMetadata, objects: Vec<serde_json::Value>) -> Self {
        Self {
            metadata,
            data: Data::Objects(objects),
        }
    }

    /// A representation of serialized content.
    pub fn binary(metadata: RepresentationMetadata, stream: ByteStream) -> Self {
        Self {
            metadata,
            data: Data::Binary(stream),
        }
    }
}
