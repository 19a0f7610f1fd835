//! Turns failures into protocol-correct, content-negotiated responses.
//!
//! Error handling is layered. A [`ConvertingErrorHandler`] wraps the error
//! in an internal representation and lets a [`RepresentationConverter`]
//! produce whatever the client prefers. It is fallible. A
//! [`SafeErrorHandler`] wraps it and falls back to a plain-text body when
//! anything goes wrong, so that a [`ResponseDescription`] is always
//! produced.
//!
//! Both consult an [`ErrorMetadataCollector`] to attach remediation hints.
//! The [`TicketMetadataCollector`] tells a denied client which ticket it
//! needs: which resource it must name and which modes it must grant.
//!
//! ```text
//! error + request
//!   ⇒ SafeErrorHandler
//!       ⇒ ConvertingErrorHandler ⇒ RepresentationConverter
//!       ⇒ ErrorMetadataCollector (ticket subject, ticket needs)
//!   ⇒ ResponseDescription { status, metadata, body }
//! ```

mod error;
pub use error::*;

mod request;
pub use request::*;

mod metadata;
pub use metadata::*;

mod representation;
pub use representation::*;

mod preferences;
pub use preferences::*;

mod response;
pub use response::*;

mod conversion;
pub use conversion::*;

mod collector;
pub use collector::*;

mod handler;
pub use handler::*;

mod config;
pub use config::*;
