use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// A string could not be interpreted as an absolute IRI
    #[error("Invalid IRI \"{iri}\": {reason}")]
    InvalidIri {
        /// The rejected input
        iri: String,
        /// Why it was rejected
        reason: String,
    },
}
