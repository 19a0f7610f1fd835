use std::collections::BTreeSet;

use ldp_common::{ResourceIdentifier, UnsupportedInputError};
use thiserror::Error;

use crate::{AccessMode, mode::display_modes};

/// Errors that can occur while resolving permissions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    /// A handler was given an input it does not support.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedInputError),

    /// The requester did not authenticate and anonymous access is not
    /// sufficient.
    #[error("Unauthenticated request for {} on {identifier}", display_modes(.missing))]
    Unauthorized {
        /// The resource that was requested.
        identifier: ResourceIdentifier,
        /// Requested modes that were not granted.
        missing: BTreeSet<AccessMode>,
    },

    /// The requester authenticated but is not granted every requested mode.
    #[error("Agent {web_id} may not {} on {identifier}", display_modes(.missing))]
    Forbidden {
        /// The resource that was requested.
        identifier: ResourceIdentifier,
        /// The WebID of the requester.
        web_id: String,
        /// Requested modes that were not granted.
        missing: BTreeSet<AccessMode>,
    },

    /// The access rules of a resource could not be loaded.
    #[error("Could not load access rules for {identifier}: {reason}")]
    Store {
        /// The resource whose rules were requested.
        identifier: ResourceIdentifier,
        /// Description of the failure.
        reason: String,
    },

    /// A mode name did not match any [`AccessMode`].
    #[error("Unknown access mode: {0}")]
    UnknownMode(String),
}
