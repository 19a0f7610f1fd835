//! Permission readers.
//!
//! A [`PermissionReader`] looks at one kind of evidence and reports, under
//! its own source name, what that evidence says about each
//! [`AccessMode`](crate::AccessMode). Readers know nothing about each other;
//! combining their opinions is the job of [`UnionPermissionReader`] and
//! [`PermissionBasedAuthorizer`](crate::PermissionBasedAuthorizer).

use ldp_common::{Handler, ResourceIdentifier};

use crate::{AuthorizationError, Credentials, PermissionSet};

mod ticket;
pub use ticket::*;

mod union;
pub use union::*;

mod rules;
pub use rules::*;

/// Input of every [`PermissionReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionReaderInput {
    /// Who is making the request.
    pub credentials: Credentials,
    /// The resource the request targets.
    pub identifier: ResourceIdentifier,
}

impl PermissionReaderInput {
    /// Bundle credentials with the targeted resource.
    pub fn new(credentials: Credentials, identifier: impl Into<ResourceIdentifier>) -> Self {
        Self {
            credentials,
            identifier: identifier.into(),
        }
    }
}

/// A [`Handler`] that reports the permissions one source grants.
pub trait PermissionReader:
    Handler<PermissionReaderInput, Output = PermissionSet, Error = AuthorizationError>
{
}

impl<T> PermissionReader for T where
    T: Handler<PermissionReaderInput, Output = PermissionSet, Error = AuthorizationError> + ?Sized
{
}
