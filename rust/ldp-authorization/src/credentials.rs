use std::collections::BTreeSet;

use ldp_common::ResourceIdentifier;
use serde::{Deserialize, Serialize};

use crate::AccessMode;

/// A pre-authorized capability, scoped to exactly one resource and a fixed
/// set of modes.
///
/// A ticket grants nothing for any identifier other than the one it names:
/// there is no prefix or container matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// The only resource this ticket applies to.
    pub resource: ResourceIdentifier,
    /// The modes this ticket grants on `resource`.
    pub modes: BTreeSet<AccessMode>,
}

impl Ticket {
    /// Create a ticket for `resource` granting `modes`.
    pub fn new(
        resource: impl Into<ResourceIdentifier>,
        modes: impl IntoIterator<Item = AccessMode>,
    ) -> Self {
        Self {
            resource: resource.into(),
            modes: modes.into_iter().collect(),
        }
    }
}

/// Everything known about who is making a request.
///
/// Credentials are extracted from the request before authorization starts
/// and are never modified while permissions are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// The authenticated identity of the requester.
    pub web_id: Option<String>,
    /// The client application acting on behalf of the requester.
    pub client: Option<String>,
    /// A ticket presented with the request.
    pub ticket: Option<Ticket>,
}

impl Credentials {
    /// Credentials of a requester that presented nothing.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the WebID
    pub fn with_web_id(mut self, web_id: impl Into<String>) -> Self {
        self.web_id = Some(web_id.into());
        self
    }

    /// Set the ticket
    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.ticket = Some(ticket);
        self
    }

    /// The WebID, when the requester presented a non-empty one.
    pub fn authenticated_web_id(&self) -> Option<&str> {
        self.web_id.as_deref().filter(|web_id| !web_id.is_empty())
    }
}
