use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use ldp_rdf::{NamedNode, vocab::acl};
use serde::{Deserialize, Serialize};

use crate::AuthorizationError;

/// An atomic capability a request may need on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Read the resource
    Read,
    /// Replace or modify the resource
    Write,
    /// Add data to the resource without removing any
    Append,
    /// Create the resource
    Create,
    /// Delete the resource
    Delete,
}

impl AccessMode {
    /// Every access mode.
    pub const ALL: [AccessMode; 5] = [
        AccessMode::Read,
        AccessMode::Write,
        AccessMode::Append,
        AccessMode::Create,
        AccessMode::Delete,
    ];

    /// The lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::Append => "append",
            AccessMode::Create => "create",
            AccessMode::Delete => "delete",
        }
    }

    /// The capitalised ACL vocabulary term naming the mode.
    pub fn acl_term(&self) -> NamedNode {
        match self {
            AccessMode::Read => acl::READ,
            AccessMode::Write => acl::WRITE,
            AccessMode::Append => acl::APPEND,
            AccessMode::Create => acl::CREATE,
            AccessMode::Delete => acl::DELETE,
        }
    }

    /// The modes granted by an `acl:mode` term of a rule.
    ///
    /// `acl:Write` implies every mutating mode and `acl:Control` grants none
    /// of them. Unknown terms grant nothing.
    pub fn granted_by(term: &NamedNode) -> &'static [AccessMode] {
        if *term == acl::READ {
            &[AccessMode::Read]
        } else if *term == acl::WRITE {
            &[
                AccessMode::Write,
                AccessMode::Append,
                AccessMode::Create,
                AccessMode::Delete,
            ]
        } else if *term == acl::APPEND {
            &[AccessMode::Append]
        } else if *term == acl::CREATE {
            &[AccessMode::Create]
        } else if *term == acl::DELETE {
            &[AccessMode::Delete]
        } else {
            &[]
        }
    }
}

impl Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessMode {
    type Err = AuthorizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| AuthorizationError::UnknownMode(s.to_owned()))
    }
}

/// Render a set of modes as `read, write`.
pub(crate) fn display_modes(modes: &BTreeSet<AccessMode>) -> String {
    modes
        .iter()
        .map(AccessMode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
