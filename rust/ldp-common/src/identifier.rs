use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Identifies a resource on the server.
///
/// Identifiers are opaque: two identifiers are the same resource only when
/// their paths are byte-for-byte equal. No normalization (trailing slashes,
/// percent-encoding, case) is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceIdentifier(String);

impl ResourceIdentifier {
    /// Wrap the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path of the resource.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ResourceIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ResourceIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
