use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::AccessMode;

/// Source name used by readers that evaluate tickets.
pub const TICKET: &str = "ticket";
/// Source name used for rules that apply to the authenticated requester.
pub const WEB_ID: &str = "webId";
/// Source name used for rules that apply to everyone.
pub const PUBLIC: &str = "public";

/// What one source states about each [`AccessMode`].
///
/// A mode that is absent means the source makes no statement about it,
/// which is different from an explicit `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(BTreeMap<AccessMode, bool>);

impl Permission {
    /// A permission with an explicit statement for every [`AccessMode`]:
    /// `true` for the members of `granted`, `false` for the rest.
    pub fn from_modes(granted: &BTreeSet<AccessMode>) -> Self {
        Self(
            AccessMode::ALL
                .into_iter()
                .map(|mode| (mode, granted.contains(&mode)))
                .collect(),
        )
    }

    /// State `allowed` for `mode`.
    pub fn with(mut self, mode: AccessMode, allowed: bool) -> Self {
        self.0.insert(mode, allowed);
        self
    }

    /// The statement about `mode`, if any.
    pub fn get(&self, mode: AccessMode) -> Option<bool> {
        self.0.get(&mode).copied()
    }

    /// Whether `mode` is explicitly granted.
    pub fn is_granted(&self, mode: AccessMode) -> bool {
        self.get(mode) == Some(true)
    }

    /// The explicitly granted modes.
    pub fn granted(&self) -> BTreeSet<AccessMode> {
        self.0
            .iter()
            .filter(|(_, allowed)| **allowed)
            .map(|(mode, _)| *mode)
            .collect()
    }

    /// Iterate over every statement.
    pub fn iter(&self) -> impl Iterator<Item = (AccessMode, bool)> + '_ {
        self.0.iter().map(|(mode, allowed)| (*mode, *allowed))
    }

    /// Whether no statement is made at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Combine with another permission so that a mode granted by either one
    /// is granted, and a mode denied by one and unmentioned by the other is
    /// denied.
    pub fn union(mut self, other: &Permission) -> Self {
        for (mode, allowed) in other.iter() {
            let entry = self.0.entry(mode).or_insert(allowed);
            *entry = *entry || allowed;
        }
        self
    }
}

impl FromIterator<(AccessMode, bool)> for Permission {
    fn from_iter<T: IntoIterator<Item = (AccessMode, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How the statements of several sources combine into a single
/// [`Permission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "sources", rename_all = "camelCase")]
pub enum CombinationPolicy {
    /// A mode is granted when any source grants it.
    #[default]
    Any,
    /// A mode is granted when at least one source grants it and no source
    /// denies it.
    All,
    /// For every mode, the first source in the list that makes a statement
    /// decides. Sources not listed are consulted afterwards, by name.
    Priority(Vec<String>),
}

/// Per-source permissions for one request.
///
/// Sets are values: a reader builds one and hands it over, and nothing
/// changes it afterwards. Merging produces a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeMap<String, Permission>);

impl PermissionSet {
    /// Add the statements of `source`.
    pub fn with_source(mut self, source: impl Into<String>, permission: Permission) -> Self {
        self.0.insert(source.into(), permission);
        self
    }

    /// The statements of `source`, if it made any.
    pub fn get(&self, source: &str) -> Option<&Permission> {
        self.0.get(source)
    }

    /// The names of every source in the set.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(source, permission)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Permission)> {
        self.0.iter().map(|(source, permission)| (source.as_str(), permission))
    }

    /// Number of sources in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no source made any statement.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge two sets source by source. When both name the same source the
    /// two permissions are combined with [`Permission::union`].
    pub fn merge(mut self, other: PermissionSet) -> Self {
        for (source, permission) in other.0 {
            let merged = match self.0.remove(&source) {
                Some(existing) => existing.union(&permission),
                None => permission,
            };
            self.0.insert(source, merged);
        }
        self
    }

    /// Fold every source into a single permission.
    pub fn resolve(&self, policy: &CombinationPolicy) -> Permission {
        AccessMode::ALL
            .into_iter()
            .filter_map(|mode| self.resolve_mode(mode, policy).map(|allowed| (mode, allowed)))
            .collect()
    }

    fn resolve_mode(&self, mode: AccessMode, policy: &CombinationPolicy) -> Option<bool> {
        let statements = self.0.values().filter_map(|permission| permission.get(mode));

        match policy {
            CombinationPolicy::Any => statements.reduce(|left, right| left || right),
            CombinationPolicy::All => statements.reduce(|left, right| left && right),
            CombinationPolicy::Priority(order) => order
                .iter()
                .filter_map(|source| self.0.get(source))
                .chain(
                    self.0
                        .iter()
                        .filter(|(source, _)| !order.contains(source))
                        .map(|(_, permission)| permission),
                )
                .find_map(|permission| permission.get(mode)),
        }
    }
}
