use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use async_trait::async_trait;
use ldp_common::{ConditionalSync, Handler, ResourceIdentifier};
use ldp_rdf::{Dataset, NamedNode, Term, vocab::acl};

use crate::{
    AccessChecker, AccessCheckerInput, AccessMode, AnyAccessChecker, AuthorizationError,
    Credentials, PUBLIC, Permission, PermissionReaderInput, PermissionSet, WEB_ID,
};

/// Supplies the access-control rules that govern a resource.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AclStore: ConditionalSync {
    /// The rule graph governing `identifier`, or `None` when the resource
    /// has no rules.
    async fn rules_for(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<Option<Arc<Dataset>>, AuthorizationError>;
}

/// An [`AclStore`] holding rule graphs in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAclStore {
    rules: BTreeMap<ResourceIdentifier, Arc<Dataset>>,
}

impl MemoryAclStore {
    /// Register the rule graph governing `identifier`, replacing any
    /// previous one.
    pub fn insert(&mut self, identifier: impl Into<ResourceIdentifier>, rules: Dataset) {
        self.rules.insert(identifier.into(), Arc::new(rules));
    }

    /// Builder variant of [`MemoryAclStore::insert`].
    pub fn with_rules(mut self, identifier: impl Into<ResourceIdentifier>, rules: Dataset) -> Self {
        self.insert(identifier, rules);
        self
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AclStore for MemoryAclStore {
    async fn rules_for(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<Option<Arc<Dataset>>, AuthorizationError> {
        Ok(self.rules.get(identifier).cloned())
    }
}

/// Reads permissions from the access-control rules of a resource.
///
/// Only rules whose `acl:accessTo` names the requested identifier are
/// considered. Each one is run through the configured [`AccessChecker`]
/// twice: once for anonymous credentials, reported as the `"public"`
/// source, and once for the actual credentials, reported as the `"webId"`
/// source when the requester authenticated. Both sources state every
/// [`AccessMode`] explicitly.
pub struct AclPermissionReader<Store, Checker = AnyAccessChecker> {
    store: Store,
    checker: Checker,
}

impl<Store> AclPermissionReader<Store, AnyAccessChecker>
where
    Store: AclStore,
{
    /// Read rules from `store`, matching them with the default checkers.
    pub fn new(store: Store) -> Self {
        Self::with_checker(store, AnyAccessChecker::default())
    }
}

impl<Store, Checker> AclPermissionReader<Store, Checker>
where
    Store: AclStore,
    Checker: AccessChecker,
{
    /// Read rules from `store`, matching them with `checker`.
    pub fn with_checker(store: Store, checker: Checker) -> Self {
        Self { store, checker }
    }

    async fn granted_modes(
        &self,
        rules: &Arc<Dataset>,
        applicable: &[Term],
        credentials: &Credentials,
    ) -> Result<BTreeSet<AccessMode>, AuthorizationError> {
        let mut granted = BTreeSet::new();

        for rule in applicable {
            let applies = self
                .checker
                .handle_safe(AccessCheckerInput {
                    acl: rules.clone(),
                    rule: rule.clone(),
                    credentials: credentials.clone(),
                })
                .await?;

            if !applies {
                continue;
            }

            granted.extend(
                rules
                    .objects(rule, &acl::MODE)
                    .filter_map(Term::as_named_node)
                    .flat_map(|mode| AccessMode::granted_by(mode).iter().copied()),
            );
        }

        Ok(granted)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Store, Checker> Handler<PermissionReaderInput> for AclPermissionReader<Store, Checker>
where
    Store: AclStore,
    Checker: AccessChecker,
{
    type Output = PermissionSet;
    type Error = AuthorizationError;

    async fn handle(&self, input: PermissionReaderInput) -> Result<PermissionSet, Self::Error> {
        let Some(rules) = self.store.rules_for(&input.identifier).await? else {
            tracing::trace!(identifier = %input.identifier, "No access rules");
            return Ok(PermissionSet::default());
        };

        let target = Term::from(NamedNode::new(input.identifier.path()));
        let applicable: Vec<Term> = rules
            .subjects(&acl::ACCESS_TO, &target)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let public = self
            .granted_modes(&rules, &applicable, &Credentials::anonymous())
            .await?;
        let mut set = PermissionSet::default().with_source(PUBLIC, Permission::from_modes(&public));

        if input.credentials.authenticated_web_id().is_some() {
            let agent = self
                .granted_modes(&rules, &applicable, &input.credentials)
                .await?;
            set = set.with_source(WEB_ID, Permission::from_modes(&agent));
        }

        tracing::trace!(
            identifier = %input.identifier,
            rules = applicable.len(),
            "Evaluated access rules"
        );

        Ok(set)
    }
}
