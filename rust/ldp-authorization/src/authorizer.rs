use std::collections::BTreeSet;

use async_trait::async_trait;
use ldp_common::{Handler, ResourceIdentifier};

use crate::{AccessMode, AuthorizationError, CombinationPolicy, Credentials, PermissionSet};

/// Input of [`PermissionBasedAuthorizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerInput {
    /// Who is making the request.
    pub credentials: Credentials,
    /// The resource the request targets.
    pub identifier: ResourceIdentifier,
    /// The modes the request needs.
    pub requested_modes: BTreeSet<AccessMode>,
    /// What the permission readers reported.
    pub permission_set: PermissionSet,
}

/// Allows a request when every requested mode is granted by the
/// [`PermissionSet`], folded with the configured [`CombinationPolicy`].
///
/// Denials distinguish anonymous requesters, who may still succeed by
/// authenticating ([`AuthorizationError::Unauthorized`]), from
/// authenticated ones ([`AuthorizationError::Forbidden`]).
#[derive(Debug, Clone, Default)]
pub struct PermissionBasedAuthorizer {
    policy: CombinationPolicy,
}

impl PermissionBasedAuthorizer {
    /// Create an authorizer folding permission sets with `policy`.
    pub fn new(policy: CombinationPolicy) -> Self {
        Self { policy }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<AuthorizerInput> for PermissionBasedAuthorizer {
    type Output = ();
    type Error = AuthorizationError;

    async fn handle(&self, input: AuthorizerInput) -> Result<(), Self::Error> {
        let permission = input.permission_set.resolve(&self.policy);
        let missing: BTreeSet<AccessMode> = input
            .requested_modes
            .iter()
            .copied()
            .filter(|mode| !permission.is_granted(*mode))
            .collect();

        if missing.is_empty() {
            tracing::debug!(identifier = %input.identifier, "Request authorized");
            return Ok(());
        }

        tracing::debug!(
            identifier = %input.identifier,
            missing = ?missing,
            "Request denied"
        );

        match input.credentials.authenticated_web_id() {
            Some(web_id) => Err(AuthorizationError::Forbidden {
                identifier: input.identifier,
                web_id: web_id.to_owned(),
                missing,
            }),
            None => Err(AuthorizationError::Unauthorized {
                identifier: input.identifier,
                missing,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use ldp_common::{Handler, ResourceIdentifier};
    use testresult::TestResult;

    use crate::{
        AccessMode, AuthorizationError, AuthorizerInput, CombinationPolicy, Credentials,
        Permission, PermissionBasedAuthorizer, PermissionSet, TICKET, WEB_ID,
    };

    fn input(credentials: Credentials, requested: &[AccessMode]) -> AuthorizerInput {
        AuthorizerInput {
            credentials,
            identifier: ResourceIdentifier::from("/a"),
            requested_modes: requested.iter().copied().collect(),
            permission_set: PermissionSet::default()
                .with_source(TICKET, Permission::default().with(AccessMode::Write, false))
                .with_source(
                    WEB_ID,
                    Permission::default()
                        .with(AccessMode::Read, true)
                        .with(AccessMode::Write, true),
                ),
        }
    }

    #[tokio::test]
    async fn it_allows_when_every_requested_mode_is_granted() -> TestResult {
        PermissionBasedAuthorizer::default()
            .handle_safe(input(
                Credentials::anonymous(),
                &[AccessMode::Read, AccessMode::Write],
            ))
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn it_reports_missing_modes_to_anonymous_requesters_as_unauthorized() {
        let result = PermissionBasedAuthorizer::default()
            .handle(input(Credentials::anonymous(), &[AccessMode::Read, AccessMode::Delete]))
            .await;

        assert_eq!(
            result,
            Err(AuthorizationError::Unauthorized {
                identifier: "/a".into(),
                missing: BTreeSet::from([AccessMode::Delete]),
            })
        );
    }

    #[tokio::test]
    async fn it_reports_missing_modes_to_authenticated_requesters_as_forbidden() {
        let authorizer = PermissionBasedAuthorizer::new(CombinationPolicy::All);
        let credentials = Credentials::anonymous().with_web_id("https://ex.org/bob#me");

        let result = authorizer.handle(input(credentials, &[AccessMode::Write])).await;

        assert!(matches!(
            result,
            Err(AuthorizationError::Forbidden { ref web_id, .. }) if web_id == "https://ex.org/bob#me"
        ));
    }

    #[tokio::test]
    async fn it_allows_requests_that_need_nothing() -> TestResult {
        let mut input = input(Credentials::anonymous(), &[]);
        input.permission_set = PermissionSet::default();

        PermissionBasedAuthorizer::default().handle(input).await?;
        Ok(())
    }
}
