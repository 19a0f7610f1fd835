use async_trait::async_trait;
use ldp_common::Handler;
use ldp_rdf::{
    QuadSelector,
    vocab::{acl, foaf},
};

use crate::{AccessCheckerInput, AuthorizationError};

/// Checks access based on the agent class of a rule.
///
/// A rule with agent class `foaf:Agent` applies to everyone, with or without
/// credentials. A rule with agent class `acl:AuthenticatedAgent` applies to
/// any requester presenting a non-empty WebID.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentClassAccessChecker;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<AccessCheckerInput> for AgentClassAccessChecker {
    type Output = bool;
    type Error = AuthorizationError;

    async fn handle(&self, input: AccessCheckerInput) -> Result<bool, Self::Error> {
        let AccessCheckerInput {
            acl: rules,
            rule,
            credentials,
        } = input;
        let agent_class = QuadSelector::default()
            .subject(rule)
            .predicate(acl::AGENT_CLASS);

        if rules.has(&agent_class.clone().object(foaf::AGENT)) {
            return Ok(true);
        }

        if credentials.authenticated_web_id().is_some() {
            return Ok(rules.has(&agent_class.object(acl::AUTHENTICATED_AGENT)));
        }

        Ok(false)
    }
}
