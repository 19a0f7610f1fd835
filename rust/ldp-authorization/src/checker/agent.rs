use async_trait::async_trait;
use ldp_common::Handler;
use ldp_rdf::{NamedNode, QuadSelector, vocab::acl};

use crate::{AccessCheckerInput, AuthorizationError};

/// Checks whether a rule names the requester's WebID with `acl:agent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentAccessChecker;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<AccessCheckerInput> for AgentAccessChecker {
    type Output = bool;
    type Error = AuthorizationError;

    async fn handle(&self, input: AccessCheckerInput) -> Result<bool, Self::Error> {
        let Some(web_id) = input.credentials.authenticated_web_id() else {
            return Ok(false);
        };

        Ok(input.acl.has(
            &QuadSelector::default()
                .subject(input.rule.clone())
                .predicate(acl::AGENT)
                .object(NamedNode::new(web_id)),
        ))
    }
}
