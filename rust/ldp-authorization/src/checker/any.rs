use std::sync::Arc;

use async_trait::async_trait;
use ldp_common::Handler;

use crate::{AccessChecker, AccessCheckerInput, AuthorizationError};

/// A rule applies when any of the configured checkers says it does.
///
/// Checkers that do not support the input are skipped. Evaluation stops at
/// the first checker that matches.
#[derive(Clone)]
pub struct AnyAccessChecker {
    checkers: Vec<Arc<dyn AccessChecker>>,
}

impl AnyAccessChecker {
    /// Combine the given checkers.
    pub fn new(checkers: Vec<Arc<dyn AccessChecker>>) -> Self {
        Self { checkers }
    }
}

impl Default for AnyAccessChecker {
    /// The agent and agent-class checkers.
    fn default() -> Self {
        let agent: Arc<dyn AccessChecker> = Arc::new(crate::AgentAccessChecker);
        let agent_class: Arc<dyn AccessChecker> = Arc::new(crate::AgentClassAccessChecker);
        Self::new(vec![agent, agent_class])
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<AccessCheckerInput> for AnyAccessChecker {
    type Output = bool;
    type Error = AuthorizationError;

    async fn handle(&self, input: AccessCheckerInput) -> Result<bool, Self::Error> {
        for checker in &self.checkers {
            if checker.can_handle(&input).await.is_err() {
                continue;
            }
            if checker.handle(input.clone()).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
