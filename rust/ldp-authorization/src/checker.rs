//! Access checkers.
//!
//! Every checker answers the same question for a different kind of rule
//! selector: does this authorization rule apply to the requester?
//! [`AnyAccessChecker`] combines them, since a rule applies as soon as one
//! of its selectors matches.

use std::sync::Arc;

use ldp_common::Handler;
use ldp_rdf::{Dataset, Term};

use crate::{AuthorizationError, Credentials};

mod agent_class;
pub use agent_class::*;

mod agent;
pub use agent::*;

mod any;
pub use any::*;

/// Input of every [`AccessChecker`].
#[derive(Debug, Clone)]
pub struct AccessCheckerInput {
    /// The rule graph the rule is described in.
    pub acl: Arc<Dataset>,
    /// The rule to check.
    pub rule: Term,
    /// Who is making the request.
    pub credentials: Credentials,
}

/// A [`Handler`] deciding whether a rule applies to a requester.
pub trait AccessChecker:
    Handler<AccessCheckerInput, Output = bool, Error = AuthorizationError>
{
}

impl<T> AccessChecker for T where
    T: Handler<AccessCheckerInput, Output = bool, Error = AuthorizationError> + ?Sized
{
}
