//! Permission resolution for a Linked-Data resource server.
//!
//! A request arrives with [`Credentials`] and targets a resource. Several
//! [`PermissionReader`]s look at the request independently (a presented
//! [`Ticket`], the access-control rules of the resource, …) and each reports
//! what its source thinks about every [`AccessMode`] as a named entry of a
//! [`PermissionSet`]. The [`PermissionBasedAuthorizer`] then folds the set
//! into a single decision with a [`CombinationPolicy`] and checks it against
//! the modes the request needs.
//!
//! Access-control rules are evaluated by [`AccessChecker`]s, each deciding
//! whether one rule applies to the requester.
//!
//! ```text
//! Credentials + identifier
//!   ├── TicketPermissionReader  → { "ticket": … }
//!   └── AclPermissionReader     → { "public": …, "webId": … }
//!         └── AnyAccessChecker (agent, agent class, …)
//!   ⇒ UnionPermissionReader    → PermissionSet
//!   ⇒ PermissionBasedAuthorizer → allow / Unauthorized / Forbidden
//! ```

mod error;
pub use error::*;

mod mode;
pub use mode::*;

mod credentials;
pub use credentials::*;

mod permission;
pub use permission::*;

mod reader;
pub use reader::*;

mod checker;
pub use checker::*;

mod authorizer;
pub use authorizer::*;
