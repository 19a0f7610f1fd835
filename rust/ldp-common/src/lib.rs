//! Light weight building blocks shared by the authorization and HTTP crates.
//!
//! The centrepiece is [`Handler`], the "can I process this input, and if so,
//! process it" contract that every pluggable strategy in the workspace
//! implements. Handlers compose through [`WaterfallHandler`] (first capable
//! handler wins) or through crate-specific aggregators that run all of them
//! and merge the results.

mod sync;
pub use sync::*;

mod error;
pub use error::*;

mod identifier;
pub use identifier::*;

mod handler;
pub use handler::*;

mod waterfall;
pub use waterfall::*;
