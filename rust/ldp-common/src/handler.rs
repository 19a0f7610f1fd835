use std::sync::Arc;

use async_trait::async_trait;

use crate::{ConditionalSend, ConditionalSync};

/// The contract shared by every pluggable strategy: "can I process this
/// input, and if so, process it".
///
/// - [`Handler::can_handle`] is a cheap, side-effect free check of whether
///   the handler applies to the shape of the input. It must not perform the
///   actual work and must give the same answer every time it is asked.
/// - [`Handler::handle`] performs the work. Its behavior is unspecified when
///   `can_handle` was not confirmed first.
/// - [`Handler::handle_safe`] is `can_handle` followed by `handle` as one
///   call. Implementations may override it to avoid preparing the same
///   arguments twice.
///
/// Handlers keep no per-call mutable state, so one instance may serve any
/// number of concurrent requests.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use ldp_common::{Handler, UnsupportedInputError};
///
/// struct Doubler;
///
/// #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
/// #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
/// impl Handler<i64> for Doubler {
///     type Output = i64;
///     type Error = UnsupportedInputError;
///
///     async fn can_handle(&self, input: &i64) -> Result<(), Self::Error> {
///         if *input < 0 {
///             return Err(UnsupportedInputError::new("negative input"));
///         }
///         Ok(())
///     }
///
///     async fn handle(&self, input: i64) -> Result<i64, Self::Error> {
///         Ok(input * 2)
///     }
/// }
/// ```
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Handler<Input>: ConditionalSync
where
    Input: ConditionalSend + ConditionalSync + 'static,
{
    /// What a successful invocation produces.
    type Output: ConditionalSend;
    /// What a failed invocation produces.
    type Error: ConditionalSend;

    /// Check whether this handler supports the given input. Accepts
    /// everything unless overridden.
    async fn can_handle(&self, _input: &Input) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Process the input.
    async fn handle(&self, input: Input) -> Result<Self::Output, Self::Error>;

    /// Check the input with [`Handler::can_handle`] and, when supported,
    /// process it with [`Handler::handle`].
    async fn handle_safe(&self, input: Input) -> Result<Self::Output, Self::Error> {
        self.can_handle(&input).await?;
        self.handle(input).await
    }
}

/// A shareable, type-erased handler.
pub type DynHandler<Input, Output, Error> =
    Arc<dyn Handler<Input, Output = Output, Error = Error>>;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Input, H> Handler<Input> for Arc<H>
where
    Input: ConditionalSend + ConditionalSync + 'static,
    H: Handler<Input> + ?Sized,
{
    type Output = H::Output;
    type Error = H::Error;

    async fn can_handle(&self, input: &Input) -> Result<(), Self::Error> {
        self.as_ref().can_handle(input).await
    }

    async fn handle(&self, input: Input) -> Result<Self::Output, Self::Error> {
        self.as_ref().handle(input).await
    }

    async fn handle_safe(&self, input: Input) -> Result<Self::Output, Self::Error> {
        self.as_ref().handle_safe(input).await
    }
}
