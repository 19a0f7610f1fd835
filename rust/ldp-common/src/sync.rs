//! Thread-safety bounds for handlers and their inputs.
//!
//! A native server shares one [`Handler`](crate::Handler) chain between
//! every request it serves concurrently, so handlers must be `Send + Sync`
//! and their inputs and outputs must be `Send`. A `wasm32` build serves on a
//! single thread, where the same bounds would rule out `!Send` browser
//! types for no benefit. These traits stand in for the native bounds and
//! vanish on `wasm32`.

/// Implemented by every `Send` type natively, and by every type on `wasm32`.
///
/// Bounds the inputs, outputs and errors that cross an `.await` inside a
/// handler.
#[cfg(not(target_arch = "wasm32"))]
pub trait ConditionalSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> ConditionalSend for T {}

/// Implemented by every `Send + Sync` type natively, and by every type on
/// `wasm32`.
///
/// Bounds handlers themselves, which are shared behind `Arc`s.
#[cfg(not(target_arch = "wasm32"))]
pub trait ConditionalSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> ConditionalSync for T {}

/// Implemented by every type: `wasm32` handlers run on one thread.
#[cfg(target_arch = "wasm32")]
pub trait ConditionalSend {}

#[cfg(target_arch = "wasm32")]
impl<T> ConditionalSend for T {}

/// Implemented by every type: `wasm32` handlers run on one thread.
#[cfg(target_arch = "wasm32")]
pub trait ConditionalSync {}

#[cfg(target_arch = "wasm32")]
impl<T> ConditionalSync for T {}
