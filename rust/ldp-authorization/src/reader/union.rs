use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::{join_all, try_join_all};
use ldp_common::{Handler, UnsupportedInputError};

use crate::{AuthorizationError, PermissionReader, PermissionReaderInput, PermissionSet};

/// Runs every reader that supports the input and merges their sets with
/// [`PermissionSet::merge`].
///
/// Readers are consulted concurrently. The union supports an input as soon
/// as one of its readers does.
#[derive(Clone)]
pub struct UnionPermissionReader {
    readers: Vec<Arc<dyn PermissionReader>>,
}

impl UnionPermissionReader {
    /// Combine the given readers.
    pub fn new(readers: Vec<Arc<dyn PermissionReader>>) -> Self {
        Self { readers }
    }

    async fn supporting(&self, input: &PermissionReaderInput) -> Vec<&Arc<dyn PermissionReader>> {
        let checks = join_all(self.readers.iter().map(|reader| reader.can_handle(input))).await;

        self.readers
            .iter()
            .zip(checks)
            .filter_map(|(reader, check)| check.ok().map(|_| reader))
            .collect()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<PermissionReaderInput> for UnionPermissionReader {
    type Output = PermissionSet;
    type Error = AuthorizationError;

    async fn can_handle(&self, input: &PermissionReaderInput) -> Result<(), Self::Error> {
        if self.supporting(input).await.is_empty() {
            return Err(UnsupportedInputError::new("No permission reader supports the input").into());
        }
        Ok(())
    }

    async fn handle(&self, input: PermissionReaderInput) -> Result<PermissionSet, Self::Error> {
        let readers = self.supporting(&input).await;
        let sets = try_join_all(readers.into_iter().map(|reader| reader.handle(input.clone()))).await?;

        Ok(sets
            .into_iter()
            .fold(PermissionSet::default(), PermissionSet::merge))
    }
}
