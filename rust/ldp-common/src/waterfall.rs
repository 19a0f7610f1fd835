use async_trait::async_trait;

use crate::{ConditionalSend, ConditionalSync, DynHandler, Handler, UnsupportedInputError};

/// Chains handlers together: the first one whose
/// [`can_handle`](Handler::can_handle) succeeds processes the input.
///
/// When none of the handlers support the input, the waterfall fails with an
/// [`UnsupportedInputError`] listing why each of them declined.
pub struct WaterfallHandler<Input, Output, Error> {
    handlers: Vec<DynHandler<Input, Output, Error>>,
}

impl<Input, Output, Error> WaterfallHandler<Input, Output, Error>
where
    Input: ConditionalSend + ConditionalSync + 'static,
    Output: ConditionalSend,
    Error: std::error::Error + From<UnsupportedInputError> + ConditionalSend,
{
    /// Create a waterfall over the given handlers, tried in order.
    pub fn new(handlers: Vec<DynHandler<Input, Output, Error>>) -> Self {
        Self { handlers }
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the chain has no handlers at all.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    async fn find_handler(
        &self,
        input: &Input,
    ) -> Result<&DynHandler<Input, Output, Error>, Error> {
        let mut reasons = Vec::with_capacity(self.handlers.len());

        for handler in &self.handlers {
            match handler.can_handle(input).await {
                Ok(()) => return Ok(handler),
                Err(error) => reasons.push(error.to_string()),
            }
        }

        tracing::debug!(tried = self.handlers.len(), "No handler supports the input");

        Err(UnsupportedInputError::new(format!(
            "No handler supports the given input: [{}]",
            reasons.join(", ")
        ))
        .into())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Input, Output, Error> Handler<Input> for WaterfallHandler<Input, Output, Error>
where
    Input: ConditionalSend + ConditionalSync + 'static,
    Output: ConditionalSend + 'static,
    Error: std::error::Error + From<UnsupportedInputError> + ConditionalSend + 'static,
{
    type Output = Output;
    type Error = Error;

    async fn can_handle(&self, input: &Input) -> Result<(), Error> {
        self.find_handler(input).await.map(|_| ())
    }

    async fn handle(&self, input: Input) -> Result<Output, Error> {
        let handler = self.find_handler(&input).await?;
        handler.handle(input).await
    }

    async fn handle_safe(&self, input: Input) -> Result<Output, Error> {
        self.handle(input).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use testresult::TestResult;

    use crate::{DynHandler, Handler, UnsupportedInputError, WaterfallHandler};

    struct Prefixed(&'static str);

    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    impl Handler<String> for Prefixed {
        type Output = String;
        type Error = UnsupportedInputError;

        async fn can_handle(&self, input: &String) -> Result<(), Self::Error> {
            if !input.starts_with(self.0) {
                return Err(UnsupportedInputError::new(format!("not {}", self.0)));
            }
            Ok(())
        }

        async fn handle(&self, input: String) -> Result<String, Self::Error> {
            Ok(format!("{} handled {input}", self.0))
        }
    }

    fn waterfall() -> WaterfallHandler<String, String, UnsupportedInputError> {
        let handlers: Vec<DynHandler<String, String, UnsupportedInputError>> = ["a", "ab", "b"]
            .into_iter()
            .map(|prefix| {
                Arc::new(Prefixed(prefix)) as DynHandler<String, String, UnsupportedInputError>
            })
            .collect();
        WaterfallHandler::new(handlers)
    }

    #[tokio::test]
    async fn it_uses_the_first_handler_that_accepts() -> TestResult {
        let waterfall = waterfall();

        assert_eq!(waterfall.handle_safe("abc".into()).await?, "a handled abc");
        assert_eq!(waterfall.handle("bcd".into()).await?, "b handled bcd");
        Ok(())
    }

    #[tokio::test]
    async fn it_reports_every_reason_when_nothing_accepts() {
        let error = waterfall()
            .can_handle(&"xyz".to_string())
            .await
            .expect_err("no handler should accept");

        assert_eq!(
            error,
            UnsupportedInputError::new(
                "No handler supports the given input: [Unsupported input: not a, \
                 Unsupported input: not ab, Unsupported input: not b]"
            )
        );
    }

    #[tokio::test]
    async fn it_rejects_everything_when_empty() {
        let empty = WaterfallHandler::<String, String, UnsupportedInputError>::new(vec![]);

        assert!(empty.is_empty());
        assert!(empty.handle_safe("a".into()).await.is_err());
    }
}
