use std::collections::BTreeSet;

use async_trait::async_trait;
use http::Method;
use ldp_authorization::AccessMode;
use ldp_common::Handler;
use ldp_rdf::{NamedNode, vocab::auth};

use crate::{ErrorMetadataCollectorInput, HttpError, MetadataDelta};

/// The modes a request with `method` needs on its target.
///
/// Reads need `read`. Anything that changes the resource needs every
/// mutating mode: which of them actually apply depends on whether the
/// resource exists, and that is not known when answering an error.
pub fn required_modes(method: &Method) -> BTreeSet<AccessMode> {
    match method.as_str() {
        "GET" | "HEAD" => BTreeSet::from([AccessMode::Read]),
        "POST" => BTreeSet::from([AccessMode::Append]),
        "PUT" | "PATCH" | "DELETE" => BTreeSet::from([
            AccessMode::Write,
            AccessMode::Append,
            AccessMode::Create,
            AccessMode::Delete,
        ]),
        _ => BTreeSet::new(),
    }
}

/// Tells a denied client what ticket would let the request through.
///
/// Emits `auth:ticketSubject` naming the requested URL and one
/// `auth:ticketNeeds` per mode the request method requires. Requests
/// without a method or URL yield nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketMetadataCollector;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<ErrorMetadataCollectorInput> for TicketMetadataCollector {
    type Output = MetadataDelta;
    type Error = HttpError;

    async fn handle(&self, input: ErrorMetadataCollectorInput) -> Result<MetadataDelta, HttpError> {
        tracing::debug!("Collecting ticket metadata");

        let mut delta = MetadataDelta::default();
        let (Some(method), Some(url)) = (&input.request.method, &input.request.url) else {
            return Ok(delta);
        };

        delta.add(auth::TICKET_SUBJECT, NamedNode::from(url));
        for mode in required_modes(method) {
            tracing::debug!(mode = %mode, "Ticket needs mode");
            delta.add(auth::TICKET_NEEDS, mode.acl_term());
        }

        Ok(delta)
    }
}

#[cfg(test)]
mod tests {
    use http::Method;
    use ldp_common::Handler;
    use ldp_rdf::{
        NamedNode, Term,
        vocab::{acl, auth},
    };
    use pretty_assertions::assert_eq;
    use testresult::TestResult;
    use url::Url;

    use crate::{
        ErrorMetadataCollectorInput, HttpError, HttpRequest, RepresentationMetadata, TicketMetadataCollector,
    };

    async fn collect(request: HttpRequest) -> Result<RepresentationMetadata, HttpError> {
        let mut metadata = RepresentationMetadata::new("text/plain");
        let delta = TicketMetadataCollector
            .handle_safe(ErrorMetadataCollectorInput {
                request,
                metadata: metadata.clone(),
            })
            .await?;
        metadata.extend(delta);
        Ok(metadata)
    }

    #[tokio::test]
    async fn it_asks_for_read_on_get() -> TestResult {
        let url = Url::parse("https://ex.org/a")?;
        let metadata = collect(HttpRequest::new(Method::GET, url)).await?;

        assert_eq!(
            metadata.get(&auth::TICKET_SUBJECT),
            Some(&Term::from(NamedNode::new("https://ex.org/a")))
        );
        assert_eq!(
            metadata.get_all(&auth::TICKET_NEEDS).cloned().collect::<Vec<_>>(),
            vec![Term::from(acl::READ)]
        );
        Ok(())
    }

    #[tokio::test]
    async fn it_asks_for_every_mutating_mode_on_put() -> TestResult {
        let url = Url::parse("https://ex.org/a")?;
        let metadata = collect(HttpRequest::new(Method::PUT, url)).await?;

        assert_eq!(
            metadata.get_all(&auth::TICKET_NEEDS).cloned().collect::<Vec<_>>(),
            vec![
                Term::from(acl::WRITE),
                Term::from(acl::APPEND),
                Term::from(acl::CREATE),
                Term::from(acl::DELETE),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn it_adds_nothing_without_a_method_or_url() -> TestResult {
        let metadata = collect(HttpRequest::default()).await?;

        assert_eq!(metadata.get(&auth::TICKET_SUBJECT), None);
        assert_eq!(metadata.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn it_maps_every_method_to_the_modes_it_needs() -> TestResult {
        let mutating = vec![
            Term::from(acl::WRITE),
            Term::from(acl::APPEND),
            Term::from(acl::CREATE),
            Term::from(acl::DELETE),
        ];
        let cases = [
            (Method::GET, vec![Term::from(acl::READ)]),
            (Method::HEAD, vec![Term::from(acl::READ)]),
            (Method::POST, vec![Term::from(acl::APPEND)]),
            (Method::PUT, mutating.clone()),
            (Method::PATCH, mutating.clone()),
            (Method::DELETE, mutating),
            (Method::OPTIONS, vec![]),
            (Method::TRACE, vec![]),
        ];

        for (method, needs) in cases {
            let url = Url::parse("https://ex.org/a")?;
            let metadata = collect(HttpRequest::new(method.clone(), url)).await?;

            assert_eq!(
                metadata.get(&auth::TICKET_SUBJECT),
                Some(&Term::from(NamedNode::new("https://ex.org/a"))),
                "{method}"
            );
            assert_eq!(
                metadata.get_all(&auth::TICKET_NEEDS).cloned().collect::<Vec<_>>(),
                needs,
                "{method}"
            );
        }
        Ok(())
    }
}
