use std::sync::Arc;

use http::{HeaderMap, HeaderValue, Method, StatusCode, header::ACCEPT};
use ldp_common::Handler;
use ldp_http::{
    APPLICATION_JSON, ErrorHandlerConfig, ErrorHandlerInput, HttpError, HttpRequest,
    RepresentationPreferences, ResponseDescription, TEXT_PLAIN, TicketMetadataCollector,
    error_converters, read_to_end,
};
use ldp_rdf::{
    NamedNode, Term,
    vocab::{acl, auth},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use testresult::TestResult;
use url::Url;

const DOC: &str = "https://ex.org/doc";

fn request(method: Method) -> Result<HttpRequest, url::ParseError> {
    Ok(HttpRequest::new(method, Url::parse(DOC)?))
}

fn ticket_needs(response: &ResponseDescription) -> Vec<Term> {
    response
        .metadata
        .as_ref()
        .map(|metadata| metadata.get_all(&auth::TICKET_NEEDS).cloned().collect())
        .unwrap_or_default()
}

async fn answer(config: ErrorHandlerConfig, input: ErrorHandlerInput) -> ResponseDescription {
    config
        .build(error_converters(), Some(Arc::new(TicketMetadataCollector)))
        .respond(input)
        .await
}

#[tokio::test]
async fn it_asks_for_a_read_ticket_on_get() -> TestResult {
    let input = ErrorHandlerInput::new(HttpError::not_found("/doc")).with_request(request(Method::GET)?);

    let response = answer(ErrorHandlerConfig::default(), input).await;

    assert_eq!(
        response.metadata.as_ref().and_then(|m| m.get(&auth::TICKET_SUBJECT)).cloned(),
        Some(Term::from(NamedNode::new(DOC)))
    );
    assert_eq!(ticket_needs(&response), vec![Term::from(acl::READ)]);
    Ok(())
}

#[tokio::test]
async fn it_asks_for_every_mutating_mode_on_put() -> TestResult {
    let input = ErrorHandlerInput::new(HttpError::not_found("/doc")).with_request(request(Method::PUT)?);

    let response = answer(ErrorHandlerConfig::default(), input).await;

    assert_eq!(
        ticket_needs(&response),
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
async fn it_asks_for_append_on_post() -> TestResult {
    let input = ErrorHandlerInput::new(HttpError::not_found("/doc")).with_request(request(Method::POST)?);

    let response = answer(ErrorHandlerConfig::default(), input).await;

    assert_eq!(ticket_needs(&response), vec![Term::from(acl::APPEND)]);
    Ok(())
}

#[tokio::test]
async fn it_negotiates_json_and_keeps_the_trace_private() -> TestResult {
    let input = ErrorHandlerInput::new(HttpError::generic("boom").with_trace("Error: boom\n at f()"))
        .with_preferences(RepresentationPreferences::from_accept("application/json"));

    let response = answer(ErrorHandlerConfig::default(), input).await;

    assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.metadata.as_ref().and_then(|m| m.content_type()),
        Some(APPLICATION_JSON)
    );
    let body: Value = serde_json::from_slice(&read_to_end(response.data.expect("data")).await?)?;
    assert_eq!(
        body,
        json!({ "name": "Error", "message": "boom", "statusCode": 500 })
    );
    Ok(())
}

#[tokio::test]
async fn it_falls_back_to_text_without_the_trace() -> TestResult {
    // Nothing the converters produce is acceptable, so the fallback answers.
    let input = ErrorHandlerInput::new(HttpError::generic("boom").with_trace("Error: boom\n at f()"))
        .with_preferences(RepresentationPreferences::from_accept("image/png"));

    let response = answer(ErrorHandlerConfig::default(), input).await;

    assert_eq!(
        response.metadata.as_ref().and_then(|m| m.content_type()),
        Some(TEXT_PLAIN)
    );
    let body = read_to_end(response.data.expect("data")).await?;
    assert_eq!(&body[..], b"Error: boom\n");
    Ok(())
}

#[tokio::test]
async fn it_discloses_the_trace_when_configured() -> TestResult {
    let input = ErrorHandlerInput::new(HttpError::generic("boom").with_trace("Error: boom\n at f()"))
        .with_preferences(RepresentationPreferences::from_accept("text/plain"));

    let response = answer(ErrorHandlerConfig::default().with_stack_trace(true), input).await;

    let body = read_to_end(response.data.expect("data")).await?;
    assert_eq!(&body[..], b"Error: boom\n at f()\n");
    Ok(())
}

#[tokio::test]
async fn it_never_fails_through_the_handler_interface() -> TestResult {
    let handler = ErrorHandlerConfig::default().build(error_converters(), None);
    let input = ErrorHandlerInput::new(HttpError::bad_request("nope"))
        .with_preferences(RepresentationPreferences::from_accept("image/png"));

    handler.can_handle(&input).await?;
    let response = handler.handle_safe(input).await?;

    assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn it_answers_in_the_most_wanted_media_type() -> TestResult {
    let input = ErrorHandlerInput::new(HttpError::generic("boom"))
        .with_preferences(RepresentationPreferences::from_accept("text/plain, application/json;q=0.1"));

    let response = answer(ErrorHandlerConfig::default(), input).await;

    assert_eq!(
        response.metadata.as_ref().and_then(|m| m.content_type()),
        Some(TEXT_PLAIN)
    );
    let body = read_to_end(response.data.expect("data")).await?;
    assert_eq!(&body[..], b"Error: boom\n");
    Ok(())
}

#[tokio::test]
async fn it_negotiates_with_the_accept_header_of_the_request() -> TestResult {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json;q=0.3, text/*"));
    let request = request(Method::GET)?.with_headers(headers);

    let response = answer(
        ErrorHandlerConfig::default(),
        ErrorHandlerInput::from_request(HttpError::not_found("/doc"), request),
    )
    .await;

    assert_eq!(response.status_code, StatusCode::NOT_FOUND);
    assert_eq!(
        response.metadata.as_ref().and_then(|m| m.content_type()),
        Some(TEXT_PLAIN)
    );
    assert_eq!(ticket_needs(&response), vec![Term::from(acl::READ)]);
    Ok(())
}
