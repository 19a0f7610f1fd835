use http::{HeaderMap, Method, header::ACCEPT};
use url::Url;

use crate::RepresentationPreferences;

/// The parts of an incoming request that error handling looks at.
///
/// Every part is optional: errors may happen before a request was fully
/// parsed, and the handlers must cope.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    /// The request method.
    pub method: Option<Method>,
    /// The absolute URL that was requested.
    pub url: Option<Url>,
    /// The request headers.
    pub headers: HeaderMap,
}

impl HttpRequest {
    /// A request with a known method and URL.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method: Some(method),
            url: Some(url),
            headers: HeaderMap::new(),
        }
    }

    /// Replace the headers of the request.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// The preferences stated by the `Accept` headers. A request without
    /// any accepts everything.
    pub fn preferences(&self) -> RepresentationPreferences {
        let accept = self
            .headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(",");
        RepresentationPreferences::from_accept(&accept)
    }
}
