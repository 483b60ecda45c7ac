//! FaqScope HTTP client — remote search invocation against the FAQ service.
//!
//! One GET per debounced trigger with no retry; in-flight requests are
//! never aborted, and stale responses are rejected by the caller via
//! [`faqscope_core::debounce`]. Request construction is split from execution
//! so URLs and headers stay synchronously testable.

pub mod auth;

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Request, Url};
use thiserror::Error;
use tracing::{debug, warn};

use faqscope_core::endpoint::{EndpointSpec, SearchEndpoint};
use faqscope_core::types::FaqHit;

pub use auth::{StaticTokenProvider, TokenProvider};

/// Base URL of the FAQ admin controller when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/admin/faq";

/// Everything that can go wrong during one search attempt. All variants
/// collapse to their `Display` text in the UI error panel.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("HTTP error: status {0}")]
    Status(u16),
    /// The body was not a JSON array of FAQ hits.
    #[error("malformed response body: {0}")]
    Json(#[source] reqwest::Error),
    /// The configured base URL or the assembled request URL did not parse.
    #[error("invalid search URL: {0}")]
    Url(#[from] url::ParseError),
    /// The endpoint descriptor demands a bearer token but the provider has
    /// none. Raised before any I/O.
    #[error("endpoint `{0}` requires authentication but no bearer token is available")]
    MissingToken(&'static str),
}

/// Asynchronous client for the FAQ service's search endpoints.
pub struct FaqSearchClient {
    client: Client,
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
}

impl FaqSearchClient {
    /// Build a client against `base_url`. The URL is validated here, before
    /// the first keystroke can reach [`search`](Self::search).
    pub fn new(
        base_url: &str,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, SearchError> {
        Url::parse(base_url)?;
        let client = Client::builder()
            .user_agent("faqscope")
            .build()
            .map_err(SearchError::Http)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_provider,
        })
    }

    /// Run one search. A single attempt: transport failures, non-success
    /// statuses and malformed bodies all surface as [`SearchError`].
    pub async fn search(
        &self,
        endpoint: SearchEndpoint,
        query: &str,
    ) -> Result<Vec<FaqHit>, SearchError> {
        let spec = endpoint.spec();
        let request = self.build_request(spec, query)?;
        debug!(endpoint = spec.path, query, "dispatching search");

        let response = self.client.execute(request).await.map_err(SearchError::Http)?;
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = spec.path, status = status.as_u16(), "search rejected");
            return Err(SearchError::Status(status.as_u16()));
        }

        response.json::<Vec<FaqHit>>().await.map_err(SearchError::Json)
    }

    /// Assemble the GET request for `query` against `spec` without sending
    /// it: URL with the endpoint's own query parameter, JSON content type,
    /// and a bearer header exactly when the descriptor requires one.
    fn build_request(&self, spec: &EndpointSpec, query: &str) -> Result<Request, SearchError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, spec.path))?;
        url.query_pairs_mut().append_pair(spec.query_param, query);

        let mut request = self.client.get(url).header(CONTENT_TYPE, "application/json");
        if spec.requires_auth {
            let token = self
                .token_provider
                .bearer_token()
                .ok_or(SearchError::MissingToken(spec.path))?;
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request.build().map_err(SearchError::Http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHED: EndpointSpec = EndpointSpec {
        path: "all",
        query_param: "page",
        requires_auth: true,
    };

    fn client(token: Option<&str>) -> FaqSearchClient {
        FaqSearchClient::new(
            DEFAULT_API_BASE_URL,
            Arc::new(StaticTokenProvider::new(token.map(str::to_string))),
        )
        .unwrap()
    }

    #[test]
    fn pg_search_request_uses_the_key_parameter() {
        let request = client(None)
            .build_request(SearchEndpoint::PgSearch.spec(), "пароль")
            .unwrap();
        assert_eq!(request.method(), "GET");
        let url = request.url();
        assert_eq!(url.path(), "/admin/faq/pg-search");
        assert_eq!(
            url.query_pairs().next().unwrap().0.as_ref(),
            "key",
        );
        assert_eq!(url.query_pairs().next().unwrap().1.as_ref(), "пароль");
    }

    #[test]
    fn doc_search_request_uses_the_query_parameter() {
        let request = client(None)
            .build_request(SearchEndpoint::DocSearch.spec(), "a b")
            .unwrap();
        let url = request.url();
        assert_eq!(url.path(), "/admin/faq/search");
        let (name, value) = url.query_pairs().next().unwrap();
        assert_eq!(name.as_ref(), "query");
        assert_eq!(value.as_ref(), "a b");
        assert!(url.as_str().contains("query=a+b"), "query value must be URL-encoded");
    }

    #[test]
    fn json_content_type_is_always_sent_and_exempt_endpoints_skip_auth() {
        let request = client(Some("secret"))
            .build_request(SearchEndpoint::PgSearch.spec(), "q")
            .unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn auth_requiring_endpoints_get_a_bearer_header() {
        let request = client(Some("secret")).build_request(&AUTHED, "q").unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer secret"
        );
    }

    #[test]
    fn missing_token_fails_before_any_io() {
        let err = client(None).build_request(&AUTHED, "q").unwrap_err();
        assert!(matches!(err, SearchError::MissingToken("all")));
        assert!(err.to_string().contains("requires authentication"));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = FaqSearchClient::new(
            "http://localhost:8080/admin/faq/",
            Arc::new(StaticTokenProvider::default()),
        )
        .unwrap();
        let request = client
            .build_request(SearchEndpoint::PgSearch.spec(), "q")
            .unwrap();
        assert_eq!(request.url().path(), "/admin/faq/pg-search");
    }

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let result = FaqSearchClient::new("not a url", Arc::new(StaticTokenProvider::default()));
        assert!(matches!(result, Err(SearchError::Url(_))));
    }

    #[test]
    fn status_error_message_names_the_status() {
        assert_eq!(SearchError::Status(500).to_string(), "HTTP error: status 500");
    }
}
