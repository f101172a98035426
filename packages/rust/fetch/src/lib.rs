//! Category sources for the tree builder.
//!
//! Both sources yield the content API payload `{ "data": [...] }`:
//! - [`fetch_categories`] — HTTP GET against a categories endpoint
//! - [`read_categories`] — the same JSON read from a local file

use std::path::Path;

use categorytree_shared::{CategoriesResponse, CategoryTreeError, Result};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 3;

/// Default timeout in seconds for the categories request.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent string for category requests.
const USER_AGENT: &str = concat!("categorytree/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Fetch options
// ---------------------------------------------------------------------------

/// Configuration for HTTP fetches.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Timeout for HTTP requests in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Fetch the category payload from `url`.
///
/// Any non-2xx status is a [`CategoryTreeError::Network`] error; a body
/// that is not the expected JSON is a [`CategoryTreeError::Parse`] error.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_categories(url: &Url, opts: &FetchOptions) -> Result<CategoriesResponse> {
    info!("fetching categories");

    let client = build_client(opts)?;
    let response = client
        .get(url.as_str())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| CategoryTreeError::Network(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CategoryTreeError::Network(format!("{url}: HTTP {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CategoryTreeError::Network(format!("{url}: failed to read body: {e}")))?;

    let parsed = parse_body(&body, url.as_str())?;
    debug!(
        categories = parsed.data.as_ref().map_or(0, Vec::len),
        "categories fetched"
    );
    Ok(parsed)
}

/// Read the category payload from a JSON file on disk.
pub fn read_categories(path: &Path) -> Result<CategoriesResponse> {
    let content = std::fs::read_to_string(path).map_err(|e| CategoryTreeError::io(path, e))?;
    parse_body(&content, &path.display().to_string())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a reqwest client with appropriate settings.
fn build_client(opts: &FetchOptions) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(std::time::Duration::from_secs(opts.timeout_secs))
        .build()
        .map_err(|e| CategoryTreeError::Network(format!("failed to build HTTP client: {e}")))
}

fn parse_body(body: &str, source: &str) -> Result<CategoriesResponse> {
    serde_json::from_str(body)
        .map_err(|e| CategoryTreeError::parse(format!("{source}: invalid categories payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "data": [
            {"id": 1, "Title": "2#", "MetaTagDescription": "img", "name": "A", "children": []}
        ]
    }"#;

    async fn serve(template: wiremock::ResponseTemplate) -> wiremock::MockServer {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/api/categories"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn endpoint(server: &wiremock::MockServer) -> Url {
        Url::parse(&format!("{}/api/categories", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_categories() {
        let server = serve(wiremock::ResponseTemplate::new(200).set_body_string(PAYLOAD)).await;

        let response = fetch_categories(&endpoint(&server), &FetchOptions::default())
            .await
            .unwrap();

        let data = response.data.expect("data present");
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].title, "2#");
        assert_eq!(data[0].meta_description, "img");
    }

    #[tokio::test]
    async fn test_fetch_missing_data() {
        let server = serve(wiremock::ResponseTemplate::new(200).set_body_string("{}")).await;

        let response = fetch_categories(&endpoint(&server), &FetchOptions::default())
            .await
            .unwrap();
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let server = serve(wiremock::ResponseTemplate::new(503)).await;

        let err = fetch_categories(&endpoint(&server), &FetchOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CategoryTreeError::Network(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let server =
            serve(wiremock::ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

        let err = fetch_categories(&endpoint(&server), &FetchOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CategoryTreeError::Parse { .. }));
    }

    #[test]
    fn test_read_categories_fixture() {
        let response =
            read_categories(Path::new("../../../fixtures/json/categories.input.json")).unwrap();
        assert_eq!(response.data.map(|d| d.len()), Some(7));
    }

    #[test]
    fn test_read_categories_missing_file() {
        let err = read_categories(Path::new("/nonexistent/categories.json")).unwrap_err();
        assert!(matches!(err, CategoryTreeError::Io { .. }));
    }
}
