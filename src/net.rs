//! Shared HTTP plumbing for the catalog and market fetchers.

use std::sync::LazyLock;
use std::time::Duration;

use serde::de::DeserializeOwned;

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shared HTTP client with connection pooling for all API fetches.
/// Connection pooling is enabled by default in `reqwest::Client`.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("mercado/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .unwrap_or_default()
});

/// What: Fetch a URL and deserialize its JSON body.
///
/// Inputs:
/// - `url`: Absolute URL to request.
///
/// Output:
/// - `Ok(T)` on a 2xx response with a body deserializing into `T`; `Err`
///   otherwise (transport failure, non-success status, or parse failure).
///
/// # Errors
/// - Network/transport failures from the underlying client
/// - Non-success HTTP status codes
/// - JSON bodies that do not match `T`
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let resp = HTTP_CLIENT.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "request returned non-success status");
        return Err(format!("{url} returned status {status}").into());
    }
    let body = resp.json::<T>().await?;
    Ok(body)
}
