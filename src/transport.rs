//! How an encoded payload reaches the webhook.

use once_cell::sync::Lazy;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::future::Future;
use url::Url;

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client]. Clients built with [Client::new][crate::Client::new]
/// share it.
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Get a handle to the shared HTTP client.
pub fn shared() -> reqwest::Client {
    CLIENT.clone()
}

/// Anything able to `POST` a JSON body to a URL.
///
/// Timeouts, TLS and connection handling are the transport's business; the
/// [Client][crate::Client] calls `post` exactly once per send and hands back
/// whatever error it produces.
pub trait Transport {
    type Error;

    fn post(&self, url: &Url, body: String) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl Transport for reqwest::Client {
    type Error = reqwest::Error;

    /// Non-2xx responses are treated as failures. The response body isn't
    /// inspected.
    async fn post(&self, url: &Url, body: String) -> Result<(), Self::Error> {
        self.request(reqwest::Method::POST, url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
