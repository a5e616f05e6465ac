//! HTTP client for authenticated portal requests.

mod response;
mod user_agent;

pub use response::HttpResponse;
pub use user_agent::{resolve_user_agent, BROWSER_USER_AGENT, USER_AGENT};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use super::config::PortalConfig;
use crate::models::Credential;

/// HTTP client that attaches the session credential to every request.
///
/// The credential is passed per call rather than stored, so a client can be
/// shared freely and never holds authentication state.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    request_delay: Duration,
}

impl HttpClient {
    /// Create a new HTTP client; see [`resolve_user_agent`] for the accepted
    /// user agent values.
    pub fn with_user_agent(
        timeout: Duration,
        request_delay: Duration,
        user_agent_config: Option<&str>,
    ) -> Result<Self, reqwest::Error> {
        let user_agent = resolve_user_agent(user_agent_config);
        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            request_delay,
        })
    }

    /// Create a client from portal settings.
    pub fn from_config(config: &PortalConfig) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(
            Duration::from_secs(config.request_timeout),
            Duration::from_millis(config.request_delay_ms),
            config.user_agent.as_deref(),
        )
    }

    /// Make an authenticated GET request.
    pub async fn get(
        &self,
        url: &str,
        credential: &Credential,
    ) -> Result<HttpResponse, reqwest::Error> {
        let request = self.client.get(url);
        self.send(request, "GET", url, credential).await
    }

    /// Make an authenticated POST request with a URL-encoded form body.
    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
        credential: &Credential,
    ) -> Result<HttpResponse, reqwest::Error> {
        let request = self.client.post(url).form(form);
        self.send(request, "POST", url, credential).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        credential: &Credential,
    ) -> Result<HttpResponse, reqwest::Error> {
        let request = request.header(COOKIE, credential.header_value());

        let start = Instant::now();
        let response = request.send().await?;
        let duration = start.elapsed();

        debug!(
            "{} {} -> {} in {}ms",
            method,
            url,
            response.status().as_u16(),
            duration.as_millis()
        );

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        Ok(HttpResponse {
            status: response.status(),
            headers,
            response,
        })
    }
}
