use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;

use crate::VqliteError;

/// Fixed client identifier sent as the `User-Agent` header on every request.
pub const CLIENT_IDENTIFIER: &str = "VQLite Rust SDK";

const MAX_ATTEMPTS: usize = 3;

/// Low-level transport for the VQLite HTTP API.
///
/// Owns the normalized base URL and a shared `reqwest::Client`, merges
/// default headers under caller-supplied ones, and retries transient
/// failures up to a fixed attempt cap. HTTP statuses are never turned into
/// errors here; the raw response is handed back to the caller.
#[derive(Clone, Debug)]
pub struct VqliteHttpClient {
    http: Client,
    base_url: String,
}

impl VqliteHttpClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, VqliteError> {
        reqwest::Url::parse(&base_url)
            .map_err(|err| VqliteError::Config(format!("invalid base_url: {err}")))?;

        let base_url = base_url.trim_end_matches('/').to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| VqliteError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends `method` to `url`, retrying transient failures.
    ///
    /// Transport-level errors and retryable statuses (5xx, 429) are retried
    /// immediately up to 3 attempts total. A response that survives the
    /// retry policy is returned as-is regardless of status; a transport
    /// error that exhausts the cap is surfaced unmodified.
    pub async fn request<Req>(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<&Req>,
    ) -> Result<Response, VqliteError>
    where
        Req: Serialize + ?Sized,
    {
        let headers = merge_headers(headers);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut request = self
                .http
                .request(method.clone(), url)
                .headers(headers.clone());
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    if is_retryable_status(response.status()) && attempt < MAX_ATTEMPTS {
                        tracing::warn!(
                            attempt,
                            status = %response.status(),
                            url,
                            "retrying request after retryable status"
                        );
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    if attempt < MAX_ATTEMPTS {
                        tracing::warn!(
                            attempt,
                            error = %err,
                            url,
                            "retrying request after transport failure"
                        );
                        continue;
                    }
                    return Err(VqliteError::Transport(err));
                }
            }
        }
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

// Caller headers win on collision; non-conflicting defaults stay.
fn merge_headers(extra: HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_IDENTIFIER));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in &extra {
        headers.insert(name.clone(), value.clone());
    }
    headers
}
