use std::time::Duration;

use crate::client::VqliteHttpClient;
use crate::{VqliteClient, VqliteError};

#[derive(Default, Clone, Debug)]
pub struct VqliteClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl VqliteClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    pub fn base_url_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.base_url = Some(value);
        }
        self
    }

    /// Transport-level request timeout, passed through to the underlying
    /// HTTP client. No timeout is applied when unset.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    pub fn build(self) -> Result<VqliteClient, VqliteError> {
        let base_url = self
            .base_url
            .ok_or_else(|| VqliteError::Config("base_url is required".to_string()))?
            .trim()
            .to_string();
        if base_url.is_empty() {
            return Err(VqliteError::Config("base_url cannot be empty".to_string()));
        }

        let client = VqliteHttpClient::new(base_url, self.timeout)?;
        Ok(VqliteClient::from_http_client(client))
    }
}
