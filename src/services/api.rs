use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Thin wrapper around the backend HTTP API: one GET, one POST, JSON in and
/// out. No retry, no backoff, no auth injection; failures are logged and
/// re-thrown for the caller to surface.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

/// Failures crossing the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        source: reqwest::Error,
    },
    #[error("{path} returned status {status}")]
    Status { path: String, status: StatusCode },
    #[error("response from {path} was not valid JSON: {source}")]
    Decode {
        path: String,
        source: reqwest::Error,
    },
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .map_err(|source| self.transport(path, "GET", source))?;
        self.decode(path, response)
    }

    pub fn post_json(&self, path: &str, body: &impl Serialize) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|source| self.transport(path, "POST", source))?;
        self.decode(path, response)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn transport(&self, path: &str, method: &str, source: reqwest::Error) -> ApiError {
        error!(path, method, "api request failed: {source}");
        ApiError::Transport {
            path: path.to_string(),
            source,
        }
    }

    fn decode(&self, path: &str, response: reqwest::blocking::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            error!(path, %status, "api request rejected");
            return Err(ApiError::Status {
                path: path.to_string(),
                status,
            });
        }

        response.json().map_err(|source| {
            error!(path, "api response decode failed: {source}");
            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }
}
