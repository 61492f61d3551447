//! HTTP client for the REST backend

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult, Session};

/// Request payload
#[derive(Debug)]
pub enum RequestBody {
    /// No body; still sent with a JSON content type
    Empty,
    Json(serde_json::Value),
    /// Multipart form; the boundary content type is set by reqwest
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    /// Serialize `value` into a JSON body
    pub fn json<B: serde::Serialize>(value: &B) -> ClientResult<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }
}

/// Fetch wrapper: bearer token from the session, JSON content type unless
/// multipart, and an error for every non-2xx response
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        let base_url = &config.api_base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "API_BASE_URL must be an http(s) URL, got {:?}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.session.token().map(|t| format!("Bearer {}", t))
    }

    /// Send a request, failing on any non-2xx status
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
    ) -> ClientResult<Response> {
        let url = self.url(endpoint);
        let mut req = self.client.request(method.clone(), &url);

        if let Some(auth) = self.auth_header() {
            req = req.header(AUTHORIZATION, auth);
        }

        req = match body {
            RequestBody::Empty => req.header(CONTENT_TYPE, "application/json"),
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(form) => req.multipart(form),
        };

        tracing::debug!(%method, %url, "API request");
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            tracing::warn!(%method, %url, status = status.as_u16(), "API call failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                status_text,
            });
        }

        Ok(response)
    }

    /// Send a request and decode the JSON response; an empty body reads as `null`
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
    ) -> ClientResult<T> {
        let response = self.send(method, endpoint, body).await?;
        let text = response.text().await?;

        if text.trim().is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        self.call(Method::GET, endpoint, RequestBody::Empty).await
    }
}
