//! Remote advisory client.
//!
//! Makes a single bounded-time call to a chat-completion endpoint and
//! classifies every failure into a [`FailureCategory`]. Never retries;
//! retrying is left to the caller.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::error::{FailureCategory, RemoteAdvisoryError};
use super::request::{AdvisoryRequest, Prompt};
use super::settings::{AdvisorySettings, PRODUCT_TITLE, REMOTE_TIMEOUT};
use super::transport::{Transport, TransportResponse};

/// Returned when the provider answers successfully but without any content.
pub const EMPTY_COMPLETION_PLACEHOLDER: &str =
    "AI Update: Unable to fetch live status at the moment. Try again shortly.";

/// Provider name used in user-facing error messages.
const PROVIDER: &str = "OpenRouter";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 180;

/// Parameters for one remote call.
///
/// Built fresh from [`AdvisorySettings`] for every call.
#[derive(Clone)]
pub struct RemoteCallConfig {
    pub endpoint: String,
    pub credential: String,
    pub model: String,
    pub timeout: Duration,
    pub extra_headers: BTreeMap<String, String>,
}

impl RemoteCallConfig {
    /// Derive the call parameters from process-wide settings.
    pub fn from_settings(settings: &AdvisorySettings, credential: &str) -> Self {
        let mut extra_headers = BTreeMap::new();
        extra_headers.insert("X-Title".to_string(), PRODUCT_TITLE.to_string());
        if let Some(site_url) = &settings.site_url {
            extra_headers.insert("HTTP-Referer".to_string(), site_url.clone());
        }

        Self {
            endpoint: settings.endpoint().to_string(),
            credential: credential.to_string(),
            model: settings.model().to_string(),
            timeout: REMOTE_TIMEOUT,
            extra_headers,
        }
    }

    fn headers(&self) -> Result<HeaderMap, RemoteAdvisoryError> {
        let invalid = |what: &str| {
            RemoteAdvisoryError::new(
                FailureCategory::BadRequest,
                format!("Bad request to {PROVIDER}. Invalid {what} header."),
            )
        };

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.credential))
            .map_err(|_| invalid("authorization"))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.extra_headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid(name.as_str()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| invalid(name.as_str()))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

// Hand-written so the credential never reaches the logs.
impl std::fmt::Debug for RemoteCallConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCallConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("extra_headers", &self.extra_headers)
            .finish_non_exhaustive()
    }
}

/// Client for the chat-completion provider.
#[derive(Clone)]
pub struct RemoteAdvisoryClient {
    transport: Arc<dyn Transport>,
}

impl RemoteAdvisoryClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Ask the model for a live status.
    ///
    /// Makes at most one HTTP request. If it has not completed within
    /// `config.timeout`, the request future is dropped (aborting the
    /// exchange) and the call fails with [`FailureCategory::Timeout`].
    pub async fn call(
        &self,
        request: &AdvisoryRequest,
        config: &RemoteCallConfig,
    ) -> Result<String, RemoteAdvisoryError> {
        let headers = config.headers()?;
        let body = chat_body(&config.model, &request.prompt());

        debug!(model = %config.model, endpoint = %config.endpoint, "requesting live status");

        let exchange = self.transport.post_json(&config.endpoint, headers, body);
        let result = match tokio::time::timeout(config.timeout, exchange).await {
            Ok(Ok(response)) => interpret_response(response),
            Ok(Err(e)) => Err(RemoteAdvisoryError::new(
                FailureCategory::UpstreamError,
                format!("Unexpected error occurred while contacting {PROVIDER}. {e}"),
            )),
            Err(_) => Err(RemoteAdvisoryError::new(
                FailureCategory::Timeout,
                format!("{PROVIDER} request timed out. Please try again."),
            )),
        };

        if let Err(e) = &result {
            warn!(category = %e.category, "live status request failed: {}", e.message);
        }

        result
    }
}

/// Build the chat-completion request body.
fn chat_body(model: &str, prompt: &Prompt) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": prompt.system },
            { "role": "user", "content": prompt.user },
        ],
        "temperature": TEMPERATURE,
        "max_tokens": MAX_TOKENS,
    })
}

/// Turn a completed HTTP exchange into a status or a classified error.
fn interpret_response(response: TransportResponse) -> Result<String, RemoteAdvisoryError> {
    let TransportResponse { status, body } = response;

    if !status.is_success() {
        let (category, prefix) = classify_status(status);
        let detail = error_detail(status, body.as_deref());
        let message = format!("{prefix} {detail}").trim().to_string();
        return Err(RemoteAdvisoryError::new(category, message));
    }

    let parse_error = || {
        RemoteAdvisoryError::new(
            FailureCategory::ResponseParseError,
            format!("Failed to parse {PROVIDER} response JSON."),
        )
    };
    let body = body.ok_or_else(parse_error)?;
    let data: Value = serde_json::from_str(&body).map_err(|_| parse_error())?;

    let content = data
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .unwrap_or(EMPTY_COMPLETION_PLACEHOLDER);

    Ok(content.to_string())
}

fn classify_status(status: StatusCode) -> (FailureCategory, String) {
    match status {
        StatusCode::UNAUTHORIZED => (
            FailureCategory::AuthFailure,
            format!("Authentication failed with {PROVIDER}."),
        ),
        StatusCode::TOO_MANY_REQUESTS => (
            FailureCategory::RateLimited,
            format!("{PROVIDER} rate limit hit."),
        ),
        StatusCode::BAD_REQUEST => (
            FailureCategory::BadRequest,
            format!("Bad request to {PROVIDER}."),
        ),
        _ => (
            FailureCategory::UpstreamError,
            format!("{PROVIDER} request failed ({}).", status.as_u16()),
        ),
    }
}

/// Best human-readable detail from an error response.
///
/// Prefers `error.message` from a JSON body, then the JSON itself, then the
/// raw body, then the status reason phrase.
fn error_detail(status: StatusCode, body: Option<&str>) -> String {
    let body = body.map(str::trim).filter(|b| !b.is_empty());

    if let Some(json) = body.and_then(|b| serde_json::from_str::<Value>(b).ok()) {
        return match json.pointer("/error/message").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => json.to_string(),
        };
    }

    match body {
        Some(raw) => raw.to_string(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    }
}
