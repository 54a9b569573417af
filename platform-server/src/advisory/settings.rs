//! Process-wide advisory configuration.

use std::time::Duration;

/// Default chat-completion endpoint (OpenRouter).
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model used when `OPENROUTER_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";

/// Sent as `X-Title` on every remote call.
pub const PRODUCT_TITLE: &str = "Platform Pro";

/// Credential value shipped in sample environments. Treated as unconfigured.
pub const PLACEHOLDER_API_KEY: &str = "sk-or-v1-demo-key";

/// Hard wall-clock budget for one remote call.
pub const REMOTE_TIMEOUT: Duration = Duration::from_millis(12_000);

/// Configuration for the live status advisor.
///
/// Read once at startup and passed to
/// [`LiveStatusAdvisor`](super::LiveStatusAdvisor) explicitly.
#[derive(Clone, Default)]
pub struct AdvisorySettings {
    /// Bearer credential for the chat-completion provider.
    pub api_key: Option<String>,
    /// Model override.
    pub model: Option<String>,
    /// Public URL of the site, sent as `HTTP-Referer` when present.
    pub site_url: Option<String>,
    /// Endpoint override (for testing).
    pub endpoint: Option<String>,
}

impl AdvisorySettings {
    /// Settings with the given credential and defaults elsewhere.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Values are trimmed; empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_key: get("OPENROUTER_API_KEY"),
            model: get("OPENROUTER_MODEL"),
            site_url: get("SITE_URL"),
            endpoint: None,
        }
    }

    /// Set the model override.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the site URL.
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = Some(url.into());
        self
    }

    /// Set a custom endpoint (for testing).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// The credential, if one is configured and is not the placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    /// Model identifier to request.
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Endpoint to call.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

// Hand-written so the credential never reaches the logs.
impl std::fmt::Debug for AdvisorySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisorySettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("site_url", &self.site_url)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
