//! HTTP transport used by the remote advisory client.
//!
//! Kept behind a trait so the client's timeout and error classification can
//! be tested against stub transports.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use super::error::TransportError;

/// A completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    /// Response body, or `None` if it could not be read as text.
    pub body: Option<String>,
}

/// Sends one JSON POST and returns the full response.
///
/// Dropping the returned future must abort the request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: serde_json::Value,
    ) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.ok();

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use reqwest::header::{AUTHORIZATION, HeaderValue};
    use serde_json::json;

    #[tokio::test]
    async fn posts_json_with_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat")
                    .header("authorization", "Bearer k")
                    .json_body(json!({ "model": "m" }));
                then.status(200).body("{\"ok\":true}");
            })
            .await;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer k"));

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .post_json(&server.url("/chat"), headers, json!({ "model": "m" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.as_deref(), Some("{\"ok\":true}"));
    }

    #[tokio::test]
    async fn error_status_is_returned_not_raised() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat");
                then.status(503).body("down");
            })
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .post_json(&server.url("/chat"), HeaderMap::new(), json!({}))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body.as_deref(), Some("down"));
    }

    #[tokio::test]
    async fn refused_connection_reports_cause() {
        // Reserve a port, then free it so nothing is listening.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let transport = ReqwestTransport::new().unwrap();
        let err = transport
            .post_json(&format!("http://{addr}/chat"), HeaderMap::new(), json!({}))
            .await
            .unwrap_err();

        assert!(err.message.starts_with("error sending request"));
        assert!(err.message.to_lowercase().contains("connect"), "{}", err.message);
    }
}
