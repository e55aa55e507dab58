//! HTTP client for the contact endpoint
//!
//! Posts the form as JSON and maps the response status to success or
//! failure. The response body is never read.

use super::error::SubmitError;
use super::traits::ContactClientTrait;
use crate::state::FormInput;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Default contact endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/contact";

/// Client for posting messages to the contact endpoint
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Client that ignores proxy settings from the environment, for talking
    /// to a local test server
    #[cfg(test)]
    fn direct(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ContactClientTrait for ContactClient {
    async fn submit(&self, input: &FormInput) -> Result<(), SubmitError> {
        tracing::debug!("POST {}", self.endpoint);

        // `json` sets Content-Type: application/json
        let response = self.http.post(&self.endpoint).json(input).send().await?;

        let status = response.status();
        tracing::debug!("Contact endpoint answered {status}");
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Raw HTTP request as seen by the server
    struct Captured {
        head: String,
        body: String,
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Accept one connection, capture the request and answer with `status_line`
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let (head, body_start, len) = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "client closed before sending a full request");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = find_header_end(&buf) {
                    let head = String::from_utf8_lossy(&buf[..end]).to_string();
                    let len = content_length(&head);
                    break (head, end + 4, len);
                }
            };
            while buf.len() < body_start + len {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "client closed before sending the body");
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            Captured {
                head,
                body: String::from_utf8_lossy(&buf[body_start..body_start + len]).to_string(),
            }
        });

        (format!("http://{addr}/api/contact"), handle)
    }

    fn scenario_a() -> FormInput {
        FormInput {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            phone: String::new(),
            message: "Hello there!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK").await;
        let client = ContactClient::direct(endpoint).unwrap();

        client.submit(&scenario_a()).await.unwrap();

        let captured = server.await.unwrap();
        assert!(captured.head.starts_with("POST /api/contact HTTP/1.1"));
        assert!(captured
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/json"));

        let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jo",
                "email": "a@b.com",
                "phone": "",
                "message": "Hello there!",
            })
        );
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let (endpoint, server) = serve_once("HTTP/1.1 204 No Content").await;
        let client = ContactClient::direct(endpoint).unwrap();

        tokio_test::assert_ok!(client.submit(&scenario_a()).await);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let (endpoint, server) = serve_once("HTTP/1.1 500 Internal Server Error").await;
        let client = ContactClient::direct(endpoint).unwrap();

        let err = client.submit(&scenario_a()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 500 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_error_is_rejected() {
        let (endpoint, server) = serve_once("HTTP/1.1 422 Unprocessable Entity").await;
        let client = ContactClient::direct(endpoint).unwrap();

        let err = client.submit(&scenario_a()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 422 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ContactClient::direct(format!("http://{addr}/api/contact")).unwrap();
        let err = client.submit(&scenario_a()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[test]
    fn test_rejected_error_message() {
        let err = SubmitError::Rejected { status: 503 };
        assert_eq!(
            err.to_string(),
            "Contact endpoint rejected the message with status 503"
        );
    }
}
