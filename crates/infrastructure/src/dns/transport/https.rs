//! HTTPS Transport for DNS queries — DNS-over-HTTPS GET (RFC 8484 §4.1)
//!
//! The wire-format query is base64url-encoded without padding and sent as
//! the `dns` query parameter. The response body is the raw DNS message and is
//! returned undecoded.
//!
//! Wire format (HTTP):
//! ```text
//! GET /dns-query?dns=EjQBAAABAAAAAAAAAWEDY29tAAABAAE HTTP/2
//! Content-Type: application/dns-message
//! Accept: application/dns-message
//! ```

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bytes::{Bytes, BytesMut};
use ferrous_doh_application::ports::{DnsTransport, TransportResponse};
use ferrous_doh_domain::TransportError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Media type of DNS wire-format messages (RFC 8484 §6)
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// Largest DNS message a 16-bit length can describe.
pub const MAX_DNS_MESSAGE_LEN: usize = u16::MAX as usize;

/// Name of the query parameter carrying the encoded message.
pub const DNS_QUERY_PARAM: &str = "dns";

/// Base64url without padding, as the `dns` parameter requires.
pub fn encode_query_param(message_bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(message_bytes)
}

/// DNS-over-HTTPS transport using GET requests
pub struct HttpsTransport {
    url: String,
}

impl HttpsTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    /// Reads the body, refusing anything larger than a DNS message.
    async fn read_body(&self, mut response: reqwest::Response) -> Result<Bytes, TransportError> {
        if let Some(len) = response.content_length() {
            if len > MAX_DNS_MESSAGE_LEN as u64 {
                return Err(self.oversized_body(len));
            }
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| TransportError::Body {
            url: self.url.clone(),
            reason: e.to_string(),
        })? {
            let len = body.len() + chunk.len();
            if len > MAX_DNS_MESSAGE_LEN {
                return Err(self.oversized_body(len as u64));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body.freeze())
    }

    fn oversized_body(&self, len: u64) -> TransportError {
        TransportError::Body {
            url: self.url.clone(),
            reason: format!(
                "response of at least {} bytes exceeds the {} byte DNS message limit",
                len, MAX_DNS_MESSAGE_LEN
            ),
        }
    }

    /// Full request URL for `message_bytes`.
    pub fn request_url(&self, message_bytes: &[u8]) -> String {
        format!(
            "{}?{}={}",
            self.url,
            DNS_QUERY_PARAM,
            encode_query_param(message_bytes)
        )
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let request_url = self.request_url(message_bytes);

        debug!(
            url = %self.url,
            message_len = message_bytes.len(),
            "Sending DoH query"
        );

        let response = tokio::time::timeout(
            timeout,
            SHARED_CLIENT
                .get(&request_url)
                .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .send(),
        )
        .await
        .map_err(|_| TransportError::Timeout {
            url: self.url.clone(),
        })?
        .map_err(|e| TransportError::Request {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // Read response body (raw DNS message)
        let response_bytes = tokio::time::timeout(timeout, self.read_body(response))
            .await
            .map_err(|_| TransportError::Timeout {
                url: self.url.clone(),
            })??;

        debug!(
            url = %self.url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
