use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::TransportError;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {

    pub bytes: Bytes,

    pub protocol_used: &'static str,
}

/// Carries an encoded DNS message to a resolver and returns the raw reply.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;

    fn protocol_name(&self) -> &'static str;

    /// Where the transport sends queries, for diagnostics.
    fn endpoint(&self) -> &str;
}
