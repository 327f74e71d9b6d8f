use crate::ports::DnsTransport;
use crate::services::MessageBuilder;
use bytes::Bytes;
use ferrous_doh_domain::{DomainError, TransactionId, WireMessage};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Result of one completed lookup.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub transaction_id: TransactionId,
    pub query: WireMessage,
    /// Raw response body, not decoded.
    pub response: Bytes,
    pub protocol_used: &'static str,
    pub elapsed: Duration,
}

/// Builds one query for a domain and exchanges it over the transport.
///
/// No retries and no fallback: the first error from either stage is
/// returned as-is, wrapped in the [`DomainError`] variant naming the stage.
pub struct LookupDomainUseCase {
    builder: MessageBuilder,
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl LookupDomainUseCase {
    pub fn new(
        builder: MessageBuilder,
        transport: Arc<dyn DnsTransport>,
        timeout: Duration,
    ) -> Self {
        Self {
            builder,
            transport,
            timeout,
        }
    }

    /// Encodes the query without sending it.
    pub fn prepare(&self, domain: &str) -> Result<WireMessage, DomainError> {
        let message = self.builder.build(domain).inspect_err(|e| {
            warn!(domain = %domain, error = %e, "Failed to encode DNS query");
        })?;

        debug!(
            domain = %domain,
            id = %message.header().transaction_id(),
            message_len = message.len(),
            "DNS query encoded"
        );

        Ok(message)
    }

    /// Sends an already encoded query.
    pub async fn exchange(&self, query: WireMessage) -> Result<LookupOutcome, DomainError> {
        let start = Instant::now();

        let response = self
            .transport
            .send(query.as_bytes(), self.timeout)
            .await
            .inspect_err(|e| {
                warn!(
                    endpoint = %self.transport.endpoint(),
                    protocol = self.transport.protocol_name(),
                    error = %e,
                    "DNS query exchange failed"
                );
            })?;

        let elapsed = start.elapsed();
        debug!(
            endpoint = %self.transport.endpoint(),
            response_len = response.bytes.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "DNS response received"
        );

        Ok(LookupOutcome {
            transaction_id: query.header().transaction_id(),
            query,
            response: response.bytes,
            protocol_used: response.protocol_used,
            elapsed,
        })
    }

    pub async fn execute(&self, domain: &str) -> Result<LookupOutcome, DomainError> {
        let query = self.prepare(domain)?;
        self.exchange(query).await
    }
}
