#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_application::ports::{DnsTransport, RandomSource, TransportResponse};
use ferrous_doh_domain::{TransactionId, TransportError};
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Always returns the same id.
pub struct FixedRandomSource {
    id: TransactionId,
    calls: AtomicUsize,
}

impl FixedRandomSource {
    pub fn new(id: u16) -> Self {
        Self {
            id: TransactionId::from_u16(id).unwrap(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RandomSource for FixedRandomSource {
    fn next_transaction_id(&self) -> TransactionId {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.id
    }
}

/// Counts up from a starting id, wrapping past 65535 back to 1.
pub struct SequenceRandomSource {
    next: AtomicU16,
}

impl SequenceRandomSource {
    pub fn starting_at(id: u16) -> Self {
        Self {
            next: AtomicU16::new(id.max(1)),
        }
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_transaction_id(&self) -> TransactionId {
        let id = self.next.fetch_add(1, Ordering::SeqCst);
        TransactionId::from_u16(id).unwrap_or(TransactionId::MIN)
    }
}

pub struct MockDnsTransport {
    response: Result<Bytes, TransportError>,
    sent: Mutex<Vec<(Vec<u8>, Duration)>>,
}

impl MockDnsTransport {
    pub fn responding(bytes: &[u8]) -> Self {
        Self {
            response: Ok(Bytes::copy_from_slice(bytes)),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            response: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, Duration)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockDnsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        self.sent
            .lock()
            .unwrap()
            .push((message_bytes.to_vec(), timeout));

        self.response.clone().map(|bytes| TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }

    fn endpoint(&self) -> &str {
        "mock://resolver"
    }
}
