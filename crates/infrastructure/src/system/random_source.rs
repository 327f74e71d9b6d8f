use ferrous_doh_application::ports::RandomSource;
use ferrous_doh_domain::TransactionId;

/// Transaction ids from fastrand's thread-local generator.
///
/// Each thread seeds its own generator, so the source can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastrandSource;

impl FastrandSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for FastrandSource {
    fn next_transaction_id(&self) -> TransactionId {
        // 0..=65534 shifted onto 1..=65535
        TransactionId::from_offset(fastrand::u16(..u16::MAX))
    }
}
