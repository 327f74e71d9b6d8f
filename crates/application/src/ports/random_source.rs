use ferrous_doh_domain::TransactionId;

/// Source of transaction ids.
///
/// Implementations are shared across callers, so they must be safe to use
/// concurrently. Every id must be drawn uniformly from `1..=65535`.
pub trait RandomSource: Send + Sync {
    fn next_transaction_id(&self) -> TransactionId;
}
