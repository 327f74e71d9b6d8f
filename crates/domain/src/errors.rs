use thiserror::Error;

/// A domain name that cannot be represented in the wire format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Domain name is empty")]
    EmptyName,

    #[error("Empty label at position {position} in '{domain}'")]
    EmptyLabel { domain: String, position: usize },

    #[error("Label '{label}' is {len} bytes, wire format allows at most 255")]
    OversizedLabel { label: String, len: usize },

    #[error("Label '{label}' is {len} bytes, label policy allows at most {max}")]
    LabelExceedsPolicy { label: String, len: usize, max: usize },

    #[error("Encoded name is {len} bytes, label policy allows at most {max}")]
    NameTooLong { len: usize, max: usize },
}

/// Failures reported by the DoH transport.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    #[error("Timeout sending DoH query to {url}")]
    Timeout { url: String },

    #[error("DoH request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("DoH server {url} returned HTTP {status}: {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Failed to read DoH response from {url}: {reason}")]
    Body { url: String, reason: String },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),
}

impl DomainError {
    /// Name of the stage that produced the error.
    pub fn stage(&self) -> &'static str {
        match self {
            DomainError::Encoding(_) => "encoding",
            DomainError::Transport(_) => "transport",
        }
    }
}
