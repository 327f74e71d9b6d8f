mod dns_transport;
mod random_source;

pub use dns_transport::{DnsTransport, TransportResponse};
pub use random_source::RandomSource;
