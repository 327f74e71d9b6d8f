#[cfg(feature = "dns-over-https")]
pub mod https;

use ferrous_doh_application::ports::DnsTransport;
use ferrous_doh_domain::config::TransportConfig;
use ferrous_doh_domain::ConfigError;
use std::sync::Arc;

#[cfg(feature = "dns-over-https")]
pub fn create_transport(config: &TransportConfig) -> Result<Arc<dyn DnsTransport>, ConfigError> {
    Ok(Arc::new(https::HttpsTransport::new(
        config.endpoint.clone(),
    )))
}

#[cfg(not(feature = "dns-over-https"))]
pub fn create_transport(config: &TransportConfig) -> Result<Arc<dyn DnsTransport>, ConfigError> {
    Err(ConfigError::Validation(format!(
        "HTTPS feature not enabled. Enable 'dns-over-https' feature to use: {}",
        config.endpoint
    )))
}
