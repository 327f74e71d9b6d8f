use serde::{Deserialize, Serialize};

pub const DEFAULT_DOH_ENDPOINT: &str = "https://doh.opendns.com/dns-query";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    /// DoH endpoint; the query is appended as `?dns=<base64url>`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Seconds, applied to sending the request and to reading the body.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Permit plain `http://` endpoints (local testing).
    #[serde(default)]
    pub allow_insecure: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            allow_insecure: false,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_DOH_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}
