pub mod encoding;
pub mod errors;
pub mod logging;
pub mod root;
pub mod transport;

pub use encoding::EncodingConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use transport::TransportConfig;
