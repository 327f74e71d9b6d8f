//! Ferrous DoH Domain Layer
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod query_header;
pub mod question_trailer;
pub mod transaction_id;
pub mod wire_message;
pub mod wire_writer;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::{DomainName, EncodedName, LabelPolicy};
pub use errors::{DomainError, EncodingError, TransportError};
pub use query_header::QueryHeader;
pub use question_trailer::QuestionTrailer;
pub use transaction_id::TransactionId;
pub use wire_message::WireMessage;
pub use wire_writer::WireWriter;
