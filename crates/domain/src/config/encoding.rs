use crate::domain_name::LabelPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EncodingConfig {
    /// `wire` accepts labels up to 255 bytes, `rfc1035` caps them at 63.
    #[serde(default)]
    pub label_policy: LabelPolicy,
}
