//! Domain names and their length-prefixed label encoding (RFC 1035 §3.1).
//!
//! ```text
//! www.example.com  ->  03 'www' 07 'example' 03 'com' 00
//! ```
//!
//! A single trailing dot is accepted and means the same as no trailing dot:
//! the root label is always appended by the encoder.

use crate::errors::EncodingError;
use crate::wire_writer::WireWriter;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Largest label a single length byte can describe.
pub const MAX_WIRE_LABEL_LEN: usize = u8::MAX as usize;

/// RFC 1035 label limit (the top two bits of the length byte are reserved
/// for compression pointers).
pub const MAX_RFC1035_LABEL_LEN: usize = 63;

/// RFC 1035 limit for a whole encoded name, root label included.
pub const MAX_RFC1035_NAME_LEN: usize = 255;

/// How strictly label lengths are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Only the 255-byte ceiling of the length byte.
    #[default]
    Wire,
    /// 63-byte labels and 255-byte names.
    Rfc1035,
}

impl LabelPolicy {
    pub fn max_label_len(self) -> usize {
        match self {
            LabelPolicy::Wire => MAX_WIRE_LABEL_LEN,
            LabelPolicy::Rfc1035 => MAX_RFC1035_LABEL_LEN,
        }
    }

    pub fn max_name_len(self) -> Option<usize> {
        match self {
            LabelPolicy::Wire => None,
            LabelPolicy::Rfc1035 => Some(MAX_RFC1035_NAME_LEN),
        }
    }
}

/// A validated, dot-separated domain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    labels: Vec<Arc<str>>,
}

impl DomainName {
    /// Parses `domain` using the wire-format ceiling only.
    pub fn parse(domain: &str) -> Result<Self, EncodingError> {
        Self::parse_with_policy(domain, LabelPolicy::Wire)
    }

    pub fn parse_with_policy(domain: &str, policy: LabelPolicy) -> Result<Self, EncodingError> {
        if domain.is_empty() {
            return Err(EncodingError::EmptyName);
        }

        let trimmed = domain.strip_suffix('.').unwrap_or(domain);
        let mut labels = Vec::new();
        let mut encoded_len = 1;

        for (position, label) in trimmed.split('.').enumerate() {
            let len = label.len();
            if len == 0 {
                return Err(EncodingError::EmptyLabel {
                    domain: domain.to_string(),
                    position,
                });
            }
            if len > MAX_WIRE_LABEL_LEN {
                return Err(EncodingError::OversizedLabel {
                    label: label.to_string(),
                    len,
                });
            }
            let max = policy.max_label_len();
            if len > max {
                return Err(EncodingError::LabelExceedsPolicy {
                    label: label.to_string(),
                    len,
                    max,
                });
            }
            encoded_len += 1 + len;
            labels.push(Arc::from(label));
        }

        if let Some(max) = policy.max_name_len() {
            if encoded_len > max {
                return Err(EncodingError::NameTooLong {
                    len: encoded_len,
                    max,
                });
            }
        }

        Ok(Self { labels })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| &**l)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Length of the encoded form, root label included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
    }

    /// Writes the labels followed by the root label.
    pub fn write(&self, writer: &mut WireWriter) {
        for label in &self.labels {
            // Lengths were bounded by MAX_WIRE_LABEL_LEN during parsing.
            writer.put_u8(label.len() as u8);
            writer.put_slice(label.as_bytes());
        }
        writer.put_u8(0);
    }

    pub fn encode(&self) -> EncodedName {
        let mut writer = WireWriter::with_capacity(self.encoded_len());
        self.write(&mut writer);
        EncodedName(writer.finish())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

/// Length-prefixed label sequence terminated by the root label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedName(Bytes);

impl EncodedName {
    /// Parses and encodes `domain` in one step.
    pub fn encode(domain: &str, policy: LabelPolicy) -> Result<Self, EncodingError> {
        Ok(DomainName::parse_with_policy(domain, policy)?.encode())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walks the length-prefixed labels, stopping at the root label.
    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        let bytes = self.as_bytes();
        let mut pos = 0;
        std::iter::from_fn(move || {
            let len = *bytes.get(pos)? as usize;
            if len == 0 {
                return None;
            }
            let label = bytes.get(pos + 1..pos + 1 + len)?;
            pos += 1 + len;
            Some(label)
        })
    }
}

impl AsRef<[u8]> for EncodedName {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
