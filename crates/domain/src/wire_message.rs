use crate::domain_name::DomainName;
use crate::query_header::QueryHeader;
use crate::question_trailer::QuestionTrailer;
use crate::wire_writer::WireWriter;
use bytes::Bytes;
use std::fmt;

/// Complete request: header, encoded question name, question trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireMessage {
    header: QueryHeader,
    bytes: Bytes,
}

impl WireMessage {
    /// Serializes the three parts in order into one immutable buffer.
    pub fn assemble(header: QueryHeader, name: &DomainName, trailer: QuestionTrailer) -> Self {
        let len = QueryHeader::WIRE_LEN + name.encoded_len() + QuestionTrailer::WIRE_LEN;
        let mut writer = WireWriter::with_capacity(len);

        header.write(&mut writer);
        name.write(&mut writer);
        trailer.write(&mut writer);

        Self {
            header,
            bytes: writer.finish(),
        }
    }

    pub fn header(&self) -> &QueryHeader {
        &self.header
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Cheap clone of the underlying buffer.
    pub fn to_bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encoded question name, between the header and the trailer.
    pub fn question_name(&self) -> &[u8] {
        &self.bytes[QueryHeader::WIRE_LEN..self.bytes.len() - QuestionTrailer::WIRE_LEN]
    }
}

impl AsRef<[u8]> for WireMessage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Space-separated lowercase hex, e.g. `12 34 01 00`.
impl fmt::LowerHex for WireMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
