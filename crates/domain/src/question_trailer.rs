use crate::wire_writer::WireWriter;

/// QTYPE for an IPv4 host address query.
pub const QTYPE_A: u16 = 1;

/// QCLASS for the Internet.
pub const QCLASS_IN: u16 = 1;

/// Type and class that follow the question name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTrailer {
    pub qtype: u16,
    pub qclass: u16,
}

impl QuestionTrailer {
    pub const WIRE_LEN: usize = 4;

    /// `A` record in class `IN`, the only question this client asks.
    pub const fn address_lookup() -> Self {
        Self {
            qtype: QTYPE_A,
            qclass: QCLASS_IN,
        }
    }

    pub fn write(&self, writer: &mut WireWriter) {
        writer.put_u16(self.qtype);
        writer.put_u16(self.qclass);
    }
}

impl Default for QuestionTrailer {
    fn default() -> Self {
        Self::address_lookup()
    }
}
