//! DNS message header (RFC 1035 §4.1.1).
//!
//! ```text
//!   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! |                    QDCOUNT                    |
//! |                    ANCOUNT                    |
//! |                    NSCOUNT                    |
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use crate::transaction_id::TransactionId;
use crate::wire_writer::WireWriter;

/// Standard query with only the Recursion Desired bit set.
pub const FLAGS_RECURSION_DESIRED: u16 = 0x0100;

/// Header of a single-question query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryHeader {
    transaction_id: TransactionId,
    flags: u16,
    question_count: u16,
    answer_count: u16,
    authority_count: u16,
    additional_count: u16,
}

impl QueryHeader {
    pub const WIRE_LEN: usize = 12;

    /// Recursive query carrying one question and no records.
    pub fn query(transaction_id: TransactionId) -> Self {
        Self {
            transaction_id,
            flags: FLAGS_RECURSION_DESIRED,
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn question_count(&self) -> u16 {
        self.question_count
    }

    pub fn answer_count(&self) -> u16 {
        self.answer_count
    }

    pub fn authority_count(&self) -> u16 {
        self.authority_count
    }

    pub fn additional_count(&self) -> u16 {
        self.additional_count
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAGS_RECURSION_DESIRED != 0
    }

    pub fn write(&self, writer: &mut WireWriter) {
        writer.put_u16(self.transaction_id.get());
        writer.put_u16(self.flags);
        writer.put_u16(self.question_count);
        writer.put_u16(self.answer_count);
        writer.put_u16(self.authority_count);
        writer.put_u16(self.additional_count);
    }
}
