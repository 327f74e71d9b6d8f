//! DNS Message Builder
//!
//! Assembles a single-question recursive `A`/`IN` query in wire format:
//!
//! ```text
//! +---------------------+
//! | header (12 bytes)   |  id, flags=0x0100, qd=1, an=0, ns=0, ar=0
//! +---------------------+
//! | question name       |  length-prefixed labels, root label
//! +---------------------+
//! | qtype, qclass (4)   |  1, 1
//! +---------------------+
//! ```

use crate::ports::RandomSource;
use ferrous_doh_domain::{
    DomainName, EncodingError, LabelPolicy, QueryHeader, QuestionTrailer, WireMessage,
};
use std::sync::Arc;

/// Builds DNS query messages in wire format
pub struct MessageBuilder {
    random: Arc<dyn RandomSource>,
    policy: LabelPolicy,
}

impl MessageBuilder {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self {
            random,
            policy: LabelPolicy::Wire,
        }
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn label_policy(&self) -> LabelPolicy {
        self.policy
    }

    /// Build a query message for `domain`.
    ///
    /// The name is validated before an id is drawn, so a rejected name does
    /// not consume entropy. Every successful call draws a new id.
    pub fn build(&self, domain: &str) -> Result<WireMessage, EncodingError> {
        let name = DomainName::parse_with_policy(domain, self.policy)?;
        let header = QueryHeader::query(self.random.next_transaction_id());

        Ok(WireMessage::assemble(
            header,
            &name,
            QuestionTrailer::address_lookup(),
        ))
    }
}
