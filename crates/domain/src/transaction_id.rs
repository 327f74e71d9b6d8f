use std::fmt;
use std::num::NonZeroU16;

/// Request/response correlation id. Zero is reserved and cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(NonZeroU16);

impl TransactionId {
    pub const MIN: TransactionId = TransactionId(NonZeroU16::MIN);
    pub const MAX: TransactionId = TransactionId(NonZeroU16::MAX);

    pub const fn new(id: NonZeroU16) -> Self {
        Self(id)
    }

    /// Returns `None` for the reserved value 0.
    pub fn from_u16(id: u16) -> Option<Self> {
        NonZeroU16::new(id).map(Self)
    }

    /// Maps `offset` in `0..=65534` onto `1..=65535`, saturating above that.
    pub fn from_offset(offset: u16) -> Self {
        Self(NonZeroU16::MIN.saturating_add(offset))
    }

    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl From<NonZeroU16> for TransactionId {
    fn from(id: NonZeroU16) -> Self {
        Self(id)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.get())
    }
}
