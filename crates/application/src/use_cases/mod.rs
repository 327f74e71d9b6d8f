pub mod dns;

pub use dns::{LookupDomainUseCase, LookupOutcome};
