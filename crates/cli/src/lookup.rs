use crate::output;
use ferrous_doh_application::use_cases::LookupDomainUseCase;
use std::io::Write;
use tracing::debug;

/// Prints the query, sends it and prints the raw reply.
///
/// Errors come back as the use case reported them; it has already logged
/// the failure.
pub async fn run(
    lookup: &LookupDomainUseCase,
    domain: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let query = lookup.prepare(domain)?;
    output::print_query(out, &query)?;
    out.flush()?;

    let outcome = lookup.exchange(query).await?;
    output::print_response(out, &outcome.response)?;

    debug!(
        id = %outcome.transaction_id,
        protocol = outcome.protocol_used,
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        "Lookup complete"
    );

    Ok(())
}
