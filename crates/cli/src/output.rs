use ferrous_doh_domain::WireMessage;
use ferrous_doh_infrastructure::dns::transport::https::encode_query_param;
use std::io::{self, Write};

/// Hex dump of the query followed by its `dns` parameter encoding.
pub fn print_query(out: &mut impl Write, query: &WireMessage) -> io::Result<()> {
    writeln!(out, "{:x}", query)?;
    writeln!(out, "{}", encode_query_param(query.as_bytes()))
}

/// The raw response body as an escaped byte-string literal.
pub fn print_response(out: &mut impl Write, response: &[u8]) -> io::Result<()> {
    writeln!(out, "b'{}'", response.escape_ascii())
}
