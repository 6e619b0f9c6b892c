use std::io::Write;

use crate::{results::CrossbreedResults, types::CrossbreedError};

/// Write the candidate listing as a human-readable table.
///
/// One line per candidate: the outcome sequence, then the four parent
/// sequences joined with `+`.
pub fn write_plain_format<W: Write>(
    writer: &mut W,
    results: &CrossbreedResults,
) -> Result<(), CrossbreedError> {
    for candidate in &results.candidates {
        let parents: Vec<String> = candidate.parents.iter().map(|p| p.to_string()).collect();
        writeln!(writer, "{}  <=  {}", candidate.outcome, parents.join(" + "))?;
    }
    Ok(())
}
