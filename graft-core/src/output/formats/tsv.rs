use std::io::Write;

use crate::{results::CrossbreedResults, types::CrossbreedError};

/// Write the candidate listing as tab-separated rows.
///
/// Columns: outcome, then the four parent sequences.
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    results: &CrossbreedResults,
) -> Result<(), CrossbreedError> {
    for candidate in &results.candidates {
        write!(writer, "{}", candidate.outcome)?;
        for parent in &candidate.parents {
            write!(writer, "\t{parent}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
