use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::types::CrossbreedError;

/// Read raw sequence lines from a file.
///
/// Returns the lines as-is; parsing and normalization happen when the
/// [`GenePool`](crate::sequence::GenePool) is built.
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CrossbreedError> {
    let file = File::open(path)?;
    read_sequence_lines(BufReader::new(file))
}

/// Read raw sequence lines from any reader (e.g. stdin).
pub fn read_sequence_lines<R: Read>(reader: R) -> Result<Vec<String>, CrossbreedError> {
    let mut lines = Vec::new();
    for line in BufReader::new(reader).lines() {
        lines.push(line?);
    }
    Ok(lines)
}
