//! Output formatting for crossbreed candidates.
//!
//! Writers for converting [`CrossbreedResults`] into the supported
//! listing formats.
//!
//! ## Supported Formats
//!
//! - **Plain**: human-readable listing, one candidate per line
//! - **TSV**: tab-separated rows for downstream tooling
//!
//! ## Examples
//!
//! ```rust
//! use graft_core::CrossbreedCalculator;
//! use graft_core::config::{CrossbreedConfig, OutputFormat};
//! use graft_core::output::write_results;
//! use graft_core::sequence::GenePool;
//!
//! let pool = GenePool::from_lines(["GGYHGY", "GGYHGH"])?;
//! let config = CrossbreedConfig {
//!     possibilities: 2,
//!     ..Default::default()
//! };
//! let results = CrossbreedCalculator::new(config).calculate(&pool);
//!
//! let mut out = Vec::new();
//! write_results(&mut out, &results, OutputFormat::Plain)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::{config::OutputFormat, results::CrossbreedResults, types::CrossbreedError};

mod formats {
    pub mod plain;
    pub mod tsv;
}

use formats::{plain::write_plain_format, tsv::write_tsv_format};

/// Writes the candidate listing in the specified format.
///
/// # Errors
///
/// Returns [`CrossbreedError::IoError`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &CrossbreedResults,
    format: OutputFormat,
) -> Result<(), CrossbreedError> {
    match format {
        OutputFormat::Plain => write_plain_format(writer, results),
        OutputFormat::Tsv => write_tsv_format(writer, results),
    }
}
