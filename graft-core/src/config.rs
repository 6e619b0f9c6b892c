use crate::constants::{DEFAULT_EXCLUDE, MAX_POSSIBILITIES, MIN_POSSIBILITIES};
use crate::types::CrossbreedError;

/// Output format options for the candidate listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, one candidate per line.
    ///
    /// Shows the outcome sequence followed by the four parent sequences
    /// that produce it.
    Plain,

    /// Tab-separated output.
    ///
    /// One row per candidate: outcome, then the four parents. Easy to
    /// feed into downstream tooling.
    Tsv,
}

/// Configuration settings for a crossbreed calculation run.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use graft_core::config::CrossbreedConfig;
///
/// let config = CrossbreedConfig::default();
/// assert_eq!(config.possibilities, 1);
/// ```
///
/// ## Allow ambiguous results and keep water-hungry outcomes
///
/// ```rust
/// use graft_core::config::CrossbreedConfig;
///
/// let config = CrossbreedConfig {
///     possibilities: 2,
///     default_exclude: vec!["X".to_string()],
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CrossbreedConfig {
    /// Maximum number of distinct outcomes a combination may produce and
    /// still be reported.
    ///
    /// A combination whose per-spot ties multiply out to more outcomes
    /// than this is considered too ambiguous and skipped entirely.
    /// Accepted range: 1 to 2.
    ///
    /// **Default**: `1`
    pub possibilities: u8,

    /// Extra markers to exclude from reported outcomes, on top of the
    /// baseline set.
    ///
    /// Matched as case-insensitive substrings of the outcome sequence.
    ///
    /// **Default**: empty
    pub exclude: Vec<String>,

    /// Baseline exclusion markers.
    ///
    /// Outcomes containing any of these are never reported. Override to
    /// allow outcomes the defaults would reject.
    ///
    /// **Default**: `["W", "X"]`
    pub default_exclude: Vec<String>,

    /// Suppress the run summary printed to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Output format for the candidate listing. See [`OutputFormat`].
    ///
    /// **Default**: [`OutputFormat::Plain`]
    pub output_format: OutputFormat,
}

impl Default for CrossbreedConfig {
    fn default() -> Self {
        Self {
            possibilities: MIN_POSSIBILITIES,
            exclude: Vec::new(),
            default_exclude: DEFAULT_EXCLUDE.iter().map(|m| (*m).to_string()).collect(),
            quiet: false,
            output_format: OutputFormat::Plain,
        }
    }
}

impl CrossbreedConfig {
    /// Check the configuration before running a calculation.
    ///
    /// # Errors
    ///
    /// Returns [`CrossbreedError::InvalidPossibilities`] if the
    /// possibilities bound lies outside the accepted range.
    pub fn validate(&self) -> Result<(), CrossbreedError> {
        if !(MIN_POSSIBILITIES..=MAX_POSSIBILITIES).contains(&self.possibilities) {
            return Err(CrossbreedError::InvalidPossibilities(self.possibilities));
        }
        Ok(())
    }

    /// The full set of active exclusion markers, uppercased.
    ///
    /// Union of the baseline markers and any extra markers; uppercasing
    /// here makes the substring match against outcome text
    /// case-insensitive.
    #[must_use]
    pub fn active_markers(&self) -> Vec<String> {
        self.default_exclude
            .iter()
            .chain(self.exclude.iter())
            .map(|m| m.to_uppercase())
            .collect()
    }
}
