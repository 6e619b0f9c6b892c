/// Number of gene spots in a gene sequence
pub const SEQUENCE_LENGTH: usize = 6;

/// Number of parent sequences combined in one crossbreed
pub const COMBINATION_SIZE: usize = 4;

/// Number of crossbreed slots a single sequence can occupy at once
pub const POOL_COPIES: usize = 2;

/// Minimum accepted value for the possibilities bound
pub const MIN_POSSIBILITIES: u8 = 1;

/// Maximum accepted value for the possibilities bound
pub const MAX_POSSIBILITIES: u8 = 2;

/// Baseline markers removed from reported outcomes
pub const DEFAULT_EXCLUDE: &[&str] = &["W", "X"];

/// Per-occurrence weight of the dominant gene letters (W, X)
pub const DOMINANT_GENE_WEIGHT: f64 = 0.8;

/// Per-occurrence weight of the recessive gene letters (G, H, Y)
pub const RECESSIVE_GENE_WEIGHT: f64 = 0.5;
