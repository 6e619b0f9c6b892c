use crate::constants::COMBINATION_SIZE;
use crate::sequence::GeneSequence;

/// One reported crossbreed candidate.
///
/// Pairs an outcome sequence with the four parent sequences that produce
/// it. Parents are sorted ascending; when several combinations produce
/// the same outcome, the one recorded is the last in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The resulting gene sequence.
    pub outcome: GeneSequence,
    /// The four parent sequences, sorted ascending.
    pub parents: [GeneSequence; COMBINATION_SIZE],
}

/// Statistics for one calculation run.
///
/// # Examples
///
/// ```rust,no_run
/// # use graft_core::results::PoolInfo;
/// let info = PoolInfo {
///     distinct_sequences: 8,
///     pool_size: 16,
///     combinations: 1820,
///     num_candidates: 3,
/// };
///
/// println!(
///     "{} sequences, {} combinations, {} candidates",
///     info.distinct_sequences, info.combinations, info.num_candidates
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PoolInfo {
    /// Number of distinct input sequences after deduplication.
    pub distinct_sequences: usize,

    /// Number of pool slots (each distinct sequence occupies two).
    pub pool_size: usize,

    /// Number of 4-slot combinations evaluated.
    pub combinations: u64,

    /// Number of candidates that survived filtering.
    pub num_candidates: usize,
}

/// Crossbreed candidates found in one calculation run.
///
/// `candidates` is sorted by outcome sequence ascending, ready for
/// listing output.
#[derive(Debug, Clone)]
pub struct CrossbreedResults {
    /// Surviving candidates, sorted by outcome.
    pub candidates: Vec<Candidate>,

    /// Statistics about the pool and the enumeration.
    pub pool_info: PoolInfo,
}
