use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::combinatorics::{binomial, combinations};
use crate::config::CrossbreedConfig;
use crate::constants::{COMBINATION_SIZE, SEQUENCE_LENGTH};
use crate::results::{Candidate, CrossbreedResults, PoolInfo};
use crate::sequence::io::{read_sequence_file, read_sequence_lines};
use crate::sequence::{GenePool, GeneSequence};
use crate::types::{CrossbreedError, Gene};

/// Crossbreed candidate calculator.
///
/// Walks every 4-slot combination of the gene pool, computes each
/// combination's crossbreed outcome by weighted per-spot voting, and keeps
/// the combinations whose outcome is unambiguous enough (within the
/// configured possibilities bound) and free of excluded markers.
///
/// # Examples
///
/// ```rust
/// use graft_core::CrossbreedCalculator;
/// use graft_core::config::CrossbreedConfig;
/// use graft_core::sequence::GenePool;
///
/// let pool = GenePool::from_lines(["GGYHGY", "YGGHYH", "HGYYGG"])?;
///
/// let calculator = CrossbreedCalculator::new(CrossbreedConfig::default());
/// let results = calculator.calculate(&pool);
///
/// assert_eq!(results.pool_info.combinations, 15); // C(6, 4)
/// # Ok::<(), graft_core::types::CrossbreedError>(())
/// ```
#[derive(Debug, Default)]
pub struct CrossbreedCalculator {
    /// Configuration options for the calculation
    pub config: CrossbreedConfig,
}

impl CrossbreedCalculator {
    /// Create a calculator with the given configuration.
    #[must_use]
    pub fn new(config: CrossbreedConfig) -> Self {
        Self { config }
    }

    /// Read sequences from a file and calculate candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains a line
    /// that is not a valid gene sequence.
    pub fn calculate_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<CrossbreedResults, CrossbreedError> {
        let lines = read_sequence_file(path)?;
        let pool = GenePool::from_lines(&lines)?;
        Ok(self.calculate(&pool))
    }

    /// Read sequences from any reader (e.g. stdin) and calculate
    /// candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or a line is not a valid gene
    /// sequence.
    pub fn calculate_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<CrossbreedResults, CrossbreedError> {
        let lines = read_sequence_lines(reader)?;
        let pool = GenePool::from_lines(&lines)?;
        Ok(self.calculate(&pool))
    }

    /// Calculate crossbreed candidates for a prepared pool.
    ///
    /// A pool with fewer than 4 slots yields zero combinations and an
    /// empty candidate list; that is not an error.
    #[must_use]
    pub fn calculate(&self, pool: &GenePool) -> CrossbreedResults {
        let markers = self.config.active_markers();
        let limit = usize::from(self.config.possibilities);
        let entries = pool.entries();

        // Ordered map: listing comes out sorted by outcome, and a later
        // combination producing an already-seen outcome overwrites the
        // earlier entry. Enumeration over the sorted pool is
        // lexicographic, so the surviving entry is the same every run.
        let mut result_map: BTreeMap<GeneSequence, [GeneSequence; COMBINATION_SIZE]> =
            BTreeMap::new();

        for combo in combinations(entries.len(), COMBINATION_SIZE) {
            let parents: [GeneSequence; COMBINATION_SIZE] =
                std::array::from_fn(|i| entries[combo[i]]);

            let outcomes = crossbreed(&parents);
            if outcomes.len() > limit {
                continue;
            }

            let mut sorted_parents = parents;
            sorted_parents.sort_unstable();

            for outcome in outcomes {
                let text = outcome.to_string();
                if markers.iter().any(|m| text.contains(m.as_str())) {
                    continue;
                }
                result_map.insert(outcome, sorted_parents);
            }
        }

        let candidates: Vec<Candidate> = result_map
            .into_iter()
            .map(|(outcome, parents)| Candidate { outcome, parents })
            .collect();

        CrossbreedResults {
            pool_info: PoolInfo {
                distinct_sequences: pool.distinct_count(),
                pool_size: pool.len(),
                combinations: binomial(entries.len() as u64, COMBINATION_SIZE as u64)
                    .unwrap_or(u64::MAX),
                num_candidates: candidates.len(),
            },
            candidates,
        }
    }
}

/// Calculate the crossbreed outcomes of 4 parent sequences.
///
/// For each of the 6 spots, the parents' genes at that spot are ranked by
/// aggregate weight and the top-scoring tier is kept; the outcomes are the
/// cartesian product of the per-spot tiers. A combination with no ties
/// yields exactly one outcome; each tied spot multiplies the outcome
/// count.
#[must_use]
pub fn crossbreed(parents: &[GeneSequence; COMBINATION_SIZE]) -> Vec<GeneSequence> {
    let spots: [Vec<Gene>; SEQUENCE_LENGTH] = std::array::from_fn(|spot| {
        let genes: [Gene; COMBINATION_SIZE] = std::array::from_fn(|i| parents[i].gene_at(spot));
        top_tier(&rank_genes(&genes))
    });
    cartesian_product(&spots)
}

/// Rank the genes competing for one spot by aggregate weight, descending.
///
/// Each occurrence of a gene contributes its per-occurrence weight. The
/// sort is stable, so genes with equal aggregate weight stay in
/// first-seen order.
fn rank_genes(genes: &[Gene; COMBINATION_SIZE]) -> Vec<(Gene, f64)> {
    let mut ranked: Vec<(Gene, f64)> = Vec::with_capacity(COMBINATION_SIZE);
    for &gene in genes {
        match ranked.iter_mut().find(|(g, _)| *g == gene) {
            Some((_, score)) => *score += gene.weight(),
            None => ranked.push((gene, gene.weight())),
        }
    }
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// The genes sharing the single highest aggregate weight.
///
/// Equal-weight genes only ever tie with identical occurrence counts, so
/// their aggregate sums are bit-identical and exact comparison is safe.
fn top_tier(ranked: &[(Gene, f64)]) -> Vec<Gene> {
    let top = ranked[0].1;
    ranked
        .iter()
        .take_while(|(_, score)| score.total_cmp(&top) == Ordering::Equal)
        .map(|(gene, _)| *gene)
        .collect()
}

/// Cartesian product of the per-spot gene tiers, joined into sequences.
fn cartesian_product(spots: &[Vec<Gene>; SEQUENCE_LENGTH]) -> Vec<GeneSequence> {
    let count: usize = spots.iter().map(|tier| tier.len()).product();
    let mut outcomes = Vec::with_capacity(count);
    let mut indices = [0usize; SEQUENCE_LENGTH];
    for _ in 0..count {
        outcomes.push(GeneSequence::new(std::array::from_fn(
            |spot| spots[spot][indices[spot]],
        )));
        for spot in (0..SEQUENCE_LENGTH).rev() {
            indices[spot] += 1;
            if indices[spot] < spots[spot].len() {
                break;
            }
            indices[spot] = 0;
        }
    }
    outcomes
}
