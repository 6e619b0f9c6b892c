//! Combination enumeration over pool indices.
//!
//! The calculator walks every 4-slot choice from the duplicated gene pool.
//! Combinations are enumerated lexicographically over pool indices, so the
//! traversal order is a pure function of the pool and identical between
//! runs.

/// Exact binomial coefficient C(n, k). Returns `None` on u64 overflow.
#[must_use]
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        result = result.checked_mul(n - i)?;
        result /= i + 1;
    }
    Some(result)
}

/// Iterator over all k-element combinations of indices `[0, n)`.
///
/// Yields combinations in lexicographic order; each item is a `Vec<usize>`
/// of length `k` with strictly increasing indices. Empty when `k == 0` or
/// `k > n`.
///
/// # Examples
///
/// ```rust
/// use graft_core::combinatorics::combinations;
///
/// let combos: Vec<Vec<usize>> = combinations(4, 2).collect();
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[0], vec![0, 1]);
/// assert_eq!(combos[5], vec![2, 3]);
/// ```
pub fn combinations(n: usize, k: usize) -> Combinations {
    let first = if k == 0 || k > n {
        None
    } else {
        Some((0..k).collect())
    };
    Combinations { n, k, current: first }
}

/// Iterator state for [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    current: Option<Vec<usize>>,
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;

        // Advance the rightmost index that still has headroom, then reset
        // everything to its right to the immediately following indices.
        for i in (0..self.k).rev() {
            if current[i] < self.n - self.k + i {
                let mut next = current.clone();
                next[i] += 1;
                for j in (i + 1)..self.k {
                    next[j] = next[j - 1] + 1;
                }
                self.current = Some(next);
                break;
            }
        }

        Some(current)
    }
}
