use std::fmt;

use thiserror::Error;

use crate::constants::{DOMINANT_GENE_WEIGHT, RECESSIVE_GENE_WEIGHT};

/// Gene letters recognized by the crossbreed calculator.
///
/// Plants carry six gene slots, each holding one of five letters. The
/// recessive letters (G, H, Y) are the desirable ones; the dominant
/// letters (W, X) tend to take over a slot when crossbreeding, which is
/// why they carry a higher weight and are excluded from reported
/// outcomes by default.
///
/// Variants are declared in ASCII order so the derived ordering matches
/// the ordering of the letters themselves.
///
/// # Examples
///
/// ```rust
/// use graft_core::types::Gene;
///
/// let gene = Gene::from_char('y').unwrap();
/// assert_eq!(gene, Gene::Y);
/// assert_eq!(gene.weight(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gene {
    /// Growth gene
    G,
    /// Hardiness gene
    H,
    /// Water-need gene (dominant, undesirable)
    W,
    /// Empty slot gene (dominant, undesirable)
    X,
    /// Yield gene
    Y,
}

impl Gene {
    /// Parse a single gene letter, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CrossbreedError::UnknownGene`] for any character outside
    /// the recognized alphabet.
    pub fn from_char(c: char) -> Result<Self, CrossbreedError> {
        match c.to_ascii_uppercase() {
            'G' => Ok(Self::G),
            'H' => Ok(Self::H),
            'W' => Ok(Self::W),
            'X' => Ok(Self::X),
            'Y' => Ok(Self::Y),
            other => Err(CrossbreedError::UnknownGene(other)),
        }
    }

    /// The uppercase letter for this gene.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::G => 'G',
            Self::H => 'H',
            Self::W => 'W',
            Self::X => 'X',
            Self::Y => 'Y',
        }
    }

    /// Per-occurrence weight used when ranking the genes competing for
    /// one spot.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::W | Self::X => DOMINANT_GENE_WEIGHT,
            Self::G | Self::H | Self::Y => RECESSIVE_GENE_WEIGHT,
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Error types that can occur during crossbreed calculation
#[derive(Error, Debug)]
pub enum CrossbreedError {
    /// Gene letter outside the recognized alphabet
    #[error("Unknown gene letter: '{0}'")]
    UnknownGene(char),
    /// Input line that is not a valid gene sequence
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// Possibilities bound outside the accepted range
    #[error("Invalid possibilities value: {0} (must be 1 or 2)")]
    InvalidPossibilities(u8),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_from_char_accepts_both_cases() {
        assert_eq!(Gene::from_char('G').unwrap(), Gene::G);
        assert_eq!(Gene::from_char('g').unwrap(), Gene::G);
        assert_eq!(Gene::from_char('x').unwrap(), Gene::X);
    }

    #[test]
    fn test_gene_from_char_rejects_unknown() {
        match Gene::from_char('Z') {
            Err(CrossbreedError::UnknownGene('Z')) => {}
            other => panic!("Expected UnknownGene('Z'), got {:?}", other),
        }
        // Lowercase input is reported uppercased
        match Gene::from_char('q') {
            Err(CrossbreedError::UnknownGene('Q')) => {}
            other => panic!("Expected UnknownGene('Q'), got {:?}", other),
        }
    }

    #[test]
    fn test_gene_weights() {
        assert_eq!(Gene::X.weight(), 0.8);
        assert_eq!(Gene::W.weight(), 0.8);
        assert_eq!(Gene::G.weight(), 0.5);
        assert_eq!(Gene::H.weight(), 0.5);
        assert_eq!(Gene::Y.weight(), 0.5);
    }

    #[test]
    fn test_gene_ordering_matches_letters() {
        let mut genes = vec![Gene::Y, Gene::G, Gene::X, Gene::H, Gene::W];
        genes.sort();
        let letters: String = genes.iter().map(|g| g.to_char()).collect();
        assert_eq!(letters, "GHWXY");
    }

    #[test]
    fn test_gene_display_roundtrip() {
        for c in ['G', 'H', 'W', 'X', 'Y'] {
            let gene = Gene::from_char(c).unwrap();
            assert_eq!(gene.to_string(), c.to_string());
        }
    }
}
