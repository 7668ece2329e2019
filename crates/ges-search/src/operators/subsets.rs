//! Bitmask subset enumeration with monotone flags.

use ges_core::errors::SearchError;
use ges_core::NodeSet;

/// One flag per subset of a candidate list, closed upwards when marked.
#[derive(Debug, Clone)]
pub struct MonotoneFlags {
    flags: Vec<bool>,
}

impl MonotoneFlags {
    /// Flags for all `2^size` subsets, initially clear.
    pub fn new(size: usize) -> Self {
        Self {
            flags: vec![false; 1usize << size],
        }
    }

    /// Number of subsets covered.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[inline]
    pub fn is_set(&self, mask: usize) -> bool {
        self.flags[mask]
    }

    /// Set the flag of `mask` and of every superset of `mask`.
    pub fn mark_supersets(&mut self, mask: usize) {
        let full = self.flags.len() - 1;
        let mut sup = mask;
        loop {
            self.flags[sup] = true;
            if sup == full {
                break;
            }
            sup = (sup + 1) | mask;
        }
    }
}

/// Members of `candidates` selected by the bits of `mask`.
pub fn subset_members(mask: usize, candidates: &[usize]) -> NodeSet {
    candidates
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1usize << bit) != 0)
        .map(|(_, &node)| node)
        .collect()
}

/// Refuse candidate sets whose subset lattice would exceed the cap.
pub fn check_candidate_cap(x: usize, y: usize, size: usize, limit: u32) -> Result<(), SearchError> {
    if size > limit as usize {
        tracing::warn!(x, y, size, limit, "candidate set exceeds subset cap");
        return Err(SearchError::CandidateSetTooLarge { x, y, size, limit });
    }
    Ok(())
}
