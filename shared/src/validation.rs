//! Input validation for the N-Min Finder service

use crate::selection::SelectionError;

/// Validate that `rank` addresses an element of a collection holding `len`
/// values (1-based).
pub fn validate_rank(rank: usize, len: usize) -> Result<(), SelectionError> {
    if len == 0 {
        return Err(SelectionError::EmptyInput);
    }
    if rank == 0 || rank > len {
        return Err(SelectionError::RankOutOfRange { rank, len });
    }
    Ok(())
}
