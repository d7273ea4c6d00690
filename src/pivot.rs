//! Pivot selection policies.
//!
//! Rank 0 of the current process group picks the pivot for a recursion level
//! from its own local slice; the policy only chooses an index, the caller
//! reads and broadcasts the value.

use crate::types::Element;

/// An interchangeable rule for picking one pivot element out of a sorted,
/// non-empty local slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotStrategy {
    /// The first element of the slice.
    #[default]
    First,
    /// The middle element of the slice. On a sorted slice this is the local
    /// median, typically giving a more balanced split than `First`.
    Middle,
    /// The median of the first, middle and last elements. Equal to `Middle`
    /// on a sorted slice; kept as a distinct rule so the policy stays
    /// meaningful if a caller ever selects from unsorted data.
    MedianOfThree,
}

impl PivotStrategy {
    /// Index of the chosen pivot within `elements`. Returns 0 for an empty
    /// slice; callers must handle the empty case before reading the value.
    pub fn select(&self, elements: &[Element]) -> usize {
        if elements.is_empty() {
            return 0;
        }
        match self {
            PivotStrategy::First => 0,
            PivotStrategy::Middle => elements.len() / 2,
            PivotStrategy::MedianOfThree => {
                let mut candidates = [0, elements.len() / 2, elements.len() - 1];
                candidates.sort_by_key(|&i| elements[i]);
                candidates[1]
            }
        }
    }
}
