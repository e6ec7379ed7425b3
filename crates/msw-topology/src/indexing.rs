//! Stable indexing between input segment numbers and dense positions.
//!
//! Segment numbers come from the well definition and need not be dense;
//! per-segment working arrays are dense. `SegmentIndex` maps both ways.

use msw_core::SegmentNumber;

/// Index map providing O(1) bidirectional lookup between segment numbers
/// and contiguous indices (0..N).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentIndex {
    /// Contiguous list of segment numbers (index -> number).
    numbers: Vec<SegmentNumber>,

    /// Reverse lookup: slot of number -> index.
    /// Sized to the largest number; None where no segment has that number.
    number_to_idx: Vec<Option<usize>>,
}

impl SegmentIndex {
    /// Build an index map from segment numbers in index order.
    pub fn new(numbers: Vec<SegmentNumber>) -> Self {
        let max_slot = numbers.iter().map(|n| n.slot()).max().unwrap_or(0);

        let mut number_to_idx = vec![None; max_slot + 1];
        for (i, number) in numbers.iter().enumerate() {
            number_to_idx[number.slot()] = Some(i);
        }

        Self {
            numbers,
            number_to_idx,
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Get the contiguous index for a segment number.
    pub fn index_of(&self, number: SegmentNumber) -> Option<usize> {
        self.number_to_idx.get(number.slot()).and_then(|&opt| opt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(n: u32) -> SegmentNumber {
        SegmentNumber::new(n).unwrap()
    }

    #[test]
    fn sparse_numbers() {
        let index = SegmentIndex::new(vec![seg(1), seg(5), seg(9)]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.index_of(seg(5)), Some(1));
        assert_eq!(index.index_of(seg(9)), Some(2));
        assert_eq!(index.index_of(seg(2)), None);
        assert_eq!(index.index_of(seg(999)), None);
    }

    #[test]
    fn empty_index() {
        let index = SegmentIndex::new(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.index_of(seg(1)), None);
    }
}
