//! Toe-to-heel segment ordering for flow summation.
//!
//! Within each branch segments are numbered from the toe towards the
//! kick-off segment, and every branch entering a segment is ordered in full
//! before the segments of the branch it drains into. Visiting segments in
//! this order guarantees that all inlets of a segment are seen before the
//! segment itself.

use msw_core::MswResult;

use crate::segment::WellSegments;

/// Segment indices in toe-to-heel order. The top segment is always last.
pub fn segment_order(segments: &WellSegments) -> MswResult<Vec<usize>> {
    let mut order = Vec::with_capacity(segments.len());
    if !segments.is_empty() {
        append_branch(segments, 0, &mut order)?;
    }
    Ok(order)
}

/// One-based position of each segment (by index) within `segment_order`.
pub fn segment_positions(order: &[usize]) -> Vec<usize> {
    let mut positions = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        positions[index] = position + 1;
    }
    positions
}

/// Append the branch starting at `start`, preceded by every branch that
/// kicks off from it.
fn append_branch(segments: &WellSegments, start: usize, order: &mut Vec<usize>) -> MswResult<()> {
    let mut branch = vec![start];
    let mut current = start;

    loop {
        let (other_branches, same_branch) = segments.partition_inlets(current)?;
        for child in other_branches {
            append_branch(segments, child, order)?;
        }

        match same_branch {
            Some(next) => {
                branch.push(next);
                current = next;
            }
            None => break,
        }
    }

    order.extend(branch.iter().rev());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_invert_order() {
        let order = vec![2, 0, 1];
        assert_eq!(segment_positions(&order), vec![2, 3, 1]);
    }
}
