//! Branch and segment discovery in restart-file order.
//!
//! Segments are walked from the top segment. Every branch is walked to its
//! toe before any other branch is started, and pending branches are started
//! in order of (outlet segment, branch id). For the well
//!
//! ```text
//!                     12   13    14     15     16
//!                   o----o----o-----o------o-----o (2)
//!              11  /              20 \   21 \
//!                 /                   o      o (6)
//!                /                     \
//!               /                    22 \  23   24
//!   1   2   3  /  4   5   6              o----o----o (5)
//!  ---o---o---o-----o---o---o (1)
//!                        \
//!                       7 \  8   9    10
//!                          o---o---o-----o (3)
//!                                         \
//!                                       17 \   18   19
//!                                           o----o----o (4)
//! ```
//!
//! the visiting order is 1..6, 11..16, 7..10, 17..19, 20 22 23 24, 21.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use msw_core::{BranchId, MswResult, SegmentNumber};
use tracing::{debug, trace};

use crate::segment::{Segment, WellSegments};

/// Point at which a branch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickOffPoint {
    /// First (heel-most) segment of the branch.
    pub segment: SegmentNumber,
    /// Segment on the parent branch that the branch drains into.
    /// `None` only for the top segment.
    pub outlet: Option<SegmentNumber>,
    pub branch: BranchId,
}

impl Ord for KickOffPoint {
    /// Low outlet segments first; among siblings on a common outlet, low
    /// branch ids first.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.outlet, self.branch, self.segment).cmp(&(other.outlet, other.branch, other.segment))
    }
}

impl PartialOrd for KickOffPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Receives discovery events.
///
/// Returning an error stops the traversal immediately.
pub trait DiscoveryVisitor {
    /// Called once per segment, in visiting order.
    fn new_segment(&mut self, segment: &Segment) -> MswResult<()>;

    /// Called when a branch other than the main branch is started, before
    /// any of its segments is visited.
    fn new_branch(&mut self, well: &str, kick_off: &KickOffPoint) -> MswResult<()>;
}

/// Segment tree walker for one well.
pub struct Topology<'a> {
    segments: &'a WellSegments,
    kick_off_points: BinaryHeap<Reverse<KickOffPoint>>,
    current: usize,
}

impl<'a> Topology<'a> {
    pub fn new(segments: &'a WellSegments) -> Self {
        Self {
            segments,
            kick_off_points: BinaryHeap::new(),
            current: 0,
        }
    }

    /// Walk the segment tree from the top segment (segment 1, branch 1),
    /// reporting each new branch and each segment to `visitor`.
    ///
    /// Each segment is visited exactly once.
    pub fn traverse<V: DiscoveryVisitor>(mut self, visitor: &mut V) -> MswResult<()> {
        self.kick_off_points.push(Reverse(KickOffPoint {
            segment: SegmentNumber::TOP,
            outlet: None,
            branch: BranchId::MAIN,
        }));

        while let Some(Reverse(kick_off)) = self.kick_off_points.pop() {
            self.create_new_branch(&kick_off, visitor)?;
            self.build_current_branch(visitor)?;
        }

        Ok(())
    }

    fn create_new_branch<V: DiscoveryVisitor>(
        &mut self,
        kick_off: &KickOffPoint,
        visitor: &mut V,
    ) -> MswResult<()> {
        if !kick_off.branch.is_main() {
            debug!(
                well = self.segments.well(),
                branch = %kick_off.branch,
                kick_off = %kick_off.segment,
                "discovered branch"
            );
            visitor.new_branch(self.segments.well(), kick_off)?;
        }

        self.current = self.segments.index_of(kick_off.segment)?;
        Ok(())
    }

    /// Visit all segments of the current branch, heel to toe.
    fn build_current_branch<V: DiscoveryVisitor>(&mut self, visitor: &mut V) -> MswResult<()> {
        let segments = self.segments;
        loop {
            let segment = segments.at(self.current);
            trace!(well = segments.well(), segment = %segment.number, "visit");
            visitor.new_segment(segment)?;

            let (new_branch_children, same_branch_child) = segments.partition_inlets(self.current)?;

            for child in new_branch_children {
                let child = segments.at(child);
                self.kick_off_points.push(Reverse(KickOffPoint {
                    segment: child.number,
                    outlet: Some(segment.number),
                    branch: child.branch,
                }));
            }

            match same_branch_child {
                Some(next) => self.current = next,
                None => return Ok(()),
            }
        }
    }
}

/// Collected result of a full discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Segment numbers in visiting order.
    pub visiting_order: Vec<SegmentNumber>,
    /// New branches in discovery order (main branch excluded).
    pub branches: Vec<KickOffPoint>,
}

impl DiscoveryVisitor for Discovery {
    fn new_segment(&mut self, segment: &Segment) -> MswResult<()> {
        self.visiting_order.push(segment.number);
        Ok(())
    }

    fn new_branch(&mut self, _well: &str, kick_off: &KickOffPoint) -> MswResult<()> {
        self.branches.push(*kick_off);
        Ok(())
    }
}

/// Run discovery and collect the visiting order and branch kick-offs.
pub fn discover(segments: &WellSegments) -> MswResult<Discovery> {
    let mut found = Discovery::default();
    Topology::new(segments).traverse(&mut found)?;
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(n: u32) -> SegmentNumber {
        SegmentNumber::new(n).unwrap()
    }

    fn branch(b: u32) -> BranchId {
        BranchId::new(b).unwrap()
    }

    #[test]
    fn kick_off_priority() {
        let a = KickOffPoint {
            segment: seg(20),
            outlet: Some(seg(3)),
            branch: branch(5),
        };
        let b = KickOffPoint {
            segment: seg(7),
            outlet: Some(seg(3)),
            branch: branch(3),
        };
        let c = KickOffPoint {
            segment: seg(11),
            outlet: Some(seg(2)),
            branch: branch(9),
        };
        let top = KickOffPoint {
            segment: seg(1),
            outlet: None,
            branch: BranchId::MAIN,
        };

        let mut heap = BinaryHeap::new();
        for p in [a, b, c, top] {
            heap.push(Reverse(p));
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|Reverse(p)| p.segment)).collect();
        assert_eq!(order, vec![seg(1), seg(11), seg(7), seg(20)]);
    }
}
