//! Lateral branch bookkeeping (ILBS and ILBR) for one multi-segment well.
//!
//! ILBS lists the kick-off segment of every branch other than the main
//! branch, in discovery order. ILBR holds one cell per branch with its
//! outlet, first and last segments, the number of segments and the
//! one-based position of the branch in ILBS (zero for the main branch).

use msw_core::{MswError, MswResult, segment_or_zero};
use msw_topology::{DiscoveryVisitor, KickOffPoint, Segment, Topology, Well};
use tracing::trace;

use crate::items::ilbr;
use crate::windowed::MatrixRow;

struct BranchRecorder<'a> {
    ilbs: &'a mut [i32],
    ilbr: MatrixRow<'a, i32>,
    insert_index: usize,
}

impl BranchRecorder<'_> {
    fn count(value: usize) -> i32 {
        i32::try_from(value).unwrap_or(i32::MAX)
    }
}

impl DiscoveryVisitor for BranchRecorder<'_> {
    fn new_segment(&mut self, segment: &Segment) -> MswResult<()> {
        let cell = self.ilbr.cell_mut(segment.branch.slot());
        cell[ilbr::LAST_SEGMENT] = segment_or_zero(Some(segment.number));
        cell[ilbr::NUM_BRANCH_SEGMENTS] += 1;
        Ok(())
    }

    fn new_branch(&mut self, well: &str, kick_off: &KickOffPoint) -> MswResult<()> {
        let cell = self.ilbr.cell_mut(kick_off.branch.slot());
        if cell[ilbr::NUM_BRANCH_SEGMENTS] > 0 {
            return Err(MswError::UnsupportedLoopedBranch {
                well: well.to_string(),
                branch: kick_off.branch,
            });
        }

        let first = segment_or_zero(Some(kick_off.segment));
        cell[ilbr::OUTLET_SEGMENT] = segment_or_zero(kick_off.outlet);
        cell[ilbr::FIRST_SEGMENT] = first;
        cell[ilbr::KICK_OFF_DISCOVERY_OFFSET] = Self::count(self.insert_index + 1);

        trace!(well, branch = %kick_off.branch, slot = self.insert_index, "ilbs entry");
        self.ilbs[self.insert_index] = first;
        self.insert_index += 1;
        Ok(())
    }
}

/// Fill the well's ILBS window and ILBR row.
pub fn static_contrib(well: &Well, ilbs: &mut [i32], mut row: MatrixRow<'_, i32>) -> MswResult<()> {
    let segments = well.segments()?;

    let main = row.cell_mut(0);
    main[ilbr::OUTLET_SEGMENT] = 0;
    main[ilbr::NUM_BRANCH_SEGMENTS] = 0;
    main[ilbr::FIRST_SEGMENT] = 1;
    main[ilbr::KICK_OFF_DISCOVERY_OFFSET] = 0;

    let mut recorder = BranchRecorder {
        ilbs,
        ilbr: row,
        insert_index: 0,
    };
    Topology::new(segments).traverse(&mut recorder)
}
