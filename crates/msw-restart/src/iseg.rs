//! Integer segment data (ISEG) for one multi-segment well.

use msw_core::{MswResult, segment_or_zero};
use msw_topology::{Well, segment_order, segment_positions};

use crate::device;
use crate::header::RestartDims;
use crate::items::iseg;

fn to_item<T: TryInto<i32>>(value: T) -> i32 {
    value.try_into().unwrap_or(i32::MAX)
}

/// Fill the well's ISEG window.
///
/// Segment `n` owns the sub-window starting at `(n - 1) * NISEGZ`. The
/// `SEG_NO` item is the exception: slot `i` holds the number of the `i`-th
/// segment in toe-to-heel order.
pub fn static_contrib(well: &Well, dims: &RestartDims, window: &mut [i32]) -> MswResult<()> {
    let segments = well.segments()?;
    let order = segment_order(segments)?;
    let positions = segment_positions(&order);
    let stride = dims.iseg_fields;

    let mut inflow_branches_so_far = 0;
    let mut connections_so_far = 0;

    for (index, segment) in segments.iter().enumerate() {
        let (_, same_branch) = segments.partition_inlets(index)?;
        let inflow_branches = segments.inflow_branch_count(index)?;
        let connections = well.connection_count(segment.number);
        inflow_branches_so_far += inflow_branches;

        window[index * stride + iseg::SEG_NO] = to_item(segments.at(order[index]).number.get());

        let base = segment.number.slot() * stride;
        let item = &mut window[base..base + stride];

        item[iseg::OUT_SEG] = segment_or_zero(segment.outlet);
        item[iseg::IN_SEG_CUR_BRANCH] =
            segment_or_zero(same_branch.map(|inlet| segments.at(inlet).number));
        item[iseg::BRANCH_NO] = to_item(segment.branch.get());
        item[iseg::NUM_INFLOW_BRANCHES] = to_item(inflow_branches);
        item[iseg::SUM_INFLOW_BRANCHES] = if inflow_branches > 0 {
            to_item(inflow_branches_so_far)
        } else {
            0
        };
        item[iseg::NUM_CONNECTIONS] = to_item(connections);
        item[iseg::SUM_CONNECTIONS] = if connections > 0 {
            to_item(connections_so_far + 1)
        } else {
            0
        };
        item[iseg::SEG_REORDER] = to_item(positions[index]);
        item[iseg::SEGMENT_TYPE] = segment.device.type_code();

        device::write_iseg(&segment.device, item);

        connections_so_far += connections;
    }

    Ok(())
}
