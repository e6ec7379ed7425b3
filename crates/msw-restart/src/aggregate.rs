//! Restart record builder: ISEG, RSEG, ILBS and ILBR for every
//! multi-segment well at one report step.

use msw_core::{MswError, MswResult, UnitConversion};
use msw_topology::Well;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::header::RestartDims;
use crate::results::{WellResultSet, WellResults};
use crate::schedule::Schedule;
use crate::summary::SummaryLookup;
use crate::windowed::{MatrixRow, NumCols, NumRows, NumWindows, WindowSize, WindowedArray, WindowedMatrix};
use crate::{iseg, lateral, rseg};

/// Shared read-only inputs of a capture.
#[derive(Clone, Copy)]
pub struct EncodeContext<'a> {
    pub dims: &'a RestartDims,
    pub units: &'a dyn UnitConversion,
    pub summary: &'a dyn SummaryLookup,
}

/// Windows owned by one well slot.
pub struct WellWindows<'a> {
    pub iseg: &'a mut [i32],
    pub rseg: &'a mut [f64],
    pub ilbs: &'a mut [i32],
    pub ilbr: MatrixRow<'a, i32>,
}

/// Encode one multi-segment well into its windows.
pub fn encode_well(
    ctx: EncodeContext<'_>,
    well: &Well,
    results: Option<&WellResults>,
    windows: WellWindows<'_>,
) -> MswResult<()> {
    check_capacity(ctx.dims, well)?;

    iseg::static_contrib(well, ctx.dims, windows.iseg)?;
    rseg::static_contrib(well, ctx.dims, ctx.units, ctx.summary, results, windows.rseg)?;
    lateral::static_contrib(well, windows.ilbs, windows.ilbr)?;

    debug!(
        well = well.name(),
        segments = well.segments()?.len(),
        "encoded multi-segment well"
    );
    Ok(())
}

fn check_capacity(dims: &RestartDims, well: &Well) -> MswResult<()> {
    let segments = well.segments()?;

    let highest = segments.max_segment_number().get() as usize;
    if highest > dims.max_segments {
        return Err(MswError::CapacityExceeded {
            what: "segments per well",
            count: highest,
            capacity: dims.max_segments,
        });
    }

    let branches = segments.max_branch().get() as usize;
    if branches > dims.max_branches {
        return Err(MswError::CapacityExceeded {
            what: "branches per well",
            count: branches,
            capacity: dims.max_branches,
        });
    }
    Ok(())
}

/// Segment arrays of all multi-segment wells at one report step.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateMswData {
    dims: RestartDims,
    iseg: WindowedArray<i32>,
    rseg: WindowedArray<f64>,
    ilbs: WindowedArray<i32>,
    ilbr: WindowedMatrix<i32>,
}

impl AggregateMswData {
    /// Zero-filled arrays sized by `dims`.
    pub fn new(dims: RestartDims) -> MswResult<Self> {
        dims.validate()?;
        Ok(Self::allocate(dims))
    }

    fn allocate(dims: RestartDims) -> Self {
        let wells = NumWindows(dims.max_msw_wells);
        Self {
            dims,
            iseg: WindowedArray::new(wells, WindowSize(dims.iseg_window())),
            rseg: WindowedArray::new(wells, WindowSize(dims.rseg_window())),
            ilbs: WindowedArray::new(wells, WindowSize(dims.max_branches)),
            ilbr: WindowedMatrix::new(
                NumRows(dims.max_msw_wells),
                NumCols(dims.max_branches),
                WindowSize(dims.ilbr_fields),
            ),
        }
    }

    pub fn dims(&self) -> &RestartDims {
        &self.dims
    }

    /// Encode every multi-segment well declared at `step`.
    ///
    /// The k-th multi-segment well in declaration order owns window k.
    /// Wells are encoded in parallel into fresh arrays which replace the
    /// current ones only when every well succeeded.
    pub fn capture_declared_msw_data(
        &mut self,
        schedule: &dyn Schedule,
        step: usize,
        units: &dyn UnitConversion,
        summary: &dyn SummaryLookup,
        results: &WellResultSet,
    ) -> MswResult<()> {
        let wells: Vec<&Well> = schedule
            .wells_at_step(step)
            .iter()
            .filter(|w| w.is_multi_segment())
            .collect();

        if wells.len() > self.dims.max_msw_wells {
            return Err(MswError::CapacityExceeded {
                what: "multi-segment wells",
                count: wells.len(),
                capacity: self.dims.max_msw_wells,
            });
        }

        info!(step, wells = wells.len(), "capturing multi-segment well data");

        let dims = self.dims;
        let ctx = EncodeContext {
            dims: &dims,
            units,
            summary,
        };

        let mut fresh = Self::allocate(dims);
        wells
            .par_iter()
            .zip(fresh.iseg.par_windows_mut())
            .zip(fresh.rseg.par_windows_mut())
            .zip(fresh.ilbs.par_windows_mut())
            .zip(fresh.ilbr.par_rows_mut())
            .try_for_each(|((((well, iseg), rseg), ilbs), ilbr)| {
                let windows = WellWindows {
                    iseg,
                    rseg,
                    ilbs,
                    ilbr,
                };
                encode_well(ctx, well, results.get(well.name()), windows)
            })?;

        *self = fresh;
        Ok(())
    }

    /// ISEG window of the well in slot `msw_index`.
    pub fn iseg_window(&self, msw_index: usize) -> &[i32] {
        self.iseg.window(msw_index)
    }

    pub fn rseg_window(&self, msw_index: usize) -> &[f64] {
        self.rseg.window(msw_index)
    }

    pub fn ilbs_window(&self, msw_index: usize) -> &[i32] {
        self.ilbs.window(msw_index)
    }

    /// ILBR cell of `branch_index` (zero-based) for the well in slot `msw_index`.
    pub fn ilbr_cell(&self, msw_index: usize, branch_index: usize) -> &[i32] {
        self.ilbr.cell(msw_index, branch_index)
    }

    pub fn iseg(&self) -> &[i32] {
        self.iseg.data()
    }

    pub fn rseg(&self) -> &[f64] {
        self.rseg.data()
    }

    pub fn ilbs(&self) -> &[i32] {
        self.ilbs.data()
    }

    pub fn ilbr(&self) -> &[i32] {
        self.ilbr.data()
    }
}
