//! Core segment data structures.

use msw_core::units::{Area, Length, Volume};
use msw_core::{BranchId, MswError, MswResult, SegmentNumber};

use crate::device::Device;
use crate::indexing::SegmentIndex;

/// Physical shape of a segment. All values SI.
///
/// `total_length` and `depth` are measured at the segment node from the
/// well's reference point, not relative to the outlet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentGeometry {
    pub total_length: Length,
    pub depth: Length,
    pub internal_diameter: Length,
    pub roughness: Length,
    pub cross_area: Area,
    pub volume: Volume,
}

/// Reference data of the top segment (distance, depth and volume from the
/// well head), which replaces the outlet-relative geometry for segment 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopSegmentReference {
    pub length: Length,
    pub depth: Length,
    pub volume: Volume,
}

/// A pipe element of a multi-segment well.
///
/// Cross references (outlet, inlets) are plain segment numbers into the
/// owning [`WellSegments`]; segments never own each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub number: SegmentNumber,
    pub branch: BranchId,
    /// `None` for the top segment.
    pub outlet: Option<SegmentNumber>,
    pub geometry: SegmentGeometry,
    pub device: Device,
    /// Hydraulic children, in segment-index order. Filled by the builder.
    pub(crate) inlets: Vec<SegmentNumber>,
}

impl Segment {
    pub fn inlet_segments(&self) -> &[SegmentNumber] {
        &self.inlets
    }

    pub fn is_top(&self) -> bool {
        self.outlet.is_none()
    }
}

/// The validated, immutable segment set of one well.
///
/// Segments are stored in ascending segment-number order, so index 0 is
/// always the top segment.
#[derive(Debug, Clone, PartialEq)]
pub struct WellSegments {
    pub(crate) well: String,
    pub(crate) top: TopSegmentReference,
    pub(crate) segments: Vec<Segment>,
    pub(crate) index: SegmentIndex,
}

impl WellSegments {
    /// Name of the owning well.
    pub fn well(&self) -> &str {
        &self.well
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments in index order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Segment at a dense index (panics if out of bounds).
    pub fn at(&self, index: usize) -> &Segment {
        &self.segments[index]
    }

    pub fn top(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn top_reference(&self) -> &TopSegmentReference {
        &self.top
    }

    /// Dense index of a segment number.
    pub fn index_of(&self, number: SegmentNumber) -> MswResult<usize> {
        self.index.index_of(number).ok_or_else(|| MswError::UnknownSegment {
            well: self.well.clone(),
            segment: i64::from(number.get()),
        })
    }

    pub fn by_number(&self, number: SegmentNumber) -> MswResult<&Segment> {
        Ok(&self.segments[self.index_of(number)?])
    }

    /// Largest branch id used by any segment.
    pub fn max_branch(&self) -> BranchId {
        self.segments
            .iter()
            .map(|s| s.branch)
            .max()
            .unwrap_or(BranchId::MAIN)
    }

    /// Largest segment number in the well.
    pub fn max_segment_number(&self) -> SegmentNumber {
        self.segments
            .iter()
            .map(|s| s.number)
            .max()
            .unwrap_or(SegmentNumber::TOP)
    }

    /// Split the inlets of the segment at `index` by branch.
    ///
    /// Returns the inlet indices on other branches (relative order kept) and
    /// the single inlet continuing the segment's own branch, if any. More
    /// than one same-branch inlet makes the branch ambiguous and is an error.
    pub fn partition_inlets(&self, index: usize) -> MswResult<(Vec<usize>, Option<usize>)> {
        let segment = &self.segments[index];

        let mut other_branch = Vec::new();
        let mut same_branch = Vec::new();
        for &inlet in &segment.inlets {
            let inlet_index = self.index_of(inlet)?;
            if self.segments[inlet_index].branch == segment.branch {
                same_branch.push(inlet_index);
            } else {
                other_branch.push(inlet_index);
            }
        }

        if same_branch.len() > 1 {
            return Err(MswError::NonUniqueSameBranchInlet {
                well: self.well.clone(),
                segment: segment.number,
                branch: segment.branch,
                count: same_branch.len(),
            });
        }

        Ok((other_branch, same_branch.first().copied()))
    }

    /// Number of inlet segments on branches other than the segment's own.
    pub fn inflow_branch_count(&self, index: usize) -> MswResult<usize> {
        let segment = &self.segments[index];
        let mut count = 0;
        for &inlet in &segment.inlets {
            if self.by_number(inlet)?.branch != segment.branch {
                count += 1;
            }
        }
        Ok(count)
    }
}
