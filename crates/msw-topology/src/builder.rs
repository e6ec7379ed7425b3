//! Incremental segment-set builder.

use msw_core::units::{Length, Volume};
use msw_core::{BranchId, SegmentNumber};

use crate::device::Device;
use crate::error::{TopologyError, TopologyResult};
use crate::indexing::SegmentIndex;
use crate::segment::{Segment, SegmentGeometry, TopSegmentReference, WellSegments};
use crate::validate;

/// Builder for one well's segment set.
///
/// Use `top_reference` and `add_segment` to describe the well, then call
/// `build()` to validate and freeze it into an immutable `WellSegments`.
/// Segments may be added in any order.
#[derive(Debug, Default)]
pub struct WellSegmentsBuilder {
    well: String,
    top: Option<TopSegmentReference>,
    segments: Vec<Segment>,
}

impl WellSegmentsBuilder {
    /// Create a new empty builder for the named well.
    pub fn new(well: impl Into<String>) -> Self {
        Self {
            well: well.into(),
            ..Self::default()
        }
    }

    /// Set the top segment's length, depth and volume.
    pub fn top_reference(&mut self, length: Length, depth: Length, volume: Volume) -> &mut Self {
        self.top = Some(TopSegmentReference {
            length,
            depth,
            volume,
        });
        self
    }

    /// Add a segment.
    pub fn add_segment(
        &mut self,
        number: SegmentNumber,
        branch: BranchId,
        outlet: Option<SegmentNumber>,
        geometry: SegmentGeometry,
        device: Device,
    ) -> &mut Self {
        self.segments.push(Segment {
            number,
            branch,
            outlet,
            geometry,
            device,
            inlets: Vec::new(),
        });
        self
    }

    /// Validate and build the segment set.
    ///
    /// Sorts segments by number, checks structure, and derives each
    /// segment's inlet list from the outlet links.
    pub fn build(self) -> TopologyResult<WellSegments> {
        let Self {
            well,
            top,
            mut segments,
        } = self;

        let top = top.ok_or_else(|| TopologyError::MissingTopReference { well: well.clone() })?;

        segments.sort_by_key(|s| s.number);
        validate::validate_structure(&well, &segments)?;

        let index = SegmentIndex::new(segments.iter().map(|s| s.number).collect());
        Self::link_inlets(&mut segments, &index);

        validate::validate_reachability(&well, &segments, &index)?;

        Ok(WellSegments {
            well,
            top,
            segments,
            index,
        })
    }

    /// Attach every segment to its outlet's inlet list, in index order.
    fn link_inlets(segments: &mut [Segment], index: &SegmentIndex) {
        let links: Vec<(usize, SegmentNumber)> = segments
            .iter()
            .filter_map(|s| {
                let outlet = s.outlet?;
                index.index_of(outlet).map(|o| (o, s.number))
            })
            .collect();

        for (outlet_index, inlet) in links {
            segments[outlet_index].inlets.push(inlet);
        }
    }
}
