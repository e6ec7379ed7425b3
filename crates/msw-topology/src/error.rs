//! Topology-specific error types.

use msw_core::{BranchId, MswError, SegmentNumber};

pub type TopologyResult<T> = Result<T, TopologyError>;

/// Segment-set construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Two segments share a segment number.
    DuplicateSegment { well: String, segment: SegmentNumber },

    /// A segment's outlet does not exist in the well.
    UnknownOutlet {
        well: String,
        segment: SegmentNumber,
        outlet: SegmentNumber,
    },

    /// No segment without an outlet.
    MissingTopSegment { well: String },

    /// More than one segment without an outlet.
    MultipleTopSegments { well: String, count: usize },

    /// The segment without an outlet is not segment 1.
    TopSegmentNotFirst { well: String, segment: SegmentNumber },

    /// The top segment is not on branch 1.
    TopSegmentNotOnMainBranch { well: String, branch: BranchId },

    /// Following outlets from this segment never reaches the top (a cycle).
    Unreachable { well: String, segment: SegmentNumber },

    /// Top segment reference data (length, depth, volume) was never set.
    MissingTopReference { well: String },
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::DuplicateSegment { well, segment } => {
                write!(f, "Segment {} defined more than once in well {}", segment, well)
            }
            TopologyError::UnknownOutlet {
                well,
                segment,
                outlet,
            } => {
                write!(
                    f,
                    "Segment {} of well {} has non-existent outlet segment {}",
                    segment, well, outlet
                )
            }
            TopologyError::MissingTopSegment { well } => {
                write!(f, "Well {} has no top segment", well)
            }
            TopologyError::MultipleTopSegments { well, count } => {
                write!(f, "Well {} has {} segments without an outlet", well, count)
            }
            TopologyError::TopSegmentNotFirst { well, segment } => {
                write!(f, "Top segment of well {} is {} (expected 1)", well, segment)
            }
            TopologyError::TopSegmentNotOnMainBranch { well, branch } => {
                write!(f, "Top segment of well {} is on branch {} (expected 1)", well, branch)
            }
            TopologyError::Unreachable { well, segment } => {
                write!(
                    f,
                    "Segment {} of well {} does not drain to the top segment",
                    segment, well
                )
            }
            TopologyError::MissingTopReference { well } => {
                write!(f, "Well {} has no top segment reference data", well)
            }
        }
    }
}

impl std::error::Error for TopologyError {}

impl From<TopologyError> for MswError {
    fn from(err: TopologyError) -> Self {
        MswError::InvalidTopology {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_core_error() {
        let err = TopologyError::MissingTopSegment { well: "W1".into() };
        let core: MswError = err.into();
        assert!(matches!(core, MswError::InvalidTopology { .. }));
        assert!(core.to_string().contains("Well W1 has no top segment"));
    }
}
