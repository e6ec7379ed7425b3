use thiserror::Error;

use crate::ids::{BranchId, SegmentNumber};
use crate::unit_system::UnitConvention;

pub type MswResult<T> = Result<T, MswError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MswError {
    #[error("No such multisegment well: {well}")]
    NotMultiSegmentWell { well: String },

    #[error(
        "Segment {segment} of well {well} has {count} inlet segments on branch {branch}"
    )]
    NonUniqueSameBranchInlet {
        well: String,
        segment: SegmentNumber,
        branch: BranchId,
        count: usize,
    },

    #[error("Looped branch {branch} for well {well} is not supported")]
    UnsupportedLoopedBranch { well: String, branch: BranchId },

    #[error("Unsupported unit convention: '{convention}'")]
    UnsupportedUnitConvention { convention: UnitConvention },

    #[error("Capacity exceeded: {what} (count={count}, capacity={capacity})")]
    CapacityExceeded {
        what: &'static str,
        count: usize,
        capacity: usize,
    },

    #[error("Unknown segment {segment} in well {well}")]
    UnknownSegment { well: String, segment: i64 },

    #[error("Invalid segment topology: {message}")]
    InvalidTopology { message: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
