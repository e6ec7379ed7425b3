//! msw-restart: restart-file segment arrays for multi-segment wells.
//!
//! Encodes the segment structure, flow state and device data of every
//! multi-segment well at a report step into four fixed-layout arrays:
//!
//! - ISEG: integer items per segment
//! - RSEG: real items per segment
//! - ILBS: kick-off segment of each lateral branch
//! - ILBR: per-branch bookkeeping
//!
//! Array dimensions come from the integer header ([`RestartDims`]). Wells,
//! summary values and simulated connection rates are read through the
//! [`Schedule`], [`SummaryLookup`] and [`WellResultSet`] collaborators.

pub mod aggregate;
pub mod device;
pub mod flow;
pub mod header;
pub mod items;
pub mod iseg;
pub mod lateral;
pub mod results;
pub mod rseg;
pub mod schedule;
pub mod summary;
pub mod windowed;

pub use aggregate::{AggregateMswData, EncodeContext, WellWindows, encode_well};
pub use device::valve_flow_unit_coefficient;
pub use flow::{PhaseFlow, segment_flow_rates};
pub use header::RestartDims;
pub use results::{ConnectionRates, WellResultSet, WellResults};
pub use schedule::{Schedule, StaticSchedule};
pub use summary::{SummaryLookup, SummarySnapshot};
pub use windowed::{MatrixRow, NumCols, NumRows, NumWindows, WindowSize, WindowedArray, WindowedMatrix};
