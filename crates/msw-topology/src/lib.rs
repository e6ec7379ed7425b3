//! msw-topology: segment and branch model for multi-segment wells.
//!
//! Provides:
//! - Segment arena (`WellSegments`) with device kinds and geometry
//! - Incremental builder with structural validation
//! - Stable number-to-index lookup
//! - Branch discovery in restart-file order and toe-to-heel segment ordering
//! - Read-only well and connection views
//!
//! # Example
//!
//! ```
//! use msw_core::{BranchId, SegmentNumber, m, m3};
//! use msw_topology::{Device, SegmentGeometry, WellSegmentsBuilder, discover};
//!
//! let seg = |n| SegmentNumber::new(n).unwrap();
//! let mut builder = WellSegmentsBuilder::new("PROD1");
//! builder.top_reference(m(1000.0), m(950.0), m3(0.1));
//! builder.add_segment(seg(1), BranchId::MAIN, None, SegmentGeometry::default(), Device::Regular);
//! builder.add_segment(seg(2), BranchId::MAIN, Some(seg(1)), SegmentGeometry::default(), Device::Regular);
//! let segments = builder.build().unwrap();
//!
//! let found = discover(&segments).unwrap();
//! assert_eq!(found.visiting_order, vec![seg(1), seg(2)]);
//! assert!(found.branches.is_empty());
//! ```

pub mod builder;
pub mod device;
pub mod discovery;
pub mod error;
pub mod indexing;
pub mod ordering;
pub mod segment;
pub(crate) mod validate;
pub mod well;

// Re-exports for ergonomics
pub use builder::WellSegmentsBuilder;
pub use device::{AutoIcd, Device, DeviceStatus, IcdParams, Valve};
pub use discovery::{Discovery, DiscoveryVisitor, KickOffPoint, Topology, discover};
pub use error::{TopologyError, TopologyResult};
pub use indexing::SegmentIndex;
pub use ordering::{segment_order, segment_positions};
pub use segment::{Segment, SegmentGeometry, TopSegmentReference, WellSegments};
pub use well::{Connection, ConnectionState, Well, WellStatus};
