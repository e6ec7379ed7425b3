//! Read-only well views consumed by restart encoding.

use msw_core::{MswError, MswResult, SegmentNumber};

use crate::segment::WellSegments;

/// Operating status of a well at a report step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WellStatus {
    #[default]
    Open,
    Stop,
    Shut,
}

/// State of a single perforation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Open,
    Shut,
}

/// A well-to-grid connection (perforation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Global cell index, used to match simulated connection rates.
    pub global_index: usize,
    /// Segment the connection drains into, if assigned.
    pub segment: Option<SegmentNumber>,
    pub state: ConnectionState,
}

impl Connection {
    pub fn is_open(&self) -> bool {
        self.state == ConnectionState::Open
    }
}

/// A well at one report step.
#[derive(Debug, Clone, PartialEq)]
pub struct Well {
    name: String,
    status: WellStatus,
    segments: Option<WellSegments>,
    connections: Vec<Connection>,
}

impl Well {
    /// A standard (single-node) well.
    pub fn standard(name: impl Into<String>, connections: Vec<Connection>) -> Self {
        Self {
            name: name.into(),
            status: WellStatus::Open,
            segments: None,
            connections,
        }
    }

    /// A multi-segment well.
    pub fn multi_segment(segments: WellSegments, connections: Vec<Connection>) -> Self {
        Self {
            name: segments.well().to_string(),
            status: WellStatus::Open,
            segments: Some(segments),
            connections,
        }
    }

    pub fn with_status(mut self, status: WellStatus) -> Self {
        self.status = status;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> WellStatus {
        self.status
    }

    pub fn is_multi_segment(&self) -> bool {
        self.segments.is_some()
    }

    /// Segment set, or `NotMultiSegmentWell` for a standard well.
    pub fn segments(&self) -> MswResult<&WellSegments> {
        self.segments
            .as_ref()
            .ok_or_else(|| MswError::NotMultiSegmentWell {
                well: self.name.clone(),
            })
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Open connections only.
    pub fn open_connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(|c| c.is_open())
    }

    /// Number of connections (any state) attached to `segment`.
    pub fn connection_count(&self, segment: SegmentNumber) -> usize {
        self.connections
            .iter()
            .filter(|c| c.segment == Some(segment))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(index: usize, segment: u32, state: ConnectionState) -> Connection {
        Connection {
            global_index: index,
            segment: SegmentNumber::new(segment),
            state,
        }
    }

    #[test]
    fn standard_well_has_no_segments() {
        let well = Well::standard("INJ", vec![]);
        assert!(!well.is_multi_segment());
        assert!(matches!(
            well.segments(),
            Err(MswError::NotMultiSegmentWell { well }) if well == "INJ"
        ));
    }

    #[test]
    fn connection_counts_include_shut() {
        let well = Well::standard(
            "P",
            vec![
                conn(10, 2, ConnectionState::Open),
                conn(11, 2, ConnectionState::Shut),
                conn(12, 3, ConnectionState::Open),
            ],
        );
        let two = SegmentNumber::new(2).unwrap();
        assert_eq!(well.connection_count(two), 2);
        assert_eq!(well.open_connections().count(), 2);
    }
}
