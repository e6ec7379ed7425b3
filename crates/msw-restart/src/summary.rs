//! Summary-state collaborator: point lookups of per-segment and per-well
//! time-series values at the current report step.
//!
//! Values are already in output units and sign convention.

use std::collections::HashMap;

use msw_core::SegmentNumber;

/// Summary vector mnemonics read by the encoder.
pub mod vectors {
    pub const SOFR: &str = "SOFR";
    pub const SWFR: &str = "SWFR";
    pub const SGFR: &str = "SGFR";
    pub const SPR: &str = "SPR";
    pub const WBHP: &str = "WBHP";
}

pub trait SummaryLookup: Sync {
    /// Segment vector value, if present.
    fn segment_var(&self, vector: &str, well: &str, segment: SegmentNumber) -> Option<f64>;

    /// Well vector value, if present.
    fn well_var(&self, well: &str, vector: &str) -> Option<f64>;
}

/// In-memory summary state keyed by `VECTOR:WELL[:SEGMENT]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarySnapshot {
    values: HashMap<String, f64>,
}

impl SummarySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_segment_var(&mut self, vector: &str, well: &str, segment: SegmentNumber, value: f64) {
        self.values.insert(segment_key(vector, well, segment), value);
    }

    pub fn set_well_var(&mut self, well: &str, vector: &str, value: f64) {
        self.values.insert(well_key(vector, well), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SummaryLookup for SummarySnapshot {
    fn segment_var(&self, vector: &str, well: &str, segment: SegmentNumber) -> Option<f64> {
        self.values.get(&segment_key(vector, well, segment)).copied()
    }

    fn well_var(&self, well: &str, vector: &str) -> Option<f64> {
        self.values.get(&well_key(vector, well)).copied()
    }
}

fn segment_key(vector: &str, well: &str, segment: SegmentNumber) -> String {
    format!("{vector}:{well}:{segment}")
}

fn well_key(vector: &str, well: &str) -> String {
    format!("{vector}:{well}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_and_well_keys_do_not_collide() {
        let seg = SegmentNumber::new(3).unwrap();
        let mut smry = SummarySnapshot::new();
        smry.set_segment_var(vectors::SOFR, "P1", seg, 12.0);
        smry.set_well_var("P1", vectors::WBHP, 250.0);

        assert_eq!(smry.segment_var(vectors::SOFR, "P1", seg), Some(12.0));
        assert_eq!(smry.segment_var(vectors::SOFR, "P2", seg), None);
        assert_eq!(smry.well_var("P1", vectors::WBHP), Some(250.0));
        assert_eq!(smry.well_var("P1", vectors::SOFR), None);
        assert_eq!(smry.len(), 2);
    }
}
