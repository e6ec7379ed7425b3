//! Simulated well results at the current report step.

use std::collections::HashMap;

/// Surface-condition rates through one connection, SI units.
///
/// Positive values flow into the formation; producing connections carry
/// negative rates. A phase that is not simulated is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConnectionRates {
    pub global_index: usize,
    pub oil: Option<f64>,
    pub water: Option<f64>,
    pub gas: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WellResults {
    pub connections: Vec<ConnectionRates>,
    /// Number of per-segment result series the simulator produced.
    pub segment_count: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WellResultSet {
    wells: HashMap<String, WellResults>,
}

impl WellResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, well: impl Into<String>, results: WellResults) {
        self.wells.insert(well.into(), results);
    }

    pub fn get(&self, well: &str) -> Option<&WellResults> {
        self.wells.get(well)
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }
}
