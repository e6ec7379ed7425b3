//! Per-segment surface flow rates aggregated from connection results.
//!
//! Each open connection contributes its (sign-flipped) surface rates to the
//! segment it drains into. Segments are then visited toe to heel so that
//! the flow through a segment is its own source term plus the flow of
//! every inlet segment.

use std::collections::HashMap;
use std::ops::{Add, AddAssign};

use msw_core::{Measure, MswError, MswResult, UnitConversion};
use msw_topology::{Well, WellSegments, segment_order};

use crate::results::ConnectionRates;

/// Surface rates of the three phases, in output units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseFlow {
    pub oil: f64,
    pub water: f64,
    pub gas: f64,
}

impl Add for PhaseFlow {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            oil: self.oil + rhs.oil,
            water: self.water + rhs.water,
            gas: self.gas + rhs.gas,
        }
    }
}

impl AddAssign for PhaseFlow {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Production-positive rates of one connection in output units.
fn connection_flow(rates: &ConnectionRates, units: &dyn UnitConversion) -> PhaseFlow {
    let convert = |measure, rate: Option<f64>| -units.to_output(measure, rate.unwrap_or(0.0));
    PhaseFlow {
        oil: convert(Measure::LiquidSurfaceRate, rates.oil),
        water: convert(Measure::LiquidSurfaceRate, rates.water),
        gas: convert(Measure::GasSurfaceRate, rates.gas),
    }
}

/// Source terms per segment index from the well's open connections.
///
/// Open connections without simulated rates contribute nothing.
pub fn source_terms(
    well: &Well,
    rates: &[ConnectionRates],
    units: &dyn UnitConversion,
) -> MswResult<Vec<PhaseFlow>> {
    let segments = well.segments()?;
    let by_cell: HashMap<usize, &ConnectionRates> =
        rates.iter().map(|r| (r.global_index, r)).collect();

    let mut sources = vec![PhaseFlow::default(); segments.len()];
    for conn in well.open_connections() {
        let Some(rate) = by_cell.get(&conn.global_index) else {
            continue;
        };
        let segment = conn.segment.ok_or_else(|| MswError::UnknownSegment {
            well: well.name().to_string(),
            segment: 0,
        })?;
        sources[segments.index_of(segment)?] += connection_flow(rate, units);
    }

    Ok(sources)
}

/// Accumulate source terms over the segment tree, toe to heel.
pub fn accumulate(segments: &WellSegments, sources: &[PhaseFlow]) -> MswResult<Vec<PhaseFlow>> {
    let mut flows = sources.to_vec();
    for index in segment_order(segments)? {
        let mut total = flows[index];
        for &inlet in segments.at(index).inlet_segments() {
            total += flows[segments.index_of(inlet)?];
        }
        flows[index] = total;
    }
    Ok(flows)
}

/// Flow rate through every segment of `well`, indexed like its segment set.
pub fn segment_flow_rates(
    well: &Well,
    rates: &[ConnectionRates],
    units: &dyn UnitConversion,
) -> MswResult<Vec<PhaseFlow>> {
    let sources = source_terms(well, rates, units)?;
    accumulate(well.segments()?, &sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use msw_core::{BranchId, SegmentNumber, UnitSystem, m, m3};
    use msw_topology::{Connection, ConnectionState, Device, SegmentGeometry, WellSegmentsBuilder};

    fn seg(n: u32) -> SegmentNumber {
        SegmentNumber::new(n).unwrap()
    }

    /// 1-2-3 on branch 1, 4-5 on branch 2 draining into 2.
    fn forked_well() -> Well {
        let mut b = WellSegmentsBuilder::new("F1");
        b.top_reference(m(100.0), m(90.0), m3(0.0));
        for (n, branch, outlet) in [(1, 1, 0), (2, 1, 1), (3, 1, 2), (4, 2, 2), (5, 2, 4)] {
            b.add_segment(
                seg(n),
                BranchId::new(branch).unwrap(),
                SegmentNumber::new(outlet),
                SegmentGeometry::default(),
                Device::Regular,
            );
        }
        let segments = b.build().unwrap();
        let conn = |cell, segment, state| Connection {
            global_index: cell,
            segment: Some(seg(segment)),
            state,
        };
        Well::multi_segment(
            segments,
            vec![
                conn(10, 3, ConnectionState::Open),
                conn(11, 5, ConnectionState::Open),
                conn(12, 4, ConnectionState::Shut),
                conn(13, 2, ConnectionState::Open),
            ],
        )
    }

    fn rate(cell: usize, oil: f64, water: Option<f64>) -> ConnectionRates {
        ConnectionRates {
            global_index: cell,
            oil: Some(oil),
            water,
            gas: None,
        }
    }

    #[test]
    fn inlet_flows_accumulate_towards_top() {
        let well = forked_well();
        let units = UnitSystem::new(msw_core::UnitConvention::Input);
        let rates = [
            rate(10, -1.0, Some(-0.5)),
            rate(11, -2.0, None),
            rate(12, -100.0, None),
        ];

        let flows = segment_flow_rates(&well, &rates, &units).unwrap();

        assert_eq!(flows[2], PhaseFlow { oil: 1.0, water: 0.5, gas: 0.0 });
        assert_eq!(flows[4].oil, 2.0);
        assert_eq!(flows[3].oil, 2.0);
        assert_eq!(flows[1].oil, 3.0);
        assert_eq!(flows[0], PhaseFlow { oil: 3.0, water: 0.5, gas: 0.0 });
    }

    #[test]
    fn shut_and_unmatched_connections_are_ignored() {
        let well = forked_well();
        let units = UnitSystem::new(msw_core::UnitConvention::Input);
        let rates = [rate(12, -100.0, None), rate(99, -7.0, None)];

        let sources = source_terms(&well, &rates, &units).unwrap();
        assert!(sources.iter().all(|s| *s == PhaseFlow::default()));
    }

    #[test]
    fn rates_are_converted_to_output_units() {
        let well = forked_well();
        let units = UnitSystem::metric();
        let rates = [rate(13, -1.0 / 86_400.0, None)];

        let flows = segment_flow_rates(&well, &rates, &units).unwrap();
        assert!((flows[0].oil - 1.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use msw_core::{BranchId, SegmentNumber, Tolerances, UnitConvention, UnitSystem, m, m3, nearly_equal};
    use msw_topology::{Connection, ConnectionState, Device, SegmentGeometry, WellSegmentsBuilder};
    use proptest::prelude::*;

    fn chain(rates: &[f64]) -> (Well, Vec<ConnectionRates>) {
        let mut b = WellSegmentsBuilder::new("CHAIN");
        b.top_reference(m(0.0), m(0.0), m3(0.0));
        let mut connections = Vec::new();
        let mut results = Vec::new();
        for (k, &rate) in rates.iter().enumerate() {
            let number = SegmentNumber::new(k as u32 + 1).unwrap();
            let outlet = SegmentNumber::new(k as u32);
            b.add_segment(number, BranchId::MAIN, outlet, SegmentGeometry::default(), Device::Regular);
            connections.push(Connection {
                global_index: 1000 + k,
                segment: Some(number),
                state: ConnectionState::Open,
            });
            results.push(ConnectionRates {
                global_index: 1000 + k,
                oil: Some(-rate),
                water: None,
                gas: None,
            });
        }
        (Well::multi_segment(b.build().unwrap(), connections), results)
    }

    proptest! {
        #[test]
        fn chain_flow_is_sum_towards_toe(rates in prop::collection::vec(0.0_f64..1.0e3, 1..30)) {
            let (well, results) = chain(&rates);
            let units = UnitSystem::new(UnitConvention::Input);
            let flows = segment_flow_rates(&well, &results, &units).unwrap();

            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            let mut downstream = 0.0;
            for k in (0..rates.len()).rev() {
                downstream += rates[k];
                prop_assert!(nearly_equal(flows[k].oil, downstream, tol));
            }
            prop_assert!(nearly_equal(flows[0].oil, rates.iter().sum::<f64>(), tol));
        }
    }
}
