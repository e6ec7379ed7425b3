//! Real segment data (RSEG) for one multi-segment well.

use msw_core::{Measure, MswResult, SegmentNumber, UnitConvention, UnitConversion, fraction_or_zero};
use msw_topology::{Segment, Well, WellStatus};

use crate::device;
use crate::flow::{PhaseFlow, segment_flow_rates};
use crate::header::RestartDims;
use crate::items::rseg;
use crate::results::WellResults;
use crate::summary::{SummaryLookup, vectors};

/// Weight of the water rate in the total segment flow.
const WATER_WEIGHT: f64 = 0.1;

/// Weight of the gas rate in the total segment flow.
fn gas_weight(convention: UnitConvention) -> f64 {
    match convention {
        UnitConvention::Field => 0.1781076,
        _ => 0.001,
    }
}

/// Where segment rates and pressures are read from.
enum FlowSource<'a> {
    /// Rates aggregated from connection results; pressure is the well BHP.
    Local { flows: Vec<PhaseFlow>, bhp: f64 },
    /// Per-segment summary vectors.
    Summary {
        summary: &'a dyn SummaryLookup,
        well: &'a str,
    },
}

impl FlowSource<'_> {
    fn sample(&self, index: usize, number: SegmentNumber) -> (PhaseFlow, f64) {
        match self {
            FlowSource::Local { flows, bhp } => (flows[index], *bhp),
            FlowSource::Summary { summary, well } => {
                let get = |vector| summary.segment_var(vector, well, number).unwrap_or(0.0);
                let flow = PhaseFlow {
                    oil: get(vectors::SOFR),
                    water: get(vectors::SWFR),
                    gas: get(vectors::SGFR),
                };
                (flow, get(vectors::SPR))
            }
        }
    }
}

/// Pick local aggregation only when the simulator produced no per-segment
/// series for an active well.
fn flow_source<'a>(
    well: &'a Well,
    units: &dyn UnitConversion,
    summary: &'a dyn SummaryLookup,
    results: Option<&WellResults>,
) -> MswResult<FlowSource<'a>> {
    let results = results.filter(|_| well.status() != WellStatus::Shut);
    match results {
        Some(res) if res.segment_count < 2 => Ok(FlowSource::Local {
            flows: segment_flow_rates(well, &res.connections, units)?,
            bhp: summary.well_var(well.name(), vectors::WBHP).unwrap_or(0.0),
        }),
        _ => Ok(FlowSource::Summary {
            summary,
            well: well.name(),
        }),
    }
}

fn write_flow(flow: PhaseFlow, pressure: f64, gas_weight: f64, item: &mut [f64]) {
    let water = flow.water * WATER_WEIGHT;
    let gas = flow.gas * gas_weight;
    let total = flow.oil + water + gas;

    item[rseg::TOT_FLOW_RATE] = total;
    item[rseg::WAT_FLOW_FRACT] = fraction_or_zero(water, total);
    item[rseg::GAS_FLOW_FRACT] = fraction_or_zero(gas, total);
    item[rseg::PRESSURE] = pressure;
    item[rseg::ITEM31] = item[rseg::WAT_FLOW_FRACT];
    item[rseg::ITEM40] = 1.0;

    for exponent in rseg::FLOW_FRACTION_EXPONENTS {
        item[exponent] = 1.0;
    }
}

fn write_geometry(segment: &Segment, outlet: &Segment, units: &dyn UnitConversion, item: &mut [f64]) {
    let length = |v: f64| units.to_output(Measure::Length, v);
    let geo = &segment.geometry;
    let out = &outlet.geometry;

    item[rseg::DIST_OUTLET] = length(geo.total_length.value - out.total_length.value);
    item[rseg::OUTLET_DEPTH_DIFF] = length(geo.depth.value - out.depth.value);
    item[rseg::SEG_DIAM] = length(geo.internal_diameter.value);
    item[rseg::SEG_ROUGH] = length(geo.roughness.value);
    item[rseg::SEG_AREA] = length(length(geo.cross_area.value));
    item[rseg::SEG_VOLUME] = length(length(length(geo.volume.value)));
    item[rseg::DIST_BHP_REF] = length(geo.total_length.value);
    item[rseg::SEG_NODE_DEPTH] = length(geo.depth.value);
}

/// Fill the well's RSEG window.
///
/// Segment `n` owns the sub-window starting at `(n - 1) * NRSEGZ`. The top
/// segment is described by the well's top reference and never carries device
/// constants.
pub fn static_contrib(
    well: &Well,
    dims: &RestartDims,
    units: &dyn UnitConversion,
    summary: &dyn SummaryLookup,
    results: Option<&WellResults>,
    window: &mut [f64],
) -> MswResult<()> {
    let segments = well.segments()?;
    let source = flow_source(well, units, summary, results)?;
    let gas_weight = gas_weight(units.convention());
    let stride = dims.rseg_fields;
    let tracers = dims.rseg_fixed_fields..dims.rseg_fixed_fields + dims.tracer_tail();

    for (index, segment) in segments.iter().enumerate() {
        let base = segment.number.slot() * stride;
        let item = &mut window[base..base + stride];

        match segment.outlet {
            None => {
                let top = segments.top_reference();
                let length = |v: f64| units.to_output(Measure::Length, v);
                item[rseg::DIST_OUTLET] = length(top.length.value);
                item[rseg::OUTLET_DEPTH_DIFF] = length(top.depth.value);
                item[rseg::SEG_VOLUME] = length(length(length(top.volume.value)));
                item[rseg::DIST_BHP_REF] = item[rseg::DIST_OUTLET];
                item[rseg::SEG_NODE_DEPTH] = item[rseg::OUTLET_DEPTH_DIFF];
            }
            Some(outlet) => {
                write_geometry(segment, segments.by_number(outlet)?, units, item);
            }
        }

        let (flow, pressure) = source.sample(index, segment.number);
        write_flow(flow, pressure, gas_weight, item);

        if !segment.is_top() {
            device::write_rseg(&segment.device, units, item)?;
        }

        item[tracers.clone()].fill(0.0);
    }

    Ok(())
}
