//! Conversion from case definitions to encoder inputs.

use msw_core::units::{kg_per_m3, m, m2, m3, pa_s};
use msw_core::{BranchId, MswError, SegmentNumber, UnitConvention, UnitSystem};
use msw_restart::{
    AggregateMswData, ConnectionRates, RestartDims, StaticSchedule, SummarySnapshot, WellResultSet,
    WellResults,
};
use msw_topology::{
    AutoIcd, Connection, ConnectionState, Device, DeviceStatus, IcdParams, SegmentGeometry, Valve,
    Well, WellSegmentsBuilder, WellStatus,
};

use crate::schema::{
    Case, ConnectionStateDef, DeviceDef, DeviceStatusDef, HeaderDef, IcdDef, StepDef,
    UnitConventionDef, WellDef, WellStatusDef,
};
use crate::{ProjectError, ProjectResult};

/// A case converted into encoder inputs.
#[derive(Debug, Clone)]
pub struct CaseModel {
    pub name: String,
    pub units: UnitSystem,
    pub dims: RestartDims,
    pub schedule: StaticSchedule,
    pub summaries: Vec<SummarySnapshot>,
    pub results: Vec<WellResultSet>,
}

impl CaseModel {
    pub fn num_steps(&self) -> usize {
        self.summaries.len()
    }

    fn check_step(&self, step: usize) -> ProjectResult<()> {
        if step >= self.num_steps() {
            return Err(ProjectError::UnknownStep {
                step,
                steps: self.num_steps(),
            });
        }
        Ok(())
    }

    /// Well `name` at `step`.
    pub fn well(&self, step: usize, name: &str) -> ProjectResult<&Well> {
        use msw_restart::Schedule;

        self.check_step(step)?;
        self.schedule
            .wells_at_step(step)
            .iter()
            .find(|w| w.name() == name)
            .ok_or_else(|| ProjectError::UnknownWell {
                well: name.to_string(),
                step,
            })
    }

    /// Encode the segment arrays of `step`.
    pub fn capture(&self, step: usize) -> ProjectResult<AggregateMswData> {
        self.check_step(step)?;
        let mut data = AggregateMswData::new(self.dims)?;
        data.capture_declared_msw_data(
            &self.schedule,
            step,
            &self.units,
            &self.summaries[step],
            &self.results[step],
        )?;
        Ok(data)
    }
}

pub fn build_case(case: &Case) -> ProjectResult<CaseModel> {
    let mut steps = Vec::with_capacity(case.steps.len());
    let mut summaries = Vec::with_capacity(case.steps.len());
    let mut results = Vec::with_capacity(case.steps.len());

    for step in &case.steps {
        steps.push(build_wells(step)?);
        summaries.push(build_summary(step)?);
        results.push(build_results(step));
    }

    Ok(CaseModel {
        name: case.name.clone(),
        units: UnitSystem::new(unit_convention(case.units)),
        dims: build_dims(&case.header)?,
        schedule: StaticSchedule::new(steps),
        summaries,
        results,
    })
}

pub fn unit_convention(def: UnitConventionDef) -> UnitConvention {
    match def {
        UnitConventionDef::Metric => UnitConvention::Metric,
        UnitConventionDef::Field => UnitConvention::Field,
        UnitConventionDef::Lab => UnitConvention::Lab,
        UnitConventionDef::PvtM => UnitConvention::PvtM,
        UnitConventionDef::Input => UnitConvention::Input,
    }
}

pub fn build_dims(header: &HeaderDef) -> ProjectResult<RestartDims> {
    let dims = RestartDims {
        max_msw_wells: header.max_msw_wells,
        max_segments: header.max_segments,
        max_branches: header.max_branches,
        iseg_fields: header.iseg_fields,
        rseg_fields: header.rseg_fields,
        ilbr_fields: header.ilbr_fields,
        rseg_fixed_fields: RestartDims::rseg_fixed_fields_for(header.active_phases),
        water_tracers: header.water_tracers,
    };
    dims.validate()?;
    Ok(dims)
}

fn segment_number(number: u32, well: &str) -> ProjectResult<SegmentNumber> {
    SegmentNumber::new(number).ok_or_else(|| {
        ProjectError::Model(MswError::UnknownSegment {
            well: well.to_string(),
            segment: i64::from(number),
        })
    })
}

fn build_wells(step: &StepDef) -> ProjectResult<Vec<Well>> {
    step.wells.iter().map(build_well).collect()
}

pub fn build_well(def: &WellDef) -> ProjectResult<Well> {
    let connections = def
        .connections
        .iter()
        .map(|c| -> ProjectResult<Connection> {
            let segment = c
                .segment
                .map(|n| segment_number(n, &def.name))
                .transpose()?;
            Ok(Connection {
                global_index: c.cell,
                segment,
                state: match c.state {
                    ConnectionStateDef::Open => ConnectionState::Open,
                    ConnectionStateDef::Shut => ConnectionState::Shut,
                },
            })
        })
        .collect::<ProjectResult<Vec<_>>>()?;

    let status = match def.status {
        WellStatusDef::Open => WellStatus::Open,
        WellStatusDef::Stop => WellStatus::Stop,
        WellStatusDef::Shut => WellStatus::Shut,
    };

    let Some(top) = &def.top else {
        return Ok(Well::standard(def.name.clone(), connections).with_status(status));
    };

    let mut builder = WellSegmentsBuilder::new(def.name.clone());
    builder.top_reference(m(top.length_m), m(top.depth_m), m3(top.volume_m3));
    for seg in &def.segments {
        let branch = BranchId::new(seg.branch).ok_or_else(|| ProjectError::Model(MswError::InvalidTopology {
            message: format!("well {}: segment {} has branch 0", def.name, seg.number),
        }))?;
        let geometry = SegmentGeometry {
            total_length: m(seg.length_m),
            depth: m(seg.depth_m),
            internal_diameter: m(seg.diameter_m),
            roughness: m(seg.roughness_m),
            cross_area: m2(seg.area_m2),
            volume: m3(seg.volume_m3),
        };
        builder.add_segment(
            segment_number(seg.number, &def.name)?,
            branch,
            SegmentNumber::new(seg.outlet),
            geometry,
            build_device(&seg.device),
        );
    }
    let segments = builder.build().map_err(MswError::from)?;

    Ok(Well::multi_segment(segments, connections).with_status(status))
}

fn device_status(def: DeviceStatusDef) -> DeviceStatus {
    match def {
        DeviceStatusDef::Open => DeviceStatus::Open,
        DeviceStatusDef::Shut => DeviceStatus::Shut,
    }
}

fn icd_params(def: &IcdDef) -> IcdParams {
    IcdParams {
        strength: def.strength,
        length: def.length_m,
        density_calibration: kg_per_m3(def.density_calibration_kg_m3),
        viscosity_calibration: pa_s(def.viscosity_calibration_pa_s),
        critical_water_fraction: def.critical_water_fraction,
        transition_width: def.transition_width,
        max_viscosity_ratio: def.max_viscosity_ratio,
        method_flow_scaling: def.method_flow_scaling,
        max_absolute_rate: def.max_absolute_rate_m3_per_s,
        status: device_status(def.status),
    }
}

pub fn build_device(def: &DeviceDef) -> Device {
    match def {
        DeviceDef::Regular => Device::Regular,
        DeviceDef::SpiralIcd { icd } => Device::SpiralIcd(icd_params(icd)),
        DeviceDef::AutoIcd {
            icd,
            scaling_factor,
            flow_rate_exponent,
            visc_exponent,
            oil_density_exponent,
            water_density_exponent,
            gas_density_exponent,
            oil_visc_exponent,
            water_visc_exponent,
            gas_visc_exponent,
        } => Device::AutoIcd(AutoIcd {
            icd: icd_params(icd),
            scaling_factor: *scaling_factor,
            flow_rate_exponent: *flow_rate_exponent,
            visc_exponent: *visc_exponent,
            oil_density_exponent: *oil_density_exponent,
            water_density_exponent: *water_density_exponent,
            gas_density_exponent: *gas_density_exponent,
            oil_visc_exponent: *oil_visc_exponent,
            water_visc_exponent: *water_visc_exponent,
            gas_visc_exponent: *gas_visc_exponent,
        }),
        DeviceDef::Valve {
            flow_coefficient,
            cross_area_m2,
            max_cross_area_m2,
            additional_length_m,
            status,
        } => Device::Valve(Valve {
            flow_coefficient: *flow_coefficient,
            cross_area: m2(*cross_area_m2),
            max_cross_area: m2(*max_cross_area_m2),
            additional_length: m(*additional_length_m),
            status: device_status(*status),
        }),
    }
}

fn build_summary(step: &StepDef) -> ProjectResult<SummarySnapshot> {
    let mut summary = SummarySnapshot::new();
    for v in &step.summary.segments {
        let segment = segment_number(v.segment, &v.well)?;
        summary.set_segment_var(&v.vector, &v.well, segment, v.value);
    }
    for v in &step.summary.wells {
        summary.set_well_var(&v.well, &v.vector, v.value);
    }
    Ok(summary)
}

fn build_results(step: &StepDef) -> WellResultSet {
    let mut results = WellResultSet::new();
    for def in &step.results {
        let connections = def
            .connections
            .iter()
            .map(|c| ConnectionRates {
                global_index: c.cell,
                oil: c.oil_m3_per_s,
                water: c.water_m3_per_s,
                gas: c.gas_m3_per_s,
            })
            .collect();
        results.insert(
            def.well.clone(),
            WellResults {
                connections,
                segment_count: def.segment_count,
            },
        );
    }
    results
}
