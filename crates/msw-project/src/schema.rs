//! Case file schema definitions.
//!
//! Quantities are stored in SI units; the suffix of each field name states
//! the unit. Summary values are stored as they appear in the restart file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub version: u32,
    pub name: String,
    pub units: UnitConventionDef,
    pub header: HeaderDef,
    #[serde(default)]
    pub steps: Vec<StepDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnitConventionDef {
    #[serde(rename = "METRIC")]
    Metric,
    #[serde(rename = "FIELD")]
    Field,
    #[serde(rename = "LAB")]
    Lab,
    #[serde(rename = "PVT-M")]
    PvtM,
    #[serde(rename = "INPUT")]
    Input,
}

/// Segment array dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderDef {
    pub max_msw_wells: usize,
    pub max_segments: usize,
    pub max_branches: usize,
    pub iseg_fields: usize,
    pub rseg_fields: usize,
    pub ilbr_fields: usize,
    #[serde(default = "default_active_phases")]
    pub active_phases: usize,
    #[serde(default)]
    pub water_tracers: usize,
}

fn default_active_phases() -> usize {
    3
}

/// One report step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StepDef {
    #[serde(default)]
    pub wells: Vec<WellDef>,
    #[serde(default)]
    pub summary: SummaryDef,
    #[serde(default)]
    pub results: Vec<WellResultsDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub name: String,
    #[serde(default)]
    pub status: WellStatusDef,
    /// Present for multi-segment wells only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<TopSegmentDef>,
    #[serde(default)]
    pub segments: Vec<SegmentDef>,
    #[serde(default)]
    pub connections: Vec<ConnectionDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WellStatusDef {
    #[default]
    Open,
    Stop,
    Shut,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopSegmentDef {
    pub length_m: f64,
    pub depth_m: f64,
    #[serde(default)]
    pub volume_m3: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentDef {
    pub number: u32,
    pub branch: u32,
    /// Zero for the top segment.
    pub outlet: u32,
    pub length_m: f64,
    pub depth_m: f64,
    #[serde(default)]
    pub diameter_m: f64,
    #[serde(default)]
    pub roughness_m: f64,
    #[serde(default)]
    pub area_m2: f64,
    #[serde(default)]
    pub volume_m3: f64,
    #[serde(default)]
    pub device: DeviceDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatusDef {
    #[default]
    Open,
    Shut,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type")]
pub enum DeviceDef {
    #[default]
    Regular,
    SpiralIcd {
        icd: IcdDef,
    },
    AutoIcd {
        icd: IcdDef,
        scaling_factor: f64,
        flow_rate_exponent: f64,
        visc_exponent: f64,
        #[serde(default = "default_exponent")]
        oil_density_exponent: f64,
        #[serde(default = "default_exponent")]
        water_density_exponent: f64,
        #[serde(default = "default_exponent")]
        gas_density_exponent: f64,
        #[serde(default = "default_exponent")]
        oil_visc_exponent: f64,
        #[serde(default = "default_exponent")]
        water_visc_exponent: f64,
        #[serde(default = "default_exponent")]
        gas_visc_exponent: f64,
    },
    Valve {
        flow_coefficient: f64,
        cross_area_m2: f64,
        max_cross_area_m2: f64,
        #[serde(default)]
        additional_length_m: f64,
        #[serde(default)]
        status: DeviceStatusDef,
    },
}

fn default_exponent() -> f64 {
    1.0
}

/// Parameters shared by spiral and autonomous ICDs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IcdDef {
    pub strength: f64,
    pub length_m: f64,
    pub density_calibration_kg_m3: f64,
    pub viscosity_calibration_pa_s: f64,
    pub critical_water_fraction: f64,
    pub transition_width: f64,
    pub max_viscosity_ratio: f64,
    #[serde(default = "default_flow_scaling")]
    pub method_flow_scaling: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_absolute_rate_m3_per_s: Option<f64>,
    #[serde(default)]
    pub status: DeviceStatusDef,
}

fn default_flow_scaling() -> i32 {
    -1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    /// Global cell index.
    pub cell: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<u32>,
    #[serde(default)]
    pub state: ConnectionStateDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStateDef {
    #[default]
    Open,
    Shut,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SummaryDef {
    #[serde(default)]
    pub segments: Vec<SegmentValueDef>,
    #[serde(default)]
    pub wells: Vec<WellValueDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentValueDef {
    pub vector: String,
    pub well: String,
    pub segment: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellValueDef {
    pub vector: String,
    pub well: String,
    pub value: f64,
}

/// Simulated rates of one well. Positive rates flow into the formation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellResultsDef {
    pub well: String,
    #[serde(default)]
    pub segment_count: usize,
    #[serde(default)]
    pub connections: Vec<ConnectionRatesDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionRatesDef {
    pub cell: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_m3_per_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_m3_per_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_m3_per_s: Option<f64>,
}
