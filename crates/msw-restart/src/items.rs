//! Fixed item offsets within a segment or branch window.
//!
//! These positions are part of the restart file format and must not move.

/// Integer segment items.
pub mod iseg {
    pub const SEG_NO: usize = 0;
    pub const OUT_SEG: usize = 1;
    pub const IN_SEG_CUR_BRANCH: usize = 2;
    pub const BRANCH_NO: usize = 3;
    pub const NUM_INFLOW_BRANCHES: usize = 4;
    pub const SUM_INFLOW_BRANCHES: usize = 5;
    pub const NUM_CONNECTIONS: usize = 6;
    pub const SUM_CONNECTIONS: usize = 7;
    pub const SEG_REORDER: usize = 8;
    pub const SEGMENT_TYPE: usize = 11;
    pub const ICD_SCALING_MODE: usize = 18;
    pub const ICD_OPEN_SHUT_FLAG: usize = 19;
}

/// Real segment items.
pub mod rseg {
    pub const DIST_OUTLET: usize = 0;
    pub const OUTLET_DEPTH_DIFF: usize = 1;
    pub const SEG_DIAM: usize = 2;
    pub const SEG_ROUGH: usize = 3;
    pub const SEG_AREA: usize = 4;
    pub const SEG_VOLUME: usize = 5;
    pub const DIST_BHP_REF: usize = 6;
    pub const SEG_NODE_DEPTH: usize = 7;
    pub const TOT_FLOW_RATE: usize = 8;
    pub const WAT_FLOW_FRACT: usize = 9;
    pub const GAS_FLOW_FRACT: usize = 10;
    pub const PRESSURE: usize = 11;

    /// Repeats the water fraction.
    pub const ITEM31: usize = 30;
    /// Always 1.0.
    pub const ITEM40: usize = 39;

    pub const VALVE_LENGTH: usize = 80;
    pub const VALVE_AREA: usize = 81;
    pub const VALVE_FLOW_COEFF: usize = 82;
    pub const VALVE_MAX_AREA: usize = 83;

    pub const DEVICE_BASE_STRENGTH: usize = 85;
    pub const CALIBR_FLUID_DENSITY: usize = 86;
    pub const CALIBR_FLUID_VISCOSITY: usize = 87;
    pub const CRITICAL_WATER_FRACTION: usize = 88;
    pub const TRANSITION_REG_WIDTH: usize = 89;
    pub const MAX_EMULSION_RATIO: usize = 90;
    pub const FLOW_RATE_EXPONENT: usize = 91;
    pub const VISC_FUNC_EXPONENT: usize = 92;
    pub const SCALING_FACTOR: usize = 93;
    pub const MAX_VALID_FLOW_RATE: usize = 94;
    pub const ICD_LENGTH: usize = 95;

    pub const OIL_DENSITY_EXPONENT: usize = 96;
    pub const WATER_DENSITY_EXPONENT: usize = 97;
    pub const GAS_DENSITY_EXPONENT: usize = 98;
    pub const OIL_VISCOSITY_EXPONENT: usize = 99;
    pub const WATER_VISCOSITY_EXPONENT: usize = 100;
    pub const GAS_VISCOSITY_EXPONENT: usize = 101;

    pub const VALVE_AREA_FRACTION: usize = 110;

    /// Flow fraction exponents, in item order.
    pub const FLOW_FRACTION_EXPONENTS: [usize; 6] = [
        OIL_DENSITY_EXPONENT,
        WATER_DENSITY_EXPONENT,
        GAS_DENSITY_EXPONENT,
        OIL_VISCOSITY_EXPONENT,
        WATER_VISCOSITY_EXPONENT,
        GAS_VISCOSITY_EXPONENT,
    ];
}

/// Integer lateral branch items.
pub mod ilbr {
    pub const OUTLET_SEGMENT: usize = 0;
    pub const NUM_BRANCH_SEGMENTS: usize = 1;
    pub const FIRST_SEGMENT: usize = 2;
    pub const LAST_SEGMENT: usize = 3;
    pub const KICK_OFF_DISCOVERY_OFFSET: usize = 4;
}
