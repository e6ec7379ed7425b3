//! Inflow-control devices attached to segments.
//!
//! Every segment carries exactly one [`Device`]. Plain pipe is
//! [`Device::Regular`]; the other variants carry the physical parameters that
//! restart encoding writes out. Values are SI unless noted.

use msw_core::units::{Area, Density, DynVisc, Length};

/// Open/shut state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceStatus {
    #[default]
    Open,
    Shut,
}

impl DeviceStatus {
    /// Restart flag: open 1, shut 0.
    pub fn flag(self) -> i32 {
        match self {
            DeviceStatus::Open => 1,
            DeviceStatus::Shut => 0,
        }
    }
}

/// Parameters shared by spiral and autonomous ICDs.
#[derive(Debug, Clone, PartialEq)]
pub struct IcdParams {
    /// Device strength, Pa / (m^3/s)^2.
    pub strength: f64,
    /// Device length. Negative values are relative lengths for some
    /// flow-scaling methods, so this is a bare metre count rather than `Length`.
    pub length: f64,
    pub density_calibration: Density,
    pub viscosity_calibration: DynVisc,
    pub critical_water_fraction: f64,
    pub transition_width: f64,
    pub max_viscosity_ratio: f64,
    /// Flow-scaling method selector (restart integer code).
    pub method_flow_scaling: i32,
    /// Maximum absolute rate, m^3/s. `None` means unbounded.
    pub max_absolute_rate: Option<f64>,
    pub status: DeviceStatus,
}

/// Autonomous ICD: spiral-ICD parameters plus rate/fluid exponents.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoIcd {
    pub icd: IcdParams,
    /// Absolute length (m) or relative factor, depending on
    /// `icd.method_flow_scaling` and the sign of `icd.length`.
    pub scaling_factor: f64,
    pub flow_rate_exponent: f64,
    pub visc_exponent: f64,
    pub oil_density_exponent: f64,
    pub water_density_exponent: f64,
    pub gas_density_exponent: f64,
    pub oil_visc_exponent: f64,
    pub water_visc_exponent: f64,
    pub gas_visc_exponent: f64,
}

impl AutoIcd {
    /// Whether `scaling_factor` is an absolute length (and so needs unit
    /// conversion) rather than a relative, unitless factor.
    pub fn scaling_factor_is_length(&self) -> bool {
        self.icd.method_flow_scaling == 1
            || (self.icd.method_flow_scaling < 0 && self.icd.length < 0.0)
    }
}

/// Sub-critical valve.
#[derive(Debug, Clone, PartialEq)]
pub struct Valve {
    /// Dimensionless flow coefficient.
    pub flow_coefficient: f64,
    pub cross_area: Area,
    pub max_cross_area: Area,
    pub additional_length: Length,
    pub status: DeviceStatus,
}

/// Device kind attached to a segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Device {
    #[default]
    Regular,
    SpiralIcd(IcdParams),
    AutoIcd(AutoIcd),
    Valve(Valve),
}

impl Device {
    /// Restart segment type code.
    pub fn type_code(&self) -> i32 {
        match self {
            Device::Regular => -1,
            Device::Valve(_) => -5,
            Device::SpiralIcd(_) => -7,
            Device::AutoIcd(_) => -8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msw_core::units::{kg_per_m3, pa_s};

    fn icd(method: i32, length: f64) -> IcdParams {
        IcdParams {
            strength: 1.0,
            length,
            density_calibration: kg_per_m3(1000.0),
            viscosity_calibration: pa_s(1.0e-3),
            critical_water_fraction: 0.5,
            transition_width: 0.05,
            max_viscosity_ratio: 5.0,
            method_flow_scaling: method,
            max_absolute_rate: None,
            status: DeviceStatus::Open,
        }
    }

    fn aicd(method: i32, length: f64) -> AutoIcd {
        AutoIcd {
            icd: icd(method, length),
            scaling_factor: 2.0,
            flow_rate_exponent: 3.0,
            visc_exponent: 0.5,
            oil_density_exponent: 1.0,
            water_density_exponent: 1.0,
            gas_density_exponent: 1.0,
            oil_visc_exponent: 1.0,
            water_visc_exponent: 1.0,
            gas_visc_exponent: 1.0,
        }
    }

    #[test]
    fn type_codes() {
        assert_eq!(Device::Regular.type_code(), -1);
        assert_eq!(Device::SpiralIcd(icd(0, 1.0)).type_code(), -7);
        assert_eq!(Device::AutoIcd(aicd(0, 1.0)).type_code(), -8);
        assert_eq!(Device::default(), Device::Regular);
    }

    #[test]
    fn status_flags() {
        assert_eq!(DeviceStatus::Open.flag(), 1);
        assert_eq!(DeviceStatus::Shut.flag(), 0);
    }

    #[test]
    fn scaling_factor_length_rules() {
        assert!(aicd(1, 12.0).scaling_factor_is_length());
        assert!(aicd(-1, -12.0).scaling_factor_is_length());
        assert!(!aicd(-1, 12.0).scaling_factor_is_length());
        assert!(!aicd(0, -12.0).scaling_factor_is_length());
        assert!(!aicd(2, 12.0).scaling_factor_is_length());
    }
}
