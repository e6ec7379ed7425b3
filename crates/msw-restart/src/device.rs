//! Device characteristics for valve and inflow-control segments.

use msw_core::{Measure, MswError, MswResult, UnitConvention, UnitConversion};
use msw_topology::{AutoIcd, Device, IcdParams, Valve};

use crate::items::{iseg, rseg};

/// Maximum valid AICD flow rate written when none is configured.
const AICD_UNLIMITED_RATE: f64 = -2.0e20;

/// Maximum valid SICD flow rate written when none is configured.
const SICD_UNLIMITED_RATE: f64 = -1.0;

/// Unit coefficient of the valve pressure-drop relation.
pub fn valve_flow_unit_coefficient(convention: UnitConvention) -> MswResult<f64> {
    match convention {
        UnitConvention::Metric => Ok(1.340e-15),
        UnitConvention::Field => Ok(2.892e-14),
        UnitConvention::Lab => Ok(7.615e-14),
        UnitConvention::PvtM => Ok(1.322e-15),
        UnitConvention::Input => Err(MswError::UnsupportedUnitConvention { convention }),
    }
}

/// Scaling mode and open/shut flag. `window` is the segment's ISEG window.
pub fn write_iseg(device: &Device, window: &mut [i32]) {
    match device {
        Device::Regular => {}
        Device::SpiralIcd(icd) => {
            window[iseg::ICD_SCALING_MODE] = icd.method_flow_scaling;
            window[iseg::ICD_OPEN_SHUT_FLAG] = icd.status.flag();
        }
        Device::AutoIcd(aicd) => {
            window[iseg::ICD_SCALING_MODE] = aicd.icd.method_flow_scaling;
            window[iseg::ICD_OPEN_SHUT_FLAG] = aicd.icd.status.flag();
        }
        Device::Valve(valve) => {
            window[iseg::ICD_OPEN_SHUT_FLAG] = valve.status.flag();
        }
    }
}

/// Physical device constants. `window` is the segment's RSEG window.
pub fn write_rseg(device: &Device, units: &dyn UnitConversion, window: &mut [f64]) -> MswResult<()> {
    match device {
        Device::Regular => Ok(()),
        Device::SpiralIcd(icd) => {
            write_spiral_icd(icd, units, window);
            Ok(())
        }
        Device::AutoIcd(aicd) => {
            write_auto_icd(aicd, units, window);
            Ok(())
        }
        Device::Valve(valve) => write_valve(valve, units, window),
    }
}

fn write_valve(valve: &Valve, units: &dyn UnitConversion, window: &mut [f64]) -> MswResult<()> {
    let cu = valve_flow_unit_coefficient(units.convention())?;
    let area = |a: f64| units.to_output(Measure::Length, units.to_output(Measure::Length, a));

    let cross_area = area(valve.cross_area.value);
    let max_area = area(valve.max_cross_area.value);
    let cv_ac = valve.flow_coefficient * cross_area;

    window[rseg::VALVE_LENGTH] = units.to_output(Measure::Length, valve.additional_length.value);
    window[rseg::VALVE_AREA] = cross_area;
    window[rseg::VALVE_FLOW_COEFF] = valve.flow_coefficient;
    window[rseg::VALVE_MAX_AREA] = max_area;
    window[rseg::DEVICE_BASE_STRENGTH] = cu / (2.0 * cv_ac * cv_ac);
    window[rseg::VALVE_AREA_FRACTION] = cross_area / max_area;
    Ok(())
}

/// Items shared by spiral and autonomous ICDs.
fn write_icd_common(icd: &IcdParams, units: &dyn UnitConversion, window: &mut [f64]) {
    window[rseg::CALIBR_FLUID_DENSITY] =
        units.to_output(Measure::Density, icd.density_calibration.value);
    window[rseg::CALIBR_FLUID_VISCOSITY] =
        units.to_output(Measure::Viscosity, icd.viscosity_calibration.value);
    window[rseg::CRITICAL_WATER_FRACTION] = icd.critical_water_fraction;
    window[rseg::TRANSITION_REG_WIDTH] = icd.transition_width;
    window[rseg::MAX_EMULSION_RATIO] = icd.max_viscosity_ratio;
    window[rseg::ICD_LENGTH] = units.to_output(Measure::Length, icd.length);
}

fn max_rate(icd: &IcdParams, units: &dyn UnitConversion, unlimited: f64) -> f64 {
    icd.max_absolute_rate
        .map(|rate| units.to_output(Measure::GeometricVolumeRate, rate))
        .unwrap_or(unlimited)
}

fn write_spiral_icd(icd: &IcdParams, units: &dyn UnitConversion, window: &mut [f64]) {
    window[rseg::DEVICE_BASE_STRENGTH] = units.to_output(Measure::IcdStrength, icd.strength);
    write_icd_common(icd, units, window);
    window[rseg::MAX_VALID_FLOW_RATE] = max_rate(icd, units, SICD_UNLIMITED_RATE);
}

fn write_auto_icd(aicd: &AutoIcd, units: &dyn UnitConversion, window: &mut [f64]) {
    let icd = &aicd.icd;

    window[rseg::DEVICE_BASE_STRENGTH] = units.to_output(Measure::AicdStrength, icd.strength);
    // Absolute lengths are converted; relative scaling factors are unitless.
    window[rseg::SCALING_FACTOR] = if aicd.scaling_factor_is_length() {
        units.to_output(Measure::Length, aicd.scaling_factor)
    } else {
        aicd.scaling_factor
    };
    write_icd_common(icd, units, window);
    window[rseg::FLOW_RATE_EXPONENT] = aicd.flow_rate_exponent;
    window[rseg::VISC_FUNC_EXPONENT] = aicd.visc_exponent;
    window[rseg::MAX_VALID_FLOW_RATE] = max_rate(icd, units, AICD_UNLIMITED_RATE);

    let exponents = [
        aicd.oil_density_exponent,
        aicd.water_density_exponent,
        aicd.gas_density_exponent,
        aicd.oil_visc_exponent,
        aicd.water_visc_exponent,
        aicd.gas_visc_exponent,
    ];
    for (item, value) in rseg::FLOW_FRACTION_EXPONENTS.into_iter().zip(exponents) {
        window[item] = value;
    }
}
