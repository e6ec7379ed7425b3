//! Output unit conventions.
//!
//! Segment data is stored in SI internally and written to restart arrays in
//! the units of the active convention. Conversion factors are derived from
//! `uom` unit definitions wherever `uom` has the unit; the oilfield volume
//! units (stock-tank barrel, thousand standard cubic feet) are spelled out.

use std::fmt;

use uom::si::dynamic_viscosity::{centipoise, pascal_second};
use uom::si::length::{centimeter, foot, meter};
use uom::si::mass_density::{gram_per_cubic_centimeter, kilogram_per_cubic_meter, pound_per_cubic_foot};
use uom::si::pressure::{atmosphere, bar, pascal, pound_force_per_square_inch};
use uom::si::time::{day, hour, second};
use uom::si::volume::{cubic_centimeter, cubic_foot, cubic_meter};

use crate::units::{Density, DynVisc, Length, Pressure, Time, Volume};

/// One oilfield barrel in cubic metres.
const BARREL_M3: f64 = 0.158_987_294_928;

/// Physical quantity being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Length,
    Density,
    Viscosity,
    Pressure,
    /// Oil and water rates at surface conditions.
    LiquidSurfaceRate,
    /// Gas rate at surface conditions.
    GasSurfaceRate,
    /// In-situ volumetric rate.
    GeometricVolumeRate,
    /// Spiral ICD strength: pressure / (reservoir rate)^2.
    IcdStrength,
    /// Autonomous ICD strength, same dimension as `IcdStrength`.
    AicdStrength,
}

/// Active unit convention of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitConvention {
    Metric,
    Field,
    Lab,
    PvtM,
    /// Values are written exactly as stored.
    Input,
}

impl fmt::Display for UnitConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "METRIC"),
            Self::Field => write!(f, "FIELD"),
            Self::Lab => write!(f, "LAB"),
            Self::PvtM => write!(f, "PVT-M"),
            Self::Input => write!(f, "INPUT"),
        }
    }
}

/// Conversion from SI to the output units of a run.
///
/// Implemented by [`UnitSystem`]; encoders only depend on this trait so that
/// a host simulator can hand in its own unit tables.
pub trait UnitConversion: Sync {
    fn convention(&self) -> UnitConvention;

    fn to_output(&self, measure: Measure, value: f64) -> f64;
}

/// Table-driven unit system for the built-in conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSystem {
    convention: UnitConvention,
}

impl UnitSystem {
    pub fn new(convention: UnitConvention) -> Self {
        Self { convention }
    }

    pub fn metric() -> Self {
        Self::new(UnitConvention::Metric)
    }

    pub fn field() -> Self {
        Self::new(UnitConvention::Field)
    }

    /// Output value of one SI unit of `measure`.
    pub fn factor(&self, measure: Measure) -> f64 {
        use UnitConvention as U;

        let conv = self.convention;
        if conv == U::Input {
            return 1.0;
        }

        match measure {
            Measure::Length => length_factor(conv),
            Measure::Density => density_factor(conv),
            Measure::Viscosity => DynVisc::new::<pascal_second>(1.0).get::<centipoise>(),
            Measure::Pressure => pressure_factor(conv),
            Measure::LiquidSurfaceRate => match conv {
                U::Field => per_time(conv) / BARREL_M3,
                _ => volume_factor(conv) * per_time(conv),
            },
            Measure::GasSurfaceRate => match conv {
                U::Field => per_time(conv) / (1000.0 * Volume::new::<cubic_foot>(1.0).value),
                _ => volume_factor(conv) * per_time(conv),
            },
            Measure::GeometricVolumeRate => volume_factor(conv) * per_time(conv),
            Measure::IcdStrength | Measure::AicdStrength => {
                let rate = reservoir_rate_factor(conv);
                pressure_factor(conv) / (rate * rate)
            }
        }
    }
}

impl UnitConversion for UnitSystem {
    fn convention(&self) -> UnitConvention {
        self.convention
    }

    fn to_output(&self, measure: Measure, value: f64) -> f64 {
        value * self.factor(measure)
    }
}

fn length_factor(conv: UnitConvention) -> f64 {
    let one = Length::new::<meter>(1.0);
    match conv {
        UnitConvention::Field => one.get::<foot>(),
        UnitConvention::Lab => one.get::<centimeter>(),
        _ => one.get::<meter>(),
    }
}

fn volume_factor(conv: UnitConvention) -> f64 {
    let one = Volume::new::<cubic_meter>(1.0);
    match conv {
        UnitConvention::Field => one.get::<cubic_foot>(),
        UnitConvention::Lab => one.get::<cubic_centimeter>(),
        _ => one.get::<cubic_meter>(),
    }
}

fn density_factor(conv: UnitConvention) -> f64 {
    let one = Density::new::<kilogram_per_cubic_meter>(1.0);
    match conv {
        UnitConvention::Field => one.get::<pound_per_cubic_foot>(),
        UnitConvention::Lab => one.get::<gram_per_cubic_centimeter>(),
        _ => one.get::<kilogram_per_cubic_meter>(),
    }
}

fn pressure_factor(conv: UnitConvention) -> f64 {
    let one = Pressure::new::<pascal>(1.0);
    match conv {
        UnitConvention::Metric => one.get::<bar>(),
        UnitConvention::Field => one.get::<pound_force_per_square_inch>(),
        UnitConvention::Lab | UnitConvention::PvtM => one.get::<atmosphere>(),
        UnitConvention::Input => one.get::<pascal>(),
    }
}

/// Seconds per output time unit: rates are per day, except per hour in LAB.
fn per_time(conv: UnitConvention) -> f64 {
    match conv {
        UnitConvention::Lab => Time::new::<hour>(1.0).get::<second>(),
        _ => Time::new::<day>(1.0).get::<second>(),
    }
}

fn reservoir_rate_factor(conv: UnitConvention) -> f64 {
    match conv {
        UnitConvention::Field => per_time(conv) / BARREL_M3,
        _ => volume_factor(conv) * per_time(conv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances { abs: 1e-12, rel: 1e-6 })
    }

    #[test]
    fn metric_lengths_are_identity() {
        let us = UnitSystem::metric();
        assert_eq!(us.to_output(Measure::Length, 12.5), 12.5);
        assert!(close(us.to_output(Measure::Pressure, 1.0e5), 1.0));
        assert!(close(us.to_output(Measure::LiquidSurfaceRate, 1.0), 86_400.0));
        assert!(close(us.to_output(Measure::Viscosity, 1.0e-3), 1.0));
    }

    #[test]
    fn field_conversions() {
        let us = UnitSystem::field();
        assert!(close(us.to_output(Measure::Length, 0.3048), 1.0));
        assert!(close(us.to_output(Measure::LiquidSurfaceRate, BARREL_M3 / 86_400.0), 1.0));
        assert!(close(us.to_output(Measure::Pressure, 6_894.757), 1.0));
    }

    #[test]
    fn lab_rates_are_hourly() {
        let us = UnitSystem::new(UnitConvention::Lab);
        assert!(close(us.to_output(Measure::GeometricVolumeRate, 1.0e-6 / 3600.0), 1.0));
        assert!(close(us.to_output(Measure::Length, 1.0), 100.0));
    }

    #[test]
    fn input_is_identity() {
        let us = UnitSystem::new(UnitConvention::Input);
        for measure in [Measure::Length, Measure::Pressure, Measure::IcdStrength] {
            assert_eq!(us.to_output(measure, 3.25), 3.25);
        }
    }

    #[test]
    fn convention_names() {
        assert_eq!(UnitConvention::PvtM.to_string(), "PVT-M");
        assert_eq!(UnitSystem::metric().convention(), UnitConvention::Metric);
    }
}
