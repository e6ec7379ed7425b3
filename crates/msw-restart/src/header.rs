//! Simulation-wide capacity constants for the segment arrays.

use msw_core::{MswError, MswResult};

use crate::items::{ilbr, iseg, rseg};

/// Zero-based positions of the segment dimensions in the integer header.
pub mod intehead {
    /// Maximum number of multi-segment wells.
    pub const NSWLMX: usize = 175;
    /// Maximum number of segments per well.
    pub const NSEGMX: usize = 176;
    /// Maximum number of lateral branches per well.
    pub const NLBRMX: usize = 177;
    /// Integer items per segment.
    pub const NISEGZ: usize = 178;
    /// Real items per segment.
    pub const NRSEGZ: usize = 179;
    /// Integer items per lateral branch.
    pub const NILBRZ: usize = 180;
}

/// Dimensions of the ISEG, RSEG, ILBS and ILBR arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartDims {
    pub max_msw_wells: usize,
    pub max_segments: usize,
    pub max_branches: usize,
    pub iseg_fields: usize,
    pub rseg_fields: usize,
    pub ilbr_fields: usize,
    /// RSEG items preceding the tracer tail of each segment.
    pub rseg_fixed_fields: usize,
    pub water_tracers: usize,
}

impl RestartDims {
    /// Fixed RSEG element count for the number of active phases.
    pub fn rseg_fixed_fields_for(active_phases: usize) -> usize {
        match active_phases {
            0 | 1 => 126,
            2 => 134,
            _ => 146,
        }
    }

    /// Read dimensions from an integer header array.
    pub fn from_intehead(
        intehead: &[i32],
        active_phases: usize,
        water_tracers: usize,
    ) -> MswResult<Self> {
        let item = |pos: usize, what: &'static str| -> MswResult<usize> {
            let value = intehead
                .get(pos)
                .copied()
                .ok_or(MswError::InvalidArg { what })?;
            usize::try_from(value).map_err(|_| MswError::InvalidArg { what })
        };

        let dims = Self {
            max_msw_wells: item(intehead::NSWLMX, "NSWLMX")?,
            max_segments: item(intehead::NSEGMX, "NSEGMX")?,
            max_branches: item(intehead::NLBRMX, "NLBRMX")?,
            iseg_fields: item(intehead::NISEGZ, "NISEGZ")?,
            rseg_fields: item(intehead::NRSEGZ, "NRSEGZ")?,
            ilbr_fields: item(intehead::NILBRZ, "NILBRZ")?,
            rseg_fixed_fields: Self::rseg_fixed_fields_for(active_phases),
            water_tracers,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Check that every field offset written by the encoders fits its window.
    pub fn validate(&self) -> MswResult<()> {
        if self.max_msw_wells == 0 {
            return Err(MswError::InvalidArg { what: "NSWLMX must be positive" });
        }
        if self.max_segments == 0 {
            return Err(MswError::InvalidArg { what: "NSEGMX must be positive" });
        }
        if self.max_branches == 0 {
            return Err(MswError::InvalidArg { what: "NLBRMX must be positive" });
        }
        if self.iseg_fields <= iseg::ICD_OPEN_SHUT_FLAG {
            return Err(MswError::InvalidArg { what: "NISEGZ too small" });
        }
        if self.ilbr_fields <= ilbr::KICK_OFF_DISCOVERY_OFFSET {
            return Err(MswError::InvalidArg { what: "NILBRZ too small" });
        }
        if self.rseg_fixed_fields <= rseg::VALVE_AREA_FRACTION {
            return Err(MswError::InvalidArg { what: "fixed RSEG element count too small" });
        }
        if self.rseg_fields < self.rseg_fixed_fields + self.tracer_tail() {
            return Err(MswError::InvalidArg { what: "NRSEGZ too small for tracer data" });
        }
        Ok(())
    }

    pub fn tracer_tail(&self) -> usize {
        8 * self.water_tracers
    }

    pub fn iseg_window(&self) -> usize {
        self.max_segments * self.iseg_fields
    }

    pub fn rseg_window(&self) -> usize {
        self.max_segments * self.rseg_fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(nswlmx: i32, nsegmx: i32, nlbrmx: i32, nisegz: i32, nrsegz: i32, nilbrz: i32) -> Vec<i32> {
        let mut ih = vec![0; 200];
        ih[intehead::NSWLMX] = nswlmx;
        ih[intehead::NSEGMX] = nsegmx;
        ih[intehead::NLBRMX] = nlbrmx;
        ih[intehead::NISEGZ] = nisegz;
        ih[intehead::NRSEGZ] = nrsegz;
        ih[intehead::NILBRZ] = nilbrz;
        ih
    }

    #[test]
    fn reads_header_items() {
        let dims = RestartDims::from_intehead(&header(2, 30, 6, 22, 146, 5), 3, 0).unwrap();
        assert_eq!(dims.max_msw_wells, 2);
        assert_eq!(dims.max_segments, 30);
        assert_eq!(dims.max_branches, 6);
        assert_eq!(dims.rseg_fixed_fields, 146);
        assert_eq!(dims.iseg_window(), 30 * 22);
        assert_eq!(dims.rseg_window(), 30 * 146);
    }

    #[test]
    fn tracer_tail_needs_room() {
        let err = RestartDims::from_intehead(&header(1, 10, 2, 22, 146, 5), 3, 1).unwrap_err();
        assert!(matches!(err, MswError::InvalidArg { .. }));

        let dims = RestartDims::from_intehead(&header(1, 10, 2, 22, 154, 5), 3, 1).unwrap();
        assert_eq!(dims.tracer_tail(), 8);
    }

    #[test]
    fn rejects_short_or_negative_headers() {
        assert!(RestartDims::from_intehead(&[0; 10], 3, 0).is_err());
        assert!(RestartDims::from_intehead(&header(-1, 10, 2, 22, 146, 5), 3, 0).is_err());
        assert!(RestartDims::from_intehead(&header(1, 10, 2, 10, 146, 5), 3, 0).is_err());
    }

    #[test]
    fn fixed_element_count_by_phase() {
        assert_eq!(RestartDims::rseg_fixed_fields_for(1), 126);
        assert_eq!(RestartDims::rseg_fixed_fields_for(2), 134);
        assert_eq!(RestartDims::rseg_fixed_fields_for(3), 146);
    }
}
