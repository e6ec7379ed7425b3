//! Case validation logic.

use std::collections::HashSet;

use crate::schema::{Case, DeviceDef, StepDef, WellDef};

/// Supported case file version.
pub const CASE_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.version != CASE_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    for (index, step) in case.steps.iter().enumerate() {
        validate_step(index, step)?;
    }
    Ok(())
}

fn validate_step(index: usize, step: &StepDef) -> Result<(), ValidationError> {
    let mut names = HashSet::new();
    for well in &step.wells {
        if !names.insert(well.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: well.name.clone(),
                context: format!("wells of step {index}"),
            });
        }
        validate_well(well)?;
    }

    let mut result_wells = HashSet::new();
    for results in &step.results {
        if !result_wells.insert(results.well.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: results.well.clone(),
                context: format!("results of step {index}"),
            });
        }
    }
    Ok(())
}

fn validate_well(well: &WellDef) -> Result<(), ValidationError> {
    if well.top.is_none() {
        if let Some(segment) = well.segments.first() {
            return Err(invalid(
                format!("{}.segments", well.name),
                segment.number,
                "segments require a top segment reference",
            ));
        }
        if let Some(conn) = well.connections.iter().find(|c| c.segment.is_some()) {
            return Err(invalid(
                format!("{}.connections", well.name),
                conn.cell,
                "segment given for a standard well",
            ));
        }
        return Ok(());
    }

    let mut numbers = HashSet::new();
    for segment in &well.segments {
        if segment.number == 0 {
            return Err(invalid(format!("{}.segments.number", well.name), 0, "must be positive"));
        }
        if segment.branch == 0 {
            return Err(invalid(
                format!("{}.segment {}.branch", well.name, segment.number),
                0,
                "must be positive",
            ));
        }
        if !numbers.insert(segment.number) {
            return Err(ValidationError::DuplicateId {
                id: segment.number.to_string(),
                context: format!("segments of well {}", well.name),
            });
        }
        validate_device(&well.name, segment.number, &segment.device)?;
    }

    for conn in &well.connections {
        match conn.segment {
            Some(number) if numbers.contains(&number) => {}
            Some(number) => {
                return Err(ValidationError::MissingReference {
                    id: number.to_string(),
                    context: format!("connection {} of well {}", conn.cell, well.name),
                });
            }
            None => {
                return Err(invalid(
                    format!("{}.connections", well.name),
                    conn.cell,
                    "multi-segment connections need a segment",
                ));
            }
        }
    }
    Ok(())
}

fn validate_device(well: &str, number: u32, device: &DeviceDef) -> Result<(), ValidationError> {
    if let DeviceDef::Valve {
        cross_area_m2,
        max_cross_area_m2,
        ..
    } = device
    {
        if *max_cross_area_m2 <= 0.0 {
            return Err(invalid(
                format!("{well}.segment {number}.max_cross_area_m2"),
                max_cross_area_m2,
                "must be positive",
            ));
        }
        if *cross_area_m2 <= 0.0 {
            return Err(invalid(
                format!("{well}.segment {number}.cross_area_m2"),
                cross_area_m2,
                "must be positive",
            ));
        }
    }
    Ok(())
}
