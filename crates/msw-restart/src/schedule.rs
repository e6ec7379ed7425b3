//! Schedule collaborator: the wells declared at each report step.

use msw_topology::Well;

pub trait Schedule: Sync {
    /// Wells at `step`, in declaration order. Empty for unknown steps.
    fn wells_at_step(&self, step: usize) -> &[Well];
}

/// Fixed list of well snapshots per report step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSchedule {
    steps: Vec<Vec<Well>>,
}

impl StaticSchedule {
    pub fn new(steps: Vec<Vec<Well>>) -> Self {
        Self { steps }
    }

    /// Single report step (step 0).
    pub fn single(wells: Vec<Well>) -> Self {
        Self { steps: vec![wells] }
    }

    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }
}

impl Schedule for StaticSchedule {
    fn wells_at_step(&self, step: usize) -> &[Well] {
        self.steps.get(step).map(Vec::as_slice).unwrap_or(&[])
    }
}
