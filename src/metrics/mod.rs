pub mod merge;
pub mod structural;
pub mod success;

use std::collections::BTreeSet;

use crate::math::stats::round_dp;
use crate::phase::{self, Phase};

pub const UNKNOWN_FAMILY: &str = "Unknown";

/// A row that can be joined on its family key.
pub trait FamilyKeyed {
    fn family(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureMeasurement {
    pub pdb_id: String,
    pub family: String,
    pub sasa: Option<f64>,
    pub resolution: Option<f64>,
}

impl StructureMeasurement {
    pub fn new(pdb_id: &str, family: &str, sasa: Option<f64>, resolution: Option<f64>) -> Self {
        Self {
            pdb_id: pdb_id.to_lowercase(),
            family: family.to_string(),
            sasa,
            resolution,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FamilyStructuralAggregate {
    pub family: String,
    pub entry_count: usize,
    pub mean_sasa: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub geometric_cv: Option<f64>,
    pub mean_resolution: Option<f64>,
}

impl FamilyKeyed for FamilyStructuralAggregate {
    fn family(&self) -> &str {
        &self.family
    }
}

impl FamilyStructuralAggregate {
    pub fn size_range(&self) -> String {
        format!(
            "{}-{}",
            round_dp(self.size_min, 0) as i64,
            round_dp(self.size_max, 0) as i64
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterventionTrialRecord {
    pub intervention: String,
    pub family: String,
    pub phases: BTreeSet<Phase>,
}

impl InterventionTrialRecord {
    pub fn from_labels(intervention: &str, family: &str, phases: &str) -> Self {
        Self {
            intervention: intervention.to_string(),
            family: family.to_string(),
            phases: phase::parse_phase_list(phases),
        }
    }

    pub fn highest_phase(&self) -> Phase {
        phase::highest_phase(&self.phases)
    }

    pub fn is_success(&self) -> bool {
        self.highest_phase() >= success::SUCCESS_PHASE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FamilySuccessRate {
    pub family: String,
    pub clinical_success_rate: f64,
}

/// One left-side row of the merge with the success rate found for its family.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalRecord<L = FamilyStructuralAggregate> {
    pub structural: L,
    pub clinical_success_rate: Option<f64>,
}
