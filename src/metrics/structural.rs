use std::collections::BTreeMap;

use crate::math::stats::{self, round_dp};
use crate::metrics::{FamilyStructuralAggregate, StructureMeasurement};

/// Groups measurements by family (sorted) and summarizes each group. Rows
/// without a surface area are dropped before grouping.
pub fn aggregate_structures(rows: &[StructureMeasurement]) -> Vec<FamilyStructuralAggregate> {
    let mut groups: BTreeMap<&str, Vec<&StructureMeasurement>> = BTreeMap::new();
    for row in rows.iter().filter(|r| r.sasa.is_some()) {
        groups.entry(row.family.as_str()).or_default().push(row);
    }
    groups
        .into_iter()
        .map(|(family, members)| summarize_family(family, &members))
        .collect()
}

pub fn count_missing_sasa(rows: &[StructureMeasurement]) -> usize {
    rows.iter().filter(|r| r.sasa.is_none()).count()
}

fn summarize_family(family: &str, members: &[&StructureMeasurement]) -> FamilyStructuralAggregate {
    let sasa: Vec<f64> = members.iter().filter_map(|m| m.sasa).collect();
    let resolutions: Vec<f64> = members.iter().filter_map(|m| m.resolution).collect();

    let mut size_min = f64::INFINITY;
    let mut size_max = f64::NEG_INFINITY;
    let mut total = 0.0;
    for v in &sasa {
        size_min = size_min.min(*v);
        size_max = size_max.max(*v);
        total += *v;
    }

    FamilyStructuralAggregate {
        family: family.to_string(),
        entry_count: members.len(),
        mean_sasa: round_dp(total / sasa.len() as f64, 2),
        size_min,
        size_max,
        geometric_cv: stats::geometric_cv(&sasa),
        mean_resolution: stats::mean(&resolutions),
    }
}
