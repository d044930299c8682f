use std::collections::HashMap;

use crate::metrics::{FamilyKeyed, FamilyStructuralAggregate, FamilySuccessRate, FinalRecord};

#[derive(Debug, Clone)]
pub struct MergeOutcome<L = FamilyStructuralAggregate> {
    pub rows: Vec<FinalRecord<L>>,
    pub join_misses: Vec<String>,
    pub duplicate_keys: Vec<String>,
}

/// Left outer join on exact family match. Every left row appears once, in
/// input order. Duplicate right keys are first-win.
pub fn left_join<L: FamilyKeyed + Clone>(
    left: &[L],
    right: &[FamilySuccessRate],
) -> MergeOutcome<L> {
    let (index, duplicate_keys) = build_rate_index(right);

    let mut rows = Vec::with_capacity(left.len());
    let mut join_misses = Vec::new();
    for row in left {
        let rate = index.get(row.family()).copied();
        if rate.is_none() {
            join_misses.push(row.family().to_string());
        }
        rows.push(FinalRecord {
            structural: row.clone(),
            clinical_success_rate: rate,
        });
    }

    MergeOutcome {
        rows,
        join_misses,
        duplicate_keys,
    }
}

fn build_rate_index(right: &[FamilySuccessRate]) -> (HashMap<&str, f64>, Vec<String>) {
    let mut index = HashMap::with_capacity(right.len());
    let mut duplicates: Vec<String> = Vec::new();

    for rate in right {
        if index.contains_key(rate.family.as_str()) {
            if !duplicates.contains(&rate.family) {
                duplicates.push(rate.family.clone());
            }
        } else {
            index.insert(rate.family.as_str(), rate.clinical_success_rate);
        }
    }

    (index, duplicates)
}
