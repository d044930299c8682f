use std::collections::BTreeMap;

use crate::math::stats::round_dp;
use crate::metrics::{FamilySuccessRate, InterventionTrialRecord};
use crate::phase::Phase;

pub const SUCCESS_PHASE: Phase = Phase::II;

pub fn success_rates(records: &[InterventionTrialRecord]) -> Vec<FamilySuccessRate> {
    // family -> (successes, total)
    let mut tallies: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in records {
        let tally = tallies.entry(record.family.as_str()).or_insert((0, 0));
        tally.1 += 1;
        if record.is_success() {
            tally.0 += 1;
        }
    }

    tallies
        .into_iter()
        .filter(|(_, (_, total))| *total > 0)
        .map(|(family, (successes, total))| FamilySuccessRate {
            family: family.to_string(),
            clinical_success_rate: round_dp(100.0 * successes as f64 / total as f64, 2),
        })
        .collect()
}
