use kira_famcorr::metrics::InterventionTrialRecord;
use kira_famcorr::metrics::success::success_rates;
use kira_famcorr::phase::Phase;

fn record(intervention: &str, family: &str, phases: &str) -> InterventionTrialRecord {
    InterventionTrialRecord::from_labels(intervention, family, phases)
}

#[test]
fn success_requires_phase_two_or_higher() {
    assert!(record("a", "F", "Phase 1,Phase 3").is_success());
    assert!(record("b", "F", "Phase 2").is_success());
    assert!(!record("c", "F", "Phase 1").is_success());
    assert!(!record("d", "F", "").is_success());
    assert_eq!(record("d", "F", "").highest_phase(), Phase::Unrecognized);
}

#[test]
fn rate_is_percentage_of_successful_interventions() {
    let records = vec![
        record("a", "Kinase", "Phase 3"),
        record("b", "Kinase", "Phase 1"),
        record("c", "Kinase", ""),
        record("d", "GPCR", "Phase 2,Phase 4"),
    ];
    let rates = success_rates(&records);
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].family, "GPCR");
    assert_eq!(rates[0].clinical_success_rate, 100.0);
    assert_eq!(rates[1].family, "Kinase");
    assert_eq!(rates[1].clinical_success_rate, 33.33);
}

#[test]
fn rates_stay_within_bounds_and_match_formula() {
    let families = ["A", "B", "C"];
    let labels = ["", "Phase 1", "Phase 2", "Phase 1/Phase 2", "Phase 4", "Withdrawn"];
    let mut records = Vec::new();
    for i in 0..37 {
        records.push(record(
            &format!("drug{}", i),
            families[i % families.len()],
            labels[(i * 7) % labels.len()],
        ));
    }

    let rates = success_rates(&records);
    for rate in &rates {
        let members: Vec<_> = records.iter().filter(|r| r.family == rate.family).collect();
        let successes = members.iter().filter(|r| r.is_success()).count();
        let expected = (100.0 * successes as f64 / members.len() as f64 * 100.0).round() / 100.0;
        assert!((0.0..=100.0).contains(&rate.clinical_success_rate));
        assert!((rate.clinical_success_rate - expected).abs() < 1e-9);
    }
}

#[test]
fn no_interventions_no_rows() {
    assert!(success_rates(&[]).is_empty());
}

#[test]
fn output_is_sorted_by_family() {
    let records = vec![
        record("a", "Zeta", "Phase 2"),
        record("b", "Alpha", "Phase 2"),
        record("c", "Mu", "Phase 2"),
    ];
    let families: Vec<String> = success_rates(&records)
        .into_iter()
        .map(|r| r.family)
        .collect();
    assert_eq!(families, vec!["Alpha", "Mu", "Zeta"]);
}
