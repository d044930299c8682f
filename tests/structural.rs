use kira_famcorr::math::stats::{mean, sample_std};
use kira_famcorr::metrics::StructureMeasurement;
use kira_famcorr::metrics::structural::{aggregate_structures, count_missing_sasa};

fn m(id: &str, family: &str, sasa: Option<f64>, res: Option<f64>) -> StructureMeasurement {
    StructureMeasurement::new(id, family, sasa, res)
}

#[test]
fn scenario_a_two_structures() {
    let rows = vec![
        m("1abc", "F1", Some(100.0), Some(2.0)),
        m("2xyz", "F1", Some(300.0), Some(2.5)),
    ];
    let aggs = aggregate_structures(&rows);
    assert_eq!(aggs.len(), 1);
    let f1 = &aggs[0];
    assert_eq!(f1.family, "F1");
    assert_eq!(f1.entry_count, 2);
    assert_eq!(f1.mean_sasa, 200.0);
    assert_eq!(f1.size_range(), "100-300");
    assert!((f1.mean_resolution.unwrap() - 2.25).abs() < 1e-12);

    let logs = [100f64.ln(), 300f64.ln()];
    let expected = sample_std(&logs).unwrap().exp() / mean(&logs).unwrap().exp();
    assert!((f1.geometric_cv.unwrap() - expected).abs() < 1e-12);
}

#[test]
fn scenario_b_zero_sasa_leaves_cv_undefined() {
    let rows = vec![
        m("1aaa", "F2", Some(0.0), None),
        m("1aab", "F2", Some(500.0), None),
    ];
    let aggs = aggregate_structures(&rows);
    let f2 = &aggs[0];
    assert_eq!(f2.entry_count, 2);
    assert_eq!(f2.mean_sasa, 250.0);
    assert_eq!(f2.size_range(), "0-500");
    assert_eq!(f2.geometric_cv, None);
    assert_eq!(f2.mean_resolution, None);
}

#[test]
fn single_member_group() {
    let rows = vec![m("3abc", "Solo", Some(1234.4), Some(1.8))];
    let aggs = aggregate_structures(&rows);
    let solo = &aggs[0];
    assert_eq!(solo.entry_count, 1);
    assert_eq!(solo.mean_sasa, 1234.4);
    assert_eq!(solo.size_range(), "1234-1234");
    assert_eq!(solo.geometric_cv, None);
    assert_eq!(solo.mean_resolution, Some(1.8));
}

#[test]
fn rows_without_sasa_dropped_before_grouping() {
    let rows = vec![
        m("1a", "F", Some(100.0), Some(3.0)),
        m("1b", "F", None, Some(1.0)),
        m("1c", "G", None, None),
    ];
    assert_eq!(count_missing_sasa(&rows), 2);
    let aggs = aggregate_structures(&rows);
    assert_eq!(aggs.len(), 1);
    assert_eq!(aggs[0].entry_count, 1);
    // resolution of the dropped row does not leak into the mean
    assert_eq!(aggs[0].mean_resolution, Some(3.0));
}

#[test]
fn entry_count_includes_zero_sasa_rows() {
    let rows = vec![
        m("1a", "F", Some(0.0), None),
        m("1b", "F", Some(0.0), None),
        m("1c", "F", Some(10.0), None),
        m("1d", "F", Some(20.0), None),
    ];
    let aggs = aggregate_structures(&rows);
    assert_eq!(aggs[0].entry_count, 4);
    assert_eq!(aggs[0].mean_sasa, 7.5);
    assert!(aggs[0].geometric_cv.is_some());
}

#[test]
fn mean_resolution_ignores_unreported() {
    let rows = vec![
        m("1a", "F", Some(10.0), Some(2.0)),
        m("1b", "F", Some(20.0), None),
        m("1c", "F", Some(30.0), Some(3.0)),
    ];
    let aggs = aggregate_structures(&rows);
    assert_eq!(aggs[0].mean_resolution, Some(2.5));
}

#[test]
fn families_sorted_and_identifiers_lowercased() {
    let rows = vec![
        m("9ZZZ", "Protease", Some(1.0), None),
        m("1AAA", "Kinase", Some(2.0), None),
    ];
    assert_eq!(rows[0].pdb_id, "9zzz");
    let aggs = aggregate_structures(&rows);
    assert_eq!(aggs[0].family, "Kinase");
    assert_eq!(aggs[1].family, "Protease");
}

#[test]
fn aggregation_is_idempotent() {
    let rows = vec![
        m("1a", "F", Some(120.5), Some(2.1)),
        m("1b", "G", Some(0.0), None),
        m("1c", "F", Some(980.25), None),
    ];
    assert_eq!(aggregate_structures(&rows), aggregate_structures(&rows));
}
