use std::path::PathBuf;

use kira_famcorr::ctx::{Ctx, InputPaths};
use kira_famcorr::io::json_writer::build_report;
use kira_famcorr::io::tables::{MergedTable, MetricsTable};
use kira_famcorr::metrics::merge::left_join;
use kira_famcorr::metrics::structural::aggregate_structures;
use kira_famcorr::metrics::success::success_rates;
use kira_famcorr::metrics::{InterventionTrialRecord, StructureMeasurement};
use serde_json::Value;

#[test]
fn json_report_populated() {
    let inputs = InputPaths {
        structures: Some(PathBuf::from("results_raw.csv")),
        trials: Some(PathBuf::from("clin_trials.csv")),
        ..InputPaths::default()
    };
    let mut ctx = Ctx::new("run", inputs, PathBuf::from("out"), true, "0.0.0-test");

    let structures = vec![
        StructureMeasurement::new("1abc", "Kinase", Some(100.0), Some(2.0)),
        StructureMeasurement::new("2abc", "Orphan", Some(200.0), None),
        StructureMeasurement::new("3abc", "Orphan", None, None),
    ];
    let trials = vec![
        InterventionTrialRecord::from_labels("a", "Kinase", "Phase 2"),
        InterventionTrialRecord::from_labels("b", "Kinase", ""),
    ];
    ctx.input_meta.structure_rows = Some(3);
    ctx.input_meta.structure_rows_missing_sasa = Some(1);
    ctx.input_meta.interventions = Some(2);

    let structural = aggregate_structures(&structures);
    let rates = success_rates(&trials);
    let left = MetricsTable::from_aggregates(&structural);
    let outcome = left_join(&left.rows, &rates);
    ctx.structures = Some(structures);
    ctx.trials = Some(trials);
    ctx.structural = Some(structural);
    ctx.success_rates = Some(rates);
    ctx.final_table = Some(MergedTable {
        header: left.header,
        rows: outcome.rows,
    });
    ctx.join_misses = outcome.join_misses;
    ctx.written.push(PathBuf::from("out/final_table.csv"));

    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "kira-famcorr");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["command"], "run");
    assert_eq!(json["version"], "0.0.0-test");
    assert_eq!(json["input_meta"]["structures"], "results_raw.csv");
    assert_eq!(json["input_meta"]["structure_rows_missing_sasa"], 1);
    assert_eq!(json["input_meta"]["ids"], Value::Null);
    assert_eq!(json["outputs"]["structural"]["families"], 2);
    assert_eq!(json["outputs"]["structural"]["entries"], 2);
    assert_eq!(
        json["outputs"]["structural"]["undefined_geometric_cv"],
        serde_json::json!(["Kinase", "Orphan"])
    );
    assert_eq!(json["outputs"]["success"]["successful_interventions"], 1);
    assert_eq!(json["outputs"]["merge"]["join_misses"], serde_json::json!(["Orphan"]));
    assert_eq!(
        json["outputs"]["files"],
        serde_json::json!(["final_table.csv", "report.json"])
    );
}
