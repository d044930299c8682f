use std::path::Path;

use anyhow::Result;

use crate::ctx::Ctx;
use crate::schema::v1::{
    FamCorrV1, InputMeta, MergeSummary, Outputs, StructuralSummary, SuccessSummary,
};

pub fn build_report(ctx: &Ctx) -> Result<FamCorrV1> {
    let input_meta = InputMeta {
        structures: display_path(ctx.inputs.structures.as_deref()),
        trials: display_path(ctx.inputs.trials.as_deref()),
        metrics: display_path(ctx.inputs.metrics.as_deref()),
        success: display_path(ctx.inputs.success.as_deref()),
        ids: display_path(ctx.inputs.ids.as_deref()),
        structure_rows: ctx.input_meta.structure_rows,
        structure_rows_missing_sasa: ctx.input_meta.structure_rows_missing_sasa,
        interventions: ctx.input_meta.interventions,
        unmapped_ids: ctx.input_meta.unmapped_ids,
    };

    let structural = ctx.structural.as_ref().map(|rows| StructuralSummary {
        families: rows.len() as u64,
        entries: rows.iter().map(|r| r.entry_count as u64).sum(),
        undefined_geometric_cv: rows
            .iter()
            .filter(|r| r.geometric_cv.is_none())
            .map(|r| r.family.clone())
            .collect(),
        undefined_mean_resolution: rows
            .iter()
            .filter(|r| r.mean_resolution.is_none())
            .map(|r| r.family.clone())
            .collect(),
    });

    let success = ctx.success_rates.as_ref().map(|rows| SuccessSummary {
        families: rows.len() as u64,
        interventions: ctx.trials.as_ref().map(|t| t.len() as u64),
        successful_interventions: ctx
            .trials
            .as_ref()
            .map(|t| t.iter().filter(|r| r.is_success()).count() as u64),
    });

    let merge = ctx.final_table.as_ref().map(|table| MergeSummary {
        rows: table.rows.len() as u64,
        join_misses: ctx.join_misses.clone(),
        duplicate_keys: ctx.duplicate_keys.clone(),
    });

    let mut files: Vec<String> = ctx
        .written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect();
    if ctx.write_json {
        files.push(file_name(&ctx.output.json_path));
    }

    let mut report = FamCorrV1::empty(&ctx.report.version, &ctx.command);
    report.input_meta = input_meta;
    report.outputs = Outputs {
        files,
        structural,
        success,
        merge,
    };
    report.warnings = ctx.warnings.clone();
    Ok(report)
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    super::write_json(path, &ctx.report)
}

fn display_path(path: Option<&Path>) -> Option<String> {
    path.map(|p| p.display().to_string())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
