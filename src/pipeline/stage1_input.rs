use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::family;
use crate::io::{structures, tables, trials};
use crate::metrics::structural::count_missing_sasa;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if let Some(path) = ctx.inputs.structures.clone() {
            let rows = structures::read_structures(&path)
                .with_context(|| format!("failed to load structures {}", path.display()))?;
            let missing = count_missing_sasa(&rows);
            info!(
                structures = %path.display(),
                rows = rows.len(),
                missing_sasa = missing,
                "structures_loaded"
            );
            ctx.input_meta.structure_rows = Some(rows.len() as u64);
            ctx.input_meta.structure_rows_missing_sasa = Some(missing as u64);
            ctx.structures = Some(rows);
        }

        if let Some(path) = ctx.inputs.trials.clone() {
            let records = trials::read_trials(&path)
                .with_context(|| format!("failed to load trials {}", path.display()))?;
            info!(
                trials = %path.display(),
                interventions = records.len(),
                "trials_loaded"
            );
            ctx.input_meta.interventions = Some(records.len() as u64);
            ctx.trials = Some(records);
        }

        if let Some(path) = ctx.inputs.metrics.clone() {
            let (table, skipped) = tables::read_metrics_table(&path)
                .with_context(|| format!("failed to load metrics table {}", path.display()))?;
            info!(
                metrics = %path.display(),
                families = table.rows.len(),
                skipped = skipped.len(),
                "metrics_table_loaded"
            );
            ctx.warnings.extend(skipped);
            ctx.metrics_table = Some(table);
        }

        if let Some(path) = ctx.inputs.success.clone() {
            let (rows, skipped) = tables::read_success_table(&path)
                .with_context(|| format!("failed to load success table {}", path.display()))?;
            info!(
                success = %path.display(),
                families = rows.len(),
                skipped = skipped.len(),
                "success_table_loaded"
            );
            ctx.warnings.extend(skipped);
            ctx.success_rates = Some(rows);
        }

        if let Some(path) = ctx.inputs.ids.clone() {
            let lookup = family::load_ids_json(&path)?;
            info!(ids = %path.display(), identifiers = lookup.len(), "family_ids_loaded");
            ctx.warnings.extend(lookup.conflicts.iter().cloned());
            ctx.family_lookup = Some(lookup);
        }

        Ok(())
    }
}
