use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, structures, tables};
use crate::pipeline::Stage;

pub struct Stage6Output;

impl Stage6Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Output {
    fn name(&self) -> &'static str {
        "stage6_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.annotated {
            let rows = ctx
                .structures
                .as_ref()
                .context("annotated structures missing")?;
            let path = ctx.output.annotated_path.clone();
            structures::write_structures(&path, rows)?;
            ctx.written.push(path);
        }

        if let Some(rows) = &ctx.structural {
            let path = ctx.output.structural_path.clone();
            tables::write_structural_table(&path, rows)?;
            ctx.written.push(path);
        }
        // A success table loaded for a merge is an input, not an output.
        if ctx.inputs.success.is_none() {
            if let Some(rows) = &ctx.success_rates {
                let path = ctx.output.success_path.clone();
                tables::write_success_table(&path, rows)?;
                ctx.written.push(path);
            }
        }
        if let Some(table) = &ctx.final_table {
            let path = ctx.output.final_path.clone();
            tables::write_final_table(&path, table)?;
            ctx.written.push(path);
        }

        let report = json_writer::build_report(ctx)?;
        ctx.report = report;
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
        }

        info!(files = ctx.written.len(), "stage6_output_ready");
        Ok(())
    }
}
