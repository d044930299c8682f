use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");

    let mut out = String::new();
    out.push_str(&format!("kira-famcorr v{}\n", version));
    out.push_str(&format!("Command: {}\n", ctx.command));

    if let Some(rows) = ctx.input_meta.structure_rows {
        let missing = ctx.input_meta.structure_rows_missing_sasa.unwrap_or(0);
        out.push_str(&format!(
            "Structures: {} rows, {} without SASA\n",
            rows, missing
        ));
    }
    if let Some(unmapped) = ctx.input_meta.unmapped_ids {
        out.push_str(&format!("Unmapped identifiers: {}\n", unmapped));
    }
    if let Some(structural) = &ctx.structural {
        let undefined_cv = structural
            .iter()
            .filter(|r| r.geometric_cv.is_none())
            .count();
        out.push_str(&format!(
            "Structural families: {} ({} without geometric CV)\n",
            structural.len(),
            undefined_cv
        ));
    }
    if let Some(n) = ctx.input_meta.interventions {
        out.push_str(&format!("Interventions: {}\n", n));
    }
    if let Some(rates) = &ctx.success_rates {
        out.push_str(&format!("Success-rate families: {}\n", rates.len()));
    }
    if let Some(final_table) = &ctx.final_table {
        out.push_str(&format!("Final rows: {}\n", final_table.rows.len()));
        if ctx.join_misses.is_empty() {
            out.push_str("Join misses: none\n");
        } else {
            out.push_str(&format!("Join misses: {}\n", ctx.join_misses.join(", ")));
        }
    }

    Ok(out)
}
