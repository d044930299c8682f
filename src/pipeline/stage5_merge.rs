use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::tables::{MergedTable, MetricsTable};
use crate::metrics::merge::left_join;
use crate::pipeline::Stage;

pub struct Stage5Merge;

impl Stage5Merge {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Merge {
    fn name(&self) -> &'static str {
        "stage5_merge"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        // A loaded metrics table is joined as read; fresh aggregates are rendered first.
        let left = match (&ctx.metrics_table, &ctx.structural) {
            (Some(table), _) => table.clone(),
            (None, Some(rows)) => MetricsTable::from_aggregates(rows),
            (None, None) => bail!("structural aggregates missing"),
        };
        let right = ctx
            .success_rates
            .as_ref()
            .context("success rates missing")?;

        let outcome = left_join(&left.rows, right);
        for family in &outcome.duplicate_keys {
            warn!(family = %family, "duplicate success-rate family; first row kept");
            ctx.warnings.push(format!(
                "duplicate family '{}' in success rates (kept first)",
                family
            ));
        }
        if !outcome.join_misses.is_empty() {
            warn!(
                misses = outcome.join_misses.len(),
                "families_without_success_rate"
            );
        }
        info!(
            rows = outcome.rows.len(),
            join_misses = outcome.join_misses.len(),
            "tables_merged"
        );

        ctx.join_misses = outcome.join_misses;
        ctx.duplicate_keys = outcome.duplicate_keys;
        ctx.final_table = Some(MergedTable {
            header: left.header,
            rows: outcome.rows,
        });
        Ok(())
    }
}
