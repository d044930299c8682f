use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::ctx::Ctx;
use crate::metrics::structural::{aggregate_structures, count_missing_sasa};
use crate::pipeline::Stage;

pub struct Stage3Structural;

impl Stage3Structural {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Structural {
    fn name(&self) -> &'static str {
        "stage3_structural"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let rows = ctx
            .structures
            .as_ref()
            .context("structure measurements missing")?;

        let dropped = count_missing_sasa(rows);
        let aggregates = aggregate_structures(rows);
        for agg in aggregates.iter().filter(|a| a.geometric_cv.is_none()) {
            debug!(
                family = %agg.family,
                entries = agg.entry_count,
                "geometric_cv undefined"
            );
        }
        info!(
            families = aggregates.len(),
            dropped_missing_sasa = dropped,
            "structural_aggregated"
        );

        ctx.structural = Some(aggregates);
        Ok(())
    }
}
