use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::metrics::success::success_rates;
use crate::pipeline::Stage;

pub struct Stage4Success;

impl Stage4Success {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Success {
    fn name(&self) -> &'static str {
        "stage4_success"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let records = ctx.trials.as_ref().context("trial records missing")?;
        let successful = records.iter().filter(|r| r.is_success()).count();
        let rates = success_rates(records);
        info!(
            interventions = records.len(),
            successful,
            families = rates.len(),
            "success_rates_computed"
        );
        ctx.success_rates = Some(rates);
        Ok(())
    }
}
