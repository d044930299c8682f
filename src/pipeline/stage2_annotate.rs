use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::ctx::Ctx;
use crate::family;
use crate::metrics::UNKNOWN_FAMILY;
use crate::pipeline::Stage;

pub struct Stage2Annotate;

impl Stage2Annotate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Annotate {
    fn name(&self) -> &'static str {
        "stage2_annotate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(lookup) = ctx.family_lookup.as_ref() else {
            return Ok(());
        };
        let rows = ctx
            .structures
            .as_mut()
            .context("structure measurements missing")?;

        let unmapped = family::annotate(rows, lookup);
        for id in &unmapped {
            debug!(pdb_id = %id, "identifier not in family lookup");
        }
        if !unmapped.is_empty() {
            warn!(unmapped = unmapped.len(), "identifiers_without_family");
            ctx.warnings.push(format!(
                "{} identifier(s) not found in family lookup; assigned '{}'",
                unmapped.len(),
                UNKNOWN_FAMILY
            ));
        }

        ctx.input_meta.unmapped_ids = Some(unmapped.len() as u64);
        ctx.annotated = true;
        info!(rows = rows.len(), "structures_annotated");
        Ok(())
    }
}
