use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::normalize;
use crate::pipeline::Stage;

pub struct Stage2Normalize;

impl Stage2Normalize {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Normalize {
    fn name(&self) -> &'static str {
        "stage2_normalize"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let raw = match &ctx.raw {
            Some(raw) => raw,
            None => bail!("input tables not loaded before Stage 2"),
        };

        let columns = normalize::unify(raw)?;
        info!(rows = columns.len(), "columns_unified");

        ctx.report.input.observation_rows = Some(columns.len() as u64);
        ctx.columns = Some(columns);
        Ok(())
    }
}
