use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::forecast::FORECAST_MONTHS;
use crate::io;
use crate::io::json_writer;
use crate::io::submission::write_submission;
use crate::pipeline::Stage;

pub struct Stage4Submission;

impl Stage4Submission {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Submission {
    fn name(&self) -> &'static str {
        "stage4_submission"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let forecasts = match &ctx.forecasts {
            Some(forecasts) => forecasts,
            None => bail!("forecasts not built before Stage 4"),
        };

        write_submission(&ctx.output.submission_path, forecasts)?;
        let rows = forecasts.len() * FORECAST_MONTHS;
        info!(
            path = %ctx.output.submission_path.display(),
            rows,
            "submission_written"
        );

        ctx.report.forecast.rows = Some(rows as u64);
        ctx.report.submission_path = Some(ctx.output.submission_path.display().to_string());
        ctx.report = json_writer::build_report(ctx)?;

        if ctx.write_json {
            io::write_json(&ctx.output.json_path, &ctx.report)?;
            info!(path = %ctx.output.json_path.display(), "run_report_written");
        }
        Ok(())
    }
}
