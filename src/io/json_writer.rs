use anyhow::Result;

use crate::ctx::Ctx;
use crate::schema::v1::RunReportV1;

/// Snapshot of the run report as accumulated by the stages.
pub fn build_report(ctx: &Ctx) -> Result<RunReportV1> {
    let mut report = ctx.report.clone();
    report.warnings = ctx.warnings.clone();
    Ok(report)
}
