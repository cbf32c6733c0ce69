use anyhow::{Result, bail};

use crate::ctx::Ctx;
use crate::forecast::FORECAST_MONTHS;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let d1d2_rows = ctx.input_meta.d1d2_rows.unwrap_or(0);
    let d3_rows = ctx.input_meta.d3_rows.unwrap_or(0);
    let forecasts = match &ctx.forecasts {
        Some(forecasts) => forecasts,
        None => bail!("forecasts missing from completed run"),
    };

    let mut out = String::new();
    out.push_str(&format!("tadpole-lastvisit v{}\n", version));
    out.push_str(&format!(
        "Input: {} historical rows, {} target rows\n",
        d1d2_rows, d3_rows
    ));
    out.push_str(&format!(
        "Forecast: {} subjects x {} months\n",
        forecasts.len(),
        FORECAST_MONTHS
    ));
    out.push_str(&format!(
        "Output: {}\n",
        ctx.output.submission_path.display()
    ));
    Ok(out)
}
